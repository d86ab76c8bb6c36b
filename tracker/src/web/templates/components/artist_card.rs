use maud::{html, Render};

/// Picture and name linking to an artist profile.
pub(crate) struct ArtistCard<'a> {
    pub(crate) id: i32,
    pub(crate) name: &'a str,
    pub(crate) image: Option<&'a str>,
    pub(crate) subtitle: Option<&'a str>,
}

impl Render for ArtistCard<'_> {
    fn render(&self) -> maud::Markup {
        html! {
          a class="artist-card" href={"/profil?id=" (self.id)} {
            @if let Some(image) = self.image {
                img src=(image) alt=(self.name) loading="lazy";
            }
            div class="artist-card-details" {
              span class="artist-name" { (self.name) }
              @if let Some(subtitle) = self.subtitle {
                  span class="artist-subtitle" { (subtitle) }
              }
            }
          }
        }
    }
}
