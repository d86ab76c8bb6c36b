use groupie::Artist;
use maud::html;

use crate::web::templates::{
    components::{artist_card::ArtistCard, header::Header},
    page::Page,
};

pub(crate) struct FilterPage {
    pub(crate) artists: Vec<Artist>,
}

impl Page for FilterPage {
    fn get_name(&'_ self) -> String {
        "Filtered artists".to_string()
    }

    fn draw_body(&self) -> maud::Markup {
        html! {
          (Header { search: "" })
          div class="container" {
            div class="main-content" {
              h2 { (self.artists.len()) " artists match" }
              div class="card-grid" {
                @for artist in &self.artists {
                  (ArtistCard { id: artist.id, name: &artist.name, image: Some(&artist.image), subtitle: None })
                }
              }
            }
          }
        }
    }
}
