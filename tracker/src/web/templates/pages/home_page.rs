use groupie::Artist;
use maud::{html, Markup, Render};

use crate::web::{
    filter::MAX_MEMBERS,
    templates::{
        components::{artist_card::ArtistCard, header::Header},
        page::Page,
    },
};

pub(crate) struct HomePage {
    pub(crate) artists: Vec<Artist>,
    pub(crate) locations: Vec<String>,
}

struct FilterForm<'a> {
    locations: &'a [String],
}

impl Render for FilterForm<'_> {
    fn render(&self) -> Markup {
        html! {
          form class="filter-form" action="/filter" method="post" {
            fieldset {
              legend { "Creation date" }
              input type="number" name="creation_date_min" placeholder="from";
              input type="number" name="creation_date_max" placeholder="to";
            }
            fieldset {
              legend { "First album" }
              input type="number" name="first_album_min" placeholder="from";
              input type="number" name="first_album_max" placeholder="to";
            }
            fieldset {
              legend { "Members" }
              @for count in 1..=MAX_MEMBERS {
                label {
                  input type="checkbox" name={"num_members_" (count)} value="on";
                  (count)
                }
              }
            }
            fieldset {
              legend { "Concert location" }
              select name="city" {
                option value="" { "anywhere" }
                @for location in self.locations {
                  option value=(location) { (location) }
                }
              }
            }
            input type="submit" value="Filter";
          }
        }
    }
}

impl Page for HomePage {
    fn get_name(&'_ self) -> String {
        "Artists".to_string()
    }

    fn get_description(&'_ self) -> Option<String> {
        Some("Browse artists and bands, their members, albums and concerts".to_string())
    }

    fn draw_body(&self) -> Markup {
        html! {
          (Header { search: "" })
          div class="container" {
            aside { (FilterForm { locations: &self.locations }) }
            div class="main-content" {
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
