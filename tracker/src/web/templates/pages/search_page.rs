use maud::html;
use tracker_api_types::SearchResult;

use crate::web::templates::{
    components::{artist_card::ArtistCard, header::Header},
    page::Page,
};

pub(crate) struct SearchPage {
    pub(crate) query: String,
    pub(crate) results: Vec<SearchResult>,
}

impl Page for SearchPage {
    fn get_name(&'_ self) -> String {
        format!("Search: {}", self.query)
    }

    fn draw_body(&self) -> maud::Markup {
        html! {
          (Header { search: &self.query })
          div class="container" {
            div class="main-content" {
              h2 { "Results for \"" (self.query) "\"" }
              div class="card-grid" {
                @for result in &self.results {
                  (ArtistCard {
                    id: result.id,
                    name: &result.name,
                    image: result.image.as_deref(),
                    subtitle: Some(result.result_type.as_str()),
                  })
                }
              }
            }
          }
        }
    }
}
