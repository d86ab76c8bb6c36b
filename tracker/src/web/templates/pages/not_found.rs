use maud::html;

use crate::web::templates::{components::header::Header, page::Page};

pub(crate) struct NotFoundPage;

impl Page for NotFoundPage {
    fn get_name(&'_ self) -> String {
        "Not found".to_string()
    }

    fn draw_body(&self) -> maud::Markup {
        html! {
          (Header { search: "" })
          div class="container" {
            div class="main-content" {
              h2 { "Nothing here" }
              p { "No artist matched. " a href="/" { "Back to all artists" } }
            }
          }
        }
    }
}
