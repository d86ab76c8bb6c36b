use maud::html;

use crate::web::templates::{components::header::Header, page::Page};

pub(crate) struct ErrorPage {
    pub(crate) code: u16,
    pub(crate) message: &'static str,
}

impl Page for ErrorPage {
    fn get_name(&'_ self) -> String {
        format!("Error {}", self.code)
    }

    fn draw_body(&self) -> maud::Markup {
        html! {
          (Header { search: "" })
          div class="container" {
            div class="main-content" {
              h2 { (self.code) }
              span { (self.message) }
            }
          }
        }
    }
}
