use maud::{html, Render};

use super::search::SearchBox;

pub(crate) struct Header<'a> {
    pub(crate) search: &'a str,
}

impl Render for Header<'_> {
    fn render(&self) -> maud::Markup {
        html! {
          header {
            div class="header" {
              a class="nav-item brand" href="/" { "Groupie Tracker" }
              (SearchBox { value: self.search })
            }
          }
        }
    }
}
