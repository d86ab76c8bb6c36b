use maud::{html, Render};

pub(crate) struct Footer;

impl Render for Footer {
    fn render(&self) -> maud::Markup {
        html! {
            footer {
                span { "Artist data from the " a href="https://groupietrackers.herokuapp.com/api" { "groupietrackers" } " API." }
            }
        }
    }
}
