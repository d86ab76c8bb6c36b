use maud::{html, PreEscaped, Render, DOCTYPE};

/// Loads the wasm suggestion client, its start function wires up the search box.
const CLIENT_LOADER: &str =
    "import init from '/pkg/tracker_client.js'; init().catch(console.error);";

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
}

impl Render for HtmlHead<'_> {
    fn render(&self) -> maud::Markup {
        html! {
          (DOCTYPE)
          head {
            title { (self.title) " | Groupie Tracker" }
            link rel="stylesheet" href="/static/style.css";
            script type="module" { (PreEscaped(CLIENT_LOADER)) }
            @if let Some(description) = self.description {
                meta name="description" content=(description);
            }
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
          }
        }
    }
}
