use maud::{html, Render};

/// Text input plus the region the wasm client fills with suggestions.
/// Submitting the form opens the full results page.
pub(crate) struct SearchBox<'a> {
    pub(crate) value: &'a str,
}

impl Render for SearchBox<'_> {
    fn render(&self) -> maud::Markup {
        html! {
          div class="search-container" {
            form action="/search" method="get" {
              input class="search-box" id="search-box" name="s" type="search" autocomplete="off"
                placeholder="Artists, members, albums, locations..." value=(self.value);
            }
            div class="search-results" id="suggestions" {
              // filled in by the suggestion client
            }
          }
        }
    }
}
