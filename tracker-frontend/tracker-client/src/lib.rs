pub mod error;
pub mod render;
pub mod renderer;

#[cfg(feature = "hydrate")]
mod browser;

pub use error::SuggestError;
pub use render::{render_suggestions, SuggestionResponse, NOT_FOUND};
pub use renderer::{search_query_url, OutputRegion, SuggestionRenderer, SuggestionSource};

/// Id of the element whose content the suggestion box owns.
pub const SUGGESTIONS_ID: &str = "suggestions";
/// Id of the text input that drives the suggestion box.
pub const SEARCH_BOX_ID: &str = "search-box";
