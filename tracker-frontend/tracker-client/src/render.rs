use maud::{html, Markup, Render};
use serde_json::Value;
use tracker_api_types::SearchResult;

use crate::error::SuggestError;

/// Text shown when the search endpoint answers with nothing.
pub const NOT_FOUND: &str = "not found";

/// What the search endpoint answered with.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionResponse {
    Results(Vec<SearchResult>),
    /// `null`, `false`, `0`, `""` or an empty body
    Empty,
}

impl SuggestionResponse {
    /// Interprets a raw response body. Arrays are results even when empty,
    /// any other falsy JSON value means there was nothing to show.
    pub fn from_body(body: &str) -> Result<Self, SuggestError> {
        if body.trim().is_empty() {
            return Ok(Self::Empty);
        }
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, SuggestError> {
        match value {
            Value::Array(_) => Ok(Self::Results(serde_json::from_value(value)?)),
            Value::Null | Value::Bool(false) => Ok(Self::Empty),
            Value::Number(ref n) if n.as_f64() == Some(0.0) => Ok(Self::Empty),
            Value::String(ref s) if s.is_empty() => Ok(Self::Empty),
            other => Err(SuggestError::UnexpectedBody(other.to_string())),
        }
    }
}

struct SuggestionLink<'a>(&'a SearchResult);

impl Render for SuggestionLink<'_> {
    fn render(&self) -> Markup {
        let result = self.0;
        html! {
            div {
                a href={"/profil?id=" (result.id)} {
                    (result.name) " - " (result.result_type)
                }
            }
        }
    }
}

/// Markup written into the suggestions region for a response.
pub fn render_suggestions(response: &SuggestionResponse) -> String {
    match response {
        SuggestionResponse::Results(results) => html! {
            @for result in results {
                (SuggestionLink(result))
            }
        }
        .into_string(),
        SuggestionResponse::Empty => NOT_FOUND.to_string(),
    }
}
