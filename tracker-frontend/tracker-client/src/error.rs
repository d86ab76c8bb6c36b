use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Request failed {0}")]
    Http(String),
    #[error("JSON {0}")]
    Json(#[from] serde_json::Error),
    #[error("Search returned something that isn't a list of results: {0}")]
    UnexpectedBody(String),
    #[error("No element with id `{0}` on the page")]
    MissingElement(&'static str),
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for SuggestError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Http(value.to_string())
    }
}
