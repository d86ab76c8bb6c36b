use serde::{Deserialize, Serialize};

/// A single search hit, as served by `/search-query` and rendered by the suggestion box.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct SearchResult {
    /// Profile id the result links to
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub result_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
