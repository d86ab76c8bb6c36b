pub mod search;

pub use search::SearchResult;
