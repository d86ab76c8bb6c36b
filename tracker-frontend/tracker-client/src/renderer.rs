use async_trait::async_trait;

use crate::{
    error::SuggestError,
    render::{render_suggestions, SuggestionResponse},
};

/// Path queried for suggestions. The query is embedded as typed.
pub fn search_query_url(query: &str) -> String {
    format!("/search-query?s={query}")
}

/// Where suggestions come from. The browser implementation issues one GET per call.
#[async_trait(?Send)]
pub trait SuggestionSource {
    async fn fetch(&self, query: &str) -> Result<SuggestionResponse, SuggestError>;
}

/// The page region the suggestions are written into.
pub trait OutputRegion {
    fn replace_content(&self, markup: &str) -> Result<(), SuggestError>;
}

pub struct SuggestionRenderer<S, R> {
    source: S,
    region: R,
}

impl<S, R> SuggestionRenderer<S, R>
where
    S: SuggestionSource,
    R: OutputRegion,
{
    pub fn new(source: S, region: R) -> Self {
        Self { source, region }
    }

    /// Clears the region for an empty query, otherwise fetches and renders.
    /// On a failed fetch the region keeps whatever it showed before.
    pub async fn show_suggestions(&self, query: &str) -> Result<(), SuggestError> {
        if query.is_empty() {
            return self.region.replace_content("");
        }
        let response = self.source.fetch(query).await?;
        self.region.replace_content(&render_suggestions(&response))
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::{search_query_url, OutputRegion, SuggestionRenderer, SuggestionSource};
    use crate::{SuggestError, SuggestionResponse, NOT_FOUND};

    /// Answers every request with a canned body and remembers the queries it was asked for.
    struct CannedSource {
        body: &'static str,
        requests: RefCell<Vec<String>>,
    }

    impl CannedSource {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl SuggestionSource for CannedSource {
        async fn fetch(&self, query: &str) -> Result<SuggestionResponse, SuggestError> {
            self.requests.borrow_mut().push(query.to_string());
            SuggestionResponse::from_body(self.body)
        }
    }

    #[derive(Default)]
    struct Region(RefCell<String>);

    impl OutputRegion for Region {
        fn replace_content(&self, markup: &str) -> Result<(), SuggestError> {
            *self.0.borrow_mut() = markup.to_string();
            Ok(())
        }
    }

    fn renderer(body: &'static str) -> SuggestionRenderer<CannedSource, Region> {
        let region = Region::default();
        *region.0.borrow_mut() = "stale".to_string();
        SuggestionRenderer::new(CannedSource::new(body), region)
    }

    #[test]
    fn empty_query_clears_without_request() {
        let renderer = renderer("[]");
        block_on(renderer.show_suggestions("")).unwrap();
        assert_eq!(*renderer.region.0.borrow(), "");
        assert!(renderer.source.requests.borrow().is_empty());
    }

    #[test]
    fn query_issues_exactly_one_request() {
        let renderer = renderer(r#"[{"id":1,"name":"Alice","type":"user"}]"#);
        block_on(renderer.show_suggestions("ali ce")).unwrap();
        assert_eq!(
            *renderer.source.requests.borrow(),
            vec!["ali ce".to_string()]
        );
        assert_eq!(
            *renderer.region.0.borrow(),
            r#"<div><a href="/profil?id=1">Alice - user</a></div>"#
        );
    }

    #[test]
    fn query_is_embedded_as_typed() {
        assert_eq!(search_query_url("queen"), "/search-query?s=queen");
        assert_eq!(search_query_url("a&b #c%d"), "/search-query?s=a&b #c%d");
        assert_eq!(search_query_url(" "), "/search-query?s= ");
    }

    #[test]
    fn whitespace_query_still_searches() {
        let renderer = renderer("null");
        block_on(renderer.show_suggestions(" ")).unwrap();
        assert_eq!(renderer.source.requests.borrow().len(), 1);
        assert_eq!(*renderer.region.0.borrow(), NOT_FOUND);
    }

    #[test]
    fn falsy_response_shows_not_found() {
        let renderer = renderer("false");
        block_on(renderer.show_suggestions("zzz")).unwrap();
        assert_eq!(*renderer.region.0.borrow(), NOT_FOUND);
    }

    #[test]
    fn same_response_renders_identically() {
        let renderer = renderer(
            r#"[{"id":1,"name":"Queen","type":"artist/band"},{"id":1,"name":"1970","type":"Creation Date of Queen"}]"#,
        );
        block_on(renderer.show_suggestions("q")).unwrap();
        let first = renderer.region.0.borrow().clone();
        block_on(renderer.show_suggestions("q")).unwrap();
        assert_eq!(*renderer.region.0.borrow(), first);
        assert_eq!(renderer.source.requests.borrow().len(), 2);
    }

    #[test]
    fn failed_fetch_leaves_region_untouched() {
        let renderer = renderer("<html>oops</html>");
        let result = block_on(renderer.show_suggestions("queen"));
        assert!(result.is_err());
        assert_eq!(*renderer.region.0.borrow(), "stale");
    }
}
