use axum::{
    extract::{Query, RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tracing::debug;
use tracker_api_types::SearchResult;

use crate::{catalog::SharedCatalog, search_service};

use super::{
    error::WebError,
    first_param,
    templates::{
        page::RenderPage,
        pages::{not_found::NotFoundPage, search_page::SearchPage},
    },
};

const SEC_FETCH_SITE: &str = "sec-fetch-site";

/// JSON suggestions for the search box. Answers `null` rather than `[]` when nothing
/// matched so the client falls back to its not found text.
pub(crate) async fn search_query(
    State(catalog): State<SharedCatalog>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Option<Vec<SearchResult>>>, WebError> {
    let same_origin = headers
        .get(SEC_FETCH_SITE)
        .and_then(|value| value.to_str().ok())
        == Some("same-origin");
    if !same_origin {
        return Err(WebError::AccessDenied);
    }
    if raw_query.as_deref().unwrap_or_default().is_empty() {
        return Err(WebError::NotFound);
    }
    let query = first_param(&params, "s").unwrap_or_default();
    let results = search_service::search(&*catalog.read().await, query);
    debug!("suggestions for {query:?}: {}", results.len());
    Ok(Json(Some(results).filter(|results| !results.is_empty())))
}

pub(crate) async fn search_page(
    State(catalog): State<SharedCatalog>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = first_param(&params, "s")
        .unwrap_or_default()
        .trim()
        .to_string();
    if query.is_empty() {
        return Redirect::to("/").into_response();
    }
    let results = search_service::search(&*catalog.read().await, &query);
    if results.is_empty() {
        return (StatusCode::NOT_FOUND, RenderPage(NotFoundPage)).into_response();
    }
    RenderPage(SearchPage { query, results }).into_response()
}
