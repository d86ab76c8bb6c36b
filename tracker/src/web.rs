pub mod error;
mod filter;
mod profile;
mod search;
mod state;
mod static_content;
mod templates;

pub(crate) use state::WebState;

use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use groupie::GroupieClient;
use tower_http::trace::TraceLayer;

use self::error::WebError;
use self::templates::{page::RenderPage, pages::home_page::HomePage};
use crate::catalog::{Catalog, SharedCatalog};

/// Home page. Pulls fresh artist data on every visit so the search index follows upstream.
async fn root(
    State(client): State<GroupieClient>,
    State(catalog): State<SharedCatalog>,
) -> Result<RenderPage<HomePage>, WebError> {
    let fresh = Catalog::fetch(&client).await?;
    let page = HomePage {
        artists: fresh.artists.clone(),
        locations: fresh
            .unique_locations()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    *catalog.write().await = fresh;
    Ok(RenderPage(page))
}

/// First value of a query parameter. Repeated keys are tolerated, later values ignored.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

async fn fallback() -> WebError {
    WebError::NotFound
}

pub(crate) fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/search-query", get(search::search_query))
        .route("/search", get(search::search_page))
        .route("/profil", get(profile::profile))
        .route("/filter", post(filter::filter))
        .route("/style.css", get(static_content::stylesheet))
        .route("/static/{*path}", get(static_content::static_path))
        .route("/pkg/{*path}", get(static_content::pkg_path))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn start_web(state: WebState) -> anyhow::Result<()> {
    let addr = state.config.addr();
    let app = router(state);
    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
        Router,
    };
    use groupie::GroupieClient;
    use tokio::sync::RwLock;
    use tower::ServiceExt;
    use tracker_api_types::SearchResult;

    use super::{first_param, router, WebState};
    use crate::{catalog::test_catalog, config::Config};

    fn app() -> Router {
        // nothing under test talks to upstream, the address just has to parse
        let client = GroupieClient::new("http://127.0.0.1:9/api", "tracker-test").unwrap();
        router(WebState {
            catalog: Arc::new(RwLock::new(test_catalog())),
            client,
            config: Arc::new(Config::default()),
        })
    }

    async fn get(uri: &str, same_origin: bool) -> Response {
        let mut request = Request::builder().uri(uri);
        if same_origin {
            request = request.header("Sec-Fetch-Site", "same-origin");
        }
        app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn suggestions_are_json() {
        let response = get("/search-query?s=queen", true).await;
        assert_eq!(response.status(), StatusCode::OK);
        let results: Vec<SearchResult> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(results[0].id, 1);
        assert_eq!(results[0].name, "Queen");
        assert_eq!(results[0].result_type, "artist/band");
    }

    #[tokio::test]
    async fn no_match_or_blank_query_is_null() {
        for uri in ["/search-query?s=zzzz", "/search-query?s=%20%20", "/search-query?other=1"] {
            let response = get(uri, true).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(body_text(response).await, "null", "{uri}");
        }
    }

    #[tokio::test]
    async fn repeated_search_key_uses_first_value() {
        let response = get("/search-query?s=queen&s=x", true).await;
        assert_eq!(response.status(), StatusCode::OK);
        let results: Vec<SearchResult> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(results[0].name, "Queen");

        let cross_origin = get("/search-query?s=queen&s=x", false).await;
        assert_eq!(cross_origin.status(), StatusCode::NOT_FOUND);
        assert!(body_text(cross_origin).await.contains("access denied"));

        let page = get("/search?s=floyd&s=queen", false).await;
        assert_eq!(page.status(), StatusCode::OK);
        assert!(body_text(page).await.contains("Pink Floyd"));

        let profile = get("/profil?id=99&id=1", false).await;
        assert_eq!(profile.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn first_param_ignores_later_values() {
        let params = vec![
            ("t".to_string(), "1".to_string()),
            ("s".to_string(), "queen".to_string()),
            ("s".to_string(), "x".to_string()),
        ];
        assert_eq!(first_param(&params, "s"), Some("queen"));
        assert_eq!(first_param(&params, "id"), None);
    }

    #[tokio::test]
    async fn suggestions_require_same_origin() {
        let response = get("/search-query?s=queen", false).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("access denied"));
    }

    #[tokio::test]
    async fn suggestions_without_query_string() {
        let response = get("/search-query", true).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn suggestions_only_accept_get() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/search-query?s=queen")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn search_page() {
        let response = get("/search?s=floyd", false).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Pink Floyd"));
        assert!(body.contains("/profil?id=3"));

        let blank = get("/search?s=+", false).await;
        assert_eq!(blank.status(), StatusCode::SEE_OTHER);
        assert_eq!(blank.headers()[header::LOCATION], "/");

        let missing = get("/search?s=zzzz", false).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert!(body_text(missing).await.contains("No artist matched"));
    }

    #[tokio::test]
    async fn profile_rejects_bad_ids() {
        for uri in ["/profil?id=99", "/profil?id=abc", "/profil", "/profil?id=1/2"] {
            let response = get(uri, false).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn filter_form() {
        let filter = |form: &'static str| {
            app().oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/filter")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(form))
                    .unwrap(),
            )
        };
        let response = filter("city=london-uk&num_members_2=on").await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Pink Floyd"));
        assert!(body.contains("Scorpions"));
        assert!(!body.contains("Queen"));

        let none = filter("creation_date_min=2100").await.unwrap();
        assert_eq!(none.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn static_files() {
        let response = get("/static/style.css", false).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
        assert!(body_text(response).await.contains("#suggestions"));

        let alias = get("/style.css", false).await;
        assert_eq!(alias.status(), StatusCode::OK);

        let missing = get("/static/nope.css", false).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_renders_error_page() {
        let response = get("/does/not/exist", false).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("not found"));
    }
}
