use std::path::Path as FsPath;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;

use crate::config::Config;
use crate::web::error::WebError;

/// In release mode, return the files from a statically included dir
#[cfg(not(debug_assertions))]
fn get_static_file(_static_dir: &FsPath, path: &str) -> Option<&'static [u8]> {
    use include_dir::include_dir;
    static STATIC_DIR: include_dir::Dir = include_dir!("$CARGO_MANIFEST_DIR/static");
    let file = STATIC_DIR.get_file(path)?;
    Some(file.contents())
}

/// In debug mode, just load the files from disk
#[cfg(debug_assertions)]
fn get_static_file(static_dir: &FsPath, path: &str) -> Option<Vec<u8>> {
    std::fs::read(static_dir.join(path)).ok()
}

fn file_response(path: &str, file: Option<impl Into<Body>>) -> Result<Response<Body>, WebError> {
    let Some(file) = file else {
        return Err(WebError::NotFound);
    };
    let mime_type = mime_guess::from_path(path).first_or_text_plain();
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.as_ref())
        .header(
            header::CACHE_CONTROL,
            #[cfg(not(debug_assertions))]
            "public, max-age=86400",
            #[cfg(debug_assertions)]
            "none",
        )
        .body(file.into())?)
}

/// Rejects anything that could walk out of the served directory.
fn sanitize(path: &str) -> Result<&str, WebError> {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.split('/').any(|segment| segment == "..") {
        return Err(WebError::NotFound);
    }
    Ok(path)
}

pub(crate) async fn static_path(
    State(config): State<Arc<Config>>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, WebError> {
    let path = sanitize(&path)?;
    file_response(path, get_static_file(&config.static_dir, path))
}

pub(crate) async fn stylesheet(State(config): State<Arc<Config>>) -> impl IntoResponse {
    file_response("style.css", get_static_file(&config.static_dir, "style.css"))
}

/// The wasm-bindgen output is a build artifact, so it is always read from disk.
pub(crate) async fn pkg_path(
    State(config): State<Arc<Config>>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, WebError> {
    let path = sanitize(&path)?;
    let file = tokio::fs::read(config.pkg_dir.join(path)).await.ok();
    file_response(path, file)
}

#[cfg(test)]
mod test {
    use super::sanitize;

    #[test]
    fn sanitize_rejects_parent_segments() {
        assert!(sanitize("../Cargo.toml").is_err());
        assert!(sanitize("css/../../secret").is_err());
        assert!(sanitize("").is_err());
        assert_eq!(sanitize("/style.css").unwrap(), "style.css");
    }
}
