use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use super::templates::{page::RenderPage, pages::error_page::ErrorPage};

#[derive(Debug, Error)]
pub enum WebError {
    #[error("page not found")]
    NotFound,
    #[error("access denied")]
    AccessDenied,
    #[error("Error communicating with the artist API {0}")]
    Upstream(#[from] groupie::Error),
    #[error("Internal HTTP Error {0}")]
    AxumError(#[from] axum::http::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound | WebError::AccessDenied => StatusCode::NOT_FOUND,
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the visitor, internal details only go to the log.
    fn public_message(&self) -> &'static str {
        match self {
            WebError::NotFound => "not found",
            WebError::AccessDenied => "access denied",
            _ => "internal server error",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.as_status_code();
        if status.is_server_error() {
            error!("Error returned {self:?}");
        }
        (
            status,
            RenderPage(ErrorPage {
                code: status.as_u16(),
                message: self.public_message(),
            }),
        )
            .into_response()
    }
}
