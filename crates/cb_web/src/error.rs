use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

/// Ways a page request can end without rendering a page.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("missing request parameter: {0}")]
    MissingParameter(&'static str),

    #[error("article not found")]
    NotFound,

    #[error("store failure: {0}")]
    Store(#[from] cb_core::Error),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::MissingParameter(_) | RequestError::NotFound => StatusCode::NOT_FOUND,
            RequestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the visitor. Never carries internal diagnostics.
    pub fn public_message(&self) -> &'static str {
        match self {
            RequestError::MissingParameter(_) => "Article not found.",
            RequestError::NotFound => "Article does not exist.",
            RequestError::Store(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match &self {
            RequestError::Store(e) => error!(err = %e, "Article store failure"),
            other => debug!(err = %other, "Request ended without a page"),
        }

        (self.status(), self.public_message()).into_response()
    }
}
