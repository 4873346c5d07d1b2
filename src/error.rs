use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading site data (translations, blog metadata).
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("translation catalog has {} error(s): {}", .0.len(), .0.join("; "))]
    InvalidCatalog(Vec<String>),

    #[error("invalid blog post data: {0}")]
    InvalidBlogData(String),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Carries the already-rendered not-found page.
    #[error("not found")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("endpoint disabled")]
    Disabled,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
            AppError::Disabled => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            AppError::Internal(err) => {
                tracing::error!("Request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_catalog_message_lists_errors() {
        let err = SiteError::InvalidCatalog(vec![
            "en: missing home.hero.title".to_string(),
            "en: features.cards has wrong shape".to_string(),
        ]);
        let message = err.to_string();
        assert!(message.contains("2 error(s)"));
        assert!(message.contains("home.hero.title"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("<p>gone</p>".to_string())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
