use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use itemstore_core::{
    item::ItemError,
    storage::{repository_error_to_status_code, RepositoryError},
};

/// Error type for HTTP handlers.
///
/// Every variant renders as `{"detail": "<message>"}`. Server-side failures
/// are logged and answered with a generic message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A store operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The payload parsed but broke an item rule.
    #[error(transparent)]
    Validation(#[from] ItemError),

    /// The request body could not be read as the expected JSON.
    #[error(transparent)]
    Json(#[from] JsonRejection),

    /// A path segment failed to parse, e.g. an id that is not a UUID.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            AppError::Repository(err) => {
                let status = StatusCode::from_u16(repository_error_to_status_code(err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let detail = match err {
                    RepositoryError::NotFound { .. } => "Item not found".to_string(),
                    RepositoryError::AlreadyExists { .. } => err.to_string(),
                    RepositoryError::InvalidData(_) => {
                        tracing::warn!(error = %err, "Integrity constraint violated");
                        "Database integrity constraint violated".to_string()
                    }
                    RepositoryError::ConnectionFailed(_) => {
                        tracing::error!(error = %err, "Database connection error");
                        "Database connection error".to_string()
                    }
                    RepositoryError::QueryFailed(_) | RepositoryError::Serialization(_) => {
                        tracing::error!(error = %err, "Database error");
                        "Database error occurred".to_string()
                    }
                };
                (status, detail)
            }
            AppError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Json(rejection) => (rejection.status(), rejection.body_text()),
            AppError::InvalidPath(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_detail() {
        let (status, body) = render(RepositoryError::item_not_found("abc").into()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Item not found");
    }

    #[tokio::test]
    async fn test_connection_failure_hides_internals() {
        let error = RepositoryError::ConnectionFailed("password auth failed for db".to_string());

        let (status, body) = render(error.into()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["detail"], "Database connection error");
    }

    #[tokio::test]
    async fn test_query_failure_is_generic_500() {
        let (status, body) =
            render(RepositoryError::QueryFailed("relation does not exist".into()).into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Database error occurred");
    }

    #[tokio::test]
    async fn test_integrity_violation_is_400() {
        let (status, body) =
            render(RepositoryError::InvalidData("check constraint".into()).into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Database integrity constraint violated");
    }

    #[tokio::test]
    async fn test_validation_is_422() {
        let (status, body) = render(ItemError::EmptyName.into()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "Item name cannot be empty");
    }

    #[tokio::test]
    async fn test_invalid_path_is_422() {
        let (status, body) = render(AppError::InvalidPath("not a uuid".into())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "not a uuid");
    }
}
