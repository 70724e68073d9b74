use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failure taxonomy for the whole service. Every entrypoint maps to one of
/// these; no raw error crosses a handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("User not authenticated")]
    Unauthenticated,
    #[error("No file provided")]
    MissingImage,
    #[error("vision model call failed: {0}")]
    ModelCallFailed(String),
    #[error("malformed model response: {0}")]
    MalformedModelResponse(String),
    #[error("failed to save report")]
    PersistenceFailed(String),
    #[error("Report not found")]
    NotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::MissingImage => StatusCode::BAD_REQUEST,
            AppError::ModelCallFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedModelResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::PersistenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::Unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::MissingImage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ModelCallFailed("timeout".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::MalformedModelResponse("no json".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::PersistenceFailed("insert failed".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }
}
