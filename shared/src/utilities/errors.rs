use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Environment variable {0} not set error")]
    EnvironmentVariableNotSetError(String),
    #[error("File read error, {0}")]
    FileReadError(String),
    #[error("Serde json error: {0}")]
    SerdejsonError(#[from] serde_json::Error),
    #[error("IO error, {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error, {0}")]
    ValidationError(String),
    #[error("Validation errors, {0}")]
    ValidatorValidationErrors(#[from] validator::ValidationErrors),
    #[error("{0}")]
    NotFoundError(String),
    #[error("Internal error, {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::EnvironmentVariableNotSetError(name) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Environment variable {name} not set error"),
            ),
            Self::FileReadError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
            Self::SerdejsonError(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::IoError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::ValidationError(e) => (StatusCode::UNPROCESSABLE_ENTITY, e),
            Self::ValidatorValidationErrors(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::NotFoundError(e) => (StatusCode::NOT_FOUND, e),
            Self::InternalError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        let body = Json(json!({"error": error_message}));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::ValidationError("bad".to_string()), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(AppError::NotFoundError("missing".to_string()), StatusCode::NOT_FOUND)]
    #[case(AppError::InternalError("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(
        AppError::EnvironmentVariableNotSetError("LISTINGS_PATH".to_string()),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn test_status_codes(#[case] error: AppError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }
}
