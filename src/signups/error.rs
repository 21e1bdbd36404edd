use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum SignupError {
    #[error("All fields (name, email, mobileNumber, productPageUrl) are required.")]
    MissingFields,
    #[error("inserted signup could not be read back")]
    ReadBack,
    #[error(transparent)]
    Persistence(#[from] mongodb::error::Error),
}

impl IntoResponse for SignupError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SignupError::MissingFields => (StatusCode::BAD_REQUEST, self.to_string()),
            SignupError::ReadBack => {
                error!("insert acknowledged but document missing on read-back");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            SignupError::Persistence(e) => {
                error!(error = %e, "persistence operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
