use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use kora::KoraError;

#[derive(Debug)]
pub enum GatewayError {
    /// Missing or invalid request field
    Validation(String),
    /// Unknown payment session
    SessionNotFound(String),
    /// Internal error
    Internal(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Validation(msg) => write!(f, "validation error: {}", msg),
            GatewayError::SessionNotFound(id) => write!(f, "payment session not found: {}", id),
            GatewayError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<KoraError> for GatewayError {
    fn from(e: KoraError) -> Self {
        match e {
            KoraError::MissingField(_) => {
                GatewayError::Validation("Missing required fields".to_string())
            }
            KoraError::InvalidCurrency(_) => GatewayError::Validation("Invalid currency".to_string()),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            GatewayError::Validation(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": msg
            })),
            GatewayError::SessionNotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
                "error": "Payment session not found"
            })),
            GatewayError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}
