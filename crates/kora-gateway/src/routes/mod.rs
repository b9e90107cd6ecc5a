pub mod currencies;
pub mod health;
pub mod payments;

use actix_web::{error, error::JsonPayloadError, web};

use crate::error::GatewayError;

/// JSON extractor config that reports body problems as validation errors
/// with the gateway's JSON error shape.
///
/// A non-JSON content type is read as "no body", so it fails the same way a
/// request without the required fields does.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "rejected request body");
            let message = match err {
                JsonPayloadError::ContentType => "Missing required fields",
                _ => "Invalid request body",
            };
            error::Error::from(GatewayError::Validation(message.to_string()))
        })
}
