use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::AppError;

/// Turn malformed JSON bodies into validation errors with the standard error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");
    AppError::validation(err.to_string()).into()
}

/// JSON extractor configuration used by every route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
