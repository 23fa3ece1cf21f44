use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::modules::gateways::models::{PayfastProviderConfig, PAYFAST_PROVIDER};
use crate::modules::gateways::services::TracingObserver;

/// Public view of the configured provider
#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderSummary {
    pub provider: String,
    pub form_action_url: String,
    pub merchant_id: String,
    pub passphrase_configured: bool,
}

/// Describe the configured PayFast provider
/// GET /gateways/payfast
pub async fn get_provider(
    provider: web::Data<PayfastProviderConfig>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ProviderSummary {
        provider: PAYFAST_PROVIDER.to_string(),
        form_action_url: provider.form_action_url().to_string(),
        merchant_id: provider.merchant_id.clone(),
        passphrase_configured: provider.has_passphrase(),
    }))
}

/// Run the signature self-test against the configured provider
/// POST /gateways/payfast/signature-test
pub async fn test_signature(
    provider: web::Data<PayfastProviderConfig>,
) -> Result<HttpResponse, AppError> {
    let result = provider.test_signature(&TracingObserver);
    Ok(HttpResponse::Ok().json(result))
}

/// Configure gateway routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gateways/payfast")
            .route("", web::get().to(get_provider))
            .route("/signature-test", web::post().to(test_signature)),
    );
}
