use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::error::AppError;
use crate::modules::gateways::models::PayfastProviderConfig;
use crate::modules::transactions::models::{PayfastValues, PaymentTransaction};
use crate::modules::transactions::services::{payfast_values, render_redirect_form};

/// Checkout form values with the endpoint they post to
#[derive(Debug, Serialize, Deserialize)]
pub struct PayfastFormResponse {
    pub form_action_url: String,
    pub values: PayfastValues,
}

/// Build PayFast checkout values for a transaction
/// POST /transactions/payfast/values
pub async fn get_payfast_values(
    provider: web::Data<PayfastProviderConfig>,
    payload: web::Json<PaymentTransaction>,
) -> Result<HttpResponse, AppError> {
    let transaction = payload.into_inner();
    transaction.validate()?;

    info!(reference = %transaction.reference, "Building PayFast checkout values");

    Ok(HttpResponse::Ok().json(PayfastFormResponse {
        form_action_url: provider.form_action_url().to_string(),
        values: payfast_values(&transaction, &provider),
    }))
}

/// Render the auto-submitting PayFast checkout form for a transaction
/// POST /transactions/payfast/form
pub async fn get_payfast_form(
    provider: web::Data<PayfastProviderConfig>,
    payload: web::Json<PaymentTransaction>,
) -> Result<HttpResponse, AppError> {
    let transaction = payload.into_inner();
    transaction.validate()?;

    info!(reference = %transaction.reference, "Rendering PayFast checkout form");

    let values = payfast_values(&transaction, &provider);
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_redirect_form(provider.form_action_url(), &values)))
}

/// Configure transaction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/transactions/payfast")
            .route("/values", web::post().to(get_payfast_values))
            .route("/form", web::post().to(get_payfast_form)),
    );
}
