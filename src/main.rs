use actix_web::{web, App, HttpServer};
use payfast_gateway::config::Config;
use payfast_gateway::middleware::{json_config, RequestId};
use payfast_gateway::modules::{gateways, health, transactions};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    // Initialize tracing; JSON lines in production
    let production = config.app.is_production();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("payfast_gateway={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(production.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!production).then(tracing_subscriber::fmt::layer))
        .init();

    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting PayFast gateway service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        merchant_id = %config.payfast.merchant_id,
        passphrase_configured = config.payfast.has_passphrase(),
        "PayFast provider configured"
    );

    let provider = web::Data::new(config.payfast.clone());

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .app_data(json_config())
            .app_data(provider.clone())
            .configure(health::configure)
            .configure(gateways::configure)
            .configure(transactions::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
