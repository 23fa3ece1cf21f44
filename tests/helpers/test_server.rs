// Test Server Helpers
//
// Spawns a real HTTP test server using actix-test with the production route
// configuration and the given PayFast provider.

use actix_web::{web, App};
use payfast_gateway::gateways::{self, PayfastProviderConfig};
use payfast_gateway::middleware::{json_config, RequestId};
use payfast_gateway::modules::health;
use payfast_gateway::transactions;

pub use actix_test::TestServer;

/// Spawn a test server on a random port
///
/// The server stops when the returned `TestServer` is dropped.
pub fn spawn_test_server(provider: PayfastProviderConfig) -> TestServer {
    let provider = web::Data::new(provider);

    actix_test::start(move || {
        App::new()
            .wrap(RequestId)
            .app_data(json_config())
            .app_data(provider.clone())
            .configure(health::configure)
            .configure(gateways::configure)
            .configure(transactions::configure)
    })
}
