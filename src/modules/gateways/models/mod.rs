pub mod provider_config;

pub use provider_config::{PayfastProviderConfig, PAYFAST_PROCESS_URL, PAYFAST_PROVIDER};
