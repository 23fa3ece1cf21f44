pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{PayfastProviderConfig, PAYFAST_PROCESS_URL, PAYFAST_PROVIDER};
pub use services::{
    compute_signature, SignatureTestData, SignatureTestEvent, SignatureTestObserver,
    SignatureTestResult, TracingObserver,
};
