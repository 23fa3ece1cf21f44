pub mod signature;

pub use self_test::{
    SignatureTestData, SignatureTestEvent, SignatureTestObserver, SignatureTestResult,
    TracingObserver,
};
pub use signature::{compute_signature, signature_string};
