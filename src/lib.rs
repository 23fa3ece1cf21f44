//! PayFast Payment Gateway Integration Library
//!
//! Signs PayFast checkout data, assembles the hosted payment page form for a
//! host transaction, and self-tests signature generation.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::gateways;
pub use modules::transactions;
