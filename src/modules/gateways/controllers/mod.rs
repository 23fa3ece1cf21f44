pub mod gateway_controller;

pub use gateway_controller::{configure, ProviderSummary};
