// Test Helper Modules
//
// Shared by the unit and contract test targets:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Each target uses a different subset.
#![allow(dead_code)]

pub mod assertions;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
