pub mod payfast_values;
pub mod payment_transaction;

pub use payfast_values::PayfastValues;
pub use payment_transaction::{HostTransaction, PaymentTransaction, MAX_AMOUNT};
