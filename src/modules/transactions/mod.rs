pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{HostTransaction, PayfastValues, PaymentTransaction};
pub use services::{format_amount, payfast_values, render_redirect_form};
