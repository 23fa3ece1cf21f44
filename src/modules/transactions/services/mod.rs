pub mod payfast_values;
pub mod redirect_form;

pub use payfast_values::{format_amount, payfast_values};
pub use redirect_form::render_redirect_form;
