use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::gateways::models::PayfastProviderConfig;
use crate::modules::transactions::models::{HostTransaction, PayfastValues};

/// Format an amount the way PayFast expects it: exactly two decimal places
///
/// Rounds the binary floating point value of the amount, so exact binary ties
/// go to even (`0.125` -> `0.12`) and decimal ties stored just below the
/// midpoint go down (`2.675` -> `2.67`). This matches the amount string the
/// checkout plugin has always signed.
pub fn format_amount(amount: Decimal) -> String {
    // Decimal's plain digits always parse; the parse rounds correctly to f64
    match amount.to_string().parse::<f64>() {
        Ok(value) => format!("{:.2}", value),
        Err(_) => amount.round_dp(2).to_string(),
    }
}

/// Prepare the values for the PayFast checkout form
///
/// The transaction reference is used for both item name and description.
/// Nothing is validated here: missing credentials or email flow through as
/// empty strings and are left out of the signature.
pub fn payfast_values<T>(transaction: &T, provider: &PayfastProviderConfig) -> PayfastValues
where
    T: HostTransaction + ?Sized,
{
    let mut values = PayfastValues {
        merchant_id: provider.merchant_id.clone(),
        merchant_key: provider.merchant_key.clone(),
        return_url: transaction.return_url().to_string(),
        cancel_url: transaction.cancel_url().to_string(),
        notify_url: transaction.notify_url().to_string(),
        amount: format_amount(transaction.amount()),
        item_name: transaction.reference().to_string(),
        item_description: transaction.reference().to_string(),
        email_address: transaction.partner_email().unwrap_or_default().to_string(),
        signature: String::new(),
    };

    values.signature = provider.compute_signature(values.signed_fields());

    debug!(
        reference = %values.item_name,
        amount = %values.amount,
        "Prepared PayFast form values"
    );

    values
}
