use serde::{Deserialize, Serialize};

/// Field values posted to the PayFast hosted payment page
///
/// Field order is the signing order; `signature` covers every other field.
/// Built by `services::payfast_values`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayfastValues {
    pub merchant_id: String,
    pub merchant_key: String,
    pub return_url: String,
    pub cancel_url: String,
    pub notify_url: String,
    pub amount: String,
    pub item_name: String,
    pub item_description: String,
    pub email_address: String,
    pub signature: String,
}

impl PayfastValues {
    /// The nine signed fields, in signing order
    pub fn signed_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("merchant_id", &self.merchant_id),
            ("merchant_key", &self.merchant_key),
            ("return_url", &self.return_url),
            ("cancel_url", &self.cancel_url),
            ("notify_url", &self.notify_url),
            ("amount", &self.amount),
            ("item_name", &self.item_name),
            ("item_description", &self.item_description),
            ("email_address", &self.email_address),
        ]
    }

    /// Every form field including the signature
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.signed_fields()
            .into_iter()
            .chain(std::iter::once(("signature", self.signature.as_str())))
    }
}
