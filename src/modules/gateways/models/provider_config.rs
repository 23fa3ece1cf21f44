use crate::core::{AppError, Result};
use crate::modules::gateways::services::signature;
use serde::{Deserialize, Serialize};

/// Hosted payment page endpoint
pub const PAYFAST_PROCESS_URL: &str = "https://www.payfast.co.za/eng/process";

/// Provider code used when the host selects this gateway
pub const PAYFAST_PROVIDER: &str = "payfast";

/// PayFast credentials carried on the host's payment provider record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayfastProviderConfig {
    /// PayFast merchant ID (required when the provider is selected)
    #[serde(default)]
    pub merchant_id: String,

    /// PayFast merchant key (required when the provider is selected)
    #[serde(default)]
    pub merchant_key: String,

    /// Optional shared secret appended to the signature input
    #[serde(default, skip_serializing)]
    pub passphrase: String,
}

impl PayfastProviderConfig {
    pub fn new(
        merchant_id: impl Into<String>,
        merchant_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_key: merchant_key.into(),
            passphrase: passphrase.into(),
        }
    }

    /// Returns the PayFast endpoint the checkout form posts to
    pub fn form_action_url(&self) -> &'static str {
        PAYFAST_PROCESS_URL
    }

    /// Compute the PayFast signature over `data` with this provider's passphrase
    ///
    /// Pairs are signed in the order given; see [`signature::compute_signature`].
    pub fn compute_signature<I, K, V>(&self, data: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        signature::compute_signature(data, &self.passphrase)
    }

    pub fn has_passphrase(&self) -> bool {
        !self.passphrase.is_empty()
    }

    /// Check the fields the host requires once this provider is selected
    ///
    /// Signing and form assembly do not call this; missing credentials flow
    /// through them as empty values.
    pub fn validate(&self) -> Result<()> {
        if self.merchant_id.trim().is_empty() {
            return Err(AppError::configuration(
                "PayFast merchant ID is required",
            ));
        }

        if self.merchant_key.trim().is_empty() {
            return Err(AppError::configuration(
                "PayFast merchant key is required",
            ));
        }

        Ok(())
    }
}
