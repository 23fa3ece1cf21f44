use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest amount accepted for checkout
///
/// Fifteen significant digits, so the amount survives the float round trip in
/// `format_amount` to the cent. Value: 9999999999999.99
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Read-only view of the host's payment transaction record
///
/// Callback URLs are supplied by the host; they are opaque here.
pub trait HostTransaction {
    /// Amount to charge
    fn amount(&self) -> Decimal;

    /// Transaction reference shown to the customer
    fn reference(&self) -> &str;

    /// Customer email, if the partner has one
    fn partner_email(&self) -> Option<&str>;

    fn return_url(&self) -> &str;

    fn cancel_url(&self) -> &str;

    fn notify_url(&self) -> &str;
}

/// Payment transaction as handed over by the host's checkout layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// Amount to charge
    pub amount: Decimal,

    /// Host transaction reference (e.g. sale order name)
    pub reference: String,

    /// Customer email
    #[serde(default)]
    pub partner_email: Option<String>,

    /// Where PayFast sends the customer after payment
    #[serde(default)]
    pub return_url: String,

    /// Where PayFast sends the customer on cancel
    #[serde(default)]
    pub cancel_url: String,

    /// Where PayFast posts the payment notification
    #[serde(default)]
    pub notify_url: String,
}

impl PaymentTransaction {
    /// Create a new payment transaction
    ///
    /// # Arguments
    /// * `reference` - Host transaction reference
    /// * `amount` - Amount to charge
    /// * `partner_email` - Customer email
    ///
    /// # Returns
    /// * `Result<PaymentTransaction>` - Transaction without callback URLs
    pub fn new(
        reference: impl Into<String>,
        amount: Decimal,
        partner_email: Option<String>,
    ) -> Result<Self> {
        let transaction = Self {
            amount,
            reference: reference.into(),
            partner_email,
            return_url: String::new(),
            cancel_url: String::new(),
            notify_url: String::new(),
        };
        transaction.validate()?;
        Ok(transaction)
    }

    /// Attach the host's callback URLs
    pub fn with_callback_urls(
        mut self,
        return_url: impl Into<String>,
        cancel_url: impl Into<String>,
        notify_url: impl Into<String>,
    ) -> Self {
        self.return_url = return_url.into();
        self.cancel_url = cancel_url.into();
        self.notify_url = notify_url.into();
        self
    }

    /// Validate a transaction received over HTTP
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(AppError::validation("Amount must be non-negative"));
        }

        if self.amount > MAX_AMOUNT {
            return Err(AppError::validation(format!(
                "Amount must not exceed {}",
                MAX_AMOUNT
            )));
        }

        if self.reference.trim().is_empty() {
            return Err(AppError::validation("Reference cannot be empty"));
        }

        Ok(())
    }
}

impl HostTransaction for PaymentTransaction {
    fn amount(&self) -> Decimal {
        self.amount
    }

    fn reference(&self) -> &str {
        &self.reference
    }

    fn partner_email(&self) -> Option<&str> {
        self.partner_email.as_deref()
    }

    fn return_url(&self) -> &str {
        &self.return_url
    }

    fn cancel_url(&self) -> &str {
        &self.cancel_url
    }

    fn notify_url(&self) -> &str {
        &self.notify_url
    }
}
