use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use payfast_gateway::gateways::compute_signature;
use payfast_gateway::transactions::{format_amount, payfast_values, render_redirect_form};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::{TestDataFactory, CANCEL_URL, NOTIFY_URL, RETURN_URL};

/// Tests for PayFast checkout form assembly
///
/// Validates:
/// - Amounts always carry exactly two decimal places
/// - Fields follow the fixed PayFast order
/// - The signature covers the other nine fields in that order

#[cfg(test)]
mod payfast_values_tests {
    use super::*;

    #[test]
    fn test_amount_is_formatted_with_two_decimals() {
        let transaction = TestDataFactory::transaction("SO042", dec!(99.5), None);
        let values = payfast_values(&transaction, &TestDataFactory::sandbox_provider());

        assert_eq!(values.amount, "99.50");
    }

    #[test]
    fn test_signature_covers_fields_in_order() {
        let transaction =
            TestDataFactory::transaction("SO042", dec!(99.5), Some("buyer@example.com"));
        let values = payfast_values(&transaction, &TestDataFactory::sandbox_provider());

        // md5 of the nine fields joined in form order, computed independently
        assert_eq!(values.signature, "67356ed9a91196876995c51f2613afcf");
        assert_eq!(
            values.signature,
            compute_signature(
                [
                    ("merchant_id", "10000100"),
                    ("merchant_key", "46f0cd694581a"),
                    ("return_url", RETURN_URL),
                    ("cancel_url", CANCEL_URL),
                    ("notify_url", NOTIFY_URL),
                    ("amount", "99.50"),
                    ("item_name", "SO042"),
                    ("item_description", "SO042"),
                    ("email_address", "buyer@example.com"),
                ],
                ""
            )
        );
    }

    #[test]
    fn test_values_copy_transaction_and_provider() {
        let reference = TestDataFactory::random_reference();
        let transaction =
            TestDataFactory::transaction(&reference, dec!(250), Some("buyer@example.com"));
        let values = payfast_values(&transaction, &TestDataFactory::sandbox_provider());

        assert_eq!(values.merchant_id, "10000100");
        assert_eq!(values.merchant_key, "46f0cd694581a");
        assert_eq!(values.return_url, RETURN_URL);
        assert_eq!(values.cancel_url, CANCEL_URL);
        assert_eq!(values.notify_url, NOTIFY_URL);
        assert_eq!(values.amount, "250.00");
        assert_eq!(values.item_name, reference);
        assert_eq!(values.item_description, reference);
        assert_eq!(values.email_address, "buyer@example.com");
    }

    #[test]
    fn test_passphrase_changes_form_signature() {
        let transaction = TestDataFactory::transaction("SO042", dec!(10), None);
        let plain = payfast_values(&transaction, &TestDataFactory::sandbox_provider());
        let keyed = payfast_values(
            &transaction,
            &TestDataFactory::sandbox_provider_with_passphrase("secret"),
        );

        assert_ne!(plain.signature, keyed.signature);
        assert_eq!(
            keyed.signature,
            compute_signature(plain.signed_fields(), "secret")
        );
    }

    #[test]
    fn test_missing_email_is_left_out_of_signature() {
        let transaction = TestDataFactory::transaction("SO042", dec!(10), None);
        let values = payfast_values(&transaction, &TestDataFactory::sandbox_provider());

        assert_eq!(values.email_address, "");
        let without_email: Vec<(&str, &str)> = values
            .signed_fields()
            .into_iter()
            .filter(|(key, _)| *key != "email_address")
            .collect();
        assert_eq!(values.signature, compute_signature(without_email, ""));
    }

    #[test]
    fn test_redirect_form_posts_signed_values() {
        let transaction = TestDataFactory::transaction("SO042", dec!(99.5), None);
        let provider = TestDataFactory::sandbox_provider();
        let values = payfast_values(&transaction, &provider);

        let html = render_redirect_form(provider.form_action_url(), &values);

        assert!(html.contains(r#"action="https://www.payfast.co.za/eng/process""#));
        assert!(html.contains(r#"name="amount" value="99.50""#));
        assert!(html.contains(&format!(r#"name="signature" value="{}""#, values.signature)));
    }

    proptest! {
        #[test]
        fn test_format_amount_has_two_decimals(cents in 0i64..10_000_000_000i64, extra_scale in 0u32..4) {
            let amount = Decimal::new(cents, 2 + extra_scale);
            let formatted = format_amount(amount);

            let (_, fraction) = formatted.split_once('.').expect("decimal point");
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!((formatted.parse::<Decimal>().unwrap() - amount).abs() <= dec!(0.005));
        }

        #[test]
        fn test_signature_recomputes_from_fields(
            cents in 0i64..100_000_000i64,
            reference in "[A-Z]{2}[0-9]{1,6}",
            passphrase in "[A-Za-z0-9]{0,16}"
        ) {
            let transaction = TestDataFactory::transaction(&reference, Decimal::new(cents, 2), None);
            let provider = TestDataFactory::sandbox_provider_with_passphrase(&passphrase);
            let values = payfast_values(&transaction, &provider);

            prop_assert_eq!(values.signature.clone(), compute_signature(values.signed_fields(), &passphrase));
        }
    }
}
