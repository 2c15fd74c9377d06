//! Payment methods table.

use serde::Serialize;

use super::build_facet;
use crate::record::{non_empty, PaymentMethod};

/// Cell text for a missing limit or time.
pub const PLACEHOLDER: &str = "-";

/// One row of the payment methods table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentMethodRow {
    pub title: String,
    pub image: Option<String>,
    pub deposit_limits: String,
    pub withdrawal_limits: String,
    pub withdrawal_time: String,
}

impl From<&PaymentMethod> for PaymentMethodRow {
    fn from(method: &PaymentMethod) -> Self {
        let fields = method.fields.as_ref();
        let cell = |value: Option<&String>| {
            non_empty(value.map(String::as_str))
                .unwrap_or(PLACEHOLDER)
                .to_string()
        };

        Self {
            title: method.title.clone(),
            image: method
                .featured_image
                .as_ref()
                .and_then(|image| image.url())
                .map(str::to_string),
            deposit_limits: cell(fields.and_then(|f| f.deposit_limits.as_ref())),
            withdrawal_limits: cell(fields.and_then(|f| f.withdrawal_limits.as_ref())),
            withdrawal_time: cell(fields.and_then(|f| f.withdrawal_time.as_ref())),
        }
    }
}

/// Payment method rows, `None` when the review lists no payment methods.
pub fn build_payment_rows(methods: Option<&[PaymentMethod]>) -> Option<Vec<PaymentMethodRow>> {
    build_facet("payment_methods", methods, PaymentMethodRow::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FeaturedImage, PaymentMethodFields};
    use pretty_assertions::assert_eq;

    fn method(title: &str, fields: Option<PaymentMethodFields>) -> PaymentMethod {
        PaymentMethod {
            title: title.to_string(),
            fields,
            ..Default::default()
        }
    }

    #[test]
    fn test_full_row() {
        let mut visa = method(
            "Visa",
            Some(PaymentMethodFields {
                deposit_limits: Some("$10 - $5000".to_string()),
                withdrawal_limits: Some("$20 - $4000".to_string()),
                withdrawal_time: Some("1-3 days".to_string()),
            }),
        );
        visa.featured_image = Some(FeaturedImage::from_url("https://cdn.test/visa.png"));

        let rows = build_payment_rows(Some(&[visa])).unwrap();
        assert_eq!(
            rows,
            vec![PaymentMethodRow {
                title: "Visa".to_string(),
                image: Some("https://cdn.test/visa.png".to_string()),
                deposit_limits: "$10 - $5000".to_string(),
                withdrawal_limits: "$20 - $4000".to_string(),
                withdrawal_time: "1-3 days".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_withdrawal_time_is_placeholder() {
        let skrill = method(
            "Skrill",
            Some(PaymentMethodFields {
                deposit_limits: Some("$10".to_string()),
                withdrawal_limits: Some(String::new()),
                withdrawal_time: None,
            }),
        );

        let row = PaymentMethodRow::from(&skrill);
        assert_eq!(row.deposit_limits, "$10");
        assert_eq!(row.withdrawal_limits, "-");
        assert_eq!(row.withdrawal_time, "-");
        assert_eq!(row.image, None);
    }

    #[test]
    fn test_missing_field_group_is_all_placeholders() {
        let row = PaymentMethodRow::from(&method("Bitcoin", None));
        assert_eq!(row.deposit_limits, PLACEHOLDER);
        assert_eq!(row.withdrawal_limits, PLACEHOLDER);
        assert_eq!(row.withdrawal_time, PLACEHOLDER);
    }

    #[test]
    fn test_absent_and_empty_lists() {
        assert_eq!(build_payment_rows(None), None);
        assert_eq!(build_payment_rows(Some(&[])), Some(Vec::new()));
    }
}
