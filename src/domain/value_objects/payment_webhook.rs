use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Number;
use uuid::Uuid;

use crate::domain::value_objects::enums::payment_statuses::PaymentStatus;

pub const ACTIVATION_SUCCESS_MESSAGE: &str =
    "Subscription activated and payment recorded successfully";

/// Webhook body sent by the payment provider. Trusted as-is; the caller is not authenticated here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaymentNotification {
    pub telegram_id: i64,
    pub payment_status: PaymentStatus,
    pub order_id: String,
    #[serde(deserialize_with = "decimal_from_json_number")]
    pub transaction_sum: Decimal,
    pub plan_id: String,
}

/// Only JSON numbers are amounts; `"100"` is a type error, not `100`.
fn decimal_from_json_number<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    let literal = number.to_string();

    Decimal::from_str_exact(&literal)
        .or_else(|_| Decimal::from_scientific(&literal))
        .map_err(|err| D::Error::custom(format!("invalid transaction sum {literal}: {err}")))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivatedSubscription {
    pub subscription_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn deserializes_numeric_transaction_sum_exactly() {
        let notification: PaymentNotification = serde_json::from_str(
            r#"{
                "telegram_id": 123456789,
                "payment_status": "success",
                "order_id": "order-1",
                "transaction_sum": 1990.5,
                "plan_id": "basic"
            }"#,
        )
        .unwrap();

        assert_eq!(notification.telegram_id, 123456789);
        assert_eq!(notification.payment_status, PaymentStatus::Success);
        assert_eq!(
            notification.transaction_sum,
            Decimal::from_str("1990.50").unwrap()
        );
    }

    #[test]
    fn integer_and_exponent_sums_are_exact() {
        let sum_of = |raw: &str| {
            serde_json::from_str::<PaymentNotification>(&format!(
                r#"{{"telegram_id": 1, "payment_status": "success", "order_id": "o", "transaction_sum": {raw}, "plan_id": "basic"}}"#
            ))
            .map(|notification| notification.transaction_sum)
        };

        assert_eq!(sum_of("100").unwrap(), Decimal::new(100, 0));
        assert_eq!(sum_of("1.5e2").unwrap(), Decimal::new(150, 0));
    }

    #[test]
    fn string_transaction_sum_is_rejected() {
        let result = serde_json::from_str::<PaymentNotification>(
            r#"{
                "telegram_id": 1,
                "payment_status": "success",
                "order_id": "o",
                "transaction_sum": "100",
                "plan_id": "basic"
            }"#,
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("expected a JSON number"), "{err}");
    }

    #[test]
    fn missing_field_is_rejected() {
        let result = serde_json::from_str::<PaymentNotification>(
            r#"{"telegram_id": 1, "payment_status": "success", "order_id": "o"}"#,
        );

        assert!(result.is_err());
    }
}
