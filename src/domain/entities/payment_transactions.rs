use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::payment_transactions;

/// Confirmation data for the pre-existing `payment_transactions` row keyed by `order_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmPaymentTransactionEntity {
    pub order_id: String,
    pub transaction_sum: Decimal,
    pub created_at: DateTime<Utc>,
}

impl ConfirmPaymentTransactionEntity {
    pub fn changeset(&self, subscription_id: Uuid) -> PaymentTransactionChangeset {
        PaymentTransactionChangeset {
            subscription_id,
            transaction_sum: self.transaction_sum,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, AsChangeset)]
#[diesel(table_name = payment_transactions)]
pub struct PaymentTransactionChangeset {
    pub subscription_id: Uuid,
    pub transaction_sum: Decimal,
    pub created_at: DateTime<Utc>,
}
