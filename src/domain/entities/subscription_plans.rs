use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::infrastructure::postgres::schema::subscription_plans;

/// Read-only reference row. `price` is the exact amount a payment must carry.
#[derive(Debug, Clone, PartialEq, Selectable, Queryable)]
#[diesel(table_name = subscription_plans)]
pub struct SubscriptionPlanEntity {
    pub plan_id: String,
    pub duration: String,
    pub price: Decimal,
}
