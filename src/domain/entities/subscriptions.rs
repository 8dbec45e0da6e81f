use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::subscriptions;

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct InsertSubscriptionEntity {
    pub telegram_id: i64,
    pub plan_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: DateTime<Utc>,
}
