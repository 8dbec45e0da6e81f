use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, prelude::*};
use std::sync::Arc;

use crate::{
    domain::{
        entities::subscription_plans::SubscriptionPlanEntity,
        repositories::subscription_plans::SubscriptionPlanRepository,
    },
    infrastructure::postgres::{postgres_connection::PgPoolSquad, schema::subscription_plans},
};

pub struct SubscriptionPlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionPlanRepository for SubscriptionPlanPostgres {
    async fn find_by_plan_id(&self, plan_id: &str) -> Result<SubscriptionPlanEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = subscription_plans::table
            .filter(subscription_plans::plan_id.eq(plan_id))
            .select(SubscriptionPlanEntity::as_select())
            .first::<SubscriptionPlanEntity>(&mut conn)?;

        Ok(plan)
    }
}
