use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use crate::domain::entities::subscription_plans::SubscriptionPlanEntity;

#[automock]
#[async_trait]
pub trait SubscriptionPlanRepository: Send + Sync {
    /// Fails when the plan does not exist; the error text is surfaced to the caller.
    async fn find_by_plan_id(&self, plan_id: &str) -> Result<SubscriptionPlanEntity>;
}
