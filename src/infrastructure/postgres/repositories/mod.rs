pub mod subscription_plans;
pub mod subscriptions;
