pub mod payment_transactions;
pub mod subscription_plans;
pub mod subscriptions;
