use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::{
    payment_transactions::ConfirmPaymentTransactionEntity,
    subscriptions::InsertSubscriptionEntity,
};

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("{0}")]
    SubscriptionInsert(String),
    #[error("{0}")]
    TransactionUpdate(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[automock]
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Inserts the subscription and attaches its id to the payment transaction.
    /// Both writes commit together or not at all.
    async fn activate_subscription(
        &self,
        subscription: InsertSubscriptionEntity,
        payment: ConfirmPaymentTransactionEntity,
    ) -> Result<Uuid, ActivationError>;
}
