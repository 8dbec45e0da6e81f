use std::sync::Arc;

use axum::http::StatusCode;
use chrono::Utc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::{
    entities::{
        payment_transactions::ConfirmPaymentTransactionEntity,
        subscriptions::InsertSubscriptionEntity,
    },
    repositories::{
        subscription_plans::SubscriptionPlanRepository,
        subscriptions::{ActivationError, SubscriptionRepository},
    },
    value_objects::{
        enums::{payment_statuses::PaymentStatus, subscription_statuses::SubscriptionStatus},
        payment_webhook::{ActivatedSubscription, PaymentNotification},
        plan_durations::{PlanDuration, PlanDurationError},
    },
};

#[derive(Debug, Error)]
pub enum PaymentWebhookError {
    #[error("Invalid payment status")]
    InvalidStatus,
    #[error("{0}")]
    PlanLookup(String),
    #[error("Transaction sum does not match the plan price")]
    AmountMismatch,
    #[error("Invalid interval format")]
    InvalidDurationFormat(#[from] PlanDurationError),
    #[error("{0}")]
    SubscriptionInsert(String),
    #[error("{0}")]
    TransactionUpdate(String),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl PaymentWebhookError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentWebhookError::InvalidStatus
            | PaymentWebhookError::PlanLookup(_)
            | PaymentWebhookError::AmountMismatch
            | PaymentWebhookError::InvalidDurationFormat(_)
            | PaymentWebhookError::SubscriptionInsert(_)
            | PaymentWebhookError::TransactionUpdate(_) => StatusCode::BAD_REQUEST,
            PaymentWebhookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ActivationError> for PaymentWebhookError {
    fn from(value: ActivationError) -> Self {
        match value {
            ActivationError::SubscriptionInsert(message) => {
                PaymentWebhookError::SubscriptionInsert(message)
            }
            ActivationError::TransactionUpdate(message) => {
                PaymentWebhookError::TransactionUpdate(message)
            }
            // Pool or commit failure; nothing was committed and the cause stays in the logs.
            ActivationError::Store(err) => PaymentWebhookError::Internal(err),
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PaymentWebhookError>;

pub struct PaymentWebhookUseCase<P, S>
where
    P: SubscriptionPlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    subscription_repo: Arc<S>,
}

impl<P, S> PaymentWebhookUseCase<P, S>
where
    P: SubscriptionPlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, subscription_repo: Arc<S>) -> Self {
        Self {
            plan_repo,
            subscription_repo,
        }
    }

    /// Validates a provider notification against its plan and activates the subscription.
    ///
    /// Steps run strictly in order and stop at the first failure. Nothing is written
    /// unless the status, plan, amount and duration all check out. Repeated deliveries
    /// of the same notification each create a new subscription.
    pub async fn handle_payment(
        &self,
        notification: PaymentNotification,
    ) -> UseCaseResult<ActivatedSubscription> {
        let PaymentNotification {
            telegram_id,
            payment_status,
            order_id,
            transaction_sum,
            plan_id,
        } = notification;

        info!(
            telegram_id,
            %order_id,
            %plan_id,
            payment_status = %payment_status,
            "payment_webhook: notification received"
        );

        if payment_status != PaymentStatus::Success {
            let err = PaymentWebhookError::InvalidStatus;
            warn!(
                telegram_id,
                %order_id,
                status = err.status_code().as_u16(),
                "payment_webhook: payment status is not success"
            );
            return Err(err);
        }

        let plan = self
            .plan_repo
            .find_by_plan_id(&plan_id)
            .await
            .map_err(|err| {
                warn!(
                    %order_id,
                    %plan_id,
                    db_error = ?err,
                    "payment_webhook: failed to load subscription plan"
                );
                PaymentWebhookError::PlanLookup(err.to_string())
            })?;

        if transaction_sum != plan.price {
            let err = PaymentWebhookError::AmountMismatch;
            warn!(
                %order_id,
                %plan_id,
                %transaction_sum,
                price = %plan.price,
                status = err.status_code().as_u16(),
                "payment_webhook: transaction sum does not match plan price"
            );
            return Err(err);
        }

        let created_at = Utc::now();
        let (duration, expire_at) = plan
            .duration
            .parse::<PlanDuration>()
            .and_then(|duration| Ok((duration, duration.expire_at(created_at)?)))
            .map_err(|err| {
                error!(
                    %order_id,
                    %plan_id,
                    raw_duration = %plan.duration,
                    error = %err,
                    "payment_webhook: plan duration cannot be converted"
                );
                PaymentWebhookError::from(err)
            })?;

        let subscription = InsertSubscriptionEntity {
            telegram_id,
            plan_id: plan_id.clone(),
            status: SubscriptionStatus::Active.to_string(),
            created_at,
            expire_at,
        };
        let payment = ConfirmPaymentTransactionEntity {
            order_id: order_id.clone(),
            transaction_sum,
            created_at,
        };

        let subscription_id = self
            .subscription_repo
            .activate_subscription(subscription, payment)
            .await
            .map_err(|err| {
                error!(
                    telegram_id,
                    %order_id,
                    %plan_id,
                    db_error = ?err,
                    "payment_webhook: failed to activate subscription"
                );
                PaymentWebhookError::from(err)
            })?;

        info!(
            telegram_id,
            %order_id,
            %plan_id,
            %subscription_id,
            %duration,
            %expire_at,
            "payment_webhook: subscription activated"
        );

        Ok(ActivatedSubscription {
            subscription_id,
            created_at,
            expire_at,
        })
    }
}
