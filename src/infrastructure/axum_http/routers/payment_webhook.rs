use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use tracing::{info, warn};

use crate::{
    application::usercases::payment_webhook::PaymentWebhookUseCase,
    domain::{
        repositories::{
            subscription_plans::SubscriptionPlanRepository, subscriptions::SubscriptionRepository,
        },
        value_objects::payment_webhook::{
            ACTIVATION_SUCCESS_MESSAGE, MessageResponse, PaymentNotification,
        },
    },
    infrastructure::{
        axum_http::{default_routers, error_responses::AppError},
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                subscription_plans::SubscriptionPlanPostgres, subscriptions::SubscriptionPostgres,
            },
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = SubscriptionPlanPostgres::new(Arc::clone(&db_pool));
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let payment_webhook_usecase =
        PaymentWebhookUseCase::new(Arc::new(plan_repository), Arc::new(subscription_repository));

    router(Arc::new(payment_webhook_usecase))
}

pub fn router<P, S>(payment_webhook_usecase: Arc<PaymentWebhookUseCase<P, S>>) -> Router
where
    P: SubscriptionPlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            post(handle_payment_webhook::<P, S>).fallback(default_routers::method_not_allowed),
        )
        .with_state(payment_webhook_usecase)
}

pub async fn handle_payment_webhook<P, S>(
    State(payment_webhook_usecase): State<Arc<PaymentWebhookUseCase<P, S>>>,
    payload: Result<Json<PaymentNotification>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError>
where
    P: SubscriptionPlanRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
{
    let Json(notification) = payload.map_err(|rejection| {
        warn!(
            status = rejection.status().as_u16(),
            error = %rejection.body_text(),
            "payment_webhook: rejected malformed payload"
        );
        AppError::InvalidPayload(rejection.body_text())
    })?;

    let activated = payment_webhook_usecase.handle_payment(notification).await?;
    info!(
        subscription_id = %activated.subscription_id,
        "payment_webhook: responding with success"
    );

    Ok(Json(MessageResponse {
        message: ACTIVATION_SUCCESS_MESSAGE.to_string(),
    }))
}
