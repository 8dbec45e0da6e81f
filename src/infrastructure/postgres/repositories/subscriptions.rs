use async_trait::async_trait;
use diesel::{Connection, RunQueryDsl, insert_into, prelude::*, update};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::{
            payment_transactions::ConfirmPaymentTransactionEntity,
            subscriptions::InsertSubscriptionEntity,
        },
        repositories::subscriptions::{ActivationError, SubscriptionRepository},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{payment_transactions, subscriptions},
    },
};

impl From<diesel::result::Error> for ActivationError {
    fn from(value: diesel::result::Error) -> Self {
        ActivationError::Store(value.into())
    }
}

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn activate_subscription(
        &self,
        subscription: InsertSubscriptionEntity,
        payment: ConfirmPaymentTransactionEntity,
    ) -> Result<Uuid, ActivationError> {
        let mut conn = Arc::clone(&self.db_pool)
            .get()
            .map_err(|err| ActivationError::Store(err.into()))?;

        activate_in_transaction(&mut conn, &subscription, &payment)
    }
}

/// Inserts the subscription and links it to the payment row keyed by `order_id`.
/// Either both writes commit or neither does; an `order_id` with no row rolls back.
pub(crate) fn activate_in_transaction(
    conn: &mut PgConnection,
    subscription: &InsertSubscriptionEntity,
    payment: &ConfirmPaymentTransactionEntity,
) -> Result<Uuid, ActivationError> {
    conn.transaction::<Uuid, ActivationError, _>(|conn| {
        let subscription_id = insert_into(subscriptions::table)
            .values(subscription)
            .returning(subscriptions::subscription_id)
            .get_result::<Uuid>(conn)
            .map_err(|err| ActivationError::SubscriptionInsert(err.to_string()))?;

        let updated_rows = update(payment_transactions::table)
            .filter(payment_transactions::order_id.eq(&payment.order_id))
            .set(payment.changeset(subscription_id))
            .execute(conn)
            .map_err(|err| ActivationError::TransactionUpdate(err.to_string()))?;

        if updated_rows == 0 {
            return Err(ActivationError::TransactionUpdate(format!(
                "payment transaction not found for order_id {}",
                payment.order_id
            )));
        }

        Ok(subscription_id)
    })
}
