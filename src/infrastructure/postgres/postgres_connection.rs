use std::time::Duration;

use anyhow::{Context, Result};
use diesel::{
    Connection, PgConnection,
    connection::CacheSize,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};
use tracing::info;

use crate::config::config_model::Database;

/// Transaction-mode poolers (Supabase/PgBouncer) reject named prepared statements.
#[derive(Debug)]
struct DisablePreparedStatements;

impl CustomizeConnection<PgConnection, R2d2Error> for DisablePreparedStatements {
    fn on_acquire(&self, conn: &mut PgConnection) -> std::result::Result<(), R2d2Error> {
        conn.set_prepared_statement_cache_size(CacheSize::Disabled);
        Ok(())
    }
}

pub type PgPoolSquad = Pool<ConnectionManager<PgConnection>>;

/// Builds the pool shared by both webhook repositories. Fails fast when the
/// database is unreachable within `connect_timeout`.
pub fn establish_connection(database: &Database) -> Result<PgPoolSquad> {
    let pool = Pool::builder()
        .max_size(database.max_connections)
        .connection_timeout(Duration::from_secs(database.connect_timeout))
        .connection_customizer(Box::new(DisablePreparedStatements))
        .build(ConnectionManager::<PgConnection>::new(&database.url))
        .context("failed to build postgres connection pool")?;

    info!(
        max_connections = database.max_connections,
        connect_timeout_secs = database.connect_timeout,
        "postgres: connection pool ready"
    );
    Ok(pool)
}
