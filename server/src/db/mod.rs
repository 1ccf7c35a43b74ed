//! Postgres pool and schema migrations.
//!
//! DESIGN
//! ======
//! One pool for the whole process, sized by `DB_MAX_CONNECTIONS`. Embedded
//! migrations run to completion before the router binds, so every handler
//! can assume the account/course schema exists.

#[cfg(test)]
#[path = "db_test.rs"]
mod tests;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

fn max_connections(raw: Option<String>) -> u32 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_MAX_CONNECTIONS)
}

/// Connect to Postgres and bring the schema up to date.
///
/// # Errors
///
/// Fails when the database is unreachable or a migration cannot apply.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections(std::env::var("DB_MAX_CONNECTIONS").ok()))
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;

    Ok(pool)
}
