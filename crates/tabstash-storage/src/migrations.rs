//! Schema bootstrap
//!
//! One key-value table. Session records are serialized JSON under a single
//! key, so there is no per-row schema to migrate.

use crate::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    tracing::debug!("Ensuring kv schema");

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    )?;

    Ok(())
}
