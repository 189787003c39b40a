// SQLite pool construction and schema synchronization.
//
// Purpose
// - Own every DDL statement; the rest of the crate only sees a SqlitePool.
//
// Boundaries
// - Synchronization is additive only: CREATE TABLE IF NOT EXISTS, never
//   DROP or ALTER.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT    NOT NULL UNIQUE,
    age        INTEGER NOT NULL,
    married    INTEGER NOT NULL,
    comment    TEXT    NULL,
    created_at TEXT    NOT NULL
)
"#;

const COMMENTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    commenter  INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE,
    comment    TEXT    NOT NULL,
    created_at TEXT    NOT NULL
)
"#;

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database exists per connection; a wider pool would hand
    // each request a different empty schema.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Reconcile the schema with the expected table definitions. Idempotent and
/// non-destructive: existing tables and rows are left untouched.
pub async fn sync(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in [USERS_DDL, COMMENTS_DDL] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
