use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub married: bool,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Write-side shape for a new user; `id` and `created_at` are assigned on
/// insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
    /// Defaults to false so an unchecked form checkbox (absent field)
    /// still parses.
    #[serde(default)]
    pub married: bool,
    #[serde(default)]
    pub comment: Option<String>,
}
