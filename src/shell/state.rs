use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::shared::views::ViewEngine;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub views: Arc<ViewEngine>,
    pub config: Arc<Config>,
}
