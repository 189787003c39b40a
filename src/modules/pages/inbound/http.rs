use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tera::Context;

use crate::modules::users::queries;
use crate::shared::error::AppError;
use crate::shell::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Root page: the user list rendered server-side.
async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let users = queries::list(&state.db).await?;

    let mut context = Context::new();
    context.insert("users", &users);

    let html = state.views.render("index.html", &context)?;
    Ok(Html(html))
}
