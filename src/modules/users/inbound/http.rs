use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::modules::comments::model::Comment;
use crate::modules::comments::queries as comments;
use crate::modules::users::model::{NewUser, User};
use crate::modules::users::queries;
use crate::shared::error::{AppError, is_unique_violation};
use crate::shared::extract::JsonOrForm;
use crate::shell::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}/comments", get(comments_of))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = queries::list(&state.db).await?;
    Ok(Json(users))
}

async fn create(
    State(state): State<AppState>,
    JsonOrForm(new_user): JsonOrForm<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = queries::create(&state.db, &new_user)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::conflict(format!("user name already taken: {}", new_user.name))
            } else {
                AppError::from(err)
            }
        })?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn comments_of(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Comment>>, AppError> {
    if queries::find(&state.db, id).await?.is_none() {
        return Err(AppError::not_found(format!("no user with id {id}")));
    }
    let comments = comments::list_by_commenter(&state.db, id).await?;
    Ok(Json(comments))
}
