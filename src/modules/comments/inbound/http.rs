use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{patch, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::modules::comments::model::{Comment, NewComment};
use crate::modules::comments::queries;
use crate::shared::error::{AppError, is_foreign_key_violation};
use crate::shared::extract::JsonOrForm;
use crate::shell::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create))
        .route("/{id}", patch(update).delete(remove))
}

async fn create(
    State(state): State<AppState>,
    JsonOrForm(new_comment): JsonOrForm<NewComment>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = queries::create(&state.db, &new_comment)
        .await
        .map_err(|err| {
            if is_foreign_key_violation(&err) {
                AppError::bad_request(format!(
                    "no user with id {} to comment as",
                    new_comment.commenter
                ))
            } else {
                AppError::from(err)
            }
        })?;
    Ok((StatusCode::CREATED, Json(comment)))
}

#[derive(Deserialize)]
struct UpdateCommentBody {
    comment: String,
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonOrForm(body): JsonOrForm<UpdateCommentBody>,
) -> Result<Json<Comment>, AppError> {
    match queries::update(&state.db, id, &body.comment).await? {
        Some(comment) => Ok(Json(comment)),
        None => Err(AppError::not_found(format!("no comment with id {id}"))),
    }
}

#[derive(Serialize)]
struct DeletedResponse {
    deleted: u64,
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, AppError> {
    let deleted = queries::delete(&state.db, id).await?;
    if deleted == 0 {
        return Err(AppError::not_found(format!("no comment with id {id}")));
    }
    Ok(Json(DeletedResponse { deleted }))
}
