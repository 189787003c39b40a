// All SQL touching the comments table.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::modules::comments::model::{Comment, NewComment};

pub async fn list_by_commenter(
    pool: &SqlitePool,
    commenter: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, commenter, comment, created_at FROM comments \
         WHERE commenter = ?1 ORDER BY id",
    )
    .bind(commenter)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &SqlitePool, new_comment: &NewComment) -> Result<Comment, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO comments (commenter, comment, created_at) \
         VALUES (?1, ?2, ?3) \
         RETURNING id, commenter, comment, created_at",
    )
    .bind(new_comment.commenter)
    .bind(&new_comment.comment)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Returns the updated row, or None when the id does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    comment: &str,
) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as(
        "UPDATE comments SET comment = ?2 WHERE id = ?1 \
         RETURNING id, commenter, comment, created_at",
    )
    .bind(id)
    .bind(comment)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
