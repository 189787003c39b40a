// All SQL touching the users table.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::modules::users::model::{NewUser, User};

pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, name, age, married, comment, created_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &SqlitePool, new_user: &NewUser) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO users (name, age, married, comment, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5) \
         RETURNING id, name, age, married, comment, created_at",
    )
    .bind(&new_user.name)
    .bind(new_user.age)
    .bind(new_user.married)
    .bind(&new_user.comment)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, name, age, married, comment, created_at FROM users WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
