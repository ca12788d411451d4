use chrono::Utc;
use sqlx::FromRow;

use crate::models::administrator::NewAdministrator;

#[derive(Debug, FromRow)]
pub struct DbAdministrator {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: i64,
}

pub async fn count_administrators(pool: &sqlx::SqlitePool) -> sqlx::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("select count(*) from administrators")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn get_administrator_by_email(
    pool: &sqlx::SqlitePool,
    email: &str,
) -> sqlx::Result<Option<DbAdministrator>> {
    sqlx::query_as(
        "select id, first_name, last_name, email, created_at
            from administrators where email = ?1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

// A duplicate email is returned as the driver's unique violation; callers decide
// whether that is fatal.
pub async fn create_administrator(
    pool: &sqlx::SqlitePool,
    admin: &NewAdministrator,
    password_hash: &str,
) -> sqlx::Result<i64> {
    let now = Utc::now();
    let result = sqlx::query(
        "insert into administrators
            (first_name, last_name, email, password_hash, created_at)
            values (?1, ?2, ?3, ?4, ?5)
        ",
    )
    .bind(&admin.first_name)
    .bind(&admin.last_name)
    .bind(&admin.email)
    .bind(password_hash)
    .bind(now.timestamp())
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}
