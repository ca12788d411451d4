use crate::{
    auth::hasher::hash_password,
    errors::AppError,
    models::administrator::NewAdministrator,
    repositories::admin_repo::{
        DbAdministrator, count_administrators, create_administrator, get_administrator_by_email,
    },
};

#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Created { id: i64 },
    AlreadyPresent { existing: i64 },
    /// The store was empty when counted, but another seeder inserted the same
    /// email before this one could.
    ConcurrentlySeeded,
}

/// Creates the default super admin unless any administrator exists.
pub async fn seed(pool: &sqlx::SqlitePool) -> Result<SeedOutcome, AppError> {
    let existing = count_administrators(pool).await?;
    if existing > 0 {
        tracing::info!("Skipping administrator seed, {} already present", existing);
        return Ok(SeedOutcome::AlreadyPresent { existing });
    }
    insert_administrator(pool, &NewAdministrator::default_super_admin()).await
}

async fn insert_administrator(
    pool: &sqlx::SqlitePool,
    admin: &NewAdministrator,
) -> Result<SeedOutcome, AppError> {
    let password_hash = hash_password(&admin.password)?;
    match create_administrator(pool, admin, &password_hash).await {
        Ok(id) => {
            tracing::info!("Created administrator {} with id {}", admin.email, id);
            Ok(SeedOutcome::Created { id })
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            match concurrent_winner(pool, &admin.email).await {
                Some(winner) => tracing::warn!(
                    "Administrator {} {} <{}> was created concurrently (id {}, at {})",
                    winner.first_name,
                    winner.last_name,
                    winner.email,
                    winner.id,
                    winner.created_at
                ),
                None => tracing::warn!("Administrator {} was created concurrently", admin.email),
            }
            Ok(SeedOutcome::ConcurrentlySeeded)
        }
        Err(e) => Err(e.into()),
    }
}

// Only feeds the log line; a failed read must not turn the outcome into an error.
async fn concurrent_winner(pool: &sqlx::SqlitePool, email: &str) -> Option<DbAdministrator> {
    match get_administrator_by_email(pool, email).await {
        Ok(winner) => winner,
        Err(e) => {
            tracing::debug!("concurrent_winner: {:?}", e);
            None
        }
    }
}
