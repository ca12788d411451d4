use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("The administrator store is unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
    #[error("Failed to migrate the administrator store: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Failed to hash the administrator password: {0}")]
    PasswordHash(String),
    #[error("Missing required environment variable `{0}`")]
    MissingConfig(&'static str),
    #[error("Invalid value `{value}` for environment variable `{key}`")]
    InvalidConfig { key: &'static str, value: String },
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::StoreUnavailable(_) => String::from("StoreUnavailable"),
            AppError::Migration(_) => String::from("MigrationFailed"),
            AppError::PasswordHash(_) => String::from("PasswordHashFailed"),
            AppError::MissingConfig(_) => String::from("MissingConfig"),
            AppError::InvalidConfig { key: _, value: _ } => String::from("InvalidConfig"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_store_unavailable() {
        let err: AppError = sqlx::Error::PoolClosed.into();
        assert_eq!(err.code(), "StoreUnavailable");
        assert!(err.to_string().starts_with("The administrator store is unavailable"));
    }

    #[test]
    fn test_invalid_config_message() {
        let err = AppError::InvalidConfig {
            key: "SEED_MAX_CONNECTIONS",
            value: "many".to_string(),
        };
        assert_eq!(err.code(), "InvalidConfig");
        assert_eq!(
            err.to_string(),
            "Invalid value `many` for environment variable `SEED_MAX_CONNECTIONS`"
        );
    }
}
