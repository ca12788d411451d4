use crate::errors::AppError;
use argon2::{Argon2, PasswordHasher};
use password_hash::{SaltString, rand_core::OsRng};

/// Produces a PHC string with a fresh salt; the plain password never leaves this call.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    // Library defaults: Argon2id, 19 MiB of memory, two passes, single lane.
    let hasher = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);
    match hasher.hash_password(password.as_bytes(), &salt) {
        Ok(phc) => Ok(phc.to_string()),
        Err(e) => {
            tracing::error!("hash_password: {:?}", e);
            Err(AppError::PasswordHash(e.to_string()))
        }
    }
}
