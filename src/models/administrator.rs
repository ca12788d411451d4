pub const DEFAULT_FIRST_NAME: &str = "Kalpesh";
pub const DEFAULT_LAST_NAME: &str = "Fulpagare";
pub const DEFAULT_EMAIL: &str = "admin@example.com";
pub const DEFAULT_PASSWORD: &str = "kalpesh1234";

/// An administrator that has not been stored yet. The password is plain text
/// and must go through the hasher before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewAdministrator {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewAdministrator {
    /// The identity created on a fresh deployment.
    pub fn default_super_admin() -> Self {
        Self {
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}
