use super::{bcrypt_hasher::BcryptHasher, password_hasher::PasswordHasher};
use std::fmt;
use std::sync::Arc;
use tokio::task;

pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl Clone for PasswordHashingService {
    fn clone(&self) -> Self {
        Self {
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl fmt::Debug for PasswordHashingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHashingService").finish_non_exhaustive()
    }
}

impl PasswordHashingService {
    /// The production hasher: bcrypt at the backend's fixed work factor.
    pub fn bcrypt() -> Self {
        Self::with_hasher(BcryptHasher)
    }

    pub fn with_hasher<H>(hasher: H) -> Self
    where
        H: PasswordHasher + Send + Sync + 'static,
    {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub async fn hash_password(&self, password: String) -> Result<String, String> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| e.to_string())? // Handle tokio task error
            .map_err(|e| e.to_string()) // Handle password hashing error
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, String> {
        let hasher = Arc::clone(&self.hasher);
        task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| e.to_string())? // Handle tokio task error
            .map_err(|e| e.to_string()) // Handle password verification error
    }
}
