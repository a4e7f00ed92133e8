use async_trait::async_trait;

use crate::admin::application::{
    ports::outgoing::{UserQuery, UserRepository},
    services::hash::PasswordHashingService,
};

// ====================== Reset Password Error ============================
#[derive(Debug, Clone)]
pub enum ResetPasswordError {
    UserNotFound(String),
    HashingError(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ResetPasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetPasswordError::UserNotFound(email) => {
                write!(f, "No user found with email: {}", email)
            }
            ResetPasswordError::HashingError(msg) => write!(f, "Password hashing failed: {}", msg),
            ResetPasswordError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ResetPasswordError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ResetPasswordError {}

// ====================== Reset Password Response =========================
#[derive(Debug, Clone)]
pub struct ResetPasswordResponse {
    pub username: String,
    pub email: String,
}

// ====================== Reset Password Use Case =========================
#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<ResetPasswordResponse, ResetPasswordError>;
}

#[derive(Debug, Clone)]
pub struct ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: PasswordHashingService,
}

impl<Q, R> ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, password_hasher: PasswordHashingService) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IResetPasswordUseCase for ResetPasswordUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<ResetPasswordResponse, ResetPasswordError> {
        // 1. Find the user by email
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| ResetPasswordError::QueryError(e.to_string()))?
            .ok_or_else(|| ResetPasswordError::UserNotFound(email.to_string()))?;

        // 2. Hash the new password
        let password_hash = self
            .password_hasher
            .hash_password(new_password.to_string())
            .await
            .map_err(ResetPasswordError::HashingError)?;

        // 3. Store the new hash
        self.repository
            .update_password(user.id, password_hash)
            .await
            .map_err(|e| ResetPasswordError::RepositoryError(e.to_string()))?;

        Ok(ResetPasswordResponse {
            username: user.username,
            email: user.email,
        })
    }
}
