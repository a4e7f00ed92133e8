use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Overwrite the employee id unconditionally. No format validation,
    /// no cross-record uniqueness check: trusted-operator tool.
    async fn set_employee_id(
        &self,
        user_id: Uuid,
        employee_id: String,
    ) -> Result<(), UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;
}

#[derive(Debug)]
pub enum UserRepositoryError {
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}
