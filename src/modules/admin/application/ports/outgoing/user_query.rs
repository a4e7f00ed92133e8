use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Result DTO for user queries
/// Carries every stored field the administrative scripts read
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Option<String>,
    pub employee_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Exact-match lookup on the unique email key. Zero or one record.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Every stored user, ordered by creation time.
    async fn list_all(&self) -> Result<Vec<UserQueryResult>, UserQueryError>;
}
