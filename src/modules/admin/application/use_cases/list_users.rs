use async_trait::async_trait;

use crate::admin::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone)]
pub enum ListUsersError {
    QueryError(String),
}

impl std::fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUsersError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

/// A user row as shown to the operator. Missing role or employee id stays
/// `None` here; the presentation layer decides the fallback text.
#[derive(Debug, Clone, PartialEq)]
pub struct UserListing {
    pub username: String,
    pub email: String,
    pub role: Option<String>,
    pub employee_id: Option<String>,
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserListing>, ListUsersError>;
}

#[derive(Debug, Clone)]
pub struct ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserListing>, ListUsersError> {
        let users = self
            .query
            .list_all()
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(users
            .into_iter()
            .map(|user| UserListing {
                username: user.username,
                email: user.email,
                role: user.role,
                employee_id: user.employee_id,
            })
            .collect())
    }
}
