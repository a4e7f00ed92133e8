use async_trait::async_trait;

use crate::admin::application::ports::outgoing::{UserQuery, UserRepository};

// ====================== Link Employee Error =============================
#[derive(Debug, Clone)]
pub enum LinkEmployeeError {
    UserNotFound(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for LinkEmployeeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkEmployeeError::UserNotFound(email) => {
                write!(f, "No user found with email: {}", email)
            }
            LinkEmployeeError::QueryError(msg) => write!(f, "Query error: {}", msg),
            LinkEmployeeError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for LinkEmployeeError {}

// ====================== Link Employee Response ==========================
#[derive(Debug, Clone)]
pub struct LinkEmployeeResponse {
    pub username: String,
    pub email: String,
    pub employee_id: String,
}

// ====================== Link Employee Use Case ==========================
#[async_trait]
pub trait ILinkEmployeeUseCase: Send + Sync {
    async fn execute(
        &self,
        email: &str,
        employee_id: &str,
    ) -> Result<LinkEmployeeResponse, LinkEmployeeError>;
}

#[derive(Debug, Clone)]
pub struct LinkEmployeeUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> LinkEmployeeUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> ILinkEmployeeUseCase for LinkEmployeeUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        email: &str,
        employee_id: &str,
    ) -> Result<LinkEmployeeResponse, LinkEmployeeError> {
        // 1. Find the user by email
        let user = self
            .query
            .find_by_email(email)
            .await
            .map_err(|e| LinkEmployeeError::QueryError(e.to_string()))?
            .ok_or_else(|| LinkEmployeeError::UserNotFound(email.to_string()))?;

        // 2. Write the employee id. Re-linking the same id is a no-op for the
        //    caller, so no prior-value check here.
        self.repository
            .set_employee_id(user.id, employee_id.to_string())
            .await
            .map_err(|e| LinkEmployeeError::RepositoryError(e.to_string()))?;

        Ok(LinkEmployeeResponse {
            username: user.username,
            email: user.email,
            employee_id: employee_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::application::ports::outgoing::{
        user_query::{UserQueryError, UserQueryResult},
        user_repository::UserRepositoryError,
    };
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    mock! {
        pub UserQueryMock {}
        #[async_trait]
        impl UserQuery for UserQueryMock {
            async fn find_by_email(
                &self,
                email: &str,
            ) -> Result<Option<UserQueryResult>, UserQueryError>;

            async fn list_all(&self) -> Result<Vec<UserQueryResult>, UserQueryError>;
        }
    }

    mock! {
        pub UserRepositoryMock {}
        #[async_trait]
        impl UserRepository for UserRepositoryMock {
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
    }

    fn create_test_user(id: Uuid, email: &str) -> UserQueryResult {
        UserQueryResult {
            id,
            username: "testuser".to_string(),
            email: email.to_string(),
            password_hash: "hashed_password".to_string(),
            role: None,
            employee_id: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_link_employee_success() {
        let user_id = Uuid::new_v4();
        let user = create_test_user(user_id, "a@x.com");

        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_set_employee_id()
            .with(eq(user_id), eq("2022-1433".to_string()))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = LinkEmployeeUseCase::new(query, repository);

        let result = use_case.execute("a@x.com", "2022-1433").await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.username, "testuser");
        assert_eq!(response.email, "a@x.com");
        assert_eq!(response.employee_id, "2022-1433");
    }

    #[tokio::test]
    async fn test_link_employee_is_idempotent() {
        let user_id = Uuid::new_v4();

        let mut already_linked = create_test_user(user_id, "a@x.com");
        already_linked.employee_id = Some("2022-1433".to_string());

        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(2)
            .returning(move |_| Ok(Some(already_linked.clone())));

        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_set_employee_id()
            .with(eq(user_id), eq("2022-1433".to_string()))
            .times(2)
            .returning(|_, _| Ok(()));

        let use_case = LinkEmployeeUseCase::new(query, repository);

        // Linking the same id twice succeeds both times and reports the same state
        let first = use_case.execute("a@x.com", "2022-1433").await.unwrap();
        let second = use_case.execute("a@x.com", "2022-1433").await.unwrap();

        assert_eq!(first.employee_id, second.employee_id);
        assert_eq!(second.employee_id, "2022-1433");
    }

    #[tokio::test]
    async fn test_link_employee_user_not_found() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .with(eq("missing@example.com"))
            .times(1)
            .returning(|_| Ok(None));

        // No repository expectations: the lookup miss must not reach the store
        let repository = MockUserRepositoryMock::new();

        let use_case = LinkEmployeeUseCase::new(query, repository);

        let result = use_case.execute("missing@example.com", "2022-1433").await;

        assert!(
            matches!(result, Err(LinkEmployeeError::UserNotFound(ref email)) if email == "missing@example.com"),
            "Expected UserNotFound, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_link_employee_query_error() {
        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(UserQueryError::DatabaseError("connection lost".to_string())));

        let repository = MockUserRepositoryMock::new();

        let use_case = LinkEmployeeUseCase::new(query, repository);

        let result = use_case.execute("a@x.com", "2022-1433").await;

        assert!(
            matches!(result, Err(LinkEmployeeError::QueryError(_))),
            "Expected QueryError, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_link_employee_repository_error() {
        let user_id = Uuid::new_v4();
        let user = create_test_user(user_id, "a@x.com");

        let mut query = MockUserQueryMock::new();
        query
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let mut repository = MockUserRepositoryMock::new();
        repository
            .expect_set_employee_id()
            .times(1)
            .returning(|_, _| {
                Err(UserRepositoryError::DatabaseError(
                    "write failed".to_string(),
                ))
            });

        let use_case = LinkEmployeeUseCase::new(query, repository);

        let result = use_case.execute("a@x.com", "2022-1433").await;

        assert!(
            matches!(result, Err(LinkEmployeeError::RepositoryError(_))),
            "Expected RepositoryError, got {:?}",
            result
        );
    }

    #[test]
    fn test_link_employee_error_display() {
        assert_eq!(
            LinkEmployeeError::UserNotFound("a@x.com".to_string()).to_string(),
            "No user found with email: a@x.com"
        );
        assert_eq!(
            LinkEmployeeError::QueryError("boom".to_string()).to_string(),
            "Query error: boom"
        );
    }
}
