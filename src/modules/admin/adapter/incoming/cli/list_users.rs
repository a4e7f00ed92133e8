use std::process::ExitCode;

use thiserror::Error;
use tracing::error;

use crate::admin::adapter::outgoing::UserQueryPostgres;
use crate::admin::application::use_cases::list_users::{
    IListUsersUseCase, ListUsersError, ListUsersUseCase, UserListing,
};
use crate::bootstrap::{self, BootstrapError};

const RESET_HINT: &str =
    "To reset a password: cargo run --bin reset_password -- <email> <newPassword>";

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error(transparent)]
    List(#[from] ListUsersError),
}

fn render_listing(users: &[UserListing]) -> String {
    let mut out = String::new();

    if users.is_empty() {
        out.push_str("No users found.\n");
    } else {
        out.push_str(&format!("Found {} user(s):\n", users.len()));

        for (index, user) in users.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", index + 1, user.username));
            out.push_str(&format!("   Email: {}\n", user.email));
            out.push_str(&format!(
                "   Role: {}\n",
                user.role.as_deref().unwrap_or("N/A")
            ));
            out.push_str(&format!(
                "   Employee ID: {}\n",
                user.employee_id.as_deref().unwrap_or("N/A")
            ));
        }
    }

    out.push('\n');
    out.push_str(RESET_HINT);
    out
}

async fn try_run() -> Result<String, CommandError> {
    let db = bootstrap::connect_from_env().await?;

    let use_case = ListUsersUseCase::new(UserQueryPostgres::new(db));

    let listings = use_case.execute().await?;

    Ok(render_listing(&listings))
}

pub async fn run() -> ExitCode {
    match try_run().await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "list_users failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::sync::Arc;
    use uuid::Uuid;

    fn listing(
        username: &str,
        email: &str,
        role: Option<&str>,
        employee_id: Option<&str>,
    ) -> UserListing {
        UserListing {
            username: username.to_string(),
            email: email.to_string(),
            role: role.map(String::from),
            employee_id: employee_id.map(String::from),
        }
    }

    #[test]
    fn test_render_listing_empty_prints_notice_and_hint() {
        let rendered = render_listing(&[]);

        assert_eq!(rendered, format!("No users found.\n\n{}", RESET_HINT));
    }

    #[test]
    fn test_render_listing_numbers_from_one_and_falls_back_to_na() {
        let users = vec![
            listing("alice", "alice@example.com", Some("admin"), Some("2021-0007")),
            listing("bob", "bob@example.com", None, None),
        ];

        let rendered = render_listing(&users);

        let expected = format!(
            "Found 2 user(s):\n\
             \n\
             1. alice\n   \
             Email: alice@example.com\n   \
             Role: admin\n   \
             Employee ID: 2021-0007\n\
             \n\
             2. bob\n   \
             Email: bob@example.com\n   \
             Role: N/A\n   \
             Employee ID: N/A\n\
             \n\
             {}",
            RESET_HINT
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_listing_always_ends_with_reset_hint() {
        let users = vec![listing("alice", "alice@example.com", None, None)];

        assert!(render_listing(&users).ends_with(RESET_HINT));
        assert!(render_listing(&[]).ends_with(RESET_HINT));
    }

    #[tokio::test]
    async fn test_list_flow_end_to_end_with_mock_store() {
        let now = Utc::now();
        let model = UserModel {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            role: None,
            employee_id: Some("2021-0007".to_string()),
            created_at: now.into(),
            updated_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let use_case = ListUsersUseCase::new(UserQueryPostgres::new(Arc::new(db)));

        let listings = use_case.execute().await.unwrap();
        let rendered = render_listing(&listings);

        assert!(rendered.contains("1. alice"));
        assert!(rendered.contains("Role: N/A"));
        assert!(rendered.contains("Employee ID: 2021-0007"));
    }
}
