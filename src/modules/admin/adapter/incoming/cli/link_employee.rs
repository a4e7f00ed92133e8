use std::process::ExitCode;

use thiserror::Error;
use tracing::error;

use crate::admin::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::admin::application::use_cases::link_employee::{
    ILinkEmployeeUseCase, LinkEmployeeError, LinkEmployeeResponse, LinkEmployeeUseCase,
};
use crate::bootstrap::{self, BootstrapError};

const USAGE: &str = "Usage: cargo run --bin link_to_employee -- <email> <employeeId>\n\
Example: cargo run --bin link_to_employee -- jane@example.com 2022-1433";

#[derive(Debug, Error)]
enum CommandError {
    #[error("missing required arguments")]
    Usage,
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error(transparent)]
    Link(#[from] LinkEmployeeError),
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    email: String,
    employee_id: String,
}

fn parse_args(args: &[String]) -> Option<Args> {
    match args {
        [email, employee_id] => Some(Args {
            email: email.clone(),
            employee_id: employee_id.clone(),
        }),
        _ => None,
    }
}

fn format_success(response: &LinkEmployeeResponse) -> String {
    format!(
        "Linked {} ({}) to employee id {}",
        response.username, response.email, response.employee_id
    )
}

// Arguments are checked before any connection is opened, so a usage error
// never touches the store.
async fn try_run(args: &[String]) -> Result<String, CommandError> {
    let args = parse_args(args).ok_or(CommandError::Usage)?;

    let db = bootstrap::connect_from_env().await?;

    let use_case = LinkEmployeeUseCase::new(
        UserQueryPostgres::new(db.clone()),
        UserRepositoryPostgres::new(db),
    );

    let response = use_case.execute(&args.email, &args.employee_id).await?;

    Ok(format_success(&response))
}

pub async fn run(args: &[String]) -> ExitCode {
    match try_run(args).await {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(CommandError::Usage) => {
            eprintln!("{}", USAGE);
            ExitCode::FAILURE
        }
        Err(CommandError::Link(err @ LinkEmployeeError::UserNotFound(_))) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "link_to_employee failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
