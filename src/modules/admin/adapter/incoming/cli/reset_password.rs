use std::process::ExitCode;

use thiserror::Error;
use tracing::error;

use crate::admin::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::admin::application::services::hash::PasswordHashingService;
use crate::admin::application::use_cases::reset_password::{
    IResetPasswordUseCase, ResetPasswordError, ResetPasswordResponse, ResetPasswordUseCase,
};
use crate::bootstrap::{self, BootstrapError};

const USAGE: &str = "Usage: cargo run --bin reset_password -- <email> <newPassword>\n\
Example: cargo run --bin reset_password -- jane@example.com S3cret!pass";

#[derive(Debug, Error)]
enum CommandError {
    #[error("missing required arguments")]
    Usage,
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error(transparent)]
    Reset(#[from] ResetPasswordError),
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    email: String,
    new_password: String,
}

fn parse_args(args: &[String]) -> Option<Args> {
    match args {
        [email, new_password] => Some(Args {
            email: email.clone(),
            new_password: new_password.clone(),
        }),
        _ => None,
    }
}

// The plaintext is echoed back on purpose. This runs on an operator's
// terminal, never over the network, and the operator has to hand the new
// password to the user anyway.
fn format_success(response: &ResetPasswordResponse, new_password: &str) -> String {
    format!(
        "Password reset for {} ({})\nNew password: {}",
        response.username, response.email, new_password
    )
}

async fn try_run(args: &[String]) -> Result<String, CommandError> {
    let args = parse_args(args).ok_or(CommandError::Usage)?;

    let db = bootstrap::connect_from_env().await?;

    let use_case = ResetPasswordUseCase::new(
        UserQueryPostgres::new(db.clone()),
        UserRepositoryPostgres::new(db),
        PasswordHashingService::bcrypt(),
    );

    let response = use_case.execute(&args.email, &args.new_password).await?;

    Ok(format_success(&response, &args.new_password))
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
        Err(CommandError::Reset(err @ ResetPasswordError::UserNotFound(_))) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(error = %err, "reset_password failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
