//! One-shot smoke test against the login endpoint.

use std::env;
use std::process::ExitCode;

use tracing::error;
use user_admin::bootstrap;
use user_admin::probe::login;

const TEST_EMAIL: &str = "test@example.com";
const TEST_PASSWORD: &str = "Password123";

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> ExitCode {
    bootstrap::init_tracing();
    bootstrap::load_env();

    let base_url =
        env::var("APP_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    match login::probe(&base_url, TEST_EMAIL, TEST_PASSWORD).await {
        Ok(outcome) => {
            println!("{}", login::render_outcome(&outcome));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "test_login failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
