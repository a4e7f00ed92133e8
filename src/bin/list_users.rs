//! Prints every user record with role and employee id fallbacks.

use std::process::ExitCode;

use user_admin::admin::adapter::incoming::cli::list_users;
use user_admin::bootstrap;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> ExitCode {
    bootstrap::init_tracing();
    bootstrap::load_env();

    list_users::run().await
}
