//! Overwrites a user's password with a freshly hashed one.

use std::env;
use std::process::ExitCode;

use user_admin::admin::adapter::incoming::cli::reset_password;
use user_admin::bootstrap;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> ExitCode {
    bootstrap::init_tracing();
    bootstrap::load_env();

    let args: Vec<String> = env::args().skip(1).collect();
    reset_password::run(&args).await
}
