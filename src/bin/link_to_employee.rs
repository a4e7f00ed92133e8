//! Links an existing user record to an employee id.

use std::env;
use std::process::ExitCode;

use user_admin::admin::adapter::incoming::cli::link_employee;
use user_admin::bootstrap;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> ExitCode {
    bootstrap::init_tracing();
    bootstrap::load_env();

    let args: Vec<String> = env::args().skip(1).collect();
    link_employee::run(&args).await
}
