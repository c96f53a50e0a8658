//! # Northwind Admin Entry Point
//!
//! Runs one session and turns its outcome into the process exit status
//! (see [`northwind_admin::exit_status`]).

use std::io;
use std::process::ExitCode;

// Single user, single terminal: every statement is awaited before the next
// line is read, so one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let result = northwind_admin::run().await;
    ExitCode::from(northwind_admin::exit_status(result, &mut io::stdout()))
}
