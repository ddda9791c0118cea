//! CLI command handlers. Each command is in its own file.
//!
//! Handlers return the process exit code: 0 when the input was accepted
//! (or the wait completed), 1 otherwise.

mod argv;
mod check_url;
mod classify;
mod parse;
mod retry_settings;
mod wait;

pub use argv::run_argv;
pub use check_url::run_check_url;
pub use classify::run_classify;
pub use parse::run_parse;
pub use retry_settings::run_retry_settings;
pub use wait::run_wait;
