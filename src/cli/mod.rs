//! Line-oriented shell over the expense form and store.

pub mod commands;
pub mod errors;
pub mod output;
mod registry;
mod shell;
pub mod shell_context;

pub use errors::{CliError, CommandError};
pub use shell::{run_cli, SCRIPT_MODE_ENV};
