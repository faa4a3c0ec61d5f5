mod args;
mod commands;
pub mod config;
mod handlers;
mod output;

pub use args::{Cli, Commands, CriteriaArgs, OutputFormat, SortOrder};
pub use commands::run;
