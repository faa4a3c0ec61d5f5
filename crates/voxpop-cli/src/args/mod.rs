mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "voxpop")]
#[command(about = "Browse, submit, and analyze customer feedback", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides VOXPOP_BASE_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
