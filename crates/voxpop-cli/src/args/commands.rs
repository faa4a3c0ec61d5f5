use clap::Subcommand;
use std::path::PathBuf;

use super::common::CriteriaArgs;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List feedback records")]
    List {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Show at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    #[command(about = "Submit a new feedback record")]
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Category label; omitted records read as "general"
        #[arg(long)]
        category: Option<String>,

        /// Star rating from 1 to 5
        #[arg(long)]
        rating: u8,
    },

    #[command(about = "Delete a feedback record by id")]
    Delete {
        /// Server-assigned record id
        id: String,
    },

    #[command(about = "Show the category breakdown, weekly trend, and quick metrics")]
    Stats {
        #[command(flatten)]
        criteria: CriteriaArgs,
    },

    #[command(about = "Write the current view as CSV")]
    Export {
        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Output path (defaults to feedback-YYYY-MM-DD.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(about = "List known category labels")]
    Categories,
}
