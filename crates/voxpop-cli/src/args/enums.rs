use clap::ValueEnum;

use voxpop_types::SortMode;

/// Top-level output selector shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and panels
    Plain,
    /// Pretty-printed JSON for scripting
    Json,
}

/// CLI-facing names for the row orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl From<SortOrder> for SortMode {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Newest => SortMode::NewestFirst,
            SortOrder::Oldest => SortMode::OldestFirst,
            SortOrder::Highest => SortMode::HighestRating,
            SortOrder::Lowest => SortMode::LowestRating,
        }
    }
}
