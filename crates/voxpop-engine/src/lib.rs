// Engine module - pure derivation logic (filtering, analytics, export)
// This layer sits between fetched records (types) and presentation

pub mod analytics;
pub mod export;
pub mod filter;

pub use analytics::{CategorySlice, QuickMetrics, TrendPoint};
pub use export::ExportError;

use voxpop_types::{FeedbackRecord, FilterCriteria};

// Facade API - stable entry points for the runtime and CLI layers

/// Apply filter criteria to a fetched set, returning the ordered view.
pub fn apply_criteria(
    records: &[FeedbackRecord],
    criteria: &FilterCriteria,
) -> Vec<FeedbackRecord> {
    filter::apply(records, criteria)
}

/// Render a record view as an all-fields-quoted CSV document.
pub fn render_csv(records: &[FeedbackRecord]) -> Result<String, ExportError> {
    export::to_csv(records)
}
