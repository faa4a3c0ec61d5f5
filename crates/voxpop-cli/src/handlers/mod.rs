pub mod categories;
pub mod delete;
pub mod export;
pub mod guidance;
pub mod list;
pub mod stats;
pub mod submit;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use voxpop_client::HttpFeedbackApi;
use voxpop_runtime::Dashboard;
use voxpop_types::FilterCriteria;

/// Build a dashboard over the HTTP record store and run the first fetch.
pub(crate) async fn load(base_url: &str, criteria: FilterCriteria) -> Result<Dashboard> {
    debug!(url = %base_url, "using record store");
    let api = Arc::new(HttpFeedbackApi::new(base_url));
    let mut dashboard = Dashboard::new(api);
    dashboard.set_criteria(criteria);
    dashboard
        .refresh()
        .await
        .with_context(|| format!("Failed to fetch feedback from {}", base_url))?;
    Ok(dashboard)
}
