use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;

use voxpop_client::HttpFeedbackApi;
use voxpop_runtime::Dashboard;

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(base_url: &str, id: &str, format: OutputFormat) -> Result<()> {
    let api = Arc::new(HttpFeedbackApi::new(base_url));
    let mut dashboard = Dashboard::new(api);
    dashboard
        .remove(id)
        .await
        .with_context(|| format!("Failed to delete feedback {}", id))?;

    match format {
        OutputFormat::Json => {
            let body = json!({ "status": "deleted", "id": id });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => output::confirmation("Feedback deleted"),
    }
    Ok(())
}
