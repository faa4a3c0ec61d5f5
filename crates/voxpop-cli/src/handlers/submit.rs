use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use voxpop_client::HttpFeedbackApi;
use voxpop_runtime::{Dashboard, Notice};
use voxpop_types::FeedbackDraft;

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(base_url: &str, draft: FeedbackDraft, format: OutputFormat) -> Result<()> {
    // Surface validation errors before anything touches the network.
    draft.validate()?;

    let api = Arc::new(HttpFeedbackApi::new(base_url));
    let mut dashboard = Dashboard::new(api);
    dashboard.submit(&draft).await?;

    let created_id = dashboard.drain_notices().into_iter().find_map(|notice| {
        if let Notice::Created { id } = notice {
            Some(id)
        } else {
            None
        }
    });

    match format {
        OutputFormat::Json => {
            let body = json!({ "status": "created", "id": created_id });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => {
            output::confirmation("Thanks for your feedback!");
            if let Some(id) = created_id {
                println!("  id: {}", id);
            }
        }
    }
    Ok(())
}
