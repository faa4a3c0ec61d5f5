use anyhow::Result;
use serde_json::json;

use voxpop_types::FilterCriteria;

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(base_url: &str, criteria: FilterCriteria, format: OutputFormat) -> Result<()> {
    let dashboard = super::load(base_url, criteria).await?;

    // Breakdown and trend cover the full set; quick metrics cover the
    // filtered view, mirroring the dashboard panels.
    let breakdown = dashboard.breakdown();
    let trend = dashboard.trend();
    let metrics = dashboard.metrics();

    match format {
        OutputFormat::Json => {
            let body = json!({
                "metrics": metrics,
                "breakdown": breakdown,
                "trend": trend,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => {
            output::metrics_panel(&metrics);
            output::breakdown_panel(&breakdown);
            output::trend_panel(&trend);
        }
    }
    Ok(())
}
