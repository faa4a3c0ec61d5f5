use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use serde_json::json;

use voxpop_engine::export::export_file_name;
use voxpop_types::FilterCriteria;

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(
    base_url: &str,
    criteria: FilterCriteria,
    output_path: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = super::load(base_url, criteria).await?;
    let csv = dashboard.export_csv()?;

    let path = output_path
        .unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().date_naive())));
    std::fs::write(&path, &csv).with_context(|| format!("Failed to write {}", path.display()))?;

    let rows = csv.trim_end().lines().count().saturating_sub(1);
    match format {
        OutputFormat::Json => {
            let body = json!({ "status": "exported", "path": path, "rows": rows });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Plain => {
            output::confirmation(&format!("Exported {} records to {}", rows, path.display()));
        }
    }
    Ok(())
}
