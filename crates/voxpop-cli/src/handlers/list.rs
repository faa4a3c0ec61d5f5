use anyhow::Result;

use voxpop_types::FilterCriteria;

use crate::args::OutputFormat;
use crate::output;

pub async fn handle(
    base_url: &str,
    criteria: FilterCriteria,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let dashboard = super::load(base_url, criteria).await?;

    let mut records = dashboard.filtered();
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Plain => output::records_table(&records),
    }
    Ok(())
}
