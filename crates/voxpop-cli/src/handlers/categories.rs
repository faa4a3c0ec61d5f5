use anyhow::Result;

use voxpop_types::FilterCriteria;

use crate::args::OutputFormat;

pub async fn handle(base_url: &str, format: OutputFormat) -> Result<()> {
    let dashboard = super::load(base_url, FilterCriteria::default()).await?;
    let categories = dashboard.categories();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&categories)?),
        OutputFormat::Plain => {
            for category in categories {
                println!("{}", category);
            }
        }
    }
    Ok(())
}
