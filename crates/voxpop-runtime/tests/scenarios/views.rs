//! Derived View Tests
//!
//! Verifies which views read the full fetched set and which read the
//! filtered view, plus the CSV export surface.

use std::sync::Arc;

use anyhow::Result;
use voxpop_runtime::Dashboard;
use voxpop_testing::{MemoryApi, fixtures};
use voxpop_types::FilterCriteria;

fn mixed_api() -> Arc<MemoryApi> {
    Arc::new(MemoryApi::seeded(vec![
        fixtures::record("r1")
            .name("Ada Lovelace")
            .category("bug")
            .rating(5)
            .build(),
        fixtures::record("r2")
            .name("Grace Hopper")
            .category("bug")
            .rating(4)
            .build(),
        fixtures::record("r3")
            .name("Margaret Hamilton")
            .category("praise")
            .rating(5)
            .build(),
    ]))
}

#[tokio::test]
async fn test_breakdown_and_trend_ignore_criteria() -> Result<()> {
    let mut dash = Dashboard::new(mixed_api());
    dash.refresh().await?;
    dash.set_criteria(FilterCriteria::new().category("praise"));

    let breakdown = dash.breakdown();
    assert_eq!(breakdown.len(), 2, "breakdown covers the full set");
    assert_eq!(breakdown[0].category, "bug");
    assert_eq!(breakdown[0].count, 2);
    assert_eq!(breakdown[1].category, "praise");
    assert_eq!(breakdown[1].count, 1);

    let trend = dash.trend();
    assert_eq!(trend.len(), 7, "every day of the window is present");
    assert!(
        trend.iter().all(|point| point.count == 0),
        "fixture records predate the trailing week"
    );
    Ok(())
}

#[tokio::test]
async fn test_metrics_and_export_cover_filtered_view() -> Result<()> {
    let mut dash = Dashboard::new(mixed_api());
    dash.refresh().await?;
    dash.set_criteria(FilterCriteria::new().category("praise"));

    let metrics = dash.metrics();
    assert_eq!(metrics.total, 1, "metrics cover the filtered view");
    assert_eq!(metrics.top_category.as_deref(), Some("praise"));
    assert_eq!(metrics.avg_rating, 5.0);

    let csv = dash.export_csv()?;
    let lines: Vec<&str> = csv.trim_end().lines().collect();
    assert_eq!(lines.len(), 2, "header plus the one filtered row");
    assert!(lines[1].contains("Margaret Hamilton"));
    Ok(())
}

#[tokio::test]
async fn test_categories_list_seeds_then_observed() -> Result<()> {
    let api = Arc::new(MemoryApi::seeded(vec![
        fixtures::record("r1").category("Billing").build(),
    ]));
    let mut dash = Dashboard::new(api);
    dash.refresh().await?;

    let categories = dash.categories();
    assert_eq!(
        categories,
        vec!["bug", "feature", "complaint", "praise", "billing"]
    );
    Ok(())
}

#[tokio::test]
async fn test_export_before_first_fetch_is_header_only() -> Result<()> {
    let dash = Dashboard::new(Arc::new(MemoryApi::new()));
    let csv = dash.export_csv()?;
    assert_eq!(csv.trim_end().lines().count(), 1);
    Ok(())
}
