//! Refresh Signal Tests
//!
//! Verifies the cloneable refresh handle: queued signals coalesce into
//! one fetch per drain, and a handle outliving the dashboard is inert.

use std::sync::Arc;

use anyhow::Result;
use voxpop_runtime::Dashboard;
use voxpop_testing::{MemoryApi, fixtures};

#[tokio::test]
async fn test_signals_coalesce_into_one_refresh() -> Result<()> {
    let api = Arc::new(MemoryApi::seeded(vec![fixtures::record("r1").build()]));
    let mut dash = Dashboard::new(api.clone());
    let handle = dash.refresh_handle();

    handle.request_refresh();
    handle.request_refresh();
    handle.request_refresh();
    dash.process_signals().await?;

    assert_eq!(api.list_calls(), 1, "queued signals coalesce into one fetch");
    assert_eq!(dash.records().len(), 1);

    dash.process_signals().await?;
    assert_eq!(api.list_calls(), 1, "no signal, no fetch");
    Ok(())
}

#[tokio::test]
async fn test_cloned_handles_share_the_channel() -> Result<()> {
    let api = Arc::new(MemoryApi::new());
    let mut dash = Dashboard::new(api.clone());
    let first = dash.refresh_handle();
    let second = first.clone();

    drop(first);
    second.request_refresh();
    dash.process_signals().await?;

    assert_eq!(api.list_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_signalled_refresh_failure_surfaces_once() -> Result<()> {
    let api = Arc::new(MemoryApi::seeded(vec![fixtures::record("r1").build()]));
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    api.fail_next_list(503, "maintenance");
    dash.refresh_handle().request_refresh();
    let result = dash.process_signals().await;

    assert!(result.is_err());
    assert_eq!(dash.records().len(), 1, "previous set survives");

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    Ok(())
}

#[test]
fn test_signal_after_teardown_is_dropped() {
    let dash = Dashboard::new(Arc::new(MemoryApi::new()));
    let handle = dash.refresh_handle();
    drop(dash);
    handle.request_refresh();
}
