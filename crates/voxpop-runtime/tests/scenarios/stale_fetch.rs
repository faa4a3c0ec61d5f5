//! Stale Fetch Tests
//!
//! Verifies the ticketed refresh guard: overlapping fetches apply in
//! ticket order, and an outcome that lands after a newer one is
//! discarded without touching the view or the notice stream.

use std::sync::Arc;

use anyhow::Result;
use voxpop_client::ApiError;
use voxpop_runtime::{Dashboard, LoadState, Notice};
use voxpop_testing::{MemoryApi, fixtures};

fn empty_dashboard() -> Dashboard {
    Dashboard::new(Arc::new(MemoryApi::new()))
}

#[tokio::test]
async fn test_slow_response_cannot_clobber_newer_data() -> Result<()> {
    let mut dash = empty_dashboard();
    let older = dash.begin_refresh();
    let newer = dash.begin_refresh();

    dash.finish_refresh(newer, Ok(vec![fixtures::record("fresh").build()]))?;
    dash.finish_refresh(older, Ok(vec![fixtures::record("stale").build()]))?;

    assert_eq!(dash.records().len(), 1);
    assert_eq!(dash.records()[0].id, "fresh");
    assert_eq!(
        dash.drain_notices(),
        vec![Notice::Loaded { count: 1 }],
        "the discarded payload emits nothing"
    );
    Ok(())
}

#[tokio::test]
async fn test_late_success_after_newer_failure_is_discarded() -> Result<()> {
    let mut dash = empty_dashboard();
    let older = dash.begin_refresh();
    let newer = dash.begin_refresh();

    let failure = dash.finish_refresh(
        newer,
        Err(ApiError::Transport {
            status: 500,
            body: None,
        }),
    );
    assert!(failure.is_err());

    dash.finish_refresh(older, Ok(vec![fixtures::record("stale").build()]))?;

    assert_eq!(dash.state(), LoadState::Error, "the newest outcome wins");
    assert!(dash.records().is_empty());

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
    Ok(())
}

#[tokio::test]
async fn test_stale_empty_payload_never_blanks_the_view() -> Result<()> {
    let api = Arc::new(MemoryApi::seeded(vec![fixtures::record("r1").build()]));
    let mut dash = Dashboard::new(api.clone());
    let slow = dash.begin_refresh();

    // A full refresh begins and completes while the slow fetch hangs.
    dash.refresh().await?;
    dash.finish_refresh(slow, Ok(Vec::new()))?;

    assert_eq!(dash.records().len(), 1);
    assert_eq!(dash.records()[0].id, "r1");
    assert_eq!(dash.state(), LoadState::Ready);
    Ok(())
}
