//! Lifecycle Tests
//!
//! Verifies the refresh, submit, and remove flows: state transitions,
//! which view changes and which stays put, and the one-notice-per-failure
//! rule.

use std::sync::Arc;

use anyhow::Result;
use voxpop_runtime::{Dashboard, Error, LoadState, Notice};
use voxpop_testing::{MemoryApi, fixtures};
use voxpop_types::{FeedbackDraft, FilterCriteria};

fn seeded_api() -> Arc<MemoryApi> {
    Arc::new(MemoryApi::seeded(vec![
        fixtures::record("r1")
            .name("Ada Lovelace")
            .category(" Bug ")
            .rating(5)
            .build(),
        fixtures::record("r2")
            .name("Grace Hopper")
            .category("feature")
            .rating(3)
            .build(),
    ]))
}

fn praise_draft() -> FeedbackDraft {
    FeedbackDraft {
        name: "Margaret Hamilton".to_string(),
        email: "margaret@example.com".to_string(),
        category: Some("praise".to_string()),
        message: "Landed flawlessly".to_string(),
        rating: 5,
    }
}

// =============================================================================
// REFRESH
// =============================================================================

#[tokio::test]
async fn test_refresh_normalizes_and_notifies() -> Result<()> {
    let mut dash = Dashboard::new(seeded_api());
    assert_eq!(dash.state(), LoadState::Idle);

    dash.refresh().await?;

    assert_eq!(dash.state(), LoadState::Ready);
    assert_eq!(dash.records().len(), 2);
    assert_eq!(
        dash.records()[0].category.as_deref(),
        Some("bug"),
        "raw labels are canonicalized at ingest"
    );
    assert_eq!(dash.drain_notices(), vec![Notice::Loaded { count: 2 }]);
    Ok(())
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_set() -> Result<()> {
    let api = seeded_api();
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    api.fail_next_list(500, "backend exploded");
    let result = dash.refresh().await;

    assert!(matches!(result, Err(Error::Api(_))));
    assert_eq!(dash.state(), LoadState::Error);
    assert_eq!(dash.records().len(), 2, "previous set survives a failed fetch");

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1, "one failed refresh raises exactly one notice");
    assert!(matches!(&notices[0], Notice::LoadFailed { .. }));
    Ok(())
}

#[tokio::test]
async fn test_criteria_survive_refresh() -> Result<()> {
    let mut dash = Dashboard::new(seeded_api());
    dash.set_criteria(FilterCriteria::new().category("bug"));

    dash.refresh().await?;

    assert_eq!(dash.criteria().category.as_deref(), Some("bug"));
    assert_eq!(dash.filtered().len(), 1);
    assert_eq!(dash.filtered()[0].id, "r1");
    Ok(())
}

// =============================================================================
// SUBMIT
// =============================================================================

#[tokio::test]
async fn test_submit_creates_and_refreshes() -> Result<()> {
    let api = seeded_api();
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    dash.submit(&praise_draft()).await?;

    assert_eq!(api.list_calls(), 2, "a successful submit re-fetches");
    assert_eq!(dash.records().len(), 3);

    let notices = dash.drain_notices();
    assert!(notices.iter().any(|n| matches!(n, Notice::Created { .. })));
    assert_eq!(notices.last(), Some(&Notice::Loaded { count: 3 }));
    Ok(())
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() -> Result<()> {
    let api = Arc::new(MemoryApi::new());
    let mut dash = Dashboard::new(api.clone());

    let mut draft = praise_draft();
    draft.rating = 0;
    let result = dash.submit(&draft).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(api.list_calls(), 0, "validation failures stay local");
    assert!(api.records().is_empty());

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(&notices[0], Notice::SubmitFailed { .. }));
    Ok(())
}

#[tokio::test]
async fn test_rejected_submit_leaves_set_untouched() -> Result<()> {
    let api = seeded_api();
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    api.fail_next_create(500, "boom");
    let result = dash.submit(&praise_draft()).await;

    assert!(matches!(result, Err(Error::Api(_))));
    assert_eq!(dash.records().len(), 2);
    assert_eq!(api.list_calls(), 1, "no re-fetch after a rejected submit");

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(&notices[0], Notice::SubmitFailed { .. }));
    Ok(())
}

// =============================================================================
// REMOVE
// =============================================================================

#[tokio::test]
async fn test_remove_deletes_and_refreshes() -> Result<()> {
    let api = seeded_api();
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    dash.remove("r1").await?;

    assert_eq!(api.list_calls(), 2);
    assert_eq!(dash.records().len(), 1);
    assert_eq!(dash.records()[0].id, "r2");
    assert!(!dash.is_removing("r1"));

    let notices = dash.drain_notices();
    assert_eq!(
        notices[0],
        Notice::Deleted {
            id: "r1".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_delete_rolls_back_with_single_notice() -> Result<()> {
    let api = seeded_api();
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    api.fail_next_remove(500, "boom");
    let result = dash.remove("r1").await;

    assert!(matches!(result, Err(Error::Api(_))));
    assert_eq!(dash.records().len(), 2, "visible set is unchanged");
    assert_eq!(dash.filtered().len(), 2);
    assert_eq!(
        dash.state(),
        LoadState::Ready,
        "a failed delete is not a load failure"
    );
    assert!(!dash.is_removing("r1"), "busy marker cleared on failure");
    assert_eq!(api.records().len(), 2, "backend still holds the record");

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1, "exactly one notice per failed delete");
    assert!(matches!(&notices[0], Notice::DeleteFailed { id, .. } if id == "r1"));
    Ok(())
}

#[tokio::test]
async fn test_remove_unknown_id_surfaces_backend_error() -> Result<()> {
    let api = seeded_api();
    let mut dash = Dashboard::new(api.clone());
    dash.refresh().await?;
    dash.drain_notices();

    let result = dash.remove("ghost").await;

    assert!(matches!(result, Err(Error::Api(_))));
    assert_eq!(dash.records().len(), 2);

    let notices = dash.drain_notices();
    assert_eq!(notices.len(), 1);
    assert!(matches!(&notices[0], Notice::DeleteFailed { id, .. } if id == "ghost"));
    Ok(())
}
