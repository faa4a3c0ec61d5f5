use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, warn};

use voxpop_client::FeedbackApi;
use voxpop_engine::{CategorySlice, QuickMetrics, TrendPoint, analytics, filter};
use voxpop_types::{FeedbackDraft, FeedbackRecord, FilterCriteria, normalize_records};

use crate::error::{Error, Result};
use crate::notice::{Notice, RefreshHandle};

/// Load status of the record set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing fetched yet
    Idle,

    /// A fetch is in flight
    Loading,

    /// The last applied fetch succeeded
    Ready,

    /// The last applied fetch failed; the previous set stays visible
    Error,
}

/// Numbered receipt for one fetch.
///
/// Tickets order concurrent refreshes: an outcome is applied only while
/// no outcome from a later ticket has been applied, so a slow response
/// can never clobber newer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Coordinator owning the fetched record set and everything derived
/// from it.
///
/// Mutations (`submit`, `remove`) go through the record store and
/// re-fetch on success. Presentation layers read [`LoadState`], drain
/// [`Notice`]s, and pull derived views on demand. The breakdown and
/// trend views always cover the full set; quick metrics and CSV export
/// cover the filtered view.
pub struct Dashboard {
    api: Arc<dyn FeedbackApi>,
    records: Vec<FeedbackRecord>,
    criteria: FilterCriteria,
    state: LoadState,
    issued: u64,
    applied: u64,
    removing: Vec<String>,
    notice_tx: UnboundedSender<Notice>,
    notice_rx: UnboundedReceiver<Notice>,
    signal_tx: UnboundedSender<()>,
    signal_rx: UnboundedReceiver<()>,
}

impl Dashboard {
    pub fn new(api: Arc<dyn FeedbackApi>) -> Self {
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();
        Self {
            api,
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            state: LoadState::Idle,
            issued: 0,
            applied: 0,
            removing: Vec::new(),
            notice_tx,
            notice_rx,
            signal_tx,
            signal_rx,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The full fetched set, in backend order.
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the filter criteria. Derived views pick the change up on
    /// the next read; the fetched set is untouched.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Whether a deletion for `id` is currently in flight.
    pub fn is_removing(&self, id: &str) -> bool {
        self.removing.iter().any(|busy| busy == id)
    }

    /// Hand out a refresh handle for other components.
    pub fn refresh_handle(&self) -> RefreshHandle {
        RefreshHandle::new(self.signal_tx.clone())
    }

    /// Take every notice emitted since the last drain, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(notice) = self.notice_rx.try_recv() {
            notices.push(notice);
        }
        notices
    }

    /// Fetch the record set and apply it.
    ///
    /// On failure the previous set stays visible, the state moves to
    /// [`LoadState::Error`], and exactly one [`Notice::LoadFailed`] is
    /// emitted.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.begin_refresh();
        let outcome = self.api.list().await;
        self.finish_refresh(ticket, outcome)
    }

    /// Phase one of a refresh: number the fetch and flip to `Loading`.
    ///
    /// Split from [`Dashboard::finish_refresh`] so callers (and tests)
    /// can drive overlapping fetches that complete out of order.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        FetchTicket(self.issued)
    }

    /// Phase two of a refresh: apply one fetch outcome.
    ///
    /// Outcomes are applied in ticket order; anything older than the
    /// last applied ticket is discarded, success and failure alike.
    pub fn finish_refresh(
        &mut self,
        ticket: FetchTicket,
        outcome: voxpop_client::Result<Vec<FeedbackRecord>>,
    ) -> Result<()> {
        if ticket.0 <= self.applied {
            debug!(
                ticket = ticket.0,
                applied = self.applied,
                "discarding out-of-order fetch outcome"
            );
            return Ok(());
        }
        self.applied = ticket.0;
        match outcome {
            Ok(mut records) => {
                normalize_records(&mut records);
                debug!(count = records.len(), "record set replaced");
                self.records = records;
                self.state = LoadState::Ready;
                self.emit(Notice::Loaded {
                    count: self.records.len(),
                });
                Ok(())
            }
            Err(err) => {
                error!(%err, "feedback fetch failed");
                self.state = LoadState::Error;
                self.emit(Notice::LoadFailed {
                    detail: err.to_string(),
                });
                Err(Error::Api(err))
            }
        }
    }

    /// Validate a draft, send it, and re-fetch on success.
    ///
    /// Validation failures never reach the network. Either kind of
    /// failure emits exactly one [`Notice::SubmitFailed`] and leaves
    /// the record set and criteria untouched.
    pub async fn submit(&mut self, draft: &FeedbackDraft) -> Result<()> {
        if let Err(err) = draft.validate() {
            warn!(%err, "draft failed validation");
            self.emit(Notice::SubmitFailed {
                detail: err.to_string(),
            });
            return Err(Error::Validation(err));
        }
        match self.api.create(draft).await {
            Ok(record) => {
                self.emit(Notice::Created { id: record.id });
                self.refresh().await
            }
            Err(err) => {
                error!(%err, "feedback submission failed");
                self.emit(Notice::SubmitFailed {
                    detail: err.to_string(),
                });
                Err(Error::Api(err))
            }
        }
    }

    /// Delete one record and re-fetch on success.
    ///
    /// The id is marked busy for the duration so presentation layers
    /// can show a per-item indicator. On failure the set is unchanged
    /// and exactly one [`Notice::DeleteFailed`] is emitted.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        if self.is_removing(id) {
            return Ok(());
        }
        self.removing.push(id.to_string());
        let outcome = self.api.remove(id).await;
        self.removing.retain(|busy| busy != id);
        match outcome {
            Ok(()) => {
                self.emit(Notice::Deleted { id: id.to_string() });
                self.refresh().await
            }
            Err(err) => {
                error!(%err, id, "feedback deletion failed");
                self.emit(Notice::DeleteFailed {
                    id: id.to_string(),
                    detail: err.to_string(),
                });
                Err(Error::Api(err))
            }
        }
    }

    /// Drain pending refresh signals, re-fetching at most once no
    /// matter how many arrived since the last drain.
    pub async fn process_signals(&mut self) -> Result<()> {
        let mut signalled = false;
        while self.signal_rx.try_recv().is_ok() {
            signalled = true;
        }
        if signalled {
            debug!("external refresh signal");
            self.refresh().await?;
        }
        Ok(())
    }

    /// The filtered, ordered view of the fetched set.
    pub fn filtered(&self) -> Vec<FeedbackRecord> {
        voxpop_engine::apply_criteria(&self.records, &self.criteria)
    }

    /// Category distribution over the full set.
    pub fn breakdown(&self) -> Vec<CategorySlice> {
        analytics::category_breakdown(&self.records)
    }

    /// Per-day counts and averages over the full set, anchored at the
    /// current local date.
    pub fn trend(&self) -> Vec<TrendPoint> {
        analytics::seven_day_trend(&self.records, Local::now().date_naive())
    }

    /// Headline numbers over the filtered view, anchored at the current
    /// local time.
    pub fn metrics(&self) -> QuickMetrics {
        analytics::quick_metrics(&self.filtered(), Local::now())
    }

    /// CSV document covering the filtered view.
    pub fn export_csv(&self) -> Result<String> {
        Ok(voxpop_engine::render_csv(&self.filtered())?)
    }

    /// Known category labels: the seeded defaults plus anything present
    /// in the fetched set.
    pub fn categories(&self) -> Vec<String> {
        filter::known_categories(&self.records)
    }

    fn emit(&self, notice: Notice) {
        // Receiver lives on self, so this only fails mid-teardown.
        let _ = self.notice_tx.send(notice);
    }
}
