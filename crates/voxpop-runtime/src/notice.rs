use tokio::sync::mpsc::UnboundedSender;

/// User-facing event raised by the dashboard.
///
/// The web frontend surfaced these as toasts; terminal frontends print
/// them. Every refresh and mutation outcome maps to exactly one notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A refresh replaced the visible set.
    Loaded { count: usize },

    /// A refresh failed; the previous set is still shown.
    LoadFailed { detail: String },

    /// A draft was accepted by the backend.
    Created { id: String },

    /// A draft was rejected, by validation or by the backend.
    SubmitFailed { detail: String },

    /// A record was removed from the backend.
    Deleted { id: String },

    /// A deletion failed; the record is still present.
    DeleteFailed { id: String, detail: String },
}

impl Notice {
    /// Whether the notice reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::LoadFailed { .. } | Notice::SubmitFailed { .. } | Notice::DeleteFailed { .. }
        )
    }
}

/// Cloneable handle that lets other components ask the dashboard to
/// re-fetch, replacing the page-global refresh event the web dashboard
/// listened for.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    tx: UnboundedSender<()>,
}

impl RefreshHandle {
    pub(crate) fn new(tx: UnboundedSender<()>) -> Self {
        Self { tx }
    }

    /// Queue a refresh request. Delivery is best-effort: if the dashboard
    /// is gone the signal is dropped.
    pub fn request_refresh(&self) {
        let _ = self.tx.send(());
    }
}
