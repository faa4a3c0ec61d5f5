use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sort order for the dashboard list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Most recent first (created_at DESC)
    NewestFirst,
    /// Oldest first (created_at ASC)
    OldestFirst,
    /// Highest rating first; missing ratings sort as 0
    HighestRating,
    /// Lowest rating first; missing ratings sort as 0
    LowestRating,
}

impl Default for SortMode {
    fn default() -> Self {
        Self::NewestFirst
    }
}

/// View criteria applied to a fetched record set.
///
/// Every field is an optional refinement. The default criteria (empty query,
/// all categories, no date bounds, newest first) pass records through
/// untouched apart from ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Substring query matched case-insensitively against name, email and
    /// message. Whitespace-only means no query.
    pub query: String,
    /// Canonical category label to keep; `None` keeps every category.
    pub category: Option<String>,
    /// Inclusive lower bound, interpreted as the start of the local day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound, extended to the end of the local day.
    pub date_to: Option<NaiveDate>,
    pub sort: SortMode,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}
