use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Label used for records submitted without a category.
pub const DEFAULT_CATEGORY: &str = "general";

/// Categories the dashboard always offers, even before any record uses them.
pub const SEED_CATEGORIES: [&str; 4] = ["bug", "feature", "complaint", "praise"];

/// Single feedback entry as served by the record store.
///
/// The wire shape is camelCase JSON; `id` also accepts the `_id` key that
/// document-store deployments emit. Unknown fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    /// Server-assigned identifier, unique within a fetched set.
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Category as stored; absent or blank reads as "general".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Star rating as submitted. Only values in 1..=5 count toward aggregates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Canonical category label: trimmed, lowercased, `"general"` when the
    /// stored value is absent or blank.
    pub fn category_label(&self) -> String {
        category_label(self.category.as_deref())
    }

    /// Rating usable for aggregation, i.e. within 1..=5.
    pub fn rating_value(&self) -> Option<u8> {
        self.rating.filter(|r| (1..=5).contains(r))
    }
}

/// Canonical form of a raw category value.
pub fn category_label(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

/// Rewrite every record's category to its canonical label.
///
/// Applied once when a fetched set enters the dashboard, so downstream
/// consumers see a populated, lowercased category. The engine helpers go
/// through [`category_label`] as well and stay correct on raw input.
pub fn normalize_records(records: &mut [FeedbackRecord]) {
    for record in records.iter_mut() {
        record.category = Some(record.category_label());
    }
}
