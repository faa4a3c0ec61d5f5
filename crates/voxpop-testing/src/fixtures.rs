//! Deterministic feedback record builders.
//!
//! Date-sensitive engine behavior (day bucketing, date bounds) works on
//! local wall time, so fixtures offer [`RecordBuilder::created_local`] to
//! pin records to a local calendar instant regardless of the machine's
//! timezone.

use chrono::{DateTime, Local, TimeZone, Utc};
use voxpop_types::FeedbackRecord;

/// Start building a record with sensible defaults and the given id.
pub fn record(id: &str) -> RecordBuilder {
    RecordBuilder {
        record: FeedbackRecord {
            id: id.to_string(),
            name: "Sam Carter".to_string(),
            email: "sam@example.com".to_string(),
            category: None,
            rating: None,
            message: "Solid product".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        },
    }
}

pub struct RecordBuilder {
    record: FeedbackRecord,
}

impl RecordBuilder {
    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.record.email = email.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.record.category = Some(category.to_string());
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.record.rating = Some(rating);
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.record.message = message.to_string();
        self
    }

    pub fn created_at(mut self, instant: DateTime<Utc>) -> Self {
        self.record.created_at = instant;
        self
    }

    /// Pin creation to a local wall-clock instant.
    pub fn created_local(mut self, y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Self {
        let local = Local
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("unambiguous local time");
        self.record.created_at = local.with_timezone(&Utc);
        self
    }

    pub fn build(self) -> FeedbackRecord {
        self.record
    }
}
