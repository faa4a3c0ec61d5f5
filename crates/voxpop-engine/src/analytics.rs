use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use voxpop_types::FeedbackRecord;

/// One group in the category distribution, ordered by descending count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub count: usize,
    /// Share of the whole set, rounded to one decimal.
    pub pct: f64,
}

/// One local calendar day in the seven-day series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: usize,
    /// Mean of raw ratings that day (unrated counts as zero), one decimal.
    pub avg_rating: f64,
}

impl TrendPoint {
    /// Short axis label, e.g. "Mar 5".
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}

/// Headline numbers for the currently visible view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickMetrics {
    pub total: usize,
    pub top_category: Option<String>,
    /// Mean over valid ratings (1..=5) only, one decimal; 0.0 when none.
    pub avg_rating: f64,
    /// Records created within the trailing seven days, bound inclusive.
    pub last_seven_days: usize,
}

/// Distribution of records across canonical category labels.
///
/// Groups keep encounter order and the count sort is stable, so equal
/// counts stay in first-seen order. Empty input yields no groups.
pub fn category_breakdown(records: &[FeedbackRecord]) -> Vec<CategorySlice> {
    let total = records.len();
    let mut slices: Vec<CategorySlice> = group_by_category(records)
        .into_iter()
        .map(|(category, count)| CategorySlice {
            category,
            count,
            pct: round1(count as f64 * 100.0 / total as f64),
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

/// Activity over the seven local calendar days ending at `today`, oldest
/// bucket first. All seven buckets are present even when empty.
pub fn seven_day_trend(records: &[FeedbackRecord], today: NaiveDate) -> Vec<TrendPoint> {
    let mut buckets: HashMap<NaiveDate, (usize, u32)> = HashMap::new();
    for record in records {
        let day = record.created_at.with_timezone(&Local).date_naive();
        let entry = buckets.entry(day).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u32::from(record.rating.unwrap_or(0));
    }

    (0..7)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let (count, rating_sum) = buckets.get(&date).copied().unwrap_or((0, 0));
            let avg_rating = if count > 0 {
                round1(f64::from(rating_sum) / count as f64)
            } else {
                0.0
            };
            TrendPoint {
                date,
                count,
                avg_rating,
            }
        })
        .collect()
}

/// Headline metrics for a (typically filtered) view. `now` anchors the
/// trailing seven-day window.
pub fn quick_metrics(records: &[FeedbackRecord], now: DateTime<Local>) -> QuickMetrics {
    let mut top_category = None;
    let mut top_count = 0usize;
    for (category, count) in group_by_category(records) {
        if count > top_count {
            top_category = Some(category);
            top_count = count;
        }
    }

    let mut rating_sum = 0u32;
    let mut rated = 0usize;
    for record in records {
        if let Some(rating) = record.rating_value() {
            rating_sum += u32::from(rating);
            rated += 1;
        }
    }
    let avg_rating = if rated > 0 {
        round1(f64::from(rating_sum) / rated as f64)
    } else {
        0.0
    };

    let cutoff = now.with_timezone(&Utc) - Duration::days(7);
    let last_seven_days = records
        .iter()
        .filter(|record| record.created_at >= cutoff)
        .count();

    QuickMetrics {
        total: records.len(),
        top_category,
        avg_rating,
        last_seven_days,
    }
}

/// Encounter-ordered (label, count) pairs. Ties downstream resolve to the
/// first label seen, matching the dashboard's historical behavior.
fn group_by_category(records: &[FeedbackRecord]) -> Vec<(String, usize)> {
    let mut groups: Vec<(String, usize)> = Vec::new();
    for record in records {
        let label = record.category_label();
        match groups.iter().position(|(name, _)| *name == label) {
            Some(i) => groups[i].1 += 1,
            None => groups.push((label, 1)),
        }
    }
    groups
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
