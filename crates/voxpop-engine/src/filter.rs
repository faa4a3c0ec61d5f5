use chrono::{Duration, Local, NaiveTime};
use voxpop_types::{FeedbackRecord, FilterCriteria, SortMode, SEED_CATEGORIES};

/// Apply `criteria` to a fetched set, returning the ordered view.
///
/// Pure: the result is re-derivable from the inputs alone and the input
/// slice is never touched. Steps run in a fixed order: category, text
/// query, date-from, date-to, then a stable sort.
pub fn apply(records: &[FeedbackRecord], criteria: &FilterCriteria) -> Vec<FeedbackRecord> {
    let mut out: Vec<FeedbackRecord> = records.to_vec();

    if let Some(category) = criteria.category.as_deref() {
        let wanted = category.trim().to_lowercase();
        out.retain(|record| record.category_label() == wanted);
    }

    let query = criteria.query.trim().to_lowercase();
    if !query.is_empty() {
        out.retain(|record| {
            format!("{} {} {}", record.name, record.email, record.message)
                .to_lowercase()
                .contains(&query)
        });
    }

    if let Some(from) = criteria.date_from {
        let start = from.and_time(NaiveTime::MIN);
        out.retain(|record| record.created_at.with_timezone(&Local).naive_local() >= start);
    }

    if let Some(to) = criteria.date_to {
        // Inclusive bound: extend to the last millisecond of the local day.
        let end = to.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1);
        out.retain(|record| record.created_at.with_timezone(&Local).naive_local() <= end);
    }

    match criteria.sort {
        SortMode::NewestFirst => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortMode::OldestFirst => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortMode::HighestRating => out.sort_by(|a, b| sort_rating(b).cmp(&sort_rating(a))),
        SortMode::LowestRating => out.sort_by(|a, b| sort_rating(a).cmp(&sort_rating(b))),
    }

    out
}

fn sort_rating(record: &FeedbackRecord) -> u8 {
    record.rating_value().unwrap_or(0)
}

/// Categories the dashboard selector offers: the seeded defaults plus any
/// further label present in the set, in encounter order.
pub fn known_categories(records: &[FeedbackRecord]) -> Vec<String> {
    let mut categories: Vec<String> = SEED_CATEGORIES.iter().map(|s| s.to_string()).collect();
    for record in records {
        let Some(raw) = record.category.as_deref() else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        let label = raw.trim().to_lowercase();
        if !categories.contains(&label) {
            categories.push(label);
        }
    }
    categories
}
