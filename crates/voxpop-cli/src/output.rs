use chrono::Local;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use voxpop_engine::{CategorySlice, QuickMetrics, TrendPoint};
use voxpop_types::FeedbackRecord;

fn colored() -> bool {
    std::io::stdout().is_terminal()
}

fn heading(text: &str) {
    if colored() {
        println!("\n{}", text.bold());
    } else {
        println!("\n{}", text);
    }
}

/// Normalize whitespace and cap at `max_chars`, respecting char boundaries.
fn truncate(s: &str, max_chars: usize) -> String {
    let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.chars().count() <= max_chars {
        normalized
    } else {
        let cut: String = normalized.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn rating_cell(rating: Option<u8>) -> String {
    match rating {
        Some(r) => format!("{}/5", r),
        None => "-".to_string(),
    }
}

pub(crate) fn records_table(records: &[FeedbackRecord]) {
    if records.is_empty() {
        println!("No feedback found.");
        return;
    }

    println!(
        "{:<26} {:<20} {:<7} {:<12} {:<11} MESSAGE",
        "ID", "NAME", "RATING", "CATEGORY", "DATE"
    );
    println!("{}", "-".repeat(110));
    for record in records {
        println!(
            "{:<26} {:<20} {:<7} {:<12} {:<11} {}",
            record.id,
            truncate(&record.name, 18),
            rating_cell(record.rating_value()),
            truncate(&record.category_label(), 10),
            record.created_at.with_timezone(&Local).format("%Y-%m-%d"),
            truncate(&record.message, 44),
        );
    }
    println!("\n{} records", records.len());
}

pub(crate) fn metrics_panel(metrics: &QuickMetrics) {
    heading("QUICK METRICS");
    println!("Total feedback:  {}", metrics.total);
    println!(
        "Top category:    {}",
        metrics.top_category.as_deref().unwrap_or("-")
    );
    println!("Average rating:  {:.1}", metrics.avg_rating);
    println!("Last 7 days:     {}", metrics.last_seven_days);
}

pub(crate) fn breakdown_panel(slices: &[CategorySlice]) {
    heading("CATEGORY BREAKDOWN");
    if slices.is_empty() {
        println!("No records yet.");
        return;
    }

    let widest = slices
        .iter()
        .map(|slice| slice.category.chars().count())
        .max()
        .unwrap_or(0);
    for slice in slices {
        // 20 characters of bar at 100%.
        let bar = "#".repeat((slice.pct / 5.0).round() as usize);
        let bar = if colored() {
            bar.cyan().to_string()
        } else {
            bar
        };
        println!(
            "{:<width$}  {:>4}  {:>5.1}%  {}",
            slice.category,
            slice.count,
            slice.pct,
            bar,
            width = widest
        );
    }
}

pub(crate) fn trend_panel(points: &[TrendPoint]) {
    heading("LAST 7 DAYS");
    println!("{:<8} {:>6} {:>6}", "DAY", "COUNT", "AVG");
    for point in points {
        println!(
            "{:<8} {:>6} {:>6.1}",
            point.label(),
            point.count,
            point.avg_rating
        );
    }
}

pub(crate) fn confirmation(text: &str) {
    if colored() {
        println!("{}", text.green());
    } else {
        println!("{}", text);
    }
}
