use chrono::{Local, NaiveDate};
use csv::{QuoteStyle, WriterBuilder};
use std::fmt;
use voxpop_types::FeedbackRecord;

const HEADER: [&str; 6] = ["Name", "Email", "Rating", "Category", "Message", "Date"];

/// Render records as CSV with every field quoted, so commas, quotes and
/// newlines in the free-text fields survive a round trip through any
/// compliant reader.
///
/// The rating column carries the raw stored value (empty when absent), the
/// category column the canonical label, and the date column local time.
pub fn to_csv(records: &[FeedbackRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(&mut buf);
        writer.write_record(HEADER)?;
        for record in records {
            let rating = record.rating.map(|r| r.to_string()).unwrap_or_default();
            let category = record.category_label();
            let date = record
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            writer.write_record([
                record.name.as_str(),
                record.email.as_str(),
                rating.as_str(),
                category.as_str(),
                record.message.as_str(),
                date.as_str(),
            ])?;
        }
        writer.flush().map_err(|err| ExportError::Csv(err.into()))?;
    }
    String::from_utf8(buf).map_err(ExportError::Utf8)
}

/// Download-style file name for an export taken on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("feedback-{}.csv", today.format("%Y-%m-%d"))
}

/// Error types that can occur while rendering an export
#[derive(Debug)]
pub enum ExportError {
    /// CSV serialization failed
    Csv(csv::Error),
    /// Rendered bytes were not valid UTF-8
    Utf8(std::string::FromUtf8Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(err) => write!(f, "CSV error: {}", err),
            ExportError::Utf8(err) => write!(f, "Encoding error: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Csv(err) => Some(err),
            ExportError::Utf8(err) => Some(err),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err)
    }
}
