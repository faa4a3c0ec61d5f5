use serde::{Deserialize, Serialize};
use std::fmt;

/// New feedback entry as captured by the submission form.
///
/// A draft is validated locally before any network call. `category` stays
/// optional; readers fall back to "general" for records stored without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub message: String,
    /// Star rating, 1..=5. Zero means the submitter never picked one and is
    /// rejected by [`FeedbackDraft::validate`].
    pub rating: u8,
}

impl FeedbackDraft {
    /// Form-level checks; a draft that fails is never sent to the backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingField("message"));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        Ok(())
    }
}

/// Why a draft was refused before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming
    MissingField(&'static str),
    /// Rating outside the accepted 1..=5 range
    RatingOutOfRange(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "{} is required", field),
            ValidationError::RatingOutOfRange(value) => {
                write!(f, "rating must be between 1 and 5, got {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
