pub mod api;
pub mod error;
pub mod http;

pub use api::FeedbackApi;
pub use error::{ApiError, Result};
pub use http::HttpFeedbackApi;
