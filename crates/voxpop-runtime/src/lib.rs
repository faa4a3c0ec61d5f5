pub mod dashboard;
pub mod error;
pub mod notice;

pub use dashboard::{Dashboard, FetchTicket, LoadState};
pub use error::{Error, Result};
pub use notice::{Notice, RefreshHandle};
