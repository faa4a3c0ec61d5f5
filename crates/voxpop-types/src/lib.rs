pub mod criteria;
pub mod draft;
pub mod record;

pub use criteria::*;
pub use draft::*;
pub use record::*;
