//! Class declaration extraction
//!
//! The map builder only needs the declared names of each candidate file;
//! [`ClassExtractor`] is the seam, [`PhpClassExtractor`] the default.

pub mod infrastructure;
pub mod ports;

pub use infrastructure::PhpClassExtractor;
pub use ports::{ClassExtractor, ExtractionError};
