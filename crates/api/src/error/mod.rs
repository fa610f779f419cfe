//! Error handling for the eccrypt ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};
