//! Public API traits and types for the eccrypt library
//!
//! This crate provides the public API surface shared by the eccrypt crates:
//! the error type, the curve provider and PKE traits, and the ciphertext
//! layout selector.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{Curve, Pke};

// Re-export trait modules for direct access
pub use traits::{curve, pke};
