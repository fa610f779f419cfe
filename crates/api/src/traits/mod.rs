//! Trait definitions for the eccrypt ecosystem

pub mod curve;
pub mod pke;

pub use curve::Curve;
pub use pke::Pke;
