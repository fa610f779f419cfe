//! Internal utilities for the eccrypt library
//!
//! Not part of the public API; used by the other eccrypt crates.

pub mod constant_time;
pub mod endian;
