//! Utility modules for the date picker field.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Platform renderings, selection merging and calendar arithmetic
//! - [`color`] - Theme color name parsing

pub mod color;
pub mod datetime;
