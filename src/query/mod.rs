//! Query compilation and tolerant literal matching.

pub mod pattern;

pub use pattern::{MatchRange, Pattern};
