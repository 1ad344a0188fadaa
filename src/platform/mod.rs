//! Platform abstraction layer
//!
//! Turns raw key levels polled by a windowing backend into the per-frame
//! `sim::TickInput`.

pub mod input;

pub use input::{KeyLevels, KeyTracker};
