//! Input adapters for the explorer.
//!
//! Each adapter turns some outside source into per-frame control snapshots.

#[cfg(feature = "gui")]
pub mod gui;
pub mod scripted;
