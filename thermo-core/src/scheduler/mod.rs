//! Refresh scheduling
//!
//! Decides which sample cycles produce a frame and how button presses
//! shorten the wait.

pub mod refresh;

pub use refresh::{RefreshScheduler, DEFAULT_PERIOD_TICKS};
