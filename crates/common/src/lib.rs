//! FollowCam Common Utilities
//!
//! Shared infrastructure for all FollowCam crates:
//! - Error types and result aliases
//! - Tick clock that turns frame durations into time scales
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
