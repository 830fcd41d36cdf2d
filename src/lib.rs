//! Strictly Bowling CLI library - configuration and score reporting
//!
//! The scoring rules live in the `strictly_bowling` crate; this crate turns
//! a game into a printable scoreboard and loads the scorer's settings.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scoreboard;

// Crate-level exports - Configuration
pub use config::{ConfigError, OutputFormat, ScorerConfig};

// Crate-level exports - Reporting
pub use scoreboard::{FrameLine, Scoreboard};
