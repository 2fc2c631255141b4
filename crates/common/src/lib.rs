//! PointMe Common Utilities
//!
//! Shared infrastructure for all PointMe crates:
//! - Error types and result aliases
//! - Clock and cooldown utilities for tick timing
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
