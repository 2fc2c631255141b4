//! PointMe Gesture Core — the signal-processing and gesture-recognition pipeline.
//!
//! Turns a noisy per-frame stream of hand landmarks into:
//! - **Smoothed pointer targets:** per-axis adaptive low-pass filtering
//!   ("One Euro" filter) or anchor-relative deltas with dead-zone
//! - **Gesture events:** distance/threshold classification with drag and
//!   tracking-pause latches
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data. One external detection
//! cycle = one call into [`Pipeline::tick`].

pub mod classifier;
pub mod filter;
pub mod pipeline;
pub mod relative;

pub use classifier::{GestureClassifier, GestureConfig};
pub use filter::{AdaptiveAxisFilter, FilterConfig};
pub use pipeline::{Pipeline, PipelineConfig, PointerMode};
pub use relative::{RelativeConfig, RelativeMotionTracker};
