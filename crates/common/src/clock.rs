//! Clock and timing utilities for tick processing.
//!
//! Every PointMe tick is stamped with a monotonic timestamp relative to
//! a fixed epoch (the moment the session started). This module provides:
//! - Capturing the epoch
//! - Converting between nanosecond and second representations
//! - Elapsed-time cooldown guards for gesture rate limiting

use std::time::Instant;

/// A session clock that provides monotonic timestamps relative to
/// a fixed epoch (the moment tracking started).
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// The instant the session started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl SessionClock {
    /// Create a new session clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a clock from a known epoch (for loading saved frame logs).
    pub fn from_epoch(epoch: Instant, wall: String) -> Self {
        Self {
            epoch,
            epoch_wall: wall,
        }
    }

    /// Get nanoseconds elapsed since session start.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Get seconds elapsed since session start.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at session start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }
}

/// Elapsed-time guard for repeatable gesture events.
///
/// A gesture that holds its trigger pose (e.g. a sustained pinch) must not
/// fire on every tick. `Cooldown` gates re-firing on elapsed time rather
/// than a boolean latch, so the same gesture fires again once the interval
/// has passed even if the pose never releases.
#[derive(Debug)]
pub struct Cooldown {
    interval_ns: u64,
    last_fire_ns: Option<u64>,
}

impl Cooldown {
    /// Create a cooldown with the given interval in milliseconds.
    pub fn from_millis(interval_ms: u64) -> Self {
        Self {
            interval_ns: interval_ms * 1_000_000,
            last_fire_ns: None,
        }
    }

    /// Check whether enough time has passed to fire again.
    /// Returns true and records the fire time if ready.
    /// The first call always returns true.
    pub fn ready(&mut self, now_ns: u64) -> bool {
        match self.last_fire_ns {
            None => {
                self.last_fire_ns = Some(now_ns);
                true
            }
            Some(last) if now_ns >= last + self.interval_ns => {
                self.last_fire_ns = Some(now_ns);
                true
            }
            _ => false,
        }
    }

    /// Cooldown interval in nanoseconds.
    pub fn interval_ns(&self) -> u64 {
        self.interval_ns
    }
}
