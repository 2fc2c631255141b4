//! Adaptive per-axis smoothing (the "One Euro" filter).
//!
//! A one-dimensional low-pass filter whose cutoff frequency rises with the
//! estimated signal speed: slow motion is heavily smoothed (less jitter),
//! fast motion is lightly smoothed (less lag).
//!
//! # Algorithm
//!
//! 1. Derive the instantaneous sampling frequency from the elapsed time
//!    between samples.
//! 2. Estimate the derivative `(raw - prev) * freq`, low-passed at a fixed
//!    derivative cutoff.
//! 3. Raise the cutoff with speed: `cutoff = min_cutoff + beta * |dx_hat|`.
//! 4. Blend raw and previous output with `alpha = 1 / (1 + tau/te)` where
//!    `tau = 1 / (2π·cutoff)` and `te = 1/freq`.
//!
//! One instance filters one axis. The x and y filters of a pointer never
//! share state.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Filter parameters, fixed at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum cutoff frequency (Hz). Lower means smoother at rest.
    pub min_cutoff: f64,

    /// Speed coefficient. Higher means less lag during fast motion.
    /// Zero disables the adaptive speed-up entirely.
    pub beta: f64,

    /// Cutoff frequency for the derivative estimate (Hz).
    pub derivative_cutoff: f64,

    /// Assumed sampling frequency before two samples exist (Hz).
    /// Corrected as soon as a second sample arrives.
    pub initial_freq_hz: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_cutoff: 1.0,
            beta: 0.0,
            derivative_cutoff: 1.0,
            initial_freq_hz: 120.0,
        }
    }
}

/// Per-axis filter memory, seeded lazily on the first observation.
#[derive(Debug, Clone, Copy)]
struct FilterState {
    prev_value: f64,
    prev_derivative: f64,
    prev_timestamp: f64,
    freq: f64,
}

/// A one-dimensional adaptive low-pass filter.
#[derive(Debug)]
pub struct AdaptiveAxisFilter {
    config: FilterConfig,
    state: Option<FilterState>,
}

impl AdaptiveAxisFilter {
    /// Create a filter with the given parameters.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create a filter with default parameters.
    pub fn with_defaults() -> Self {
        Self::new(FilterConfig::default())
    }

    /// Feed one raw sample; returns the smoothed value.
    ///
    /// The first call returns `raw` unchanged and seeds the filter state.
    /// Non-increasing timestamps reuse the last valid sampling frequency
    /// instead of dividing by zero or negative elapsed time.
    pub fn update(&mut self, raw: f64, timestamp_secs: f64) -> f64 {
        let Some(state) = self.state.as_mut() else {
            self.state = Some(FilterState {
                prev_value: raw,
                prev_derivative: 0.0,
                prev_timestamp: timestamp_secs,
                freq: self.config.initial_freq_hz,
            });
            return raw;
        };

        let elapsed = timestamp_secs - state.prev_timestamp;
        if elapsed > 0.0 {
            state.freq = 1.0 / elapsed;
        }
        let te = 1.0 / state.freq;

        let derivative = (raw - state.prev_value) * state.freq;
        let d_alpha = smoothing_alpha(te, self.config.derivative_cutoff);
        let derivative_hat = d_alpha * derivative + (1.0 - d_alpha) * state.prev_derivative;

        let cutoff = self.config.min_cutoff + self.config.beta * derivative_hat.abs();
        let alpha = smoothing_alpha(te, cutoff);
        let smoothed = alpha * raw + (1.0 - alpha) * state.prev_value;

        state.prev_value = smoothed;
        state.prev_derivative = derivative_hat;
        state.prev_timestamp = timestamp_secs;

        smoothed
    }

    /// Drop all state; the next `update` behaves like a first call.
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Whether the filter has seen at least one sample.
    pub fn is_seeded(&self) -> bool {
        self.state.is_some()
    }
}

/// Blend weight for a first-order low-pass at the given cutoff.
fn smoothing_alpha(te: f64, cutoff: f64) -> f64 {
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / te)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_call_identity() {
        let mut filter = AdaptiveAxisFilter::with_defaults();
        assert_eq!(filter.update(42.5, 0.0), 42.5);
        assert!(filter.is_seeded());
    }

    #[test]
    fn test_converges_on_constant_input() {
        let mut filter = AdaptiveAxisFilter::with_defaults();
        filter.update(0.0, 0.0);
        let mut out = 0.0;
        for i in 1..200 {
            out = filter.update(100.0, i as f64 / 60.0);
        }
        assert!((out - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_step_response_never_overshoots() {
        // With beta = 0 the response to a step must land strictly between
        // the previous output and the new target.
        let mut filter = AdaptiveAxisFilter::with_defaults();
        filter.update(0.0, 0.0);
        let prev = filter.update(0.0, 1.0 / 60.0);
        let stepped = filter.update(100.0, 2.0 / 60.0);
        assert!(stepped > prev);
        assert!(stepped < 100.0);
    }

    #[test]
    fn test_non_increasing_timestamp_reuses_frequency() {
        let mut filter = AdaptiveAxisFilter::with_defaults();
        filter.update(0.0, 0.0);
        let a = filter.update(10.0, 0.1);
        // Duplicate and backwards timestamps must not produce NaN/inf.
        let b = filter.update(20.0, 0.1);
        let c = filter.update(30.0, 0.05);
        assert!(a.is_finite());
        assert!(b.is_finite());
        assert!(c.is_finite());
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn test_beta_reduces_lag_during_fast_motion() {
        let slow_config = FilterConfig::default();
        let fast_config = FilterConfig {
            beta: 0.5,
            ..Default::default()
        };
        let mut plain = AdaptiveAxisFilter::new(slow_config);
        let mut adaptive = AdaptiveAxisFilter::new(fast_config);

        for i in 0..10 {
            let t = i as f64 / 60.0;
            let v = i as f64 * 50.0; // fast ramp
            plain.update(v, t);
            adaptive.update(v, t);
        }
        let t = 10.0 / 60.0;
        let target = 500.0;
        let plain_out = plain.update(target, t);
        let adaptive_out = adaptive.update(target, t);
        assert!(adaptive_out > plain_out, "adaptive cutoff should track faster");
    }

    #[test]
    fn test_reset_reseeds() {
        let mut filter = AdaptiveAxisFilter::with_defaults();
        filter.update(0.0, 0.0);
        filter.update(50.0, 0.1);
        filter.reset();
        assert!(!filter.is_seeded());
        assert_eq!(filter.update(7.0, 5.0), 7.0);
    }

    proptest! {
        #[test]
        fn prop_first_call_is_identity(raw in -1e6f64..1e6, t in 0.0f64..1e6) {
            let mut filter = AdaptiveAxisFilter::with_defaults();
            prop_assert_eq!(filter.update(raw, t), raw);
        }

        #[test]
        fn prop_output_stays_between_prev_and_raw(
            first in -1e3f64..1e3,
            second in -1e3f64..1e3,
            dt in 1e-4f64..1.0,
        ) {
            let mut filter = AdaptiveAxisFilter::with_defaults();
            filter.update(first, 0.0);
            let out = filter.update(second, dt);
            let lo = first.min(second) - 1e-9;
            let hi = first.max(second) + 1e-9;
            prop_assert!(out >= lo && out <= hi);
        }
    }
}
