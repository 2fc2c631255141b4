//! Anchor-relative pointer motion with dead-zone and gain.
//!
//! Instead of mapping the fingertip to an absolute screen position, this
//! mode measures the fingertip's offset from a calibrated neutral point and
//! asks the injector to move the cursor *by* that amount. Useful when the
//! absolute mapping between camera and screen is unreliable.

use serde::{Deserialize, Serialize};

/// Relative-mode parameters, fixed at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RelativeConfig {
    /// Per-axis delta magnitude below which motion is treated as tremor
    /// noise and zeroed. Axes above the threshold pass through unclipped.
    pub dead_zone: f64,

    /// Divisor applied to surviving deltas.
    pub smooth_factor: f64,

    /// Multiplier applied after smoothing. Net gain is
    /// `move_scale / smooth_factor`.
    pub move_scale: f64,
}

impl Default for RelativeConfig {
    fn default() -> Self {
        Self {
            dead_zone: 5.0,
            smooth_factor: 5.0,
            move_scale: 2.0,
        }
    }
}

/// Converts absolute fingertip positions into relative cursor deltas
/// anchored to a calibrated neutral point.
#[derive(Debug)]
pub struct RelativeMotionTracker {
    config: RelativeConfig,
    anchor: Option<(f64, f64)>,
}

impl RelativeMotionTracker {
    /// Create a tracker with the given parameters. No anchor is held until
    /// the first observation.
    pub fn new(config: RelativeConfig) -> Self {
        Self {
            config,
            anchor: None,
        }
    }

    /// Create a tracker with default parameters.
    pub fn with_defaults() -> Self {
        Self::new(RelativeConfig::default())
    }

    /// Observe the fingertip at an absolute pixel position.
    ///
    /// The first observation since the last [`reset`](Self::reset) captures
    /// the anchor and produces no motion. Subsequent observations yield the
    /// dead-zoned, scaled `(dx, dy)` delta from the anchor.
    pub fn update(&mut self, fingertip: (f64, f64)) -> Option<(f64, f64)> {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(fingertip);
            tracing::debug!(x = fingertip.0, y = fingertip.1, "relative anchor calibrated");
            return None;
        };

        let dx = self.apply_axis(fingertip.0 - anchor.0);
        let dy = self.apply_axis(fingertip.1 - anchor.1);
        Some((dx, dy))
    }

    /// Drop the anchor. The next observation recalibrates. The orchestrator
    /// calls this when the hand is lost after having been tracked.
    pub fn reset(&mut self) {
        self.anchor = None;
    }

    /// Whether an anchor is currently held.
    pub fn is_calibrated(&self) -> bool {
        self.anchor.is_some()
    }

    /// The calibrated neutral point, if any.
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.anchor
    }

    /// Dead-zone then gain for one axis.
    fn apply_axis(&self, delta: f64) -> f64 {
        if delta.abs() < self.config.dead_zone {
            return 0.0;
        }
        delta / self.config.smooth_factor * self.config.move_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_calibrates() {
        let mut tracker = RelativeMotionTracker::with_defaults();
        assert!(!tracker.is_calibrated());
        assert_eq!(tracker.update((100.0, 200.0)), None);
        assert!(tracker.is_calibrated());
        assert_eq!(tracker.anchor(), Some((100.0, 200.0)));
    }

    #[test]
    fn test_dead_zone_zeroes_small_deltas() {
        let mut tracker = RelativeMotionTracker::with_defaults();
        tracker.update((100.0, 100.0));
        assert_eq!(tracker.update((103.0, 103.0)), Some((0.0, 0.0)));
    }

    #[test]
    fn test_gain_arithmetic_on_large_delta() {
        // 20 / smooth_factor 5 * move_scale 2 = 8; above-threshold axes are
        // scaled, not clipped, and the sub-threshold axis stays zero.
        let mut tracker = RelativeMotionTracker::with_defaults();
        tracker.update((100.0, 100.0));
        assert_eq!(tracker.update((120.0, 100.0)), Some((8.0, 0.0)));
    }

    #[test]
    fn test_dead_zone_is_per_axis() {
        let mut tracker = RelativeMotionTracker::with_defaults();
        tracker.update((100.0, 100.0));
        let (dx, dy) = tracker.update((120.0, 103.0)).unwrap();
        assert_eq!(dx, 8.0);
        assert_eq!(dy, 0.0);
    }

    #[test]
    fn test_negative_deltas_keep_sign() {
        let mut tracker = RelativeMotionTracker::with_defaults();
        tracker.update((100.0, 100.0));
        assert_eq!(tracker.update((75.0, 100.0)), Some((-10.0, 0.0)));
    }

    #[test]
    fn test_anchor_immutable_until_reset() {
        let mut tracker = RelativeMotionTracker::with_defaults();
        tracker.update((100.0, 100.0));
        tracker.update((150.0, 150.0));
        tracker.update((200.0, 200.0));
        assert_eq!(tracker.anchor(), Some((100.0, 100.0)));

        tracker.reset();
        assert!(!tracker.is_calibrated());
        assert_eq!(tracker.update((200.0, 200.0)), None);
        assert_eq!(tracker.anchor(), Some((200.0, 200.0)));
    }
}
