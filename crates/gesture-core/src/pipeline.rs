//! The per-tick orchestrator.
//!
//! Ties filter, classifier, and relative tracker together behind one
//! pull-based entry point: `tick(frame) -> TickOutput`. Any driver works —
//! a live detector loop, a test harness, or a frame-log replay. All state
//! is constructor-injected; there are no ambient globals.

use serde::{Deserialize, Serialize};

use pointme_common::clock::SessionClock;
use pointme_common::error::PointmeResult;
use pointme_hand_model::event::{PointerCommand, TickOutput};
use pointme_hand_model::geometry::ScreenDimensions;
use pointme_hand_model::landmark::{landmark_index as lm, HandFrame};

use crate::classifier::{GestureClassifier, GestureConfig};
use crate::filter::{AdaptiveAxisFilter, FilterConfig};
use crate::relative::{RelativeConfig, RelativeMotionTracker};

/// Pointer control strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PointerMode {
    /// Map the fingertip to an absolute screen position, smoothed per axis.
    #[default]
    Absolute,

    /// Move the cursor by anchor-relative deltas.
    Relative,
}

/// Full pipeline configuration, fixed at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pointer control strategy.
    pub mode: PointerMode,

    /// Per-axis smoothing parameters (absolute mode).
    pub filter: FilterConfig,

    /// Gesture thresholds.
    pub gestures: GestureConfig,

    /// Relative-mode parameters.
    pub relative: RelativeConfig,

    /// Target coordinate space for pointer output.
    pub screen: ScreenDimensions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mode: PointerMode::Absolute,
            filter: FilterConfig::default(),
            gestures: GestureConfig::default(),
            relative: RelativeConfig::default(),
            screen: ScreenDimensions::new(1920, 1080),
        }
    }
}

/// The tick-driven control pipeline for one tracked hand slot.
///
/// Single-threaded and synchronous: one detection cycle = one `tick` call.
/// Nothing here blocks, suspends, or spawns work.
pub struct Pipeline {
    mode: PointerMode,
    screen: ScreenDimensions,
    filter_x: AdaptiveAxisFilter,
    filter_y: AdaptiveAxisFilter,
    classifier: GestureClassifier,
    tracker: RelativeMotionTracker,
    hand_present: bool,
    ticks: u64,
}

impl Pipeline {
    /// Create a pipeline from configuration.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            mode: config.mode,
            screen: config.screen,
            filter_x: AdaptiveAxisFilter::new(config.filter),
            filter_y: AdaptiveAxisFilter::new(config.filter),
            classifier: GestureClassifier::new(config.gestures),
            tracker: RelativeMotionTracker::new(config.relative),
            hand_present: false,
            ticks: 0,
        }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    /// Process one detection frame.
    ///
    /// Zero hands is a normal empty observation: no event, no pointer
    /// command, latch state untouched. If a hand was being tracked, losing
    /// it drops the relative anchor so reacquisition recalibrates. A
    /// malformed hand (missing landmark) fails the whole tick without
    /// mutating any state.
    pub fn tick(&mut self, frame: &HandFrame) -> PointmeResult<TickOutput> {
        self.ticks += 1;

        let Some(hand) = frame.primary_hand() else {
            if self.hand_present {
                tracing::debug!("hand lost; dropping relative anchor");
                self.tracker.reset();
            }
            self.hand_present = false;
            return Ok(TickOutput::none());
        };

        let gesture = self.classifier.classify(hand, frame.timestamp_ns)?;
        self.hand_present = true;

        let pointer = if self.classifier.tracking_enabled() {
            let tip = hand.point(lm::INDEX_TIP)?;
            let fingertip = self.screen.to_pixels(tip);
            match self.mode {
                PointerMode::Absolute => {
                    let t = SessionClock::ns_to_secs(frame.timestamp_ns);
                    Some(PointerCommand::MoveTo {
                        x: self.filter_x.update(fingertip.0, t),
                        y: self.filter_y.update(fingertip.1, t),
                    })
                }
                PointerMode::Relative => self
                    .tracker
                    .update(fingertip)
                    .map(|(dx, dy)| PointerCommand::MoveBy { dx, dy }),
            }
        } else {
            None
        };

        Ok(TickOutput { pointer, gesture })
    }

    /// Re-enable pointer tracking after a [`TrackingPaused`] latch.
    /// When to call this is the caller's policy, not the pipeline's.
    ///
    /// [`TrackingPaused`]: pointme_hand_model::event::GestureEvent::TrackingPaused
    pub fn resume_tracking(&mut self) {
        self.classifier.resume_tracking();
    }

    /// Whether pointer tracking is currently enabled.
    pub fn tracking_enabled(&self) -> bool {
        self.classifier.tracking_enabled()
    }

    /// Whether the drag latch is currently held.
    pub fn is_dragging(&self) -> bool {
        self.classifier.is_dragging()
    }

    /// The configured pointer mode.
    pub fn mode(&self) -> PointerMode {
        self.mode
    }

    /// Ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
