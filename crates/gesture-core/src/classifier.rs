//! Distance/threshold gesture classification with latch state.
//!
//! One hand's 21 landmarks go in each tick; at most one gesture event comes
//! out. Rules are evaluated in a fixed priority order (first match wins),
//! so a landmark pose satisfying several thresholds always resolves the
//! same way. Two pieces of state outlive a tick: the drag latch and the
//! tracking-enabled latch.

use serde::{Deserialize, Serialize};

use pointme_common::clock::Cooldown;
use pointme_common::error::PointmeResult;
use pointme_hand_model::event::GestureEvent;
use pointme_hand_model::landmark::{landmark_index as lm, HandLandmarks};

/// Gesture thresholds, fixed at construction.
///
/// All distances are in normalized coordinates, so thresholds are
/// resolution-independent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Pinch distance below which a click fires (index-thumb, middle-thumb).
    pub click_distance: f64,

    /// Index-middle distance below which a drag starts.
    pub drag_start_distance: f64,

    /// Index-middle distance above which a drag ends. Kept above
    /// `drag_start_distance` as hysteresis against oscillation at the
    /// boundary.
    pub drag_end_distance: f64,

    /// Minimum time between repeated click events (milliseconds).
    pub cooldown_ms: u64,

    /// Scroll magnitude per tick, in injector units.
    pub scroll_amount: i32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            click_distance: 0.04,
            drag_start_distance: 0.05,
            drag_end_distance: 0.06,
            cooldown_ms: 200,
            scroll_amount: 50,
        }
    }
}

/// Everything the rules need from one hand, read up-front so a missing
/// landmark fails the tick before any latch state mutates.
struct HandMeasurements {
    index_thumb_distance: f64,
    middle_thumb_distance: f64,
    index_middle_distance: f64,
    thumb_raised: bool,
    thumb_lowered: bool,
    index_curled: bool,
    index_extended: bool,
    all_fingers_curled: bool,
}

impl HandMeasurements {
    fn read(hand: &HandLandmarks) -> PointmeResult<Self> {
        let thumb_tip = hand.point(lm::THUMB_TIP)?;
        let thumb_ip = hand.point(lm::THUMB_IP)?;
        let index_tip = hand.point(lm::INDEX_TIP)?;
        let index_pip = hand.point(lm::INDEX_PIP)?;
        let middle_tip = hand.point(lm::MIDDLE_TIP)?;
        let middle_pip = hand.point(lm::MIDDLE_PIP)?;
        let ring_tip = hand.point(lm::RING_TIP)?;
        let ring_pip = hand.point(lm::RING_PIP)?;
        let pinky_tip = hand.point(lm::PINKY_TIP)?;
        let pinky_pip = hand.point(lm::PINKY_PIP)?;

        // Image coordinates: larger y is lower, so a curled finger has its
        // tip numerically below (greater than) its proximal joint.
        let index_curled = index_tip.y > index_pip.y;
        let all_fingers_curled = index_curled
            && middle_tip.y > middle_pip.y
            && ring_tip.y > ring_pip.y
            && pinky_tip.y > pinky_pip.y;

        Ok(Self {
            index_thumb_distance: index_tip.distance_to(&thumb_tip),
            middle_thumb_distance: middle_tip.distance_to(&thumb_tip),
            index_middle_distance: index_tip.distance_to(&middle_tip),
            thumb_raised: thumb_tip.y < thumb_ip.y,
            thumb_lowered: thumb_tip.y > thumb_ip.y,
            index_curled,
            index_extended: index_tip.y < index_pip.y,
            all_fingers_curled,
        })
    }
}

/// The gesture classifier for one tracked hand slot.
#[derive(Debug)]
pub struct GestureClassifier {
    config: GestureConfig,
    dragging: bool,
    tracking_enabled: bool,
    left_click_cooldown: Cooldown,
    right_click_cooldown: Cooldown,
}

impl GestureClassifier {
    /// Create a classifier with the given thresholds. Tracking starts
    /// enabled, drag latch off.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            dragging: false,
            tracking_enabled: true,
            left_click_cooldown: Cooldown::from_millis(config.cooldown_ms),
            right_click_cooldown: Cooldown::from_millis(config.cooldown_ms),
        }
    }

    /// Create a classifier with default thresholds.
    pub fn with_defaults() -> Self {
        Self::new(GestureConfig::default())
    }

    /// Classify one tick's landmarks, updating latch state.
    ///
    /// Returns at most one gesture event. A missing landmark fails the tick
    /// before any latch or cooldown state changes.
    pub fn classify(
        &mut self,
        hand: &HandLandmarks,
        timestamp_ns: u64,
    ) -> PointmeResult<Option<GestureEvent>> {
        let m = HandMeasurements::read(hand)?;

        // The pause latch is evaluated every tick regardless of which rule
        // would otherwise fire. Only the transition emits an event; the
        // latch itself is sticky until resume_tracking().
        if m.all_fingers_curled && self.tracking_enabled {
            self.tracking_enabled = false;
            tracing::debug!("all fingers curled; tracking paused");
            return Ok(Some(GestureEvent::TrackingPaused));
        }

        if !self.tracking_enabled {
            return Ok(None);
        }

        if m.index_thumb_distance < self.config.click_distance {
            if self.left_click_cooldown.ready(timestamp_ns) {
                return Ok(Some(GestureEvent::LeftClick));
            }
            return Ok(None);
        }

        if m.middle_thumb_distance < self.config.click_distance {
            if self.right_click_cooldown.ready(timestamp_ns) {
                return Ok(Some(GestureEvent::RightClick));
            }
            return Ok(None);
        }

        if m.index_middle_distance < self.config.drag_start_distance && !self.dragging {
            self.dragging = true;
            return Ok(Some(GestureEvent::DragStart));
        }

        if self.dragging && m.index_middle_distance > self.config.drag_end_distance {
            self.dragging = false;
            return Ok(Some(GestureEvent::DragEnd));
        }

        if m.thumb_raised && m.index_curled {
            return Ok(Some(GestureEvent::ScrollUp {
                amount: self.config.scroll_amount,
            }));
        }

        if m.thumb_lowered && m.index_extended {
            return Ok(Some(GestureEvent::ScrollDown {
                amount: -self.config.scroll_amount,
            }));
        }

        Ok(None)
    }

    /// Re-enable pointer tracking after a pause. Policy for *when* to call
    /// this (operator toggle, timeout, resume gesture) belongs to the
    /// caller.
    pub fn resume_tracking(&mut self) {
        if !self.tracking_enabled {
            tracing::debug!("tracking resumed");
        }
        self.tracking_enabled = true;
    }

    /// Whether pointer tracking is currently enabled.
    pub fn tracking_enabled(&self) -> bool {
        self.tracking_enabled
    }

    /// Whether the drag latch is currently held.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointme_hand_model::geometry::Point2D;
    use pointme_hand_model::landmark::LANDMARK_COUNT;

    /// An open, upright hand: all tips above their proximal joints, fingers
    /// well separated. Individual landmarks are then repositioned per test.
    fn open_hand_points() -> Vec<Point2D> {
        let mut points = vec![Point2D::new(0.5, 0.9); LANDMARK_COUNT];
        points[lm::WRIST] = Point2D::new(0.5, 0.95);
        points[lm::THUMB_IP] = Point2D::new(0.38, 0.62);
        points[lm::THUMB_TIP] = Point2D::new(0.36, 0.55);
        points[lm::INDEX_PIP] = Point2D::new(0.46, 0.5);
        points[lm::INDEX_TIP] = Point2D::new(0.46, 0.35);
        points[lm::MIDDLE_PIP] = Point2D::new(0.52, 0.48);
        points[lm::MIDDLE_TIP] = Point2D::new(0.52, 0.32);
        points[lm::RING_PIP] = Point2D::new(0.58, 0.5);
        points[lm::RING_TIP] = Point2D::new(0.58, 0.36);
        points[lm::PINKY_PIP] = Point2D::new(0.64, 0.54);
        points[lm::PINKY_TIP] = Point2D::new(0.64, 0.42);
        points
    }

    fn hand(points: Vec<Point2D>) -> HandLandmarks {
        HandLandmarks::new(points).unwrap()
    }

    fn pinch_hand(a: usize, b: usize, distance: f64) -> HandLandmarks {
        let mut points = open_hand_points();
        points[b] = Point2D::new(points[a].x + distance, points[a].y);
        hand(points)
    }

    fn curled_hand() -> HandLandmarks {
        let mut points = open_hand_points();
        for (tip, pip) in [
            (lm::INDEX_TIP, lm::INDEX_PIP),
            (lm::MIDDLE_TIP, lm::MIDDLE_PIP),
            (lm::RING_TIP, lm::RING_PIP),
            (lm::PINKY_TIP, lm::PINKY_PIP),
        ] {
            points[tip] = Point2D::new(points[pip].x, points[pip].y + 0.08);
        }
        hand(points)
    }

    #[test]
    fn test_left_click_on_index_thumb_pinch() {
        let mut classifier = GestureClassifier::with_defaults();
        let event = classifier
            .classify(&pinch_hand(lm::THUMB_TIP, lm::INDEX_TIP, 0.03), 0)
            .unwrap();
        assert_eq!(event, Some(GestureEvent::LeftClick));
    }

    #[test]
    fn test_right_click_on_middle_thumb_pinch() {
        let mut classifier = GestureClassifier::with_defaults();
        let event = classifier
            .classify(&pinch_hand(lm::THUMB_TIP, lm::MIDDLE_TIP, 0.03), 0)
            .unwrap();
        assert_eq!(event, Some(GestureEvent::RightClick));
    }

    #[test]
    fn test_click_cooldown_suppresses_then_refires() {
        let mut classifier = GestureClassifier::with_defaults();
        let pinched = pinch_hand(lm::THUMB_TIP, lm::INDEX_TIP, 0.03);

        assert_eq!(
            classifier.classify(&pinched, 0).unwrap(),
            Some(GestureEvent::LeftClick)
        );
        // Held pinch 50ms later: still inside the cooldown window.
        assert_eq!(classifier.classify(&pinched, 50_000_000).unwrap(), None);
        // 250ms later: the elapsed-time guard lets it fire again without
        // the fingers ever separating.
        assert_eq!(
            classifier.classify(&pinched, 250_000_000).unwrap(),
            Some(GestureEvent::LeftClick)
        );
    }

    #[test]
    fn test_click_wins_over_drag_start() {
        // Index-thumb and index-middle both under their thresholds: the
        // fixed rule order must always resolve to LeftClick.
        let mut points = open_hand_points();
        points[lm::INDEX_TIP] = Point2D::new(0.46, 0.35);
        points[lm::THUMB_TIP] = Point2D::new(0.46 + 0.03, 0.35);
        points[lm::MIDDLE_TIP] = Point2D::new(0.46, 0.35 + 0.04);
        let mut classifier = GestureClassifier::with_defaults();
        let event = classifier.classify(&hand(points), 0).unwrap();
        assert_eq!(event, Some(GestureEvent::LeftClick));
        assert!(!classifier.is_dragging());
    }

    #[test]
    fn test_drag_hysteresis_sequence() {
        let mut classifier = GestureClassifier::with_defaults();
        let sequence = [
            (0.045, Some(GestureEvent::DragStart)),
            (0.055, None), // between start and end thresholds: hold
            (0.070, Some(GestureEvent::DragEnd)),
        ];
        for (i, (distance, expected)) in sequence.iter().enumerate() {
            let h = pinch_hand(lm::INDEX_TIP, lm::MIDDLE_TIP, *distance);
            let event = classifier
                .classify(&h, i as u64 * 33_000_000)
                .unwrap();
            assert_eq!(event, *expected, "tick {i} at distance {distance}");
        }
        assert!(!classifier.is_dragging());
    }

    #[test]
    fn test_scroll_up_and_down() {
        let mut classifier = GestureClassifier::with_defaults();

        // Thumb raised above its IP joint, index curled below its PIP.
        let mut points = open_hand_points();
        points[lm::INDEX_TIP] = Point2D::new(0.46, 0.6);
        let event = classifier.classify(&hand(points), 0).unwrap();
        assert_eq!(event, Some(GestureEvent::ScrollUp { amount: 50 }));

        // Thumb dropped below its IP joint, index extended.
        let mut points = open_hand_points();
        points[lm::THUMB_TIP] = Point2D::new(0.36, 0.7);
        let event = classifier.classify(&hand(points), 33_000_000).unwrap();
        assert_eq!(event, Some(GestureEvent::ScrollDown { amount: -50 }));
    }

    #[test]
    fn test_tracking_pause_is_sticky() {
        let mut classifier = GestureClassifier::with_defaults();

        let event = classifier.classify(&curled_hand(), 0).unwrap();
        assert_eq!(event, Some(GestureEvent::TrackingPaused));
        assert!(!classifier.tracking_enabled());

        // Still curled: no repeat event, latch stays off.
        assert_eq!(classifier.classify(&curled_hand(), 33_000_000).unwrap(), None);

        // Fingers uncurl into a clickable pose: still paused, nothing fires.
        let pinched = pinch_hand(lm::THUMB_TIP, lm::INDEX_TIP, 0.03);
        assert_eq!(classifier.classify(&pinched, 66_000_000).unwrap(), None);
        assert!(!classifier.tracking_enabled());

        // Only the explicit external call re-enables.
        classifier.resume_tracking();
        assert!(classifier.tracking_enabled());
        assert_eq!(
            classifier.classify(&pinched, 99_000_000).unwrap(),
            Some(GestureEvent::LeftClick)
        );
    }

    #[test]
    fn test_open_hand_emits_nothing() {
        let mut classifier = GestureClassifier::with_defaults();
        let event = classifier.classify(&hand(open_hand_points()), 0).unwrap();
        assert_eq!(event, None);
        assert!(classifier.tracking_enabled());
        assert!(!classifier.is_dragging());
    }
}
