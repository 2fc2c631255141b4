//! Gesture events and pointer commands emitted by the pipeline.
//!
//! At most one gesture event is produced per tick per tracked hand; ties
//! between simultaneously satisfied gestures are broken by the classifier's
//! fixed rule order.

use serde::{Deserialize, Serialize};

/// A discrete gesture recognized on one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Index-thumb pinch.
    LeftClick,

    /// Middle-thumb pinch.
    RightClick,

    /// Index and middle fingers brought together.
    DragStart,

    /// Index and middle fingers separated while dragging.
    DragEnd,

    /// Thumb raised, index curled.
    ScrollUp {
        /// Scroll magnitude in injector units (positive).
        amount: i32,
    },

    /// Thumb lowered, index raised.
    ScrollDown {
        /// Scroll magnitude in injector units (negative).
        amount: i32,
    },

    /// All four fingers curled: pointer tracking latched off.
    TrackingPaused,
}

/// A pointer movement request for the external injector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerCommand {
    /// Move the cursor to an absolute pixel position.
    MoveTo { x: f64, y: f64 },

    /// Move the cursor by a delta from wherever it currently is.
    MoveBy { dx: f64, dy: f64 },
}

/// Everything the pipeline produces for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TickOutput {
    /// Where to move the pointer, if tracking produced a target.
    pub pointer: Option<PointerCommand>,

    /// The gesture recognized this tick, if any.
    pub gesture: Option<GestureEvent>,
}

impl TickOutput {
    /// A tick that produced nothing (e.g. zero hands detected).
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this tick produced neither movement nor gesture.
    pub fn is_empty(&self) -> bool {
        self.pointer.is_none() && self.gesture.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_event_roundtrip() {
        let events = [
            GestureEvent::LeftClick,
            GestureEvent::ScrollUp { amount: 50 },
            GestureEvent::TrackingPaused,
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let parsed: GestureEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }

    #[test]
    fn test_pointer_command_json_format() {
        let cmd = PointerCommand::MoveTo { x: 960.0, y: 540.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"move_to\""));

        let cmd = PointerCommand::MoveBy { dx: 8.0, dy: 0.0 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"move_by\""));
    }

    #[test]
    fn test_empty_tick_output() {
        let out = TickOutput::none();
        assert!(out.is_empty());
        assert!(out.pointer.is_none());
        assert!(out.gesture.is_none());
    }
}
