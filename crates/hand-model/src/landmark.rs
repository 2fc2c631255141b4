//! Hand landmark collections as reported by an external detector.
//!
//! A detected hand is a fixed, ordered set of 21 anatomical points in
//! normalized coordinates. The detector contract guarantees all 21 entries
//! for every reported hand; a short or long collection is rejected at
//! construction so downstream code can index by fixed anatomical position.

use serde::{Deserialize, Serialize};

use pointme_common::error::{PointmeError, PointmeResult};

use crate::geometry::Point2D;

/// Fixed anatomical landmark indices (MediaPipe hand topology).
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_PIP: usize = 14;
    pub const RING_TIP: usize = 16;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_TIP: usize = 20;
}

/// Number of landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// One detected hand: exactly 21 landmarks in anatomical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct HandLandmarks {
    points: Vec<Point2D>,
}

impl HandLandmarks {
    /// Build a hand from exactly 21 points.
    pub fn new(points: Vec<Point2D>) -> PointmeResult<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(PointmeError::landmark(format!(
                "expected {} landmarks, detector reported {}",
                LANDMARK_COUNT,
                points.len()
            )));
        }
        Ok(Self { points })
    }

    /// Look up a landmark by its fixed anatomical index.
    pub fn point(&self, index: usize) -> PointmeResult<Point2D> {
        self.points.get(index).copied().ok_or_else(|| {
            PointmeError::landmark(format!("landmark index {index} out of range"))
        })
    }

    /// Euclidean distance between two landmarks, in normalized coordinates.
    pub fn distance(&self, a: usize, b: usize) -> PointmeResult<f64> {
        let pa = self.point(a)?;
        let pb = self.point(b)?;
        Ok(pa.distance_to(&pb))
    }

    /// All 21 points in anatomical order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }
}

impl TryFrom<Vec<Point2D>> for HandLandmarks {
    type Error = String;

    fn try_from(points: Vec<Point2D>) -> Result<Self, Self::Error> {
        Self::new(points).map_err(|e| e.to_string())
    }
}

impl From<HandLandmarks> for Vec<Point2D> {
    fn from(hand: HandLandmarks) -> Self {
        hand.points
    }
}

/// One tick's detection result: a monotonic timestamp plus zero or more hands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandFrame {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: u64,

    /// Detected hands, in detector order. May be empty.
    pub hands: Vec<HandLandmarks>,
}

impl HandFrame {
    /// Create a frame with the given hands.
    pub fn new(timestamp_ns: u64, hands: Vec<HandLandmarks>) -> Self {
        Self {
            timestamp_ns,
            hands,
        }
    }

    /// Create an empty (no hands detected) frame.
    pub fn empty(timestamp_ns: u64) -> Self {
        Self {
            timestamp_ns,
            hands: vec![],
        }
    }

    /// Timestamp as fractional seconds since session start.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000_000.0
    }

    /// The first detected hand, if any. Single-hand mode is the supported
    /// contract; additional hands are ignored by the pipeline.
    pub fn primary_hand(&self) -> Option<&HandLandmarks> {
        self.hands.first()
    }
}
