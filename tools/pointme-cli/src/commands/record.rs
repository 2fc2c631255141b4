//! Generate a synthetic frame log with scripted hand motion.
//!
//! The workspace has no camera or detector; this command stands in for one
//! so the replay pipeline can be exercised end to end and demo logs can be
//! produced deterministically.

use std::path::PathBuf;

use pointme_hand_model::frame_log::{serialize_frames, FrameStreamHeader};
use pointme_hand_model::geometry::Point2D;
use pointme_hand_model::landmark::{landmark_index as lm, HandFrame, HandLandmarks, LANDMARK_COUNT};

pub fn run(
    path: PathBuf,
    script: String,
    frames: usize,
    fps: u32,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    let generated = match script.as_str() {
        "sweep" => generate(frames, fps, |i, n| sweep_hand(i, n)),
        "clicks" => generate(frames, fps, |i, n| clicks_hand(i, n)),
        "mixed" => generate(frames, fps, |i, n| mixed_hand(i, n)),
        other => anyhow::bail!("Unknown script: {other} (expected sweep|clicks|mixed)"),
    };

    let header = FrameStreamHeader {
        schema_version: "1.0".to_string(),
        epoch_wall: chrono::Utc::now().to_rfc3339(),
        screen_width: width,
        screen_height: height,
        sample_rate_hz: fps,
    };

    let jsonl = serialize_frames(&header, &generated)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, jsonl)?;

    println!(
        "Wrote {} frames ({script} script, {fps} Hz) to {}",
        generated.len(),
        path.display()
    );
    Ok(())
}

fn generate(
    frames: usize,
    fps: u32,
    hand_at: impl Fn(usize, usize) -> Option<HandLandmarks>,
) -> Vec<HandFrame> {
    let interval_ns = 1_000_000_000u64 / fps.max(1) as u64;
    (0..frames)
        .map(|i| {
            let t = i as u64 * interval_ns;
            match hand_at(i, frames) {
                Some(hand) => HandFrame::new(t, vec![hand]),
                None => HandFrame::empty(t),
            }
        })
        .collect()
}

/// Open hand whose index tip traces a slow horizontal sine sweep.
fn sweep_hand(i: usize, n: usize) -> Option<HandLandmarks> {
    let phase = i as f64 / n.max(1) as f64 * std::f64::consts::TAU;
    let tip = Point2D::new(0.5 + 0.3 * phase.sin(), 0.4 + 0.1 * (2.0 * phase).cos());
    Some(open_hand(tip))
}

/// Steady hand that pinches for a few frames once per second at 30 Hz.
fn clicks_hand(i: usize, _n: usize) -> Option<HandLandmarks> {
    let tip = Point2D::new(0.45, 0.35);
    if i % 30 < 4 && i > 0 {
        Some(pinched_hand(tip))
    } else {
        Some(open_hand(tip))
    }
}

/// Sweep, then a click burst, then a drag stretch, then hand loss, then a
/// final fist to exercise the pause latch.
fn mixed_hand(i: usize, n: usize) -> Option<HandLandmarks> {
    let segment = i * 5 / n.max(1);
    match segment {
        0 | 1 => sweep_hand(i, n),
        2 => clicks_hand(i, n),
        3 => {
            if i % 10 < 6 {
                Some(dragging_hand(Point2D::new(0.4 + i as f64 / n as f64 * 0.2, 0.4)))
            } else {
                sweep_hand(i, n)
            }
        }
        _ => {
            if i % 20 < 3 {
                None // brief hand loss
            } else if i >= n - 5 {
                Some(fist_hand())
            } else {
                sweep_hand(i, n)
            }
        }
    }
}

fn open_hand(index_tip: Point2D) -> HandLandmarks {
    let mut points = vec![Point2D::new(0.5, 0.9); LANDMARK_COUNT];
    points[lm::WRIST] = Point2D::new(0.5, 0.95);
    points[lm::THUMB_IP] = Point2D::new(0.38, 0.62);
    points[lm::THUMB_TIP] = Point2D::new(0.36, 0.55);
    points[lm::INDEX_PIP] = Point2D::new(index_tip.x, index_tip.y + 0.15);
    points[lm::INDEX_TIP] = index_tip;
    points[lm::MIDDLE_PIP] = Point2D::new(index_tip.x + 0.06, index_tip.y + 0.16);
    points[lm::MIDDLE_TIP] = Point2D::new(index_tip.x + 0.12, index_tip.y + 0.02);
    points[lm::RING_PIP] = Point2D::new(index_tip.x + 0.12, index_tip.y + 0.18);
    points[lm::RING_TIP] = Point2D::new(index_tip.x + 0.18, index_tip.y + 0.05);
    points[lm::PINKY_PIP] = Point2D::new(index_tip.x + 0.18, index_tip.y + 0.2);
    points[lm::PINKY_TIP] = Point2D::new(index_tip.x + 0.24, index_tip.y + 0.08);
    HandLandmarks::new(points).unwrap()
}

fn pinched_hand(index_tip: Point2D) -> HandLandmarks {
    let mut points: Vec<Point2D> = open_hand(index_tip).points().to_vec();
    points[lm::THUMB_TIP] = Point2D::new(index_tip.x + 0.02, index_tip.y + 0.02);
    HandLandmarks::new(points).unwrap()
}

fn dragging_hand(index_tip: Point2D) -> HandLandmarks {
    let mut points: Vec<Point2D> = open_hand(index_tip).points().to_vec();
    points[lm::MIDDLE_TIP] = Point2D::new(index_tip.x + 0.04, index_tip.y);
    points[lm::MIDDLE_PIP] = Point2D::new(index_tip.x + 0.04, index_tip.y + 0.15);
    HandLandmarks::new(points).unwrap()
}

fn fist_hand() -> HandLandmarks {
    let mut points = vec![Point2D::new(0.5, 0.8); LANDMARK_COUNT];
    points[lm::THUMB_IP] = Point2D::new(0.42, 0.6);
    points[lm::THUMB_TIP] = Point2D::new(0.44, 0.65);
    for (tip, pip) in [
        (lm::INDEX_TIP, lm::INDEX_PIP),
        (lm::MIDDLE_TIP, lm::MIDDLE_PIP),
        (lm::RING_TIP, lm::RING_PIP),
        (lm::PINKY_TIP, lm::PINKY_PIP),
    ] {
        points[pip] = Point2D::new(0.5, 0.5);
        points[tip] = Point2D::new(0.5, 0.58);
    }
    HandLandmarks::new(points).unwrap()
}
