//! Replay a recorded frame log through the gesture pipeline.

use std::path::PathBuf;

use pointme_gesture_core::{FilterConfig, Pipeline, PipelineConfig, PointerMode};
use pointme_hand_model::event::{GestureEvent, PointerCommand};
use pointme_hand_model::frame_log::{parse_frames, parse_header};
use pointme_hand_model::geometry::ScreenDimensions;

pub fn run(
    path: PathBuf,
    mode: String,
    show_pointer: bool,
    auto_resume: bool,
    min_cutoff: f64,
    beta: f64,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Frame log not found: {}", path.display()))?;

    let header = parse_header(&content);
    let frames =
        parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse frames: {e}"))?;

    let mode = match mode.as_str() {
        "absolute" => PointerMode::Absolute,
        "relative" => PointerMode::Relative,
        other => anyhow::bail!("Unknown pointer mode: {other} (expected absolute|relative)"),
    };

    let screen = header
        .as_ref()
        .map(|h| ScreenDimensions::new(h.screen_width, h.screen_height))
        .unwrap_or(ScreenDimensions::new(1920, 1080));

    let config = PipelineConfig {
        mode,
        screen,
        filter: FilterConfig {
            min_cutoff,
            beta,
            ..Default::default()
        },
        ..Default::default()
    };

    println!(
        "Replaying {} frames ({mode:?} mode, {}x{})...",
        frames.len(),
        screen.width,
        screen.height
    );

    let mut pipeline = Pipeline::new(config);
    let mut pointer_commands = 0u64;
    let mut gesture_counts = GestureCounts::default();

    for frame in &frames {
        let output = pipeline.tick(frame)?;

        if let Some(gesture) = output.gesture {
            gesture_counts.count(gesture);
            println!("  [{:>8.3}s] gesture: {}", frame.timestamp_secs(), describe(gesture));

            if auto_resume && gesture == GestureEvent::TrackingPaused {
                pipeline.resume_tracking();
                println!("  [{:>8.3}s] tracking resumed (--auto-resume)", frame.timestamp_secs());
            }
        }

        if let Some(pointer) = output.pointer {
            pointer_commands += 1;
            if show_pointer {
                match pointer {
                    PointerCommand::MoveTo { x, y } => {
                        println!("  [{:>8.3}s] pointer: move_to ({x:.1}, {y:.1})", frame.timestamp_secs());
                    }
                    PointerCommand::MoveBy { dx, dy } => {
                        println!("  [{:>8.3}s] pointer: move_by ({dx:.1}, {dy:.1})", frame.timestamp_secs());
                    }
                }
            }
        }
    }

    println!();
    println!("Replay complete.");
    println!("  Ticks: {}", pipeline.ticks());
    println!("  Pointer commands: {pointer_commands}");
    println!("  Left clicks: {}", gesture_counts.left_clicks);
    println!("  Right clicks: {}", gesture_counts.right_clicks);
    println!("  Drags: {}", gesture_counts.drag_starts);
    println!("  Scroll events: {}", gesture_counts.scrolls);
    println!("  Tracking pauses: {}", gesture_counts.pauses);
    println!(
        "  Final state: tracking={}, dragging={}",
        pipeline.tracking_enabled(),
        pipeline.is_dragging()
    );

    Ok(())
}

#[derive(Default)]
struct GestureCounts {
    left_clicks: u64,
    right_clicks: u64,
    drag_starts: u64,
    scrolls: u64,
    pauses: u64,
}

impl GestureCounts {
    fn count(&mut self, gesture: GestureEvent) {
        match gesture {
            GestureEvent::LeftClick => self.left_clicks += 1,
            GestureEvent::RightClick => self.right_clicks += 1,
            GestureEvent::DragStart => self.drag_starts += 1,
            GestureEvent::DragEnd => {}
            GestureEvent::ScrollUp { .. } | GestureEvent::ScrollDown { .. } => self.scrolls += 1,
            GestureEvent::TrackingPaused => self.pauses += 1,
        }
    }
}

fn describe(gesture: GestureEvent) -> String {
    match gesture {
        GestureEvent::LeftClick => "left_click".to_string(),
        GestureEvent::RightClick => "right_click".to_string(),
        GestureEvent::DragStart => "drag_start".to_string(),
        GestureEvent::DragEnd => "drag_end".to_string(),
        GestureEvent::ScrollUp { amount } => format!("scroll_up ({amount})"),
        GestureEvent::ScrollDown { amount } => format!("scroll_down ({amount})"),
        GestureEvent::TrackingPaused => "tracking_paused".to_string(),
    }
}
