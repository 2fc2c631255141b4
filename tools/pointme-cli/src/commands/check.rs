//! Show resolved configuration and pipeline defaults.

use pointme_common::config::AppConfig;
use pointme_gesture_core::PipelineConfig;

pub fn run() -> anyhow::Result<()> {
    let app = AppConfig::load();
    let pipeline = PipelineConfig::default();

    println!("Application config:");
    println!("  Pointer mode: {}", app.pointer_mode);
    println!("  Screen: {}x{}", app.screen.width, app.screen.height);
    println!("  Log level: {}", app.logging.level);
    println!();

    println!("Pipeline defaults:");
    println!(
        "  Filter: min_cutoff={} Hz, beta={}, derivative_cutoff={} Hz, initial_freq={} Hz",
        pipeline.filter.min_cutoff,
        pipeline.filter.beta,
        pipeline.filter.derivative_cutoff,
        pipeline.filter.initial_freq_hz
    );
    println!(
        "  Gestures: click<{}, drag_start<{}, drag_end>{}, cooldown={}ms, scroll={}",
        pipeline.gestures.click_distance,
        pipeline.gestures.drag_start_distance,
        pipeline.gestures.drag_end_distance,
        pipeline.gestures.cooldown_ms,
        pipeline.gestures.scroll_amount
    );
    println!(
        "  Relative: dead_zone={}px, smooth_factor={}, move_scale={}",
        pipeline.relative.dead_zone, pipeline.relative.smooth_factor, pipeline.relative.move_scale
    );

    Ok(())
}
