//! Show frame-log information.

use std::path::PathBuf;

use pointme_hand_model::frame_log::{parse_frames, parse_header};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|_| anyhow::anyhow!("Frame log not found: {}", path.display()))?;

    let frames =
        parse_frames(&content).map_err(|e| anyhow::anyhow!("Failed to parse frames: {e}"))?;

    println!("Frame log: {}", path.display());

    match parse_header(&content) {
        Some(header) => {
            println!("  Schema: {}", header.schema_version);
            println!("  Recorded: {}", header.epoch_wall);
            println!(
                "  Screen: {}x{} @ {} Hz",
                header.screen_width, header.screen_height, header.sample_rate_hz
            );
        }
        None => println!("  (no header line)"),
    }

    println!("  Frames: {}", frames.len());

    if let (Some(first), Some(last)) = (frames.first(), frames.last()) {
        let duration = last.timestamp_secs() - first.timestamp_secs();
        println!("  Duration: {duration:.1}s");
    }

    let with_hands = frames.iter().filter(|f| !f.hands.is_empty()).count();
    let multi_hand = frames.iter().filter(|f| f.hands.len() > 1).count();
    println!(
        "  Hand coverage: {with_hands}/{} frames ({multi_hand} multi-hand)",
        frames.len()
    );

    let monotonic = frames
        .windows(2)
        .all(|pair| pair[1].timestamp_ns >= pair[0].timestamp_ns);
    println!("  Timestamps monotonic: {monotonic}");

    Ok(())
}
