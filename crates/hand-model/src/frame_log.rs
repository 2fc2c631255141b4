//! Frame log serialization for record/replay drivers.
//!
//! Landmark frames are stored in append-only JSONL format: a `#`-prefixed
//! header comment line followed by one frame per line. The format lets any
//! driver (live loop, test harness, replay tool) feed the pipeline the same
//! data.

use serde::{Deserialize, Serialize};

use crate::landmark::HandFrame;

/// Stream metadata written as the first (comment) line of a frame log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at session start (ISO 8601).
    pub epoch_wall: String,

    /// Target screen dimensions at recording time (pixels).
    pub screen_width: u32,
    pub screen_height: u32,

    /// Nominal detector frame rate (Hz).
    pub sample_rate_hz: u32,
}

/// Parse frames from JSONL content (one JSON object per line).
pub fn parse_frames(jsonl: &str) -> Result<Vec<HandFrame>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Parse the header comment line of a frame log, if present.
pub fn parse_header(jsonl: &str) -> Option<FrameStreamHeader> {
    let first = jsonl.lines().next()?.trim();
    let payload = first.strip_prefix('#')?.trim();
    serde_json::from_str(payload).ok()
}

/// Serialize frames to JSONL format, prefixed with a header comment line.
pub fn serialize_frames(
    header: &FrameStreamHeader,
    frames: &[HandFrame],
) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    output.push_str("# ");
    output.push_str(&serde_json::to_string(header)?);
    output.push('\n');
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
