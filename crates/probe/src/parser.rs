//! Parser for ffprobe JSON output.
//!
//! Expected input is the output of
//! `ffprobe -select_streams v:0 -show_entries stream=width,height -of json`:
//! ```json
//! { "programs": [], "streams": [ { "width": 1920, "height": 1080 } ] }
//! ```
//! Only the first stream is read.

use crate::error::{ProbeError, Result};
use crate::types::Resolution;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    width: Option<i64>,
    height: Option<i64>,
}

/// Extract the first video stream's resolution from ffprobe JSON output.
pub fn parse_ffprobe_output(bytes: &[u8]) -> Result<Resolution> {
    let output: FfprobeOutput = serde_json::from_slice(bytes)?;
    let stream = output.streams.first().ok_or(ProbeError::NoVideoStream)?;

    let width = dimension("width", stream.width)?;
    let height = dimension("height", stream.height)?;

    Ok(Resolution::new(width, height))
}

fn dimension(field: &'static str, value: Option<i64>) -> Result<u32> {
    let value = value.ok_or(ProbeError::MissingField(field))?;
    u32::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or(ProbeError::InvalidDimension { field, value })
}
