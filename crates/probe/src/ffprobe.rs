//! Resolution probing via the `ffprobe` command-line tool.

use crate::Prober;
use crate::error::{ProbeError, Result};
use crate::parser::parse_ffprobe_output;
use crate::types::Resolution;
use std::path::Path;
use std::process::Command;

/// Default program name, looked up on `PATH`.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Probes files by running ffprobe and parsing its JSON output.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: String,
}

impl FfprobeProber {
    /// Create a prober that runs `ffprobe` from `PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_FFPROBE)
    }

    /// Create a prober that runs a specific ffprobe binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober for FfprobeProber {
    fn probe_resolution(&self, path: &Path) -> Result<Resolution> {
        let output = Command::new(&self.program)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height",
                "-of",
                "json",
                "-i",
            ])
            .arg(path)
            .output()
            .map_err(|source| ProbeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::ExitStatus {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let resolution = parse_ffprobe_output(&output.stdout)?;
        tracing::trace!("Probed {} as {}", path.display(), resolution);
        Ok(resolution)
    }
}
