//! # Probe Crate
//!
//! Extracts the frame resolution of a file's first video stream.
//!
//! ## Components
//!
//! - **Prober**: trait implemented by anything that can measure a file
//! - **FfprobeProber**: runs `ffprobe` and parses its JSON output
//! - **parser**: ffprobe JSON to `Resolution`, usable without spawning anything
//!
//! Any failure (missing binary, non-media file, no video stream, odd output)
//! comes back as a [`ProbeError`]; callers treat all of them as "not a video".
//!
//! ## Example Usage
//!
//! ```ignore
//! use probe::{FfprobeProber, Prober};
//! use std::path::Path;
//!
//! let prober = FfprobeProber::new();
//! match prober.probe_resolution(Path::new("movie.mkv")) {
//!     Ok(resolution) => println!("{}", resolution),
//!     Err(e) => println!("not a video: {}", e),
//! }
//! ```

use std::path::Path;

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod ffprobe;

// Re-export commonly used types
pub use error::{ProbeError, Result};
pub use types::Resolution;
pub use parser::parse_ffprobe_output;
pub use ffprobe::FfprobeProber;

/// Something that can measure the resolution of a file's first video stream.
///
/// `Send + Sync` so one prober can serve file tests on several threads.
pub trait Prober: Send + Sync {
    /// Probe `path` for the width and height of its first video stream.
    fn probe_resolution(&self, path: &Path) -> Result<Resolution>;
}
