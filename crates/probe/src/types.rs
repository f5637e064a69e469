//! Measurement types produced by probing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame dimensions of a video stream, in pixels.
///
/// Probers only hand out resolutions with both dimensions positive; zero is
/// reserved as the "disabled" sentinel on the bounds side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
