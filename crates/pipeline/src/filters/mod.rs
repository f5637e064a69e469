//! File test implementations for the pipeline.
//!
//! This module contains the concrete file tests that can be composed into a
//! FileTestPipeline.

pub mod resolution;

// Re-export for convenience
pub use resolution::{ResolutionFileTest, RESOLUTION_ISSUE_ID};
