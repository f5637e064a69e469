//! Pipeline for testing library files before they are queued for processing.
//!
//! This crate provides:
//! - FileTestTask, the per-file record shared by all file tests
//! - FileTest trait and implementations
//! - FileTestPipeline for composing file tests
//! - The bounds evaluator deciding whether a resolution is within limits
//!
//! ## Architecture
//! For each file:
//! 1. A FileTestTask is created (eligible, no issues)
//! 2. Each FileTest inspects the file and may exclude it with an Issue
//! 3. The caller queues the file if it is still eligible
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FileTestPipeline, FileTestTask};
//! use pipeline::filters::ResolutionFileTest;
//!
//! let pipeline = FileTestPipeline::new()
//!     .add_test(ResolutionFileTest::new(settings.clone(), prober.clone()));
//!
//! let task = pipeline.apply(FileTestTask::new(path).with_library(2))?;
//! if task.add_file_to_pending_tasks {
//!     queue.push(task.path);
//! }
//! ```

pub mod traits;
pub mod task;
pub mod bounds;
pub mod filters;
pub mod file_test_pipeline;

// Re-export main types
pub use traits::FileTest;
pub use task::{FileTestTask, Issue};
pub use bounds::{evaluate, violations, MatchPolicy};
pub use file_test_pipeline::FileTestPipeline;
