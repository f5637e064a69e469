//! Core traits for the file test pipeline.
//!
//! This module defines the FileTest trait that lets independent checks
//! decide whether a file should be queued for processing.

use crate::task::FileTestTask;
use anyhow::Result;

/// Core trait for file tests.
///
/// All file tests must implement this trait to be used in the FileTestPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows one test instance to be shared across worker threads
/// - Tests mutate the task in place; a test that does not apply to a file
///   leaves the task untouched
pub trait FileTest: Send + Sync {
    /// Returns the name of this file test (for logging/debugging)
    fn name(&self) -> &str;

    /// Run this test against one task.
    ///
    /// # Arguments
    /// * `task` - The task record for the file under consideration
    ///
    /// # Returns
    /// * `Ok(())` - The test ran (the task may or may not have been changed)
    /// * `Err` - The test could not run, e.g. its configuration is invalid
    fn on_file_test(&self, task: &mut FileTestTask) -> Result<()>;
}
