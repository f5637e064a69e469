//! The FileTestPipeline runs file tests in order against one task.
//!
//! This plays the host's role: it owns the ordered list of file tests and
//! hands each one the same task record.

use crate::task::FileTestTask;
use crate::traits::FileTest;
use anyhow::{Context, Result};

/// Chains multiple file tests together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FileTestPipeline::new()
///     .add_test(ResolutionFileTest::new(settings, prober));
///
/// let task = pipeline.apply(FileTestTask::new("/media/movie.mkv"))?;
/// ```
pub struct FileTestPipeline {
    tests: Vec<Box<dyn FileTest>>,
}

impl FileTestPipeline {
    /// Create a new empty FileTestPipeline.
    pub fn new() -> Self {
        Self { tests: Vec::new() }
    }

    /// Add a file test to the pipeline (builder pattern).
    pub fn add_test(mut self, test: impl FileTest + 'static) -> Self {
        self.tests.push(Box::new(test));
        self
    }

    /// Number of file tests in the pipeline.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Run every file test, in order, against the task.
    ///
    /// ## Algorithm
    /// 1. For each file test in order:
    ///    a. Run it against the task
    ///    b. Log the eligibility flag and issue count afterwards
    /// 2. Return the task
    ///
    /// Every test runs even after an earlier one has cleared
    /// `add_file_to_pending_tasks`, so all reasons end up in `issues`.
    ///
    /// # Returns
    /// * `Ok(FileTestTask)` - The task after all tests ran
    /// * `Err` - If any file test could not run
    pub fn apply(&self, mut task: FileTestTask) -> Result<FileTestTask> {
        for test in &self.tests {
            test.on_file_test(&mut task)
                .with_context(|| format!("{} failed on {}", test.name(), task.path.display()))?;
            tracing::debug!(
                "File test applied: {} (eligible: {}, issues: {})",
                test.name(),
                task.add_file_to_pending_tasks,
                task.issues.len()
            );
        }
        Ok(task)
    }
}

impl Default for FileTestPipeline {
    fn default() -> Self {
        Self::new()
    }
}
