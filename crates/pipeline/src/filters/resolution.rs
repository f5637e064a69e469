//! File test that excludes videos whose resolution is outside the limits.
//!
//! Files that cannot be probed (not a video, no video stream, probe tool
//! missing) are left alone: this test neither accepts nor rejects them.

use crate::bounds::{evaluate, violations, MatchPolicy};
use crate::task::{FileTestTask, Issue};
use crate::traits::FileTest;
use anyhow::{Context, Result};
use probe::Prober;
use settings::SettingsProvider;
use std::sync::Arc;

/// Issue id recorded when a file is excluded by resolution.
pub const RESOLUTION_ISSUE_ID: &str = "Limit library search by video resolution";

/// Excludes files whose first video stream is outside the configured bounds.
///
/// ## Algorithm
/// 1. Resolve settings for the task's library (once per call)
/// 2. Probe the file; on any probe failure return without changes
/// 3. Evaluate the bounds under the configured policy
/// 4. On rejection clear `add_file_to_pending_tasks` and append one issue
pub struct ResolutionFileTest {
    settings: Arc<dyn SettingsProvider>,
    prober: Arc<dyn Prober>,
}

impl ResolutionFileTest {
    /// Create a new ResolutionFileTest.
    ///
    /// # Arguments
    /// * `settings` - Where bounds and policy are read from on every call
    /// * `prober` - Measures the file's first video stream
    pub fn new(settings: Arc<dyn SettingsProvider>, prober: Arc<dyn Prober>) -> Self {
        Self { settings, prober }
    }
}

impl FileTest for ResolutionFileTest {
    fn name(&self) -> &str {
        "ResolutionFileTest"
    }

    fn on_file_test(&self, task: &mut FileTestTask) -> Result<()> {
        let settings = self
            .settings
            .resolution_settings(task.library_id)
            .with_context(|| match task.library_id {
                Some(id) => format!("Failed to resolve resolution settings for library {}", id),
                None => "Failed to resolve global resolution settings".to_string(),
            })?;

        let resolution = match self.prober.probe_resolution(&task.path) {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", task.path.display(), e);
                return Ok(());
            }
        };

        if evaluate(&settings.bounds, resolution, MatchPolicy::from(&settings)) {
            tracing::debug!("{} ({}) is within limits", task.path.display(), resolution);
            return Ok(());
        }

        tracing::debug!(
            "{} ({}) is outside limits, violated: {:?}",
            task.path.display(),
            resolution,
            violations(&settings.bounds, resolution)
        );
        let message = format!(
            "Video resolution of file \"{}\" is outside the limit of \"{}\".",
            task.path.display(),
            resolution
        );
        task.reject(Issue::new(RESOLUTION_ISSUE_ID, message));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe::{ProbeError, Resolution};
    use settings::{ResolutionBounds, ResolutionSettings, SettingsIndex};
    use std::path::Path;

    struct FixedProber(Option<Resolution>);

    impl Prober for FixedProber {
        fn probe_resolution(&self, _path: &Path) -> probe::Result<Resolution> {
            self.0.ok_or(ProbeError::NoVideoStream)
        }
    }

    fn hd_minimum(every_condition_must_be_true: bool) -> Arc<SettingsIndex> {
        Arc::new(SettingsIndex::new(ResolutionSettings {
            bounds: ResolutionBounds {
                min_width: 1280,
                min_height: 720,
                ..Default::default()
            },
            every_condition_must_be_true,
        }))
    }

    fn file_test(settings: Arc<SettingsIndex>, probed: Option<Resolution>) -> ResolutionFileTest {
        ResolutionFileTest::new(settings, Arc::new(FixedProber(probed)))
    }

    #[test]
    fn test_accepts_within_limits() {
        let test = file_test(hd_minimum(true), Some(Resolution::new(1920, 1080)));
        let mut task = FileTestTask::new("/media/movie.mkv");

        test.on_file_test(&mut task).unwrap();

        assert_eq!(task, FileTestTask::new("/media/movie.mkv"));
    }

    #[test]
    fn test_rejects_outside_limits() {
        let test = file_test(hd_minimum(true), Some(Resolution::new(640, 480)));
        let mut task = FileTestTask::new("/media/old.avi");

        test.on_file_test(&mut task).unwrap();

        assert!(!task.add_file_to_pending_tasks);
        assert_eq!(
            task.issues,
            vec![Issue::new(
                RESOLUTION_ISSUE_ID,
                "Video resolution of file \"/media/old.avi\" is outside the limit of \"640x480\"."
            )]
        );
    }

    #[test]
    fn test_probe_failure_is_silent() {
        let test = file_test(hd_minimum(true), None);
        let mut task = FileTestTask::new("/media/cover.jpg");
        task.add_file_to_pending_tasks = false;

        test.on_file_test(&mut task).unwrap();

        assert!(!task.add_file_to_pending_tasks);
        assert!(task.issues.is_empty());
    }

    #[test]
    fn test_lenient_policy_accepts_one_satisfied_bound() {
        // Width meets the minimum, height does not
        let test = file_test(hd_minimum(false), Some(Resolution::new(1280, 536)));
        let mut task = FileTestTask::new("/media/scope.mkv");

        test.on_file_test(&mut task).unwrap();

        assert!(task.add_file_to_pending_tasks);
        assert!(task.issues.is_empty());
    }
}
