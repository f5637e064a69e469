//! Integration tests for the pipeline.
//!
//! These tests run the resolution file test through a FileTestPipeline with
//! a stub prober and real settings providers.

use pipeline::filters::{ResolutionFileTest, RESOLUTION_ISSUE_ID};
use pipeline::{FileTestPipeline, FileTestTask, Issue};
use probe::{ProbeError, Prober, Resolution};
use settings::{
    FileSettingsProvider, ResolutionBounds, ResolutionSettings, SettingsIndex, SettingsProvider,
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Prober answering from a fixed table; unknown paths are "not a video".
struct TableProber {
    resolutions: HashMap<PathBuf, Resolution>,
}

impl TableProber {
    fn new(entries: &[(&str, u32, u32)]) -> Self {
        Self {
            resolutions: entries
                .iter()
                .map(|&(path, width, height)| (PathBuf::from(path), Resolution::new(width, height)))
                .collect(),
        }
    }
}

impl Prober for TableProber {
    fn probe_resolution(&self, path: &Path) -> probe::Result<Resolution> {
        self.resolutions.get(path).copied().ok_or_else(|| ProbeError::ExitStatus {
            program: "ffprobe".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "Invalid data found when processing input".to_string(),
        })
    }
}

fn create_test_prober() -> Arc<TableProber> {
    Arc::new(TableProber::new(&[
        ("/media/hd.mkv", 1920, 1080),
        ("/media/sd.avi", 640, 480),
        ("/media/square.mp4", 100, 100),
    ]))
}

fn index_with(bounds: ResolutionBounds, every_condition_must_be_true: bool) -> Arc<SettingsIndex> {
    Arc::new(SettingsIndex::new(ResolutionSettings {
        bounds,
        every_condition_must_be_true,
    }))
}

fn pipeline_with(settings: Arc<dyn SettingsProvider>) -> FileTestPipeline {
    FileTestPipeline::new().add_test(ResolutionFileTest::new(settings, create_test_prober()))
}

fn hd_minimum() -> ResolutionBounds {
    ResolutionBounds {
        min_width: 1280,
        min_height: 720,
        max_width: 0,
        max_height: 0,
    }
}

#[test]
fn test_hd_file_passes_hd_minimum() {
    let pipeline = pipeline_with(index_with(hd_minimum(), true));

    let task = pipeline.apply(FileTestTask::new("/media/hd.mkv")).unwrap();

    assert!(task.add_file_to_pending_tasks);
    assert!(task.issues.is_empty());
}

#[test]
fn test_sd_file_rejected_by_hd_minimum() {
    let pipeline = pipeline_with(index_with(hd_minimum(), true));

    let task = pipeline.apply(FileTestTask::new("/media/sd.avi")).unwrap();

    assert!(!task.add_file_to_pending_tasks);
    assert_eq!(task.issues.len(), 1);
    assert_eq!(task.issues[0].id, RESOLUTION_ISSUE_ID);
    assert_eq!(
        task.issues[0].message,
        "Video resolution of file \"/media/sd.avi\" is outside the limit of \"640x480\"."
    );
}

#[test]
fn test_single_min_width_any_policy() {
    let bounds = ResolutionBounds {
        min_width: 1280,
        ..Default::default()
    };
    let pipeline = pipeline_with(index_with(bounds, false));

    let task = pipeline.apply(FileTestTask::new("/media/hd.mkv")).unwrap();
    assert!(task.add_file_to_pending_tasks);

    let task = pipeline.apply(FileTestTask::new("/media/sd.avi")).unwrap();
    assert!(!task.add_file_to_pending_tasks);
}

#[test]
fn test_no_bounds_accepts_under_both_policies() {
    for every_condition_must_be_true in [true, false] {
        let pipeline = pipeline_with(index_with(ResolutionBounds::default(), every_condition_must_be_true));

        let task = pipeline.apply(FileTestTask::new("/media/square.mp4")).unwrap();

        assert!(task.add_file_to_pending_tasks);
        assert!(task.issues.is_empty());
    }
}

#[test]
fn test_non_video_is_returned_unmodified() {
    let pipeline = pipeline_with(index_with(hd_minimum(), true));

    let mut original = FileTestTask::new("/media/notes.txt").with_library(1);
    original.priority_score = 5;
    original
        .shared_info
        .insert("source".to_string(), serde_json::json!("scanner"));
    original.issues.push(Issue::new("Other plugin", "earlier issue"));

    let task = pipeline.apply(original.clone()).unwrap();

    assert_eq!(task, original);
}

#[test]
fn test_repeated_runs_repeat_the_issue() {
    let pipeline = pipeline_with(index_with(hd_minimum(), true));

    let once = pipeline.apply(FileTestTask::new("/media/sd.avi")).unwrap();
    let twice = pipeline.apply(once.clone()).unwrap();

    assert_eq!(once.issues.len(), 1);
    assert_eq!(twice.issues.len(), 2);
    assert_eq!(twice.issues[0], twice.issues[1]);
}

#[test]
fn test_library_settings_override_global() {
    let index = SettingsIndex::new(ResolutionSettings {
        bounds: hd_minimum(),
        every_condition_must_be_true: true,
    })
    .with_library(2, ResolutionSettings::default());
    let pipeline = pipeline_with(Arc::new(index));

    let global = pipeline.apply(FileTestTask::new("/media/sd.avi")).unwrap();
    assert!(!global.add_file_to_pending_tasks);

    let library = pipeline
        .apply(FileTestTask::new("/media/sd.avi").with_library(2))
        .unwrap();
    assert!(library.add_file_to_pending_tasks);
}

#[test]
fn test_file_settings_are_read_per_call() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "global": { "max_width": 1280 } }"#).unwrap();

    let pipeline = pipeline_with(Arc::new(FileSettingsProvider::new(&path)));

    let task = pipeline.apply(FileTestTask::new("/media/hd.mkv")).unwrap();
    assert!(!task.add_file_to_pending_tasks);

    fs::write(&path, r#"{ "global": { "max_width": 3840 } }"#).unwrap();
    let task = pipeline.apply(FileTestTask::new("/media/hd.mkv")).unwrap();
    assert!(task.add_file_to_pending_tasks);
}

#[test]
fn test_invalid_settings_fail_the_pipeline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "global": { "max_width": -5 } }"#).unwrap();

    let pipeline = pipeline_with(Arc::new(FileSettingsProvider::new(&path)));

    let err = pipeline
        .apply(FileTestTask::new("/media/hd.mkv"))
        .unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("ResolutionFileTest failed on /media/hd.mkv"));
    assert!(chain.contains("Invalid value for max_width"));
}
