//! The per-file task record passed between file tests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use settings::LibraryId;
use std::path::PathBuf;

/// A recorded reason for not processing a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub message: String,
}

impl Issue {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Shared record for one file under consideration.
///
/// File tests read `path` and `library_id`, and may clear
/// `add_file_to_pending_tasks` and append to `issues`. `priority_score` and
/// `shared_info` are carried through untouched for later stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileTestTask {
    #[serde(default)]
    pub library_id: Option<LibraryId>,
    pub path: PathBuf,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default = "eligible_by_default")]
    pub add_file_to_pending_tasks: bool,
    #[serde(default)]
    pub priority_score: i64,
    #[serde(default)]
    pub shared_info: Map<String, Value>,
}

fn eligible_by_default() -> bool {
    true
}

impl FileTestTask {
    /// A fresh task for `path`: eligible, no issues, no library.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            library_id: None,
            path: path.into(),
            issues: Vec::new(),
            add_file_to_pending_tasks: true,
            priority_score: 0,
            shared_info: Map::new(),
        }
    }

    /// Associate the task with a library (builder pattern).
    pub fn with_library(mut self, library_id: LibraryId) -> Self {
        self.library_id = Some(library_id);
        self
    }

    /// Mark the file as excluded, recording why.
    pub fn reject(&mut self, issue: Issue) {
        self.add_file_to_pending_tasks = false;
        self.issues.push(issue);
    }
}
