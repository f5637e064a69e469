//! Settings providers.
//!
//! A file test resolves its settings once per call through a
//! [`SettingsProvider`], keyed by the task's optional library id. Lookup order:
//! 1. the library's own section, if that library is configured
//! 2. the global section
//! 3. field defaults (all bounds disabled, every condition must hold)

use crate::error::{Result, SettingsError};
use crate::parser::{self, SettingsDocument};
use crate::types::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of resolved settings for a file test.
///
/// `Send + Sync` so a single provider can back file tests running on
/// several threads.
pub trait SettingsProvider: Send + Sync {
    /// Resolve the settings that apply to `library_id` (or the global
    /// settings when `None`).
    fn resolution_settings(&self, library_id: Option<LibraryId>) -> Result<ResolutionSettings>;
}

/// In-memory settings, loaded once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsIndex {
    document: SettingsDocument,
}

impl SettingsIndex {
    /// Create an index where every library uses `global`.
    pub fn new(global: ResolutionSettings) -> Self {
        Self {
            document: SettingsDocument {
                global,
                ..Default::default()
            },
        }
    }

    /// Load and validate a settings file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = read_settings_file(path)?;
        let document = parser::parse_document(&text)?;
        tracing::debug!(
            "Loaded settings from {} ({} library overrides)",
            path.display(),
            document.libraries.len()
        );
        Ok(Self { document })
    }

    /// Set (or replace) the settings for one library (builder pattern).
    pub fn with_library(mut self, library_id: LibraryId, settings: ResolutionSettings) -> Self {
        self.document.libraries.insert(library_id, settings);
        self
    }

    /// Resolve settings for a library, falling back to the global section.
    pub fn resolve(&self, library_id: Option<LibraryId>) -> ResolutionSettings {
        library_id
            .and_then(|id| self.document.libraries.get(&id))
            .copied()
            .unwrap_or(self.document.global)
    }
}

impl SettingsProvider for SettingsIndex {
    fn resolution_settings(&self, library_id: Option<LibraryId>) -> Result<ResolutionSettings> {
        Ok(self.resolve(library_id))
    }
}

/// Settings backed by a JSON file that is re-read on every lookup.
///
/// Edits to the file take effect on the next file test without a restart.
#[derive(Debug, Clone)]
pub struct FileSettingsProvider {
    path: PathBuf,
}

impl FileSettingsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for FileSettingsProvider {
    fn resolution_settings(&self, library_id: Option<LibraryId>) -> Result<ResolutionSettings> {
        Ok(SettingsIndex::load_from_file(&self.path)?.resolve(library_id))
    }
}

fn read_settings_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })
}
