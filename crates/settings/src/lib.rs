//! # Settings Crate
//!
//! Resolution-filter configuration: the four bounds, the match policy flag,
//! and where they come from.
//!
//! ## Main Components
//!
//! - **types**: `ResolutionBounds`, `ResolutionSettings`, `Bound`, `SettingField`
//! - **parser**: Parse and validate JSON settings documents
//! - **store**: `SettingsProvider` trait with in-memory and file-backed providers
//! - **error**: Error types for settings loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use settings::{FileSettingsProvider, SettingsProvider};
//!
//! let provider = FileSettingsProvider::new("resolution-filter.json");
//! let settings = provider.resolution_settings(Some(2))?;
//!
//! println!("min width: {}", settings.bounds.min_width);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{Result, SettingsError};
pub use parser::{parse_document, SettingsDocument};
pub use store::{FileSettingsProvider, SettingsIndex, SettingsProvider};
pub use types::{
    // Type aliases
    LibraryId,
    // Core types
    Bound,
    ResolutionBounds,
    ResolutionSettings,
    SettingField,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_a_label() {
        for field in SettingField::ALL {
            assert!(!field.label().is_empty());
        }
        assert_eq!(
            SettingField::MinWidth.label(),
            "Minimum width (zero disables the minimum)"
        );
    }

    #[test]
    fn test_display_values_follow_settings() {
        let settings = ResolutionSettings {
            bounds: ResolutionBounds {
                max_width: 3840,
                ..Default::default()
            },
            every_condition_must_be_true: false,
        };

        assert_eq!(SettingField::MaxWidth.display_value(&settings), "3840");
        assert_eq!(SettingField::MinHeight.display_value(&settings), "0");
        assert_eq!(
            SettingField::EveryConditionMustBeTrue.display_value(&settings),
            "false"
        );
    }
}
