//! Parser for settings documents.
//!
//! Document shape:
//! ```json
//! {
//!   "global":    { "min_width": 1280, "min_height": 720 },
//!   "libraries": { "2": { "max_width": "1920", "every_condition_must_be_true": false } }
//! }
//! ```
//!
//! Both sections are optional and every field inside a section is optional;
//! missing fields fall back to their defaults. Values are validated here so a
//! malformed setting is rejected on load instead of when a file is tested.

use crate::error::{Result, SettingsError};
use crate::types::*;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A parsed settings document: global settings plus per-library overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    pub global: ResolutionSettings,
    pub libraries: HashMap<LibraryId, ResolutionSettings>,
}

/// Parse a complete settings document from JSON text.
pub fn parse_document(text: &str) -> Result<SettingsDocument> {
    let root: Value = serde_json::from_str(text)?;
    let root = as_object(&root, "settings document")?;

    let mut document = SettingsDocument::default();

    for (key, value) in root {
        match key.as_str() {
            "global" => {
                document.global = parse_section(as_object(value, "global")?)?;
            }
            "libraries" => {
                for (id, section) in as_object(value, "libraries")? {
                    let library_id: LibraryId = id
                        .trim()
                        .parse()
                        .map_err(|_| SettingsError::InvalidLibraryId(id.clone()))?;
                    let section = as_object(section, &format!("library {}", id))?;
                    document.libraries.insert(library_id, parse_section(section)?);
                }
            }
            other => return Err(SettingsError::UnknownField(other.to_string())),
        }
    }

    Ok(document)
}

/// Parse one settings section (the field map for global or one library).
pub fn parse_section(section: &Map<String, Value>) -> Result<ResolutionSettings> {
    let mut settings = ResolutionSettings::default();

    for (key, value) in section {
        let field = SettingField::from_key(key)
            .ok_or_else(|| SettingsError::UnknownField(key.clone()))?;

        match field {
            SettingField::EveryConditionMustBeTrue => {
                settings.every_condition_must_be_true = parse_flag(field, value)?;
            }
            SettingField::MinWidth => settings.bounds.min_width = parse_bound(field, value)?,
            SettingField::MinHeight => settings.bounds.min_height = parse_bound(field, value)?,
            SettingField::MaxWidth => settings.bounds.max_width = parse_bound(field, value)?,
            SettingField::MaxHeight => settings.bounds.max_height = parse_bound(field, value)?,
        }
    }

    Ok(settings)
}

/// Coerce a bound value. Accepts non-negative integers and decimal strings.
fn parse_bound(field: SettingField, value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| invalid(field, value))
}

/// Coerce the policy flag. `null` means unset, which resolves to `true`.
fn parse_flag(field: SettingField, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Null => Ok(true),
        _ => Err(invalid(field, value)),
    }
}

fn as_object<'a>(value: &'a Value, section: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| SettingsError::NotAnObject {
        section: section.to_string(),
    })
}

fn invalid(field: SettingField, value: &Value) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.key().to_string(),
        value: value.to_string(),
    }
}
