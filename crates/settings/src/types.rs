//! Core configuration types for resolution filtering.
//!
//! A bound of `0` is the "disabled" sentinel throughout this crate, so every
//! bound is a plain `u32` rather than an `Option<u32>`; that keeps the stored
//! shape identical to what a settings form writes.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a library configured in the host
pub type LibraryId = u32;

// =============================================================================
// Bounds
// =============================================================================

/// One of the four width/height limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
}

impl Bound {
    /// All bounds, in the order they are checked.
    pub const ALL: [Bound; 4] = [
        Bound::MinWidth,
        Bound::MinHeight,
        Bound::MaxWidth,
        Bound::MaxHeight,
    ];

    /// Whether `value` (the measured dimension this bound constrains)
    /// satisfies `limit`. Says nothing about whether the bound is enabled.
    pub fn is_satisfied(self, limit: u32, value: u32) -> bool {
        match self {
            Bound::MinWidth | Bound::MinHeight => value >= limit,
            Bound::MaxWidth | Bound::MaxHeight => value <= limit,
        }
    }

    /// True for the bounds that constrain width.
    pub fn is_width(self) -> bool {
        matches!(self, Bound::MinWidth | Bound::MaxWidth)
    }

    /// The settings field that stores this bound.
    pub fn field(self) -> SettingField {
        match self {
            Bound::MinWidth => SettingField::MinWidth,
            Bound::MinHeight => SettingField::MinHeight,
            Bound::MaxWidth => SettingField::MaxWidth,
            Bound::MaxHeight => SettingField::MaxHeight,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().key())
    }
}

/// The four resolution limits. `0` disables a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionBounds {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl ResolutionBounds {
    /// The configured limit for `bound` (`0` when disabled).
    pub fn limit(&self, bound: Bound) -> u32 {
        match bound {
            Bound::MinWidth => self.min_width,
            Bound::MinHeight => self.min_height,
            Bound::MaxWidth => self.max_width,
            Bound::MaxHeight => self.max_height,
        }
    }

    /// Iterate over the enabled bounds with their limits.
    pub fn enabled(&self) -> impl Iterator<Item = (Bound, u32)> + '_ {
        Bound::ALL
            .into_iter()
            .map(|bound| (bound, self.limit(bound)))
            .filter(|&(_, limit)| limit > 0)
    }

    /// True when no bound is configured.
    pub fn is_unconstrained(&self) -> bool {
        self.enabled().next().is_none()
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Fully resolved settings for one file test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSettings {
    pub bounds: ResolutionBounds,
    /// When set, every enabled bound must hold; otherwise one is enough.
    pub every_condition_must_be_true: bool,
}

impl Default for ResolutionSettings {
    fn default() -> Self {
        Self {
            bounds: ResolutionBounds::default(),
            every_condition_must_be_true: true,
        }
    }
}

/// The user-editable settings fields, with their storage keys and form labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingField {
    EveryConditionMustBeTrue,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
}

impl SettingField {
    /// All fields in form order.
    pub const ALL: [SettingField; 5] = [
        SettingField::EveryConditionMustBeTrue,
        SettingField::MinWidth,
        SettingField::MinHeight,
        SettingField::MaxWidth,
        SettingField::MaxHeight,
    ];

    /// Key used in settings documents.
    pub fn key(self) -> &'static str {
        match self {
            SettingField::EveryConditionMustBeTrue => "every_condition_must_be_true",
            SettingField::MinWidth => "min_width",
            SettingField::MinHeight => "min_height",
            SettingField::MaxWidth => "max_width",
            SettingField::MaxHeight => "max_height",
        }
    }

    /// Label shown next to the field in a settings form.
    pub fn label(self) -> &'static str {
        match self {
            SettingField::EveryConditionMustBeTrue => {
                "If set, only files that respect all limits are processed, otherwise a single limit is enough."
            }
            SettingField::MinWidth => "Minimum width (zero disables the minimum)",
            SettingField::MinHeight => "Minimum height (zero disables the minimum)",
            SettingField::MaxWidth => "Maximum width (zero disables the maximum)",
            SettingField::MaxHeight => "Maximum height (zero disables the maximum)",
        }
    }

    /// Look a field up by its document key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Render this field's value from `settings` for display.
    pub fn display_value(self, settings: &ResolutionSettings) -> String {
        match self {
            SettingField::EveryConditionMustBeTrue => {
                settings.every_condition_must_be_true.to_string()
            }
            SettingField::MinWidth => settings.bounds.min_width.to_string(),
            SettingField::MinHeight => settings.bounds.min_height.to_string(),
            SettingField::MaxWidth => settings.bounds.max_width.to_string(),
            SettingField::MaxHeight => settings.bounds.max_height.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_skips_zero_bounds() {
        let bounds = ResolutionBounds {
            min_width: 1280,
            min_height: 0,
            max_width: 0,
            max_height: 2160,
        };

        let enabled: Vec<_> = bounds.enabled().collect();
        assert_eq!(
            enabled,
            vec![(Bound::MinWidth, 1280), (Bound::MaxHeight, 2160)]
        );
        assert!(!bounds.is_unconstrained());
        assert!(ResolutionBounds::default().is_unconstrained());
    }

    #[test]
    fn test_bound_satisfaction_is_inclusive() {
        assert!(Bound::MinWidth.is_satisfied(1280, 1280));
        assert!(!Bound::MinHeight.is_satisfied(720, 719));
        assert!(Bound::MaxWidth.is_satisfied(1920, 1920));
        assert!(!Bound::MaxHeight.is_satisfied(1080, 1081));
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in SettingField::ALL {
            assert_eq!(SettingField::from_key(field.key()), Some(field));
        }
        assert_eq!(SettingField::from_key("min_depth"), None);
        assert_eq!(Bound::MaxWidth.to_string(), "max_width");
    }

    #[test]
    fn test_default_settings_require_every_condition() {
        let settings = ResolutionSettings::default();
        assert!(settings.every_condition_must_be_true);
        assert!(settings.bounds.is_unconstrained());
    }
}
