//! Runtime configuration for the area service.
//!
//! The only knob is how strictly dimensions are checked, read from the
//! `SHAPE_AREA_VALIDATION` environment variable.

use log::warn;
use serde::{Deserialize, Serialize};

/// Environment variable selecting the [`ValidationMode`].
pub const VALIDATION_ENV: &str = "SHAPE_AREA_VALIDATION";

/// How the service treats out-of-range dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Compute whatever the arithmetic gives.
    #[default]
    Permissive,
    /// Reject negative or non-finite dimensions.
    Strict,
}

impl ValidationMode {
    /// Parses a mode name, case-insensitively. Returns `None` when unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(ValidationMode::Permissive),
            "strict" => Some(ValidationMode::Strict),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationMode::Permissive => write!(f, "permissive"),
            ValidationMode::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AreaConfig {
    pub validation: ValidationMode,
}

impl AreaConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(VALIDATION_ENV).ok().as_deref())
    }

    /// Builds configuration from a raw `SHAPE_AREA_VALIDATION` value.
    ///
    /// Unset falls back to the default; an unrecognised value does too, with
    /// a warning.
    pub fn from_value(value: Option<&str>) -> Self {
        let validation = match value {
            None => ValidationMode::default(),
            Some(raw) => ValidationMode::parse(raw).unwrap_or_else(|| {
                warn!(
                    "unknown {VALIDATION_ENV} value {raw:?}, using {}",
                    ValidationMode::default()
                );
                ValidationMode::default()
            }),
        };
        AreaConfig { validation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(AreaConfig::from_value(None).validation, ValidationMode::Permissive);
    }

    #[test]
    fn test_parses_strict_case_insensitively() {
        assert_eq!(
            AreaConfig::from_value(Some(" Strict ")).validation,
            ValidationMode::Strict
        );
    }

    #[test]
    fn test_unknown_value_falls_back() {
        assert_eq!(
            AreaConfig::from_value(Some("paranoid")).validation,
            ValidationMode::Permissive
        );
    }
}
