//! Configuration errors
//!
//! The physics itself is total; only construction can fail.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// A length that must be finite and strictly positive was not
    NonPositive { field: &'static str, value: f32 },
    /// The paddle cannot fit inside the scene
    PaddleTooWide { paddle_width: f32, scene_width: f32 },
    /// Blocked row/column frequency was NaN
    InvalidFrequency(f64),
    /// Settings file could not be read
    Io { path: PathBuf, source: std::io::Error },
    /// Settings file was not valid JSON for `Settings`
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be finite and > 0 (got {value})")
            }
            ConfigError::PaddleTooWide {
                paddle_width,
                scene_width,
            } => write!(
                f,
                "paddle width {paddle_width} does not fit in scene width {scene_width}"
            ),
            ConfigError::InvalidFrequency(freq) => {
                write!(f, "blocked row/column frequency must be a number (got {freq})")
            }
            ConfigError::Io { path, source } => {
                write!(f, "read settings {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => {
                write!(f, "parse settings {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Reject zero, negative, infinite and NaN lengths
pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_bounds() {
        assert!(require_positive("len", 0.5).is_ok());
        assert!(require_positive("len", f32::MAX).is_ok());
        for bad in [0.0, -0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(
                matches!(
                    require_positive("len", bad),
                    Err(ConfigError::NonPositive { field: "len", .. })
                ),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn test_non_positive_message_names_field() {
        let err = require_positive("scene_width", f32::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "scene_width must be finite and > 0 (got inf)");
    }
}
