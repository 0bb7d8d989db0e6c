#![forbid(unsafe_code)]

//! Drag behavior configuration.
//!
//! A [`DragConfig`] is passed to [`ItemDragBehavior::new`](crate::ItemDragBehavior::new)
//! and fixed for the lifetime of the behavior. With the `config-file` feature
//! it can also be loaded from TOML or JSON:
//!
//! ```toml
//! axis = "vertical"
//! vertical_threshold = 6.0
//! override_stack_order = true
//! ```
//!
//! Missing keys fall back to [`DragConfig::default`].

#[cfg(feature = "config-file")]
use std::path::Path;

use dragsort_core::Axis;
use serde::{Deserialize, Serialize};

use crate::threshold::Thresholds;

/// Default drag-start threshold on either axis, in logical units.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 3.0;

/// Recognized options for one drag behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Axis along which items are dragged and displaced.
    pub axis: Axis,
    /// Horizontal movement that must be exceeded before a drag starts.
    /// Values <= 0 disable gating.
    pub horizontal_threshold: f64,
    /// Vertical movement that must be exceeded before a drag starts.
    /// Values <= 0 disable gating.
    pub vertical_threshold: f64,
    /// Keep the dragged item stacked above the siblings it passes over.
    pub override_stack_order: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            horizontal_threshold: DEFAULT_DRAG_THRESHOLD,
            vertical_threshold: DEFAULT_DRAG_THRESHOLD,
            override_stack_order: false,
        }
    }
}

impl DragConfig {
    /// Default configuration on `axis`.
    #[must_use]
    pub fn along(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_thresholds(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_threshold = horizontal;
        self.vertical_threshold = vertical;
        self
    }

    #[must_use]
    pub fn with_stack_override(mut self, enabled: bool) -> Self {
        self.override_stack_order = enabled;
        self
    }

    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        Thresholds {
            horizontal: self.horizontal_threshold,
            vertical: self.vertical_threshold,
        }
    }

    /// Reject values the engine cannot compare against.
    pub fn validate(&self) -> Result<(), DragConfigError> {
        for (name, value) in [
            ("horizontal_threshold", self.horizontal_threshold),
            ("vertical_threshold", self.vertical_threshold),
        ] {
            if !value.is_finite() {
                return Err(DragConfigError::NonFiniteThreshold { name, value });
            }
        }
        Ok(())
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, DragConfigError> {
        let config: Self = toml::from_str(s).map_err(DragConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, DragConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DragConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, DragConfigError> {
        let config: Self = serde_json::from_str(s).map_err(DragConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DragConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DragConfigError::Io)?;
        Self::from_json_str(&content)
    }
}

/// Errors from building or loading a [`DragConfig`].
#[derive(Debug)]
pub enum DragConfigError {
    /// A threshold is NaN or infinite.
    NonFiniteThreshold { name: &'static str, value: f64 },
    /// I/O error reading a file.
    #[cfg(feature = "config-file")]
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-file")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-file")]
    Json(serde_json::Error),
}

impl std::fmt::Display for DragConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteThreshold { name, value } => {
                write!(f, "{name} must be finite (got {value})")
            }
            #[cfg(feature = "config-file")]
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for DragConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NonFiniteThreshold { .. } => None,
            #[cfg(feature = "config-file")]
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Json(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = DragConfig::default();
        assert_eq!(config.axis, Axis::Horizontal);
        assert_eq!(config.horizontal_threshold, 3.0);
        assert_eq!(config.vertical_threshold, 3.0);
        assert!(!config.override_stack_order);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_positive_thresholds_are_accepted() {
        let config = DragConfig::default().with_thresholds(0.0, -1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let config = DragConfig::along(Axis::Vertical).with_thresholds(3.0, f64::NAN);
        let err = config.validate().expect_err("NaN must be rejected");
        assert!(err.to_string().contains("vertical_threshold"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: DragConfig =
            serde_json::from_str(r#"{"axis":"vertical","override_stack_order":true}"#)
                .expect("partial config should parse");
        assert_eq!(config.axis, Axis::Vertical);
        assert!(config.override_stack_order);
        assert_eq!(config.horizontal_threshold, DEFAULT_DRAG_THRESHOLD);
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn toml_round_trip() {
        let config = DragConfig::from_toml_str("axis = \"vertical\"\nvertical_threshold = 6.0\n")
            .expect("toml should parse");
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.vertical_threshold, 6.0);
        assert_eq!(config.horizontal_threshold, DEFAULT_DRAG_THRESHOLD);
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn toml_infinite_threshold_fails_validation() {
        let err = DragConfig::from_toml_str("horizontal_threshold = inf\n")
            .expect_err("infinite threshold must be rejected");
        assert!(matches!(
            err,
            DragConfigError::NonFiniteThreshold {
                name: "horizontal_threshold",
                ..
            }
        ));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn json_out_of_range_literal_is_a_parse_error() {
        let err = DragConfig::from_json_str(r#"{"horizontal_threshold": 1e400}"#)
            .expect_err("overflowing literal must fail");
        assert!(matches!(err, DragConfigError::Json(_)));
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn toml_file_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("drag.toml");
        std::fs::write(&path, "axis = \"vertical\"\noverride_stack_order = true\n")
            .expect("write config");
        let config = DragConfig::from_toml_file(&path).expect("file should load");
        assert_eq!(
            config,
            DragConfig::along(Axis::Vertical).with_stack_override(true)
        );
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn json_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("drag.json");
        let written = DragConfig::along(Axis::Vertical).with_thresholds(1.5, 8.0);
        std::fs::write(&path, serde_json::to_string(&written).expect("serialize"))
            .expect("write config");
        assert_eq!(DragConfig::from_json_file(&path).expect("file should load"), written);
    }

    #[cfg(feature = "config-file")]
    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");
        for err in [
            DragConfig::from_toml_file(&missing).expect_err("missing toml"),
            DragConfig::from_json_file(&missing).expect_err("missing json"),
        ] {
            assert!(matches!(err, DragConfigError::Io(_)));
            assert!(std::error::Error::source(&err).is_some());
            assert!(err.to_string().starts_with("I/O error"));
        }
    }
}
