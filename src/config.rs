//! Site configuration.
//!
//! Everything has a default, so an empty JSON object is a valid config and
//! older files keep loading when fields are added.

#[cfg(feature = "serde")]
use std::{fs, path::Path};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FolioError, Result};
use crate::particles::FieldConfig;
use crate::view_state::NAV_SCROLL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SiteConfig {
    pub field: FieldConfig,
    /// Scroll offset (px) past which the navigation bar compacts.
    pub scroll_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            scroll_threshold: NAV_SCROLL_THRESHOLD,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        let checked = self.field.validate().and_then(|()| {
            if self.scroll_threshold.is_finite() && self.scroll_threshold >= 0.0 {
                Ok(())
            } else {
                Err("scroll_threshold must be finite and >= 0")
            }
        });
        checked.map_err(|msg| {
            warn!(reason = msg, "rejected site config");
            FolioError::InvalidConfig(msg.to_string())
        })
    }

    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_the_default() {
        let cfg = SiteConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, SiteConfig::default());
        assert_eq!(cfg.field.count, 25);
    }

    #[test]
    fn partial_field_overrides_keep_other_defaults() {
        let cfg = SiteConfig::from_json_str(r#"{"field": {"count": 40}}"#).unwrap();
        assert_eq!(cfg.field.count, 40);
        assert_eq!(cfg.field.link_distance, 150.0);
        assert_eq!(cfg.scroll_threshold, 100.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = SiteConfig::from_json_str(r#"{"field": {"radius": -1.0}}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let err = SiteConfig::from_json_str(r#"{"scroll_threshold": -5}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SiteConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn pretty_output_loads_back() {
        let cfg = SiteConfig::default();
        let text = cfg.to_json_pretty().unwrap();
        assert_eq!(SiteConfig::from_json_str(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SiteConfig::load("/nonexistent/folio.json").unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
