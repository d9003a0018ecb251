//! Declarative configuration for segmented controls.
//!
//! A [`SegmentedControlConfig`] describes a control's initial state and can
//! be loaded from TOML:
//!
//! ```
//! use horizon_segmented::{SegmentedControl, SegmentedControlConfig};
//!
//! let config = SegmentedControlConfig::from_toml_str(r#"
//! mode = "sticky"
//! items = ["Day", "Week", "Month"]
//! selected_index = 1
//!
//! [content_edge_insets]
//! top = 2.0
//! left = 4.0
//! bottom = 2.0
//! right = 4.0
//! "#)?;
//!
//! let control = SegmentedControl::from_config(&config)?;
//! assert_eq!(control.selection_index(), Some(1));
//! # Ok::<(), horizon_segmented::SegmentedError>(())
//! ```

use horizon_segmented_core::EdgeInsets;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mode::SegmentedControlMode;

/// Initial state of a segmented control.
///
/// Every field is optional in the serialized form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentedControlConfig {
    /// Interaction mode.
    pub mode: SegmentedControlMode,
    /// Segment titles, in display order.
    pub items: Vec<String>,
    /// Initially selected segment (sticky mode only).
    pub selected_index: Option<usize>,
    /// Padding between the bounds and the segments.
    pub content_edge_insets: EdgeInsets,
}

impl SegmentedControlConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SegmentedError;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SegmentedControlConfig::from_toml_str("").unwrap();
        assert_eq!(config, SegmentedControlConfig::default());
        assert_eq!(config.mode, SegmentedControlMode::Sticky);
    }

    #[test]
    fn test_button_alias_for_momentary() {
        let config = SegmentedControlConfig::from_toml_str(r#"mode = "button""#).unwrap();
        assert_eq!(config.mode, SegmentedControlMode::Momentary);
    }

    #[test]
    fn test_partial_insets() {
        let config = SegmentedControlConfig::from_toml_str(
            r#"
            [content_edge_insets]
            left = 6.0
            "#,
        )
        .unwrap();
        assert_eq!(config.content_edge_insets, EdgeInsets::new(0.0, 6.0, 0.0, 0.0));
    }

    #[test]
    fn test_malformed_config() {
        let err = SegmentedControlConfig::from_toml_str(r#"mode = "sideways""#).unwrap_err();
        assert!(matches!(err, SegmentedError::Config(_)));

        let err = SegmentedControlConfig::from_toml_str("items = 3").unwrap_err();
        assert!(matches!(err, SegmentedError::Config(_)));
    }
}
