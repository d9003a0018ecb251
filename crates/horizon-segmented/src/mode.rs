//! Interaction modes for the segmented control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a segmented control reacts to touches.
///
/// # Sticky
///
/// The control behaves like a radio group. Touching a segment selects it and
/// the selection persists until another segment is touched. Touching the
/// already-selected segment does nothing.
///
/// # Momentary
///
/// The control behaves like a row of push buttons. Every touch notifies, the
/// touched segment is highlighted only until the touch is released, and the
/// stored selection index is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentedControlMode {
    /// One selection persists (radio-group behavior).
    #[default]
    Sticky,
    /// Touches fire without persisting a selection (push-button behavior).
    #[serde(alias = "button")]
    Momentary,
}

impl SegmentedControlMode {
    /// Check if this mode persists a selection.
    pub fn is_sticky(&self) -> bool {
        matches!(self, Self::Sticky)
    }

    /// Check if this mode only fires transient touches.
    pub fn is_momentary(&self) -> bool {
        matches!(self, Self::Momentary)
    }
}

impl fmt::Display for SegmentedControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sticky => write!(f, "sticky"),
            Self::Momentary => write!(f, "momentary"),
        }
    }
}
