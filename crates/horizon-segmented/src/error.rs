//! Error types for the segmented control.

use crate::mode::SegmentedControlMode;

/// Result type alias for segmented control operations.
pub type Result<T> = std::result::Result<T, SegmentedError>;

/// Errors reported synchronously by segmented control operations.
///
/// Touch input is never reported through this type: malformed touch indices
/// are ignored by the control.
#[derive(Debug, thiserror::Error)]
pub enum SegmentedError {
    /// A programmatic selection named a segment that does not exist.
    #[error("Selection index {index} is out of range for {count} segment(s)")]
    InvalidIndex { index: usize, count: usize },

    /// Programmatic selection was attempted outside sticky mode.
    #[error("Programmatic selection requires sticky mode (current mode: {mode})")]
    NotSticky { mode: SegmentedControlMode },

    /// Configuration text could not be parsed.
    #[error("Invalid segmented control configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl SegmentedError {
    /// Create an invalid index error.
    pub fn invalid_index(index: usize, count: usize) -> Self {
        Self::InvalidIndex { index, count }
    }

    /// Check whether this is an invalid index error.
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SegmentedError::invalid_index(3, 2);
        assert!(err.is_invalid_index());
        assert_eq!(
            err.to_string(),
            "Selection index 3 is out of range for 2 segment(s)"
        );

        let err = SegmentedError::NotSticky {
            mode: SegmentedControlMode::Momentary,
        };
        assert!(!err.is_invalid_index());
        assert_eq!(
            err.to_string(),
            "Programmatic selection requires sticky mode (current mode: momentary)"
        );
    }
}
