//! Segment items and their derived visual state.

use horizon_segmented_core::ImageHandle;

/// A single button-like entry of a segmented control.
///
/// A segment only describes content. Its position is its index in the
/// control's item sequence, and whether it draws as selected or highlighted
/// is derived by the control (see [`SegmentState`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Segment {
    title: String,
    icon: Option<ImageHandle>,
}

impl Segment {
    /// Create a segment with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }

    /// Set the icon using builder pattern.
    pub fn with_icon(mut self, icon: ImageHandle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Get the segment title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the segment title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Get the segment icon, if any.
    pub fn icon(&self) -> Option<&ImageHandle> {
        self.icon.as_ref()
    }

    /// Set or clear the segment icon.
    pub fn set_icon(&mut self, icon: Option<ImageHandle>) {
        self.icon = icon;
    }
}

impl From<&str> for Segment {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for Segment {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}

/// The visual state a renderer should draw a segment in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentState {
    /// Neither selected nor pressed.
    #[default]
    Normal,
    /// The persistent selection of a sticky control.
    Selected,
    /// Pressed in a momentary control, until the touch is released.
    Highlighted,
}
