//! Observer interface for segmented control touches.
//!
//! A control holds at most one delegate, and only weakly: attaching a
//! delegate never keeps it alive. Once the owner drops its last `Arc`, the
//! control silently stops calling it.

use crate::control::SegmentedControl;

/// Receives touch notifications from a [`SegmentedControl`].
///
/// Every method has a default no-op body, so implementors only override what
/// they care about.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use horizon_segmented::{SegmentedControl, SegmentedControlDelegate};
///
/// struct Toolbar;
///
/// impl SegmentedControlDelegate for Toolbar {
///     fn touched_at_index(&self, control: &SegmentedControl, index: usize) {
///         println!("segment {index} touched, selection is {:?}", control.selection_index());
///     }
/// }
///
/// let toolbar = Arc::new(Toolbar);
/// let mut control = SegmentedControl::new().with_items(["Day", "Week", "Month"]);
/// control.set_delegate(&toolbar);
/// control.handle_touch(1);
/// ```
pub trait SegmentedControlDelegate: Send + Sync {
    /// Called once per qualifying touch, after the control has finished
    /// updating its state for that touch.
    fn touched_at_index(&self, control: &SegmentedControl, index: usize) {
        let _ = (control, index);
    }
}
