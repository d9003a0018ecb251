//! Segmented control implementation.
//!
//! This module provides [`SegmentedControl`], a row of related segments that
//! either keeps one selection (sticky mode) or fires transient presses
//! (momentary mode).
//!
//! # Example
//!
//! ```
//! use horizon_segmented::{SegmentedControl, SegmentedControlMode};
//!
//! let mut control = SegmentedControl::new().with_items(["List", "Grid", "Map"]);
//!
//! control.touched.connect(|&index| {
//!     println!("Segment {} was touched", index);
//! });
//!
//! control.handle_touch(2);
//! assert_eq!(control.selection_index(), Some(2));
//!
//! control.set_mode(SegmentedControlMode::Momentary);
//! control.handle_touch(0);
//! assert_eq!(control.selection_index(), Some(2));
//! ```

use std::sync::{Arc, Weak};

use horizon_segmented_core::logging::targets;
use horizon_segmented_core::{EdgeInsets, ImageHandle, Point, Rect, Signal};

use crate::config::SegmentedControlConfig;
use crate::delegate::SegmentedControlDelegate;
use crate::error::{Result, SegmentedError};
use crate::layout::SegmentLayout;
use crate::mode::SegmentedControlMode;
use crate::segment::{Segment, SegmentState};

/// A row of mutually related, selectable segments.
///
/// # Selection
///
/// The selection index is `None` or a valid position in the current item
/// sequence; it is never left dangling. Replacing the items with a sequence
/// too short for the current selection resets it to `None`.
///
/// Programmatic selection via [`set_selection_index`](Self::set_selection_index)
/// is silent. Only touches notify.
///
/// # Touches
///
/// [`handle_touch`](Self::handle_touch) is the sole entry point for
/// interaction. Indices outside the item sequence are ignored. In sticky mode
/// touching the selected segment again is a no-op; in momentary mode every
/// touch notifies.
///
/// # Notification
///
/// For every qualifying touch the control first finishes updating its state,
/// then calls the delegate (if one is attached and still alive), then emits
/// [`touched`](Self::touched). Both happen synchronously, exactly once.
///
/// # Signals
///
/// - `touched(usize)`: Emitted after each qualifying touch with its index
pub struct SegmentedControl {
    /// Segments, in display order.
    items: Vec<Segment>,

    /// Persistent selection (meaningful in sticky mode only).
    selection: Option<usize>,

    /// Segment pressed by the current momentary touch.
    highlighted: Option<usize>,

    /// Interaction mode.
    mode: SegmentedControlMode,

    /// Image drawn behind all segments.
    background_image: Option<ImageHandle>,

    /// Image drawn between neighbouring segments.
    separator_image: Option<ImageHandle>,

    /// Padding between bounds and segments.
    content_edge_insets: EdgeInsets,

    /// Widget bounds in local coordinates.
    bounds: Rect,

    /// Cached frames, recomputed whenever geometry inputs change.
    layout: SegmentLayout,

    /// Weakly held observer.
    delegate: Option<Weak<dyn SegmentedControlDelegate>>,

    /// Signal emitted after each qualifying touch.
    pub touched: Signal<usize>,
}

impl SegmentedControl {
    /// Create an empty sticky control with no selection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selection: None,
            highlighted: None,
            mode: SegmentedControlMode::Sticky,
            background_image: None,
            separator_image: None,
            content_edge_insets: EdgeInsets::ZERO,
            bounds: Rect::ZERO,
            layout: SegmentLayout::default(),
            delegate: None,
            touched: Signal::new(),
        }
    }

    /// Build a control from its configured initial state.
    ///
    /// Fails if the configured selection is out of range or is combined with
    /// momentary mode.
    pub fn from_config(config: &SegmentedControlConfig) -> Result<Self> {
        let mut control = Self::new()
            .with_items(config.items.iter().map(String::as_str))
            .with_content_edge_insets(config.content_edge_insets)
            .with_mode(config.mode);
        if config.selected_index.is_some() {
            control.set_selection_index(config.selected_index)?;
        }
        Ok(control)
    }

    /// Set the items using builder pattern.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        self.set_items(items.into_iter().map(Into::into).collect());
        self
    }

    /// Set the mode using builder pattern.
    pub fn with_mode(mut self, mode: SegmentedControlMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Set the bounds using builder pattern.
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    /// Set the content edge insets using builder pattern.
    pub fn with_content_edge_insets(mut self, insets: EdgeInsets) -> Self {
        self.set_content_edge_insets(insets);
        self
    }

    /// Set the separator image using builder pattern.
    pub fn with_separator_image(mut self, image: ImageHandle) -> Self {
        self.set_separator_image(Some(image));
        self
    }

    /// Set the background image using builder pattern.
    pub fn with_background_image(mut self, image: ImageHandle) -> Self {
        self.set_background_image(Some(image));
        self
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Get all segments.
    pub fn items(&self) -> &[Segment] {
        &self.items
    }

    /// Get the number of segments.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Get a single segment.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.items.get(index)
    }

    /// Replace all segments.
    ///
    /// An empty sequence is allowed. A selection that no longer fits is reset
    /// to `None`; a selection that still fits is kept. Any pending highlight
    /// is cleared. Never notifies.
    pub fn set_items(&mut self, items: Vec<Segment>) {
        self.items = items;
        self.highlighted = None;

        if let Some(index) = self.selection
            && index >= self.items.len()
        {
            tracing::debug!(
                target: targets::CONTROL,
                index,
                count = self.items.len(),
                "selection out of range after item change, resetting"
            );
            self.selection = None;
        }

        self.relayout();
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Get the persistent selection index.
    ///
    /// In momentary mode this is the inert value kept from sticky mode.
    pub fn selection_index(&self) -> Option<usize> {
        self.selection
    }

    /// Programmatically set the selection.
    ///
    /// Only valid in sticky mode. `None` clears the selection. This never
    /// calls the delegate or emits [`touched`](Self::touched).
    ///
    /// # Errors
    ///
    /// - [`SegmentedError::NotSticky`] in momentary mode
    /// - [`SegmentedError::InvalidIndex`] when the index is not a valid
    ///   position in the current items
    pub fn set_selection_index(&mut self, index: Option<usize>) -> Result<()> {
        if !self.mode.is_sticky() {
            return Err(SegmentedError::NotSticky { mode: self.mode });
        }

        if let Some(index) = index
            && index >= self.items.len()
        {
            return Err(SegmentedError::invalid_index(index, self.items.len()));
        }

        self.selection = index;
        Ok(())
    }

    /// Get the segment highlighted by the current momentary touch.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Get the derived visual state of a segment.
    ///
    /// Returns `None` if the index is out of range.
    pub fn segment_state(&self, index: usize) -> Option<SegmentState> {
        if index >= self.items.len() {
            return None;
        }

        let state = match self.mode {
            SegmentedControlMode::Sticky if self.selection == Some(index) => SegmentState::Selected,
            SegmentedControlMode::Momentary if self.highlighted == Some(index) => {
                SegmentState::Highlighted
            }
            _ => SegmentState::Normal,
        };
        Some(state)
    }

    /// Check if a segment is drawn as selected.
    pub fn is_segment_selected(&self, index: usize) -> bool {
        self.segment_state(index) == Some(SegmentState::Selected)
    }

    /// Check if a segment is drawn as highlighted.
    pub fn is_segment_highlighted(&self, index: usize) -> bool {
        self.segment_state(index) == Some(SegmentState::Highlighted)
    }

    // =========================================================================
    // Mode
    // =========================================================================

    /// Get the interaction mode.
    pub fn mode(&self) -> SegmentedControlMode {
        self.mode
    }

    /// Switch the interaction mode.
    ///
    /// The stored selection index is kept as is and nothing is notified. The
    /// new mode applies from the next touch.
    pub fn set_mode(&mut self, mode: SegmentedControlMode) {
        if self.mode != mode {
            tracing::debug!(
                target: targets::CONTROL,
                from = %self.mode,
                to = %mode,
                "mode changed"
            );
            self.mode = mode;
            self.highlighted = None;
        }
    }

    // =========================================================================
    // Touch Handling
    // =========================================================================

    /// Handle a touch on the segment at `index`.
    ///
    /// Returns `true` if the touch qualified and observers were notified.
    pub fn handle_touch(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            tracing::trace!(
                target: targets::CONTROL,
                index,
                count = self.items.len(),
                "ignoring touch outside segments"
            );
            return false;
        }

        match self.mode {
            SegmentedControlMode::Sticky => {
                if self.selection == Some(index) {
                    tracing::trace!(target: targets::CONTROL, index, "segment already selected");
                    return false;
                }
                self.selection = Some(index);
            }
            SegmentedControlMode::Momentary => {
                self.highlighted = Some(index);
            }
        }

        tracing::debug!(target: targets::CONTROL, index, mode = %self.mode, "segment touched");
        self.notify_touched(index);
        true
    }

    /// Handle a touch at a point in local coordinates.
    ///
    /// The point is resolved through the current layout. Points that miss
    /// every segment are ignored.
    pub fn handle_touch_at(&mut self, point: Point) -> bool {
        match self.layout.segment_at(point) {
            Some(index) => self.handle_touch(index),
            None => {
                tracing::trace!(
                    target: targets::CONTROL,
                    x = point.x,
                    y = point.y,
                    "touch missed all segments"
                );
                false
            }
        }
    }

    /// End the current touch.
    ///
    /// Clears the momentary highlight. Never notifies.
    pub fn handle_release(&mut self) {
        self.highlighted = None;
    }

    fn notify_touched(&self, index: usize) {
        if let Some(delegate) = self.delegate() {
            delegate.touched_at_index(self, index);
        }
        self.touched.emit(index);
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Attach a delegate.
    ///
    /// Only a weak reference is kept. Replaces any previous delegate.
    pub fn set_delegate<D>(&mut self, delegate: &Arc<D>)
    where
        D: SegmentedControlDelegate + 'static,
    {
        let weak = Arc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Detach the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Get the delegate if one is attached and still alive.
    pub fn delegate(&self) -> Option<Arc<dyn SegmentedControlDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    // =========================================================================
    // Appearance and Geometry
    // =========================================================================

    /// Get the background image.
    pub fn background_image(&self) -> Option<&ImageHandle> {
        self.background_image.as_ref()
    }

    /// Set or clear the background image.
    pub fn set_background_image(&mut self, image: Option<ImageHandle>) {
        self.background_image = image;
    }

    /// Get the separator image.
    pub fn separator_image(&self) -> Option<&ImageHandle> {
        self.separator_image.as_ref()
    }

    /// Set or clear the separator image.
    ///
    /// The image width is reserved between neighbouring segments.
    pub fn set_separator_image(&mut self, image: Option<ImageHandle>) {
        self.separator_image = image;
        self.relayout();
    }

    /// Get the content edge insets.
    pub fn content_edge_insets(&self) -> EdgeInsets {
        self.content_edge_insets
    }

    /// Set the content edge insets.
    pub fn set_content_edge_insets(&mut self, insets: EdgeInsets) {
        if self.content_edge_insets != insets {
            self.content_edge_insets = insets;
            self.relayout();
        }
    }

    /// Get the widget bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the widget bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.relayout();
        }
    }

    /// Get the current segment layout.
    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    fn relayout(&mut self) {
        let separator_width = self
            .separator_image
            .as_ref()
            .map_or(0.0, ImageHandle::width);
        self.layout = SegmentLayout::compute(
            self.bounds,
            self.content_edge_insets,
            self.items.len(),
            separator_width,
        );
    }
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SegmentedControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedControl")
            .field("items", &self.items)
            .field("selection", &self.selection)
            .field("highlighted", &self.highlighted)
            .field("mode", &self.mode)
            .field("content_edge_insets", &self.content_edge_insets)
            .field("bounds", &self.bounds)
            .field("has_delegate", &self.delegate().is_some())
            .finish()
    }
}

// Ensure SegmentedControl is Send + Sync
static_assertions::assert_impl_all!(SegmentedControl: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_segmented_core::Size;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_control(titles: &[&str]) -> SegmentedControl {
        SegmentedControl::new().with_items(titles.iter().copied())
    }

    fn touch_counter(control: &SegmentedControl) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        control.touched.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_control_creation() {
        let control = SegmentedControl::new();
        assert_eq!(control.count(), 0);
        assert_eq!(control.selection_index(), None);
        assert_eq!(control.mode(), SegmentedControlMode::Sticky);
        assert!(control.delegate().is_none());
        assert!(control.background_image().is_none());
    }

    #[test]
    fn test_set_items_keeps_valid_selection() {
        let mut control = make_control(&["A", "B", "C"]);
        control.set_selection_index(Some(1)).unwrap();

        control.set_items(vec!["X".into(), "Y".into()]);
        assert_eq!(control.selection_index(), Some(1));
        assert_eq!(control.segment(0).map(Segment::title), Some("X"));
    }

    #[test]
    fn test_set_items_empty_resets_selection() {
        let mut control = make_control(&["A", "B"]);
        control.set_selection_index(Some(0)).unwrap();

        control.set_items(Vec::new());
        assert_eq!(control.count(), 0);
        assert_eq!(control.selection_index(), None);
    }

    #[test]
    fn test_set_selection_on_empty_control_fails() {
        let mut control = SegmentedControl::new();
        let err = control.set_selection_index(Some(0)).unwrap_err();
        assert!(err.is_invalid_index());
        assert!(control.set_selection_index(None).is_ok());
    }

    #[test]
    fn test_set_selection_in_momentary_mode_fails() {
        let mut control = make_control(&["A", "B"]).with_mode(SegmentedControlMode::Momentary);
        let err = control.set_selection_index(Some(1)).unwrap_err();
        assert!(matches!(err, SegmentedError::NotSticky { .. }));
        assert_eq!(control.selection_index(), None);
    }

    #[test]
    fn test_programmatic_selection_is_silent() {
        let mut control = make_control(&["A", "B", "C"]);
        let count = touch_counter(&control);

        control.set_selection_index(Some(2)).unwrap();
        control.set_selection_index(None).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_segment_states_follow_mode() {
        let mut control = make_control(&["A", "B", "C"]);
        control.handle_touch(1);
        assert_eq!(control.segment_state(0), Some(SegmentState::Normal));
        assert_eq!(control.segment_state(1), Some(SegmentState::Selected));
        assert_eq!(control.segment_state(3), None);

        control.set_mode(SegmentedControlMode::Momentary);
        assert!(!control.is_segment_selected(1));

        control.handle_touch(2);
        assert!(control.is_segment_highlighted(2));
        assert!(!control.is_segment_highlighted(1));

        control.handle_release();
        assert_eq!(control.highlighted_index(), None);
        assert_eq!(control.segment_state(2), Some(SegmentState::Normal));

        // Switching back revives the stored selection
        control.set_mode(SegmentedControlMode::Sticky);
        assert!(control.is_segment_selected(1));
    }

    #[test]
    fn test_mode_switch_clears_highlight() {
        let mut control = make_control(&["A", "B"]).with_mode(SegmentedControlMode::Momentary);
        control.handle_touch(0);
        assert_eq!(control.highlighted_index(), Some(0));

        control.set_mode(SegmentedControlMode::Sticky);
        assert_eq!(control.highlighted_index(), None);
    }

    #[test]
    fn test_set_items_clears_highlight() {
        let mut control = make_control(&["A", "B"]).with_mode(SegmentedControlMode::Momentary);
        control.handle_touch(1);
        control.set_items(vec!["A".into(), "B".into()]);
        assert_eq!(control.highlighted_index(), None);
    }

    #[test]
    fn test_layout_follows_geometry_changes() {
        let mut control = make_control(&["A", "B"]).with_bounds(Rect::new(0.0, 0.0, 100.0, 30.0));
        assert_eq!(control.layout().segment_rect(1), Some(Rect::new(50.0, 0.0, 50.0, 30.0)));

        control.set_separator_image(Some(ImageHandle::new("sep", Size::new(2.0, 30.0))));
        assert_eq!(control.layout().segment_rect(1), Some(Rect::new(51.0, 0.0, 49.0, 30.0)));
        assert_eq!(control.layout().separator_rects().len(), 1);

        control.set_content_edge_insets(EdgeInsets::uniform(5.0));
        assert_eq!(control.layout().content_rect(), Rect::new(5.0, 5.0, 90.0, 20.0));

        control.set_items(vec!["A".into(), "B".into(), "C".into()]);
        assert_eq!(control.layout().segment_rects().len(), 3);
    }

    #[test]
    fn test_handle_touch_at_resolves_through_layout() {
        let mut control = make_control(&["A", "B"]).with_bounds(Rect::new(0.0, 0.0, 100.0, 30.0));
        assert!(control.handle_touch_at(Point::new(75.0, 15.0)));
        assert_eq!(control.selection_index(), Some(1));

        assert!(!control.handle_touch_at(Point::new(150.0, 15.0)));
        assert_eq!(control.selection_index(), Some(1));
    }

    #[test]
    fn test_background_image_does_not_affect_layout() {
        let mut control = make_control(&["A", "B"]).with_bounds(Rect::new(0.0, 0.0, 100.0, 30.0));
        let before = control.layout().clone();
        control.set_background_image(Some(ImageHandle::new("bg", Size::new(100.0, 30.0))));
        assert_eq!(control.layout(), &before);
        assert_eq!(control.background_image().map(ImageHandle::name), Some("bg"));
    }

    #[test]
    fn test_set_delegate_with_concrete_type() {
        struct Counter(AtomicUsize);

        impl SegmentedControlDelegate for Counter {
            fn touched_at_index(&self, _control: &SegmentedControl, _index: usize) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let counter = Arc::new(Counter(AtomicUsize::new(0)));
        let mut control = make_control(&["A", "B"]);
        control.set_delegate(&counter);
        assert_eq!(Arc::strong_count(&counter), 1);
        assert!(control.delegate().is_some());

        assert!(control.handle_touch(1));
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);

        drop(counter);
        assert!(control.delegate().is_none());
        assert!(!control.handle_touch(1));
        assert!(control.handle_touch(0));
    }
}
