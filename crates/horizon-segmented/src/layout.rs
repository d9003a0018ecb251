//! Segment layout and hit testing.
//!
//! Segments share the content rect equally, left to right, with a separator
//! between each neighbouring pair. Segment widths are whole pixels; the
//! whole pixels left over by flooring go to the leading segments one at a
//! time, and any fractional remainder goes to the last segment, so the
//! frames always tile the content rect.

use horizon_segmented_core::logging::targets;
use horizon_segmented_core::{EdgeInsets, PerfSpan, Point, Rect};

/// Computed frames for every segment and separator of a control.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentLayout {
    content: Rect,
    segments: Vec<Rect>,
    separators: Vec<Rect>,
}

impl SegmentLayout {
    /// Lay out `count` segments inside `bounds`.
    ///
    /// `separator_width` is the width reserved between neighbouring segments,
    /// normally the width of the separator image.
    pub fn compute(bounds: Rect, insets: EdgeInsets, count: usize, separator_width: f32) -> Self {
        let _span = PerfSpan::new("segment_layout");

        let content = insets.inset_rect(bounds);
        if count == 0 {
            return Self {
                content,
                ..Self::default()
            };
        }

        let separator_width = separator_width.max(0.0);
        let separator_count = count - 1;
        let available = content.width() - separator_count as f32 * separator_width;
        let segment_width = (available / count as f32).floor().max(0.0);
        let mut extra_pixels =
            (available - segment_width * count as f32).floor().max(0.0) as usize;

        let mut segments = Vec::with_capacity(count);
        let mut separators = Vec::with_capacity(separator_count);
        let mut x = content.left();

        for index in 0..count {
            let mut width = segment_width;
            if extra_pixels > 0 {
                width += 1.0;
                extra_pixels -= 1;
            }
            segments.push(Rect::new(x, content.top(), width, content.height()));
            x += width;

            if index < separator_count {
                separators.push(Rect::new(x, content.top(), separator_width, content.height()));
                x += separator_width;
            }
        }

        // The last segment absorbs any fractional remainder
        if let Some(last) = segments.last_mut() {
            last.size.width = (content.right() - last.left()).max(0.0);
        }

        tracing::trace!(
            target: targets::LAYOUT,
            count,
            segment_width,
            separator_width,
            "computed segment layout"
        );

        Self {
            content,
            segments,
            separators,
        }
    }

    /// The content rect (bounds minus insets).
    pub fn content_rect(&self) -> Rect {
        self.content
    }

    /// Frames of all segments, in index order.
    pub fn segment_rects(&self) -> &[Rect] {
        &self.segments
    }

    /// Frame of a single segment.
    pub fn segment_rect(&self, index: usize) -> Option<Rect> {
        self.segments.get(index).copied()
    }

    /// Frames of all separators; separator `i` sits between segments `i` and `i + 1`.
    pub fn separator_rects(&self) -> &[Rect] {
        &self.separators
    }

    /// Find the segment under `point`.
    ///
    /// Returns `None` for points on a separator, inside the insets or
    /// outside the bounds.
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        self.segments.iter().position(|rect| rect.contains(point))
    }
}
