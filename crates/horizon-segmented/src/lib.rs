//! A segmented control widget for Horizon Segmented.
//!
//! [`SegmentedControl`] presents a row of related segments with two
//! interaction modes:
//!
//! - **Sticky**: one selection persists, like a radio group
//! - **Momentary**: every touch fires, nothing stays selected
//!
//! The control owns selection state, layout and notification. Drawing the
//! background and separator images and capturing raw input are left to the
//! host: it reports touches either as segment indices
//! ([`SegmentedControl::handle_touch`]) or as points resolved through the
//! control's layout ([`SegmentedControl::handle_touch_at`]).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_segmented::{SegmentedControl, SegmentedControlDelegate};
//! use horizon_segmented::Rect;
//!
//! struct Logger;
//! impl SegmentedControlDelegate for Logger {}
//!
//! let logger = Arc::new(Logger);
//! let mut control = SegmentedControl::new()
//!     .with_items(["One", "Two"])
//!     .with_bounds(Rect::new(0.0, 0.0, 120.0, 28.0));
//! control.set_delegate(&logger);
//!
//! assert!(control.handle_touch(1));
//! assert!(!control.handle_touch(1)); // already selected
//! assert!(!control.handle_touch(5)); // no such segment
//! ```

mod config;
mod control;
mod delegate;
mod error;
mod layout;
mod mode;
mod segment;

pub use horizon_segmented_core::*;

pub use config::SegmentedControlConfig;
pub use control::SegmentedControl;
pub use delegate::SegmentedControlDelegate;
pub use error::{Result, SegmentedError};
pub use layout::SegmentLayout;
pub use mode::SegmentedControlMode;
pub use segment::{Segment, SegmentState};
