//! Core systems for Horizon Segmented.
//!
//! This crate provides the foundational pieces the segmented control widget
//! is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notification
//! - **Geometry**: Points, sizes, rectangles and edge insets
//! - **Images**: Opaque handles to image assets owned by the host
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_segmented_core::Signal;
//!
//! let touched = Signal::<usize>::new();
//!
//! let conn_id = touched.connect(|index| {
//!     println!("Touched segment {}", index);
//! });
//!
//! touched.emit(1);
//! touched.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod image;
pub mod logging;
pub mod signal;

pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use image::ImageHandle;
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
