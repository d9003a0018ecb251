//! Opaque image handles.
//!
//! Widgets never decode or draw pixels themselves. They hold an
//! [`ImageHandle`] supplied by the owner and hand it to whatever renderer the
//! host uses. The only thing layout needs from an image is its size.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Size;

/// A cheaply clonable reference to an image asset.
///
/// Two handles compare equal when they carry the same name and size.
#[derive(Clone, PartialEq)]
pub struct ImageHandle {
    name: Arc<str>,
    size: Size,
}

impl ImageHandle {
    /// Create a handle for the asset `name` with the given pixel size.
    pub fn new(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Get the asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the width of the image.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Get the height of the image.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageHandle")
            .field("name", &&*self.name)
            .field("width", &self.size.width)
            .field("height", &self.size.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_handle_accessors() {
        let image = ImageHandle::new("separator", Size::new(1.0, 30.0));
        assert_eq!(image.name(), "separator");
        assert_eq!(image.width(), 1.0);
        assert_eq!(image.height(), 30.0);

        let clone = image.clone();
        assert_eq!(clone, image);
        assert_ne!(clone, ImageHandle::new("separator", Size::new(2.0, 30.0)));
    }
}
