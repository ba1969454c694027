//! Computed element frames

use floatpanel_core::Rect;
use taffy::prelude::Layout;

/// Computed frame of a layout node
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    /// X position relative to the offset it was resolved against
    pub x: f32,
    /// Y position relative to the offset it was resolved against
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    /// Create bounds from a Taffy Layout with parent offset
    pub fn from_layout(layout: &Layout, parent_offset: (f32, f32)) -> Self {
        Self {
            x: parent_offset.0 + layout.location.x,
            y: parent_offset.1 + layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
        }
    }

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<ElementBounds> for Rect {
    fn from(bounds: ElementBounds) -> Self {
        bounds.to_rect()
    }
}
