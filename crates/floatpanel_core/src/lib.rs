//! Floatpanel Core
//!
//! Foundational types shared by the floatpanel crates:
//!
//! - **Geometry**: points, sizes, rectangles in logical points
//! - **Style**: colors, per-corner radii, shadows, clip shapes
//! - **Paths**: vector paths with a rounded-rect primitive that clamps radii
//! - **Draw Context**: the trait views paint into, plus a recording backend
//!
//! # Example
//!
//! ```rust
//! use floatpanel_core::{CornerRadius, Path, Rect};
//!
//! // Round only the top corners, keep the bottom edge straight
//! let path = Path::rounded_rect(Rect::new(0.0, 0.0, 300.0, 500.0), CornerRadius::top(12.0));
//! assert_eq!(path.bounds().height(), 500.0);
//! ```

pub mod draw;
pub mod geometry;
pub mod style;

pub use draw::{
    DrawCommand, DrawContext, FontWeight, Path, PathCommand, RecordingContext, Stroke, TextAlign,
    TextStyle,
};
pub use geometry::{Point, Rect, Size, Vec2};
pub use style::{ClipShape, Color, CornerRadius, Shadow};
