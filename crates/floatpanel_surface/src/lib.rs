//! Floatpanel Surface
//!
//! The visible body of a floating panel: a rectangle whose top corners are
//! rounded and whose bottom corners stay square, with a drop shadow cast from
//! the same silhouette, a content region masked to it, a grab handle and an
//! optional estimated-time badge.
//!
//! # Example
//!
//! ```rust
//! use floatpanel_core::{RecordingContext, Size};
//! use floatpanel_surface::prelude::*;
//!
//! let config = SurfaceConfig::from_toml_str("corner_radius = 12.0").unwrap();
//! let mut surface = SurfaceView::from_config(&config).unwrap();
//!
//! surface.layout(Size::new(375.0, 600.0));
//! let mask = surface.geometry().mask_path().unwrap();
//! assert_eq!(mask.bounds().height(), 600.0);
//!
//! let mut ctx = RecordingContext::new(Size::new(375.0, 600.0));
//! surface.paint(&mut ctx);
//! ```

pub mod badge;
pub mod config;
pub mod content;
pub mod error;
pub mod grabber;
pub mod layers;
pub mod renderer;
pub mod style;
pub mod view;

pub use badge::{BadgeFrames, EstimateBadge};
pub use config::SurfaceConfig;
pub use content::{ContentId, SurfaceContent};
pub use error::{Result, SurfaceError};
pub use grabber::{GrabberHandle, GRABBER_TOP_PADDING};
pub use layers::{ContentLayer, LayerShadow, ShapeLayer};
pub use renderer::{GeometryState, RenderCapabilities, SurfaceGeometryRenderer};
pub use style::SurfaceStyle;
pub use view::SurfaceView;

pub mod prelude {
    pub use crate::config::SurfaceConfig;
    pub use crate::content::{ContentId, SurfaceContent};
    pub use crate::renderer::RenderCapabilities;
    pub use crate::style::SurfaceStyle;
    pub use crate::view::SurfaceView;
}
