//! Surface geometry renderer
//!
//! Recomputes the rounded silhouette of a surface and assigns it to the
//! surface's render layers. Geometry and style setters only mark the
//! renderer dirty; the host's layout pass calls [`SurfaceGeometryRenderer::recompute`].
//!
//! ```text
//!   setter ──► Dirty ──► layout pass: recompute() ──► Clean
//!                ▲                                      │
//!                └──────────────── setter ◄─────────────┘
//! ```
//!
//! On each recompute:
//!
//! 1. The bounds are extended downward by the bottom overflow.
//! 2. A path over that rect rounds only the top-left and top-right corners.
//! 3. The same path becomes the shadow layer's fill path, the shadow
//!    silhouette (unless the shadow is hidden), and the content mask
//!    (when the backend can clip to paths).
//! 4. Background and border are applied to the content region.

use floatpanel_core::{Color, CornerRadius, Path, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::layers::{ContentLayer, LayerShadow, ShapeLayer};
use crate::style::{finite_or_zero, SurfaceStyle};

/// What the rendering backend can do, resolved once when a surface is created
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderCapabilities {
    /// Backend can clip content to an arbitrary path.
    ///
    /// When false the content region gets no automatic mask and callers
    /// must clip their content themselves.
    pub non_rect_clip: bool,
}

impl Default for RenderCapabilities {
    fn default() -> Self {
        Self {
            non_rect_clip: true,
        }
    }
}

impl RenderCapabilities {
    /// Backend limited to rectangular clipping
    pub fn rect_clip_only() -> Self {
        Self {
            non_rect_clip: false,
        }
    }
}

/// Whether the layers reflect the current inputs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GeometryState {
    /// Layers match the inputs as of the last recompute
    Clean,
    /// An input changed since the last recompute
    #[default]
    Dirty,
}

/// Computes the surface silhouette and applies it to the shadow and content layers
#[derive(Clone, Debug)]
pub struct SurfaceGeometryRenderer {
    bounds: Rect,
    bottom_overflow: f32,
    corner_radius: f32,
    style: SurfaceStyle,
    capabilities: RenderCapabilities,
    state: GeometryState,
    shadow_layer: ShapeLayer,
    content_layer: ContentLayer,
}

impl Default for SurfaceGeometryRenderer {
    fn default() -> Self {
        Self::new(RenderCapabilities::default())
    }
}

impl SurfaceGeometryRenderer {
    pub fn new(capabilities: RenderCapabilities) -> Self {
        if !capabilities.non_rect_clip {
            tracing::info!("path clipping unavailable, surface content will not be masked");
        }

        Self {
            bounds: Rect::ZERO,
            bottom_overflow: 0.0,
            corner_radius: 0.0,
            style: SurfaceStyle::default(),
            capabilities,
            state: GeometryState::Dirty,
            shadow_layer: ShapeLayer::new(),
            content_layer: ContentLayer::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inputs
    // ─────────────────────────────────────────────────────────────────────────

    fn mark_dirty(&mut self, what: &'static str) {
        tracing::trace!(input = what, "surface geometry marked dirty");
        self.state = GeometryState::Dirty;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Set the layout bounds (local coordinates, origin normally at 0,0)
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.mark_dirty("bounds");
    }

    pub fn bottom_overflow(&self) -> f32 {
        self.bottom_overflow
    }

    /// Extra height for the generated paths only; negative values clamp to 0
    pub fn set_bottom_overflow(&mut self, overflow: f32) {
        self.bottom_overflow = finite_or_zero(overflow).max(0.0);
        self.mark_dirty("bottom_overflow");
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Radius of the two top corners; negative values clamp to 0
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = finite_or_zero(radius).max(0.0);
        self.mark_dirty("corner_radius");
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style.sanitized();
        self.mark_dirty("style");
    }

    /// Edit the style in place
    pub fn update_style(&mut self, f: impl FnOnce(&mut SurfaceStyle)) {
        let mut style = self.style.clone();
        f(&mut style);
        self.set_style(style);
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.update_style(|s| s.background_color = color);
    }

    pub fn set_shadow_hidden(&mut self, hidden: bool) {
        self.update_style(|s| s.shadow_hidden = hidden);
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.update_style(|s| s.shadow_color = color);
    }

    pub fn set_shadow_offset(&mut self, offset: Vec2) {
        self.update_style(|s| s.shadow_offset = offset);
    }

    pub fn set_shadow_opacity(&mut self, opacity: f32) {
        self.update_style(|s| s.shadow_opacity = opacity);
    }

    pub fn set_shadow_radius(&mut self, radius: f32) {
        self.update_style(|s| s.shadow_radius = radius);
    }

    pub fn set_border_color(&mut self, color: Option<Color>) {
        self.update_style(|s| s.border_color = color);
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.update_style(|s| s.border_width = width);
    }

    pub fn capabilities(&self) -> RenderCapabilities {
        self.capabilities
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Recompute
    // ─────────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> GeometryState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == GeometryState::Dirty
    }

    /// Rect the paths are generated over: the bounds grown by the bottom overflow
    pub fn effective_rect(&self) -> Rect {
        self.bounds.extend_bottom(self.bottom_overflow)
    }

    /// Recompute the silhouette and reassign every layer property
    pub fn recompute(&mut self) {
        tracing::debug!(
            bounds = ?self.bounds,
            bottom_overflow = self.bottom_overflow,
            corner_radius = self.corner_radius,
            "recomputing surface geometry"
        );

        let rounded = Path::rounded_rect(self.effective_rect(), CornerRadius::top(self.corner_radius));
        let style = &self.style;

        self.shadow_layer.path = Some(rounded.clone());
        self.shadow_layer.fill_color = style.background_color;
        if style.shadow_hidden {
            self.shadow_layer.clear_shadow();
        } else {
            self.shadow_layer.shadow = Some(LayerShadow {
                color: style.shadow_color,
                offset: style.shadow_offset,
                opacity: style.shadow_opacity,
                radius: style.shadow_radius,
            });
            self.shadow_layer.shadow_path = Some(rounded.clone());
        }

        self.content_layer.frame = self.bounds;
        self.content_layer.mask = self.capabilities.non_rect_clip.then_some(rounded);
        self.content_layer.border_color = style.border_color;
        self.content_layer.border_width = style.border_width;
        self.content_layer.background_color = style.background_color;

        self.state = GeometryState::Clean;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Outputs
    // ─────────────────────────────────────────────────────────────────────────

    pub fn shadow_layer(&self) -> &ShapeLayer {
        &self.shadow_layer
    }

    pub fn content_layer(&self) -> &ContentLayer {
        &self.content_layer
    }

    /// Rounded path filled by the shadow layer
    pub fn shadow_path(&self) -> Option<&Path> {
        self.shadow_layer.path.as_ref()
    }

    /// Rounded path clipping the content region
    pub fn mask_path(&self) -> Option<&Path> {
        self.content_layer.mask.as_ref()
    }
}
