//! Surface view
//!
//! The body of a floating panel. Owns the subview tree (content region,
//! estimate badge, grab handle), the geometry renderer and its layers.
//!
//! # Example
//!
//! ```
//! use floatpanel_core::{RecordingContext, Size};
//! use floatpanel_surface::SurfaceView;
//!
//! let mut surface = SurfaceView::new();
//! surface.set_corner_radius(12.0);
//! assert!(surface.needs_layout());
//!
//! surface.layout(Size::new(375.0, 600.0));
//! assert!(!surface.needs_layout());
//!
//! let mut ctx = RecordingContext::new(Size::new(375.0, 600.0));
//! surface.paint(&mut ctx);
//! ```

use floatpanel_core::{Color, DrawContext, Rect, Size, Vec2};
use floatpanel_layout::{LayoutNodeId, LayoutStyle, LayoutTree};
use taffy::prelude::AvailableSpace;

use crate::badge::{BadgeFrames, EstimateBadge};
use crate::config::SurfaceConfig;
use crate::content::{AttachedContent, ContentId, SurfaceContent};
use crate::error::Result;
use crate::grabber::{GrabberHandle, GRABBER_TOP_PADDING};
use crate::renderer::{RenderCapabilities, SurfaceGeometryRenderer};
use crate::style::SurfaceStyle;

/// Rounded panel body with shadow, masked content region, grab handle and badge
pub struct SurfaceView {
    tree: LayoutTree,
    root: LayoutNodeId,
    content_node: LayoutNodeId,
    grabber_node: LayoutNodeId,
    badge_node: LayoutNodeId,
    ring_node: LayoutNodeId,
    value_node: LayoutNodeId,
    unit_node: LayoutNodeId,

    size: Size,
    content_frame: Rect,
    renderer: SurfaceGeometryRenderer,
    grabber: GrabberHandle,
    badge: EstimateBadge,
    contents: Vec<AttachedContent>,
}

impl Default for SurfaceView {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceView {
    /// Height of the strip at the top reserved for the grab handle
    pub const TOP_GRABBER_BAR_HEIGHT: f32 = GRABBER_TOP_PADDING * 2.0 + GrabberHandle::HEIGHT;

    pub fn new() -> Self {
        Self::with_capabilities(RenderCapabilities::default())
    }

    /// Create a surface for a backend with the given capabilities
    pub fn with_capabilities(capabilities: RenderCapabilities) -> Self {
        let badge = EstimateBadge::new();
        let mut tree = LayoutTree::new();

        let root = tree.create_node(Self::root_style(Size::ZERO));
        let content_node = tree.create_node(LayoutStyle::new().absolute().pin_edges(0.0));
        let badge_node = tree.create_node(EstimateBadge::container_style());
        let ring_node = tree.create_node(EstimateBadge::ring_style());
        let value_node = tree.create_node(badge.value_style());
        let unit_node = tree.create_node(badge.unit_style());
        let grabber_node = tree.create_node(GrabberHandle::layout_style());

        tree.add_child(root, content_node);
        tree.add_child(root, badge_node);
        tree.add_child(badge_node, ring_node);
        tree.add_child(ring_node, value_node);
        tree.add_child(ring_node, unit_node);
        tree.add_child(root, grabber_node);

        Self {
            tree,
            root,
            content_node,
            grabber_node,
            badge_node,
            ring_node,
            value_node,
            unit_node,
            size: Size::ZERO,
            content_frame: Rect::ZERO,
            renderer: SurfaceGeometryRenderer::new(capabilities),
            grabber: GrabberHandle::new(),
            badge,
            contents: Vec::new(),
        }
    }

    /// Create a surface from a validated configuration
    pub fn from_config(config: &SurfaceConfig) -> Result<Self> {
        config.validate()?;

        let mut surface = Self::with_capabilities(config.capabilities);
        surface.set_style(config.style()?);
        surface.set_corner_radius(config.corner_radius);
        surface.set_bottom_overflow(config.bottom_overflow);
        surface.set_estimate_badge_enabled(config.estimate_badge);
        surface.set_estimate_text(config.estimate_text.clone());
        Ok(surface)
    }

    /// Height of the strip at the top reserved for the grab handle
    pub const fn top_grabber_bar_height() -> f32 {
        Self::TOP_GRABBER_BAR_HEIGHT
    }

    fn root_style(size: Size) -> LayoutStyle {
        LayoutStyle::new()
            .flex_col()
            .items_center()
            .size(size.width, size.height)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Styling
    // ─────────────────────────────────────────────────────────────────────────

    pub fn style(&self) -> &SurfaceStyle {
        self.renderer.style()
    }

    pub fn set_style(&mut self, style: SurfaceStyle) {
        self.renderer.set_style(style);
    }

    pub fn background_color(&self) -> Option<Color> {
        self.renderer.style().background_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.renderer.set_background_color(color);
    }

    pub fn corner_radius(&self) -> f32 {
        self.renderer.corner_radius()
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.renderer.set_corner_radius(radius);
    }

    pub fn bottom_overflow(&self) -> f32 {
        self.renderer.bottom_overflow()
    }

    pub fn set_bottom_overflow(&mut self, overflow: f32) {
        self.renderer.set_bottom_overflow(overflow);
    }

    pub fn set_shadow_hidden(&mut self, hidden: bool) {
        self.renderer.set_shadow_hidden(hidden);
    }

    pub fn set_shadow_color(&mut self, color: Color) {
        self.renderer.set_shadow_color(color);
    }

    pub fn set_shadow_offset(&mut self, offset: Vec2) {
        self.renderer.set_shadow_offset(offset);
    }

    pub fn set_shadow_opacity(&mut self, opacity: f32) {
        self.renderer.set_shadow_opacity(opacity);
    }

    pub fn set_shadow_radius(&mut self, radius: f32) {
        self.renderer.set_shadow_radius(radius);
    }

    pub fn set_border_color(&mut self, color: Option<Color>) {
        self.renderer.set_border_color(color);
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.renderer.set_border_width(width);
    }

    pub fn geometry(&self) -> &SurfaceGeometryRenderer {
        &self.renderer
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Subviews
    // ─────────────────────────────────────────────────────────────────────────

    pub fn grabber_handle(&self) -> &GrabberHandle {
        &self.grabber
    }

    pub fn grabber_handle_mut(&mut self) -> &mut GrabberHandle {
        &mut self.grabber
    }

    pub fn estimate_badge(&self) -> &EstimateBadge {
        &self.badge
    }

    pub fn is_estimate_badge_enabled(&self) -> bool {
        !self.badge.is_hidden()
    }

    /// Show or hide the estimate badge. Never invalidates the geometry.
    pub fn set_estimate_badge_enabled(&mut self, enabled: bool) {
        tracing::trace!(enabled, "estimate badge toggled");
        self.badge.set_hidden(!enabled);
    }

    pub fn set_estimate_text(&mut self, text: impl Into<String>) {
        self.badge.set_value_text(text);
    }

    /// Attach host content to the content region, pinned edge-to-edge
    pub fn add_content(&mut self, view: Box<dyn SurfaceContent>) -> ContentId {
        let node = self
            .tree
            .create_node(LayoutStyle::new().absolute().pin_edges(0.0));
        self.tree.add_child(self.content_node, node);

        let id = ContentId(node);
        let mut attached = AttachedContent {
            id,
            frame: Rect::ZERO,
            view,
        };
        attached.set_frame(self.content_frame);
        self.contents.push(attached);
        id
    }

    /// Detach previously attached content and hand it back
    pub fn remove_content(&mut self, id: ContentId) -> Option<Box<dyn SurfaceContent>> {
        let index = self.contents.iter().position(|c| c.id == id)?;
        self.tree.remove_node(id.0);
        Some(self.contents.remove(index).view)
    }

    pub fn content_count(&self) -> usize {
        self.contents.len()
    }

    /// Frame of the content region, as of the last layout pass
    pub fn content_frame(&self) -> Rect {
        self.content_frame
    }

    /// Frame assigned to attached content, as of the last layout pass
    pub fn content_frame_of(&self, id: ContentId) -> Option<Rect> {
        self.contents.iter().find(|c| c.id == id).map(|c| c.frame)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout & paint
    // ─────────────────────────────────────────────────────────────────────────

    /// Current layout bounds in local coordinates
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }

    /// Whether geometry changed since the last layout pass
    pub fn needs_layout(&self) -> bool {
        self.renderer.is_dirty()
    }

    /// Layout pass: place subviews and recompute geometry
    pub fn layout(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.tree.set_style(self.root, Self::root_style(size));
            self.renderer.set_bounds(size.to_rect());
        }

        self.tree.compute_layout(
            self.root,
            taffy::prelude::Size {
                width: AvailableSpace::Definite(size.width),
                height: AvailableSpace::Definite(size.height),
            },
        );
        self.apply_frames();
        self.renderer.recompute();
    }

    /// Run a layout pass only if the size changed or the geometry is dirty
    pub fn layout_if_needed(&mut self, size: Size) {
        if size != self.size || self.renderer.is_dirty() {
            self.layout(size);
        }
    }

    fn apply_frames(&mut self) {
        let tree = &self.tree;
        let frame_of = |id: LayoutNodeId| -> Rect {
            tree.root_bounds(id).map(Rect::from).unwrap_or_default()
        };

        self.content_frame = frame_of(self.content_node);
        self.grabber.set_frame(frame_of(self.grabber_node));
        self.badge.set_frames(BadgeFrames {
            container: frame_of(self.badge_node),
            ring: frame_of(self.ring_node),
            value: frame_of(self.value_node),
            unit: frame_of(self.unit_node),
        });
        for attached in &mut self.contents {
            attached.set_frame(frame_of(attached.id.0));
        }
    }

    /// Paint the layers back to front
    ///
    /// Paints whatever the last recompute produced; it never recomputes.
    pub fn paint(&mut self, ctx: &mut dyn DrawContext) {
        if self.renderer.is_dirty() {
            tracing::debug!("painting surface with stale geometry, layout has not run");
        }

        self.renderer.shadow_layer().paint(ctx);

        let contents = &mut self.contents;
        self.renderer.content_layer().paint(ctx, &mut |ctx| {
            for attached in contents.iter_mut() {
                attached.view.paint(ctx, attached.frame);
            }
        });

        self.badge.paint(ctx);
        self.grabber.paint(ctx);
    }
}
