//! Draw Context - recording rendering API
//!
//! The `DrawContext` trait is the seam between views and whatever backend
//! rasterizes them. Views describe their render layers as fills, strokes,
//! shadows and clips; a backend (or the `RecordingContext` used by tests and
//! the preview tool) consumes them in painter's order.
//!
//! # Example
//!
//! ```
//! use floatpanel_core::{Color, CornerRadius, DrawContext, Path, Rect, RecordingContext, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(300.0, 500.0));
//! let path = Path::rounded_rect(Rect::new(0.0, 0.0, 300.0, 500.0), CornerRadius::top(12.0));
//! ctx.fill_path(&path, Color::WHITE);
//! assert_eq!(ctx.commands().len(), 1);
//! ```

use smallvec::SmallVec;

use crate::geometry::{Point, Rect, Size};
use crate::style::{ClipShape, Color, CornerRadius, Shadow};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self { width }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Text alignment within the layout box handed to `draw_text`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
}

/// Text style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name
    pub family: String,
    /// Font size in points
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub align: TextAlign,
    /// Line height multiplier
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "system-ui".to_string(),
            size: 14.0,
            weight: FontWeight::Regular,
            color: Color::BLACK,
            align: TextAlign::Left,
            line_height: 1.2,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Height of a single line of text in this style
    pub fn line_box_height(&self) -> f32 {
        self.size * self.line_height
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a rectangle path
    pub fn rect(rect: Rect) -> Self {
        Self::new()
            .move_to(rect.x(), rect.y())
            .line_to(rect.max_x(), rect.y())
            .line_to(rect.max_x(), rect.max_y())
            .line_to(rect.x(), rect.max_y())
            .close()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// On-curve points in command order (control points excluded)
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        })
    }

    /// Number of curved segments in the path
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::CubicTo { .. }))
            .count()
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Control points are included, which is exact for the convex corner
    /// curves produced by `rounded_rect`.
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }

    /// Create a rounded rectangle path
    ///
    /// Each radius is clamped to `0..=min(width, height) / 2`, so oversized
    /// radii never produce self-intersecting outlines and non-positive radii
    /// leave that corner square.
    pub fn rounded_rect(rect: Rect, corner_radius: impl Into<CornerRadius>) -> Self {
        let r = corner_radius.into();
        let x = rect.x();
        let y = rect.y();
        let w = rect.width();
        let h = rect.height();

        let max_r = (w.min(h) / 2.0).max(0.0);
        let clamp = |radius: f32| {
            if radius.is_nan() {
                0.0
            } else {
                radius.clamp(0.0, max_r)
            }
        };
        let tl = clamp(r.top_left);
        let tr = clamp(r.top_right);
        let br = clamp(r.bottom_right);
        let bl = clamp(r.bottom_left);

        // Magic number for cubic Bézier circle approximation
        let k = 0.5522847498;

        let mut path = Self::new().move_to(x + tl, y);

        // Top edge
        path = path.line_to(x + w - tr, y);
        if tr > 0.0 {
            path = path.cubic_to(
                x + w - tr * (1.0 - k),
                y,
                x + w,
                y + tr * (1.0 - k),
                x + w,
                y + tr,
            );
        }

        // Right edge
        path = path.line_to(x + w, y + h - br);
        if br > 0.0 {
            path = path.cubic_to(
                x + w,
                y + h - br * (1.0 - k),
                x + w - br * (1.0 - k),
                y + h,
                x + w - br,
                y + h,
            );
        }

        // Bottom edge
        path = path.line_to(x + bl, y + h);
        if bl > 0.0 {
            path = path.cubic_to(
                x + bl * (1.0 - k),
                y + h,
                x,
                y + h - bl * (1.0 - k),
                x,
                y + h - bl,
            );
        }

        // Left edge
        path = path.line_to(x, y + tl);
        if tl > 0.0 {
            path = path.cubic_to(x, y + tl * (1.0 - k), x + tl * (1.0 - k), y, x + tl, y);
        }

        path.close()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing interface that views paint their render layers into
pub trait DrawContext {
    /// Push a clip shape onto the stack
    fn push_clip(&mut self, shape: ClipShape);

    /// Pop the top clip from the stack
    fn pop_clip(&mut self);

    /// Fill a path with a solid color
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, color: Color);

    /// Stroke a rectangle
    fn stroke_rect(&mut self, rect: Rect, corner_radius: CornerRadius, stroke: &Stroke, color: Color);

    /// Draw text laid out inside `rect`
    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle);

    /// Draw a drop shadow for a rounded rectangle
    fn draw_shadow(&mut self, rect: Rect, corner_radius: CornerRadius, shadow: Shadow);

    /// Draw a drop shadow whose silhouette is an arbitrary path
    ///
    /// The default falls back to the path's bounding box, which loses any
    /// rounding; backends that can rasterize path shadows should override it.
    fn draw_path_shadow(&mut self, path: &Path, shadow: Shadow) {
        self.draw_shadow(path.bounds(), CornerRadius::ZERO, shadow);
    }

    /// Get the current viewport size
    fn viewport_size(&self) -> Size;
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushClip(ClipShape),
    PopClip,
    FillPath {
        path: Path,
        color: Color,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        color: Color,
    },
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        corner_radius: CornerRadius,
        stroke: Stroke,
        color: Color,
    },
    DrawText {
        text: String,
        rect: Rect,
        style: TextStyle,
    },
    DrawShadow {
        rect: Rect,
        corner_radius: CornerRadius,
        shadow: Shadow,
    },
    DrawPathShadow {
        path: Path,
        shadow: Shadow,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    clip_stack: SmallVec<[Rect; 4]>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            clip_stack: SmallVec::new(),
            viewport,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of clips currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }
}

impl DrawContext for RecordingContext {
    fn push_clip(&mut self, shape: ClipShape) {
        self.clip_stack.push(shape.bounds());
        self.commands.push(DrawCommand::PushClip(shape));
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("pop_clip called with an empty clip stack");
            return;
        }
        self.commands.push(DrawCommand::PopClip);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, corner_radius: CornerRadius, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            corner_radius,
            stroke: stroke.clone(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            rect,
            style: style.clone(),
        });
    }

    fn draw_shadow(&mut self, rect: Rect, corner_radius: CornerRadius, shadow: Shadow) {
        self.commands.push(DrawCommand::DrawShadow {
            rect,
            corner_radius,
            shadow,
        });
    }

    fn draw_path_shadow(&mut self, path: &Path, shadow: Shadow) {
        self.commands.push(DrawCommand::DrawPathShadow {
            path: path.clone(),
            shadow,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
