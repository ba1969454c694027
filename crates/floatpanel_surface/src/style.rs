//! Surface styling parameters

use floatpanel_core::{Color, Vec2};

/// Background, shadow and border styling of a surface
///
/// All values are plain data; the renderer reads them when it recomputes.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceStyle {
    /// Fill for both the shadow layer and the content region. `None` paints nothing.
    pub background_color: Option<Color>,
    /// When true no shadow is applied, regardless of the other shadow fields
    pub shadow_hidden: bool,
    pub shadow_color: Color,
    /// Shadow offset in points
    pub shadow_offset: Vec2,
    /// Shadow opacity (0.0..=1.0)
    pub shadow_opacity: f32,
    /// Shadow blur radius in points
    pub shadow_radius: f32,
    /// Border color of the content region. `None` draws no border even if the width is positive.
    pub border_color: Option<Color>,
    pub border_width: f32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            background_color: Some(Color::WHITE),
            shadow_hidden: false,
            shadow_color: Color::BLACK,
            shadow_offset: Vec2::new(0.0, 1.0),
            shadow_opacity: 0.2,
            shadow_radius: 3.0,
            border_color: None,
            border_width: 0.0,
        }
    }
}

impl SurfaceStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: impl Into<Option<Color>>) -> Self {
        self.background_color = color.into();
        self
    }

    pub fn shadow_hidden(mut self, hidden: bool) -> Self {
        self.shadow_hidden = hidden;
        self
    }

    pub fn shadow(mut self, color: Color, offset: Vec2, opacity: f32, radius: f32) -> Self {
        self.shadow_color = color;
        self.shadow_offset = offset;
        self.shadow_opacity = opacity;
        self.shadow_radius = radius;
        self
    }

    pub fn border(mut self, color: impl Into<Option<Color>>, width: f32) -> Self {
        self.border_color = color.into();
        self.border_width = width;
        self
    }

    /// Clamp out-of-range values into their valid ranges
    ///
    /// Non-finite numbers fall back to zero.
    pub fn sanitized(mut self) -> Self {
        self.shadow_opacity = finite_or_zero(self.shadow_opacity).clamp(0.0, 1.0);
        self.shadow_radius = finite_or_zero(self.shadow_radius).max(0.0);
        self.border_width = finite_or_zero(self.border_width).max(0.0);
        self.shadow_offset = Vec2::new(
            finite_or_zero(self.shadow_offset.x),
            finite_or_zero(self.shadow_offset.y),
        );
        self
    }
}

pub(crate) fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
