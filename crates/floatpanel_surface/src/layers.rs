//! Render layers owned by a surface
//!
//! A surface paints through two layers: a [`ShapeLayer`] underneath that
//! carries the rounded fill and the drop shadow, and a [`ContentLayer`] for
//! the content region that carries the clip mask, fill and border. The
//! renderer assigns their properties; painting only replays them.

use floatpanel_core::{ClipShape, Color, CornerRadius, DrawContext, Path, Rect, Shadow, Stroke, Vec2};

/// Drop shadow properties as assigned to a shape layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerShadow {
    pub color: Color,
    pub offset: Vec2,
    /// 0.0..=1.0, multiplied into the color's alpha when painting
    pub opacity: f32,
    /// Blur radius in points
    pub radius: f32,
}

impl LayerShadow {
    /// Flatten into the draw-level shadow description
    pub fn to_shadow(&self) -> Shadow {
        Shadow::new(
            self.offset.x,
            self.offset.y,
            self.radius,
            self.color.with_alpha(self.color.a * self.opacity),
        )
    }
}

/// Background layer: rounded fill plus drop shadow
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeLayer {
    pub path: Option<Path>,
    pub fill_color: Option<Color>,
    pub shadow: Option<LayerShadow>,
    /// Silhouette the shadow is cast from. Without it a backend would fall
    /// back to the layer's bounding box and lose the rounded corners.
    pub shadow_path: Option<Path>,
}

impl ShapeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every shadow property
    pub fn clear_shadow(&mut self) {
        self.shadow = None;
        self.shadow_path = None;
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        if let (Some(shadow), Some(shadow_path)) = (&self.shadow, &self.shadow_path) {
            ctx.draw_path_shadow(shadow_path, shadow.to_shadow());
        }
        if let (Some(path), Some(color)) = (&self.path, self.fill_color) {
            ctx.fill_path(path, color);
        }
    }
}

/// Content region layer: clip mask, fill and rectangular border
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentLayer {
    /// Frame of the content region in surface coordinates
    pub frame: Rect,
    /// Non-rectangular clip applied to everything drawn in the region
    pub mask: Option<Path>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: f32,
}

impl ContentLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the region, running `content` between the fill and the border
    ///
    /// The border follows the rectangular frame and sits inside it. It is
    /// painted under the mask, so rounded top corners trim it.
    pub fn paint(&self, ctx: &mut dyn DrawContext, content: &mut dyn FnMut(&mut dyn DrawContext)) {
        if let Some(mask) = &self.mask {
            ctx.push_clip(ClipShape::path(mask.clone()));
        }

        if let Some(color) = self.background_color {
            ctx.fill_rect(self.frame, CornerRadius::ZERO, color);
        }

        content(ctx);

        if let Some(color) = self.border_color {
            if self.border_width > 0.0 {
                let half = self.border_width / 2.0;
                ctx.stroke_rect(
                    self.frame.inset(half, half),
                    CornerRadius::ZERO,
                    &Stroke::new(self.border_width),
                    color,
                );
            }
        }

        if self.mask.is_some() {
            ctx.pop_clip();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatpanel_core::{DrawCommand, RecordingContext, Size};

    #[test]
    fn test_shadow_opacity_folds_into_alpha() {
        let shadow = LayerShadow {
            color: Color::BLACK.with_alpha(0.5),
            offset: Vec2::new(0.0, 1.0),
            opacity: 0.2,
            radius: 3.0,
        }
        .to_shadow();

        assert_eq!(shadow.offset_y, 1.0);
        assert_eq!(shadow.blur, 3.0);
        assert!((shadow.color.a - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_shape_layer_without_shadow_only_fills() {
        let path = Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let layer = ShapeLayer {
            path: Some(path.clone()),
            fill_color: Some(Color::WHITE),
            ..ShapeLayer::new()
        };

        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        layer.paint(&mut ctx);
        assert_eq!(
            ctx.commands(),
            &[DrawCommand::FillPath {
                path,
                color: Color::WHITE
            }]
        );
    }

    #[test]
    fn test_content_layer_without_mask_or_border() {
        let layer = ContentLayer {
            frame: Rect::new(0.0, 0.0, 10.0, 10.0),
            background_color: None,
            border_color: None,
            border_width: 4.0,
            ..ContentLayer::new()
        };

        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        let mut ran = false;
        layer.paint(&mut ctx, &mut |_| ran = true);

        assert!(ran);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_content_layer_border_inside_mask() {
        let mask = Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadius::top(2.0));
        let layer = ContentLayer {
            frame: Rect::new(0.0, 0.0, 10.0, 10.0),
            mask: Some(mask.clone()),
            background_color: Some(Color::WHITE),
            border_color: Some(Color::RED),
            border_width: 2.0,
        };

        let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
        layer.paint(&mut ctx, &mut |_| {});

        let commands = ctx.commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[0], DrawCommand::PushClip(ClipShape::path(mask)));
        assert_eq!(
            commands[2],
            DrawCommand::StrokeRect {
                rect: Rect::new(1.0, 1.0, 8.0, 8.0),
                corner_radius: CornerRadius::ZERO,
                stroke: Stroke::new(2.0),
                color: Color::RED,
            }
        );
        assert_eq!(commands[3], DrawCommand::PopClip);
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn test_border_needs_color_and_width() {
        let frame = Rect::new(0.0, 0.0, 10.0, 10.0);
        for (border_color, border_width) in [(None, 2.0), (Some(Color::RED), 0.0)] {
            let layer = ContentLayer {
                frame,
                border_color,
                border_width,
                ..ContentLayer::new()
            };

            let mut ctx = RecordingContext::new(Size::new(10.0, 10.0));
            layer.paint(&mut ctx, &mut |_| {});
            assert!(ctx.commands().is_empty());
        }
    }
}
