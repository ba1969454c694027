//! Estimated-time badge
//!
//! A circular badge straddling the surface's top edge near the right corner.
//! It shows an estimate ("1-5") above a unit label ("MIN"). Toggling it only
//! flips its hidden flag; the surface geometry is unaffected.

use floatpanel_core::{
    Color, CornerRadius, DrawContext, FontWeight, Rect, Stroke, TextAlign, TextStyle,
};
use floatpanel_layout::LayoutStyle;

const CONTAINER_SIZE: f32 = 80.0;
const CONTAINER_RIGHT_INSET: f32 = 20.0;
const CONTAINER_CORNER_RADIUS: f32 = 40.0;
const RING_INSET: f32 = 5.0;
const RING_BORDER_WIDTH: f32 = 1.0;
const VALUE_TOP: f32 = 8.0;
const VALUE_SIDE_INSET: f32 = 1.0;
const UNIT_BOTTOM: f32 = 6.0;

const CONTAINER_COLOR: Color = Color::rgb8(245, 247, 248);
const RING_COLOR: Color = Color::WHITE;
const RING_BORDER_COLOR: Color = Color::rgb8(76, 187, 255);
const TEXT_COLOR: Color = Color::rgb8(8, 12, 78);

/// Badge frames resolved by the surface's layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BadgeFrames {
    pub container: Rect,
    pub ring: Rect,
    pub value: Rect,
    pub unit: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EstimateBadge {
    hidden: bool,
    value_text: String,
    unit_text: String,
    value_style: TextStyle,
    unit_style: TextStyle,
    frames: BadgeFrames,
}

impl Default for EstimateBadge {
    fn default() -> Self {
        Self {
            hidden: false,
            value_text: "1-5".to_string(),
            unit_text: "MIN".to_string(),
            value_style: TextStyle::new(32.0)
                .with_family("Barlow-Regular")
                .with_color(TEXT_COLOR)
                .with_align(TextAlign::Center),
            unit_style: TextStyle::new(12.0)
                .with_family("Barlow-Medium")
                .with_weight(FontWeight::Medium)
                .with_color(TEXT_COLOR)
                .with_align(TextAlign::Center),
            frames: BadgeFrames::default(),
        }
    }
}

impl EstimateBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    pub fn set_value_text(&mut self, text: impl Into<String>) {
        self.value_text = text.into();
    }

    pub fn unit_text(&self) -> &str {
        &self.unit_text
    }

    pub fn frames(&self) -> BadgeFrames {
        self.frames
    }

    pub(crate) fn set_frames(&mut self, frames: BadgeFrames) {
        self.frames = frames;
    }

    /// Fixed-size container, right-aligned, centered on the surface's top edge
    pub(crate) fn container_style() -> LayoutStyle {
        LayoutStyle::new()
            .absolute()
            .size(CONTAINER_SIZE, CONTAINER_SIZE)
            .right(CONTAINER_RIGHT_INSET)
            .top(-CONTAINER_SIZE / 2.0)
    }

    pub(crate) fn ring_style() -> LayoutStyle {
        LayoutStyle::new().absolute().pin_edges(RING_INSET)
    }

    pub(crate) fn value_style(&self) -> LayoutStyle {
        LayoutStyle::new()
            .absolute()
            .pin_horizontal(VALUE_SIDE_INSET)
            .top(VALUE_TOP)
            .h(self.value_style.line_box_height())
    }

    pub(crate) fn unit_style(&self) -> LayoutStyle {
        LayoutStyle::new()
            .absolute()
            .pin_horizontal(0.0)
            .bottom(UNIT_BOTTOM)
            .h(self.unit_style.line_box_height())
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        if self.hidden {
            return;
        }

        let frames = &self.frames;
        ctx.fill_rect(
            frames.container,
            CornerRadius::uniform(CONTAINER_CORNER_RADIUS),
            CONTAINER_COLOR,
        );

        // Ring radius tracks its laid-out height so it stays circular
        let ring_radius = CornerRadius::uniform(frames.ring.height() / 2.0);
        ctx.fill_rect(frames.ring, ring_radius, RING_COLOR);
        let half = RING_BORDER_WIDTH / 2.0;
        ctx.stroke_rect(
            frames.ring.inset(half, half),
            ring_radius,
            &Stroke::new(RING_BORDER_WIDTH),
            RING_BORDER_COLOR,
        );

        ctx.draw_text(&self.value_text, frames.value, &self.value_style);
        ctx.draw_text(&self.unit_text, frames.unit, &self.unit_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatpanel_core::{DrawCommand, RecordingContext, Size};

    #[test]
    fn test_hidden_badge_paints_nothing() {
        let mut badge = EstimateBadge::new();
        badge.set_hidden(true);

        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        badge.paint(&mut ctx);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_badge_paints_texts() {
        let mut badge = EstimateBadge::new();
        badge.set_value_text("10-15");

        let mut ctx = RecordingContext::new(Size::new(100.0, 100.0));
        badge.paint(&mut ctx);

        let texts: Vec<&str> = ctx
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["10-15", "MIN"]);
    }
}
