//! Grab handle shown at the top of a surface

use floatpanel_core::{Color, CornerRadius, DrawContext, Rect};
use floatpanel_layout::LayoutStyle;

/// Gap between the surface's top edge and the grab handle
pub const GRABBER_TOP_PADDING: f32 = 6.0;

/// Small pill-shaped bar hinting that the panel can be dragged
#[derive(Clone, Debug, PartialEq)]
pub struct GrabberHandle {
    pub bar_color: Color,
    frame: Rect,
}

impl Default for GrabberHandle {
    fn default() -> Self {
        Self {
            bar_color: Self::BAR_COLOR,
            frame: Rect::new(0.0, GRABBER_TOP_PADDING, Self::WIDTH, Self::HEIGHT),
        }
    }
}

impl GrabberHandle {
    pub const WIDTH: f32 = 36.0;
    pub const HEIGHT: f32 = 5.0;
    pub const BAR_COLOR: Color = Color::rgb(0.76, 0.77, 0.76);

    pub fn new() -> Self {
        Self::default()
    }

    /// In-flow child of a centered column, pushed down by the top padding
    pub(crate) fn layout_style() -> LayoutStyle {
        LayoutStyle::new()
            .size(Self::WIDTH, Self::HEIGHT)
            .margin_top(GRABBER_TOP_PADDING)
            .no_shrink()
    }

    /// Frame in surface coordinates, as of the last layout pass
    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let radius = self.frame.height() / 2.0;
        ctx.fill_rect(self.frame, CornerRadius::uniform(radius), self.bar_color);
    }
}
