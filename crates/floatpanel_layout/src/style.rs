//! Builder for Taffy styles
//!
//! Subview placement is expressed as edge pins, fixed sizes and flex
//! alignment, the same vocabulary constraint-based toolkits use, and
//! lowered into a `taffy::Style`.

use taffy::prelude::*;

/// Layout style builder
///
/// ```
/// use floatpanel_layout::LayoutStyle;
///
/// // Fill the parent edge-to-edge
/// let fill = LayoutStyle::new().absolute().pin_edges(0.0).build();
/// assert_eq!(fill.position, taffy::style::Position::Absolute);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutStyle {
    style: Style,
}

impl LayoutStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flex container laying children out top to bottom
    pub fn flex_col(mut self) -> Self {
        self.style.display = Display::Flex;
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Center in-flow children on the cross axis
    pub fn items_center(mut self) -> Self {
        self.style.align_items = Some(AlignItems::Center);
        self
    }

    /// Take the node out of flow; it is placed by its insets only
    pub fn absolute(mut self) -> Self {
        self.style.position = Position::Absolute;
        self
    }

    pub fn w(mut self, width: f32) -> Self {
        self.style.size.width = Dimension::Length(width);
        self
    }

    pub fn h(mut self, height: f32) -> Self {
        self.style.size.height = Dimension::Length(height);
        self
    }

    /// Fixed width and height
    pub fn size(self, width: f32, height: f32) -> Self {
        self.w(width).h(height)
    }

    pub fn top(mut self, value: f32) -> Self {
        self.style.inset.top = LengthPercentageAuto::Length(value);
        self
    }

    pub fn right(mut self, value: f32) -> Self {
        self.style.inset.right = LengthPercentageAuto::Length(value);
        self
    }

    pub fn bottom(mut self, value: f32) -> Self {
        self.style.inset.bottom = LengthPercentageAuto::Length(value);
        self
    }

    pub fn left(mut self, value: f32) -> Self {
        self.style.inset.left = LengthPercentageAuto::Length(value);
        self
    }

    /// Pin all four edges to the parent's edges with the same inset
    pub fn pin_edges(self, inset: f32) -> Self {
        self.top(inset).right(inset).bottom(inset).left(inset)
    }

    /// Pin left and right edges with the same inset
    pub fn pin_horizontal(self, inset: f32) -> Self {
        self.left(inset).right(inset)
    }

    pub fn margin_top(mut self, value: f32) -> Self {
        self.style.margin.top = LengthPercentageAuto::Length(value);
        self
    }

    /// Never shrink below the fixed size when the parent is tight
    pub fn no_shrink(mut self) -> Self {
        self.style.flex_shrink = 0.0;
        self
    }

    pub fn build(self) -> Style {
        self.style
    }
}

impl From<LayoutStyle> for Style {
    fn from(builder: LayoutStyle) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_edges() {
        let style = LayoutStyle::new().absolute().pin_edges(5.0).build();
        assert_eq!(style.position, Position::Absolute);
        assert_eq!(style.inset.top, LengthPercentageAuto::Length(5.0));
        assert_eq!(style.inset.right, LengthPercentageAuto::Length(5.0));
        assert_eq!(style.inset.bottom, LengthPercentageAuto::Length(5.0));
        assert_eq!(style.inset.left, LengthPercentageAuto::Length(5.0));
    }

    #[test]
    fn test_fixed_size_keeps_other_insets_auto() {
        let style = LayoutStyle::new().absolute().size(80.0, 80.0).right(20.0).build();
        assert_eq!(style.size.width, Dimension::Length(80.0));
        assert_eq!(style.size.height, Dimension::Length(80.0));
        assert_eq!(style.inset.left, LengthPercentageAuto::Auto);
        assert_eq!(style.inset.right, LengthPercentageAuto::Length(20.0));
    }
}
