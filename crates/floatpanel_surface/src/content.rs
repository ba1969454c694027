//! Content hosted inside a surface

use floatpanel_core::{DrawContext, Rect};
use floatpanel_layout::LayoutNodeId;

/// A view owned by the host application and displayed in a surface's content region
///
/// Attached content is pinned edge-to-edge to the content region, so its
/// frame always equals the region's frame after a layout pass.
pub trait SurfaceContent {
    /// Called when the frame assigned by the surface changes
    fn frame_changed(&mut self, _frame: Rect) {}

    /// Paint into `frame`. The surface's content mask is already applied
    /// when the backend supports path clipping.
    fn paint(&mut self, ctx: &mut dyn DrawContext, frame: Rect);
}

/// Handle to content attached with `SurfaceView::add_content`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentId(pub(crate) LayoutNodeId);

pub(crate) struct AttachedContent {
    pub(crate) id: ContentId,
    pub(crate) frame: Rect,
    pub(crate) view: Box<dyn SurfaceContent>,
}

impl AttachedContent {
    pub(crate) fn set_frame(&mut self, frame: Rect) {
        if self.frame != frame {
            self.frame = frame;
            self.view.frame_changed(frame);
        }
    }
}
