//! End-to-end tests: configure a surface, run a layout pass, record a paint

use std::cell::RefCell;
use std::rc::Rc;

use floatpanel_core::{
    ClipShape, Color, CornerRadius, DrawCommand, DrawContext, Point, RecordingContext, Rect, Size,
};
use floatpanel_surface::prelude::*;
use floatpanel_surface::GeometryState;

const SIZE: Size = Size {
    width: 300.0,
    height: 500.0,
};

fn record(surface: &mut SurfaceView) -> Vec<DrawCommand> {
    let mut ctx = RecordingContext::new(SIZE);
    surface.paint(&mut ctx);
    assert_eq!(ctx.clip_depth(), 0, "paint must leave the clip stack balanced");
    ctx.take_commands()
}

fn count(commands: &[DrawCommand], pred: impl Fn(&DrawCommand) -> bool) -> usize {
    commands.iter().filter(|cmd| pred(cmd)).count()
}

/// Content that records every frame it receives and paints one marker rect
struct TrackingContent {
    frames: Rc<RefCell<Vec<Rect>>>,
    clip_manually: Option<f32>,
}

impl TrackingContent {
    const MARKER: Color = Color::rgb(0.1, 0.2, 0.3);

    fn new() -> (Self, Rc<RefCell<Vec<Rect>>>) {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let content = Self {
            frames: frames.clone(),
            clip_manually: None,
        };
        (content, frames)
    }
}

impl SurfaceContent for TrackingContent {
    fn frame_changed(&mut self, frame: Rect) {
        self.frames.borrow_mut().push(frame);
    }

    fn paint(&mut self, ctx: &mut dyn DrawContext, frame: Rect) {
        if let Some(radius) = self.clip_manually {
            ctx.push_clip(ClipShape::rounded_rect(frame, CornerRadius::top(radius)));
        }
        ctx.fill_rect(frame, CornerRadius::ZERO, Self::MARKER);
        if self.clip_manually.is_some() {
            ctx.pop_clip();
        }
    }
}

fn is_marker(cmd: &DrawCommand) -> bool {
    matches!(cmd, DrawCommand::FillRect { color, .. } if *color == TrackingContent::MARKER)
}

#[test]
fn test_rounded_top_with_straight_bottom() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(12.0);
    surface.layout(SIZE);

    let path = surface.geometry().shadow_path().unwrap();
    let points: Vec<Point> = path.points().collect();
    assert!(points.contains(&Point::new(0.0, 500.0)));
    assert!(points.contains(&Point::new(300.0, 500.0)));
    assert!(points.contains(&Point::new(12.0, 0.0)));
    assert!(points.contains(&Point::new(288.0, 0.0)));
    assert_eq!(path.curve_count(), 2);
}

#[test]
fn test_bottom_overflow_extends_paths_only() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(12.0);
    surface.set_bottom_overflow(20.0);
    surface.layout(SIZE);

    let geometry = surface.geometry();
    assert_eq!(geometry.shadow_path().unwrap().bounds().max_y(), 520.0);
    assert_eq!(geometry.mask_path().unwrap().bounds().max_y(), 520.0);
    assert_eq!(surface.bounds(), Rect::new(0.0, 0.0, 300.0, 500.0));
    assert_eq!(surface.content_frame().height(), 500.0);
}

#[test]
fn test_zero_radius_gives_plain_rect() {
    let mut surface = SurfaceView::new();
    surface.layout(SIZE);

    let path = surface.geometry().shadow_path().unwrap();
    assert_eq!(path.curve_count(), 0);
    assert_eq!(path.bounds(), Rect::new(0.0, 0.0, 300.0, 500.0));
}

#[test]
fn test_hidden_shadow_still_draws_border() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(12.0);
    surface.set_shadow_hidden(true);
    surface.set_border_color(Some(Color::RED));
    surface.set_border_width(2.0);
    surface.layout(SIZE);

    assert!(surface.geometry().shadow_layer().shadow.is_none());
    assert!(surface.geometry().shadow_layer().shadow_path.is_none());

    let commands = record(&mut surface);
    assert_eq!(
        count(&commands, |c| matches!(c, DrawCommand::DrawPathShadow { .. })),
        0
    );

    let border = commands
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::StrokeRect {
                rect,
                stroke,
                color,
                ..
            } if *color == Color::RED => Some((*rect, stroke.width)),
            _ => None,
        })
        .expect("border stroke");
    assert_eq!(border, (Rect::new(1.0, 1.0, 298.0, 498.0), 2.0));
}

#[test]
fn test_showing_shadow_again_restores_it() {
    let mut surface = SurfaceView::new();
    surface.set_shadow_hidden(true);
    surface.layout(SIZE);
    surface.set_shadow_hidden(false);
    surface.layout(SIZE);

    let commands = record(&mut surface);
    let shadow = commands
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::DrawPathShadow { shadow, .. } => Some(*shadow),
            _ => None,
        })
        .expect("shadow drawn");
    assert_eq!((shadow.offset_x, shadow.offset_y, shadow.blur), (0.0, 1.0, 3.0));
    assert!((shadow.color.a - 0.2).abs() < 1e-6);
}

#[test]
fn test_badge_toggle_does_not_invalidate_geometry() {
    let mut surface = SurfaceView::new();
    surface.layout(SIZE);
    assert_eq!(surface.geometry().state(), GeometryState::Clean);
    let texts_before = count(&record(&mut surface), |c| {
        matches!(c, DrawCommand::DrawText { .. })
    });
    assert_eq!(texts_before, 2);

    surface.set_estimate_badge_enabled(false);
    assert!(surface.estimate_badge().is_hidden());
    assert_eq!(surface.geometry().state(), GeometryState::Clean);

    let commands = record(&mut surface);
    assert_eq!(
        count(&commands, |c| matches!(c, DrawCommand::DrawText { .. })),
        0
    );
}

#[test]
fn test_paint_order() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(16.0);
    let (content, _) = TrackingContent::new();
    surface.add_content(Box::new(content));
    surface.layout(SIZE);

    let commands = record(&mut surface);
    let position = |pred: &dyn Fn(&DrawCommand) -> bool| {
        commands.iter().position(|c| pred(c)).expect("command present")
    };

    let shadow = position(&|c| matches!(c, DrawCommand::DrawPathShadow { .. }));
    let fill = position(&|c| matches!(c, DrawCommand::FillPath { .. }));
    let clip = position(&|c| matches!(c, DrawCommand::PushClip(ClipShape::Path(_))));
    let marker = position(&is_marker);
    let pop = position(&|c| matches!(c, DrawCommand::PopClip));
    let badge_text = position(&|c| matches!(c, DrawCommand::DrawText { .. }));
    let grabber = commands.len() - 1;

    assert!(shadow < fill);
    assert!(fill < clip);
    assert!(clip < marker);
    assert!(marker < pop);
    assert!(pop < badge_text);
    assert!(badge_text < grabber);
    assert!(matches!(
        commands[grabber],
        DrawCommand::FillRect { rect, .. } if rect == Rect::new(132.0, 6.0, 36.0, 5.0)
    ));
}

#[test]
fn test_mask_clip_matches_shadow_silhouette() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(24.0);
    surface.set_bottom_overflow(10.0);
    surface.layout(SIZE);

    let commands = record(&mut surface);
    let clip = commands
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::PushClip(ClipShape::Path(path)) => Some(path.clone()),
            _ => None,
        })
        .expect("mask pushed");
    assert_eq!(Some(&clip), surface.geometry().shadow_path());
}

#[test]
fn test_attached_content_follows_region() {
    let mut surface = SurfaceView::new();
    let (content, frames) = TrackingContent::new();
    let id = surface.add_content(Box::new(content));

    surface.layout(SIZE);
    assert_eq!(surface.content_frame_of(id), Some(surface.content_frame()));
    assert_eq!(
        frames.borrow().last().copied(),
        Some(Rect::new(0.0, 0.0, 300.0, 500.0))
    );

    surface.layout(Size::new(320.0, 640.0));
    assert_eq!(
        frames.borrow().last().copied(),
        Some(Rect::new(0.0, 0.0, 320.0, 640.0))
    );

    // Same size, nothing to report
    let reported = frames.borrow().len();
    surface.layout(Size::new(320.0, 640.0));
    assert_eq!(frames.borrow().len(), reported);
}

#[test]
fn test_fractional_size_keeps_content_edge_to_edge() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(12.0);
    let (content, frames) = TrackingContent::new();
    let id = surface.add_content(Box::new(content));

    let size = Size::new(300.4, 500.6);
    surface.layout(size);

    let layer_frame = surface.geometry().content_layer().frame;
    assert_eq!(layer_frame, Rect::new(0.0, 0.0, 300.4, 500.6));
    assert_eq!(surface.content_frame(), layer_frame);
    assert_eq!(surface.content_frame_of(id), Some(layer_frame));
    assert_eq!(frames.borrow().last().copied(), Some(layer_frame));

    let mask = surface.geometry().mask_path().unwrap().bounds();
    assert_eq!(mask.max_x(), layer_frame.max_x());
    assert_eq!(mask.max_y(), layer_frame.max_y());
}

#[test]
fn test_rect_clip_backend_leaves_masking_to_content() {
    let mut surface = SurfaceView::with_capabilities(RenderCapabilities::rect_clip_only());
    surface.set_corner_radius(12.0);
    let (mut content, _) = TrackingContent::new();
    content.clip_manually = Some(12.0);
    surface.add_content(Box::new(content));
    surface.layout(SIZE);

    assert!(surface.geometry().mask_path().is_none());
    assert!(surface.geometry().shadow_path().is_some());

    let commands = record(&mut surface);
    assert_eq!(
        count(&commands, |c| matches!(c, DrawCommand::PushClip(ClipShape::Path(_)))),
        0
    );
    assert_eq!(
        count(&commands, |c| matches!(
            c,
            DrawCommand::PushClip(ClipShape::RoundedRect { .. })
        )),
        1
    );
    assert_eq!(count(&commands, is_marker), 1);
}

#[test]
fn test_paint_before_layout_does_not_recompute() {
    let mut surface = SurfaceView::new();
    surface.set_corner_radius(12.0);

    let commands = record(&mut surface);
    assert!(surface.needs_layout());
    assert_eq!(
        count(&commands, |c| matches!(
            c,
            DrawCommand::FillPath { .. } | DrawCommand::DrawPathShadow { .. }
        )),
        0
    );
}

#[test]
fn test_from_config() {
    let config = SurfaceConfig::from_toml_str(
        r##"
        corner_radius = 10.0
        bottom_overflow = 8.0
        background = "none"
        shadow_hidden = true
        estimate_badge = false
        estimate_text = "3-7"

        [capabilities]
        non_rect_clip = false
        "##,
    )
    .unwrap();

    let mut surface = SurfaceView::from_config(&config).unwrap();
    assert_eq!(surface.corner_radius(), 10.0);
    assert_eq!(surface.bottom_overflow(), 8.0);
    assert_eq!(surface.background_color(), None);
    assert!(!surface.is_estimate_badge_enabled());
    assert_eq!(surface.estimate_badge().value_text(), "3-7");

    surface.layout(SIZE);
    assert!(surface.geometry().mask_path().is_none());
    assert_eq!(surface.geometry().shadow_path().unwrap().bounds().max_y(), 508.0);

    let commands = record(&mut surface);
    assert!(commands.iter().all(|c| !matches!(
        c,
        DrawCommand::FillPath { .. } | DrawCommand::DrawPathShadow { .. } | DrawCommand::DrawText { .. }
    )));
}

#[test]
fn test_from_config_rejects_invalid_values() {
    let config = SurfaceConfig {
        shadow_opacity: -0.5,
        ..SurfaceConfig::default()
    };
    assert!(SurfaceView::from_config(&config).is_err());
}
