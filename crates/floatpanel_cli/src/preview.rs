//! Plain-text surface preview

use std::fmt::Write;

use floatpanel_core::{ClipShape, DrawCommand, Path, RecordingContext, Rect};
use floatpanel_surface::SurfaceView;

fn rect(r: Rect) -> String {
    format!(
        "({:.1}, {:.1}) {:.1}x{:.1}",
        r.x(),
        r.y(),
        r.width(),
        r.height()
    )
}

fn path_summary(path: &Path) -> String {
    format!(
        "{} commands, {} curves, bounds {}",
        path.commands().len(),
        path.curve_count(),
        rect(path.bounds())
    )
}

/// One-line description of a recorded command
pub fn describe(cmd: &DrawCommand) -> String {
    match cmd {
        DrawCommand::PushClip(ClipShape::Path(path)) => {
            format!("push clip path [{}]", path_summary(path))
        }
        DrawCommand::PushClip(shape) => format!("push clip {}", rect(shape.bounds())),
        DrawCommand::PopClip => "pop clip".to_string(),
        DrawCommand::FillPath { path, color } => {
            format!("fill path {} [{}]", color.to_hex_string(), path_summary(path))
        }
        DrawCommand::StrokePath {
            path,
            stroke,
            color,
        } => format!(
            "stroke path {} width {} [{}]",
            color.to_hex_string(),
            stroke.width,
            path_summary(path)
        ),
        DrawCommand::FillRect { rect: r, color, .. } => {
            format!("fill rect {} {}", color.to_hex_string(), rect(*r))
        }
        DrawCommand::StrokeRect {
            rect: r,
            stroke,
            color,
            ..
        } => format!(
            "stroke rect {} width {} {}",
            color.to_hex_string(),
            stroke.width,
            rect(*r)
        ),
        DrawCommand::DrawText { text, rect: r, style } => {
            format!("text {:?} {}pt {}", text, style.size, rect(*r))
        }
        DrawCommand::DrawShadow { rect: r, shadow, .. } => {
            format!("shadow blur {} {}", shadow.blur, rect(*r))
        }
        DrawCommand::DrawPathShadow { path, shadow } => format!(
            "path shadow offset ({}, {}) blur {} alpha {:.2} [{}]",
            shadow.offset_x,
            shadow.offset_y,
            shadow.blur,
            shadow.color.a,
            path_summary(path)
        ),
    }
}

/// Describe a laid-out surface and, optionally, everything it paints
pub fn render(surface: &mut SurfaceView, show_commands: bool) -> String {
    let mut out = String::new();
    let bounds = surface.bounds();

    // Writing into a String cannot fail
    let _ = writeln!(
        out,
        "surface {:.1}x{:.1}, corner radius {}, bottom overflow {}",
        bounds.width(),
        bounds.height(),
        surface.corner_radius(),
        surface.bottom_overflow()
    );
    let _ = writeln!(out, "  content  {}", rect(surface.content_frame()));
    let _ = writeln!(out, "  grabber  {}", rect(surface.grabber_handle().frame()));
    if surface.is_estimate_badge_enabled() {
        let frames = surface.estimate_badge().frames();
        let _ = writeln!(out, "  badge    {}", rect(frames.container));
    } else {
        let _ = writeln!(out, "  badge    hidden");
    }

    let geometry = surface.geometry();
    match geometry.shadow_path() {
        Some(path) => {
            let _ = writeln!(out, "silhouette [{}]", path_summary(path));
        }
        None => {
            let _ = writeln!(out, "silhouette not computed");
        }
    }
    if geometry.mask_path().is_some() {
        let _ = writeln!(out, "mask       same path");
    } else {
        let _ = writeln!(out, "mask       none, content must clip itself");
    }

    let mut ctx = RecordingContext::new(bounds.size());
    surface.paint(&mut ctx);
    let commands = ctx.take_commands();
    let _ = writeln!(out, "{} draw commands", commands.len());
    if show_commands {
        for (index, cmd) in commands.iter().enumerate() {
            let _ = writeln!(out, "  {index:>3} {}", describe(cmd));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatpanel_core::Size;
    use floatpanel_surface::RenderCapabilities;

    #[test]
    fn test_render_default_surface() {
        let mut surface = SurfaceView::new();
        surface.set_corner_radius(12.0);
        surface.layout(Size::new(300.0, 500.0));

        let text = render(&mut surface, true);
        assert!(text.starts_with("surface 300.0x500.0, corner radius 12"));
        assert!(text.contains("grabber  (132.0, 6.0) 36.0x5.0"));
        assert!(text.contains("mask       same path"));
        assert!(text.contains("path shadow offset (0, 1) blur 3 alpha 0.20"));
        assert!(text.contains("text \"MIN\""));
    }

    #[test]
    fn test_render_without_path_clipping() {
        let mut surface = SurfaceView::with_capabilities(RenderCapabilities::rect_clip_only());
        surface.set_estimate_badge_enabled(false);
        surface.layout(Size::new(300.0, 500.0));

        let text = render(&mut surface, false);
        assert!(text.contains("badge    hidden"));
        assert!(text.contains("mask       none"));
        assert!(!text.contains("push clip"));
    }
}
