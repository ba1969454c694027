//! Surface appearance configuration
//!
//! Appearance can be loaded from TOML. Every key is optional and falls back
//! to the component default:
//!
//! ```toml
//! corner_radius = 12.0
//! bottom_overflow = 0.0
//! background = "#ffffff"       # or "none"
//! shadow_hidden = false
//! shadow_color = "#000000"
//! shadow_offset = [0.0, 1.0]
//! shadow_opacity = 0.2
//! shadow_radius = 3.0
//! border_color = "#ff0000"     # omit for no border
//! border_width = 0.0
//! estimate_badge = true
//! estimate_text = "1-5"
//!
//! [capabilities]
//! non_rect_clip = true
//! ```

use std::fs;
use std::path::Path;

use floatpanel_core::{Color, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SurfaceError};
use crate::renderer::RenderCapabilities;
use crate::style::SurfaceStyle;

/// Surface appearance as stored in a config file
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub corner_radius: f32,
    pub bottom_overflow: f32,
    pub background: String,
    pub shadow_hidden: bool,
    pub shadow_color: String,
    pub shadow_offset: [f32; 2],
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_width: f32,
    pub estimate_badge: bool,
    pub estimate_text: String,
    pub capabilities: RenderCapabilities,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            corner_radius: 0.0,
            bottom_overflow: 0.0,
            background: "#ffffff".to_string(),
            shadow_hidden: false,
            shadow_color: "#000000".to_string(),
            shadow_offset: [0.0, 1.0],
            shadow_opacity: 0.2,
            shadow_radius: 3.0,
            border_color: None,
            border_width: 0.0,
            estimate_badge: true,
            estimate_text: "1-5".to_string(),
            capabilities: RenderCapabilities::default(),
        }
    }
}

impl SurfaceConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SurfaceConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading surface config");
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every numeric range and color literal
    pub fn validate(&self) -> Result<()> {
        non_negative("corner_radius", self.corner_radius)?;
        non_negative("bottom_overflow", self.bottom_overflow)?;
        non_negative("shadow_radius", self.shadow_radius)?;
        non_negative("border_width", self.border_width)?;
        finite("shadow_offset.x", self.shadow_offset[0])?;
        finite("shadow_offset.y", self.shadow_offset[1])?;
        if !(0.0..=1.0).contains(&self.shadow_opacity) {
            return Err(SurfaceError::InvalidValue {
                field: "shadow_opacity",
                value: self.shadow_opacity,
            });
        }

        self.style().map(|_| ())
    }

    /// Convert the styling keys into a `SurfaceStyle`
    pub fn style(&self) -> Result<SurfaceStyle> {
        let shadow_color = parse_color(&self.shadow_color)?
            .ok_or_else(|| SurfaceError::InvalidColor(self.shadow_color.clone()))?;
        let border_color = match &self.border_color {
            Some(literal) => parse_color(literal)?,
            None => None,
        };

        Ok(SurfaceStyle {
            background_color: parse_color(&self.background)?,
            shadow_hidden: self.shadow_hidden,
            shadow_color,
            shadow_offset: Vec2::new(self.shadow_offset[0], self.shadow_offset[1]),
            shadow_opacity: self.shadow_opacity,
            shadow_radius: self.shadow_radius,
            border_color,
            border_width: self.border_width,
        })
    }
}

/// `"none"` / `"transparent"` mean no color; anything else must be hex
fn parse_color(literal: &str) -> Result<Option<Color>> {
    let trimmed = literal.trim();
    if trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(None);
    }
    Color::parse_hex(trimmed)
        .map(Some)
        .ok_or_else(|| SurfaceError::InvalidColor(literal.to_string()))
}

fn finite(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SurfaceError::InvalidValue { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(SurfaceError::InvalidValue { field, value });
    }
    Ok(())
}
