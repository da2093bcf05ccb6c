use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Point;
use crate::error::{ShotChartError, ShotChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds from 8-bit channels as they appear in web palettes.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Linear per-channel interpolation toward `other`; `t` is clamped to [0, 1].
    #[must_use]
    pub fn lerp(self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            red: mix(self.red, other.red),
            green: mix(self.green, other.green),
            blue: mix(self.blue, other.blue),
            alpha: mix(self.alpha, other.alpha),
        }
    }

    pub fn validate(self) -> ShotChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ShotChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Fill rule applied across a path's contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRule {
    NonZero,
    /// Opposite-wound inner contours become cutouts.
    EvenOdd,
}

/// Draw command for one filled path in pixel space. Zone overlays carry two
/// contours (outer + cutout) under [`FillRule::EvenOdd`]; hex cells carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub contours: SmallVec<[Vec<Point>; 2]>,
    pub fill_rule: FillRule,
    pub color: Color,
    pub opacity: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(
        contours: impl IntoIterator<Item = Vec<Point>>,
        fill_rule: FillRule,
        color: Color,
        opacity: f64,
    ) -> Self {
        Self {
            contours: contours.into_iter().collect(),
            fill_rule,
            color,
            opacity,
        }
    }

    pub fn validate(&self) -> ShotChartResult<()> {
        if self.contours.is_empty() {
            return Err(ShotChartError::InvalidData(
                "path must have at least one contour".to_owned(),
            ));
        }
        for contour in &self.contours {
            if contour.len() < 3 {
                return Err(ShotChartError::InvalidData(
                    "path contour must have at least 3 points".to_owned(),
                ));
            }
            if contour.iter().any(|point| !point.is_finite()) {
                return Err(ShotChartError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ShotChartError::InvalidData(
                "path opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ShotChartResult<()> {
        if self.text.is_empty() {
            return Err(ShotChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ShotChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ShotChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
