use serde::{Deserialize, Serialize};

use crate::error::{ShotChartError, ShotChartResult};
use crate::render::primitives::Color;

/// Delta at which the scale saturates on either side, in FG% points.
pub const DEFAULT_MAX_DIFF: f64 = 0.15;

/// Diverging color scale over an efficiency delta: cold below baseline,
/// neutral at baseline, hot above. Interpolation is linear in RGB and clamps
/// at the stops; it never extrapolates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivergingScale {
    pub cold: Color,
    pub neutral: Color,
    pub hot: Color,
    pub max_diff: f64,
}

impl Default for DivergingScale {
    fn default() -> Self {
        Self {
            cold: Color::from_rgb8(0x45, 0x75, 0xB4),
            neutral: Color::from_rgb8(0xFF, 0xFF, 0xBF),
            hot: Color::from_rgb8(0xD7, 0x30, 0x27),
            max_diff: DEFAULT_MAX_DIFF,
        }
    }
}

impl DivergingScale {
    pub fn new(cold: Color, neutral: Color, hot: Color, max_diff: f64) -> ShotChartResult<Self> {
        if !max_diff.is_finite() || max_diff <= 0.0 {
            return Err(ShotChartError::InvalidConfig(
                "diverging scale max_diff must be finite and > 0".to_owned(),
            ));
        }
        for color in [cold, neutral, hot] {
            color.validate()?;
        }

        Ok(Self {
            cold,
            neutral,
            hot,
            max_diff,
        })
    }

    /// Signed interpolation parameter in [-1, 1]: negative toward cold,
    /// positive toward hot, zero at baseline. Symmetric and monotonic in
    /// `value - baseline`.
    #[must_use]
    pub fn interpolation_t(self, value: f64, baseline: f64) -> f64 {
        let diff = value - baseline;
        if !diff.is_finite() {
            return 0.0;
        }
        (diff / self.max_diff).clamp(-1.0, 1.0)
    }

    /// Maps an efficiency value against its baseline to a diverging color.
    #[must_use]
    pub fn encode(self, value: f64, baseline: f64) -> Color {
        let t = self.interpolation_t(value, baseline);
        if t <= 0.0 {
            self.neutral.lerp(self.cold, -t)
        } else {
            self.neutral.lerp(self.hot, t)
        }
    }
}
