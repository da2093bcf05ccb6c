use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::court::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::core::hexbin::HEX_RADIUS;
use crate::core::{
    Canvas, CourtTransform, GameLog, HexBin, LeagueBaseline, RadarCohorts, RadarInputs,
    RadarProfile, RollingAverages, Shot, ZoneSummary,
};
use crate::error::{ShotChartError, ShotChartResult};
use crate::render::{DivergingScale, RenderFrame};

/// Engine construction parameters. Every field has a sensible default; hosts
/// typically only override the baseline table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotChartConfig {
    pub canvas: Canvas,
    pub hex_radius: f64,
    pub baseline: LeagueBaseline,
    pub color_scale: DivergingScale,
}

impl Default for ShotChartConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            hex_radius: HEX_RADIUS,
            baseline: LeagueBaseline::default(),
            color_scale: DivergingScale::default(),
        }
    }
}

impl ShotChartConfig {
    #[must_use]
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    #[must_use]
    pub fn with_hex_radius(mut self, hex_radius: f64) -> Self {
        self.hex_radius = hex_radius;
        self
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: LeagueBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_color_scale(mut self, color_scale: DivergingScale) -> Self {
        self.color_scale = color_scale;
        self
    }
}

/// Everything the presentation layer needs for one player-season view,
/// recomputed from the input rows on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrame {
    pub bins: Vec<HexBin>,
    pub zones: Vec<ZoneSummary>,
}

impl DashboardFrame {
    /// JSON snapshot for hosts and regression tests.
    pub fn to_json(&self) -> ShotChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Facade over the pure core: turns row sets into the derived shapes the
/// dashboard draws. Holds configuration only; all computation is stateless.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotChartEngine {
    transform: CourtTransform,
    hex_radius: f64,
    baseline: LeagueBaseline,
    color_scale: DivergingScale,
}

impl ShotChartEngine {
    pub fn new(config: ShotChartConfig) -> ShotChartResult<Self> {
        if !config.hex_radius.is_finite() || config.hex_radius <= 0.0 {
            return Err(ShotChartError::InvalidConfig(
                "hex radius must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            transform: CourtTransform::new(config.canvas)?,
            hex_radius: config.hex_radius,
            baseline: config.baseline,
            color_scale: config.color_scale,
        })
    }

    #[must_use]
    pub fn transform(&self) -> CourtTransform {
        self.transform
    }

    #[must_use]
    pub fn hex_radius(&self) -> f64 {
        self.hex_radius
    }

    #[must_use]
    pub fn baseline(&self) -> &LeagueBaseline {
        &self.baseline
    }

    #[must_use]
    pub fn color_scale(&self) -> DivergingScale {
        self.color_scale
    }

    /// Hex-binned efficiency cells for the shot set.
    pub fn hex_bins(&self, shots: &[Shot]) -> ShotChartResult<Vec<HexBin>> {
        let bins = crate::core::hex_bins(
            shots,
            self.transform,
            self.hex_radius,
            &self.baseline,
            self.color_scale,
        )?;
        debug!(input = shots.len(), bins = bins.len(), "computed hex bins");
        Ok(bins)
    }

    /// Six-zone make/attempt summaries for the shot set.
    #[must_use]
    pub fn zone_summaries(&self, shots: &[Shot]) -> Vec<ZoneSummary> {
        let zones = crate::core::zone_summaries(shots, self.transform, &self.baseline);
        debug!(input = shots.len(), zones = zones.len(), "computed zone summaries");
        zones
    }

    /// Percentile-ranked radar dimensions against the supplied cohorts.
    #[must_use]
    pub fn radar_profile(&self, inputs: &RadarInputs, cohorts: &RadarCohorts) -> RadarProfile {
        crate::core::radar_profile(inputs, cohorts)
    }

    /// Last-5 / last-10 / season rolling averages from game logs ordered
    /// most-recent-first.
    #[must_use]
    pub fn rolling_averages(&self, games: &[GameLog]) -> RollingAverages {
        debug!(games = games.len(), "computed rolling averages");
        crate::core::rolling_averages(games)
    }

    /// Bins and zone summaries bundled for serialization to the host.
    pub fn dashboard_frame(&self, shots: &[Shot]) -> ShotChartResult<DashboardFrame> {
        Ok(DashboardFrame {
            bins: self.hex_bins(shots)?,
            zones: self.zone_summaries(shots),
        })
    }

    /// Full draw-pass scene: zone overlay fills, hex cell fills, zone labels.
    pub fn render_frame(&self, shots: &[Shot]) -> ShotChartResult<RenderFrame> {
        super::scene::build_render_frame(self, shots)
    }
}
