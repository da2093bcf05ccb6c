//! Builds the backend-agnostic draw scene from a shot set.

use crate::core::zones::{ZonePath, zone_overlays};
use crate::core::{Shot, ZoneSummary, hex_corners};
use crate::error::ShotChartResult;
use crate::render::{Color, FillRule, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ShotChartEngine;

/// Fill opacity for zones that have attempts in the current shot set.
const ZONE_FILL_OPACITY: f64 = 0.45;
/// Fill opacity for zones without attempts (outline context only).
const EMPTY_ZONE_FILL_OPACITY: f64 = 0.15;
const LABEL_FONT_SIZE_PX: f64 = 12.0;

const LABEL_COLOR: Color = Color::rgb(0.15, 0.15, 0.15);

/// Zone layer first, hex cells on top, labels last.
pub(super) fn build_render_frame(
    engine: &ShotChartEngine,
    shots: &[Shot],
) -> ShotChartResult<RenderFrame> {
    let summaries = engine.zone_summaries(shots);
    let bins = engine.hex_bins(shots)?;

    let mut frame = RenderFrame::new(engine.transform().canvas());

    for overlay in zone_overlays(engine.transform()) {
        let summary = summaries
            .iter()
            .find(|summary| summary.zone == overlay.zone);

        let (color, opacity) = match summary {
            Some(summary) => (
                engine
                    .color_scale()
                    .encode(summary.fg_pct, summary.league_avg),
                ZONE_FILL_OPACITY,
            ),
            None => (engine.color_scale().neutral, EMPTY_ZONE_FILL_OPACITY),
        };

        frame = frame
            .with_path(zone_path_primitive(&overlay.path, color, opacity))
            .with_text(TextPrimitive::new(
                zone_label_text(overlay.zone.label(), summary),
                overlay.label_anchor.x,
                overlay.label_anchor.y,
                LABEL_FONT_SIZE_PX,
                LABEL_COLOR,
                TextHAlign::Center,
            ));
    }

    for bin in &bins {
        frame = frame.with_path(PathPrimitive::new(
            [hex_corners(bin.center, engine.hex_radius())],
            FillRule::NonZero,
            bin.color,
            bin.opacity,
        ));
    }

    frame.validate()?;
    Ok(frame)
}

fn zone_path_primitive(path: &ZonePath, color: Color, opacity: f64) -> PathPrimitive {
    let contours = std::iter::once(path.outer.clone()).chain(path.cutout.clone());
    PathPrimitive::new(contours, FillRule::EvenOdd, color, opacity)
}

fn zone_label_text(label: &str, summary: Option<&ZoneSummary>) -> String {
    match summary {
        Some(summary) => format!(
            "{label}: {}/{} ({:.1}%)",
            summary.fgm,
            summary.fga,
            summary.fg_pct * 100.0
        ),
        None => label.to_owned(),
    }
}
