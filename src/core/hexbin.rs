//! Fixed-radius hexagonal binning of shot points.
//!
//! Bucketing is a standard pointy-top axial grid with cube rounding:
//! deterministic, position-only, one cell per point. Cells are emitted in
//! first-seen order, which also drives the dominant-zone tie-break.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-binning")]
use rayon::prelude::*;

use crate::core::baseline::LeagueBaseline;
use crate::core::court::CourtTransform;
use crate::core::types::{Point, Shot, ZoneName};
use crate::error::{ShotChartError, ShotChartResult};
use crate::render::{Color, DivergingScale};

/// Default hex cell radius in drawing units.
pub const HEX_RADIUS: f64 = 10.0;

/// Opacity of a cell holding a single attempt.
pub const MIN_CELL_OPACITY: f64 = 0.3;
/// Opacity at the ramp knee (40% of the effective max count).
pub const KNEE_CELL_OPACITY: f64 = 0.7;
/// Cell counts at or above this saturate the opacity ramp even when the
/// busiest cell holds more.
pub const OPACITY_SATURATION_COUNT: u32 = 10;

/// One non-empty hex cell with its efficiency statistics and fill styling.
/// Built fresh per invocation; never persisted or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexBin {
    /// Cell center in drawing space.
    pub center: Point,
    pub fga: u32,
    pub fgm: u32,
    pub fg_pct: f64,
    /// Zone with the highest labeled point count in the cell; `None` when no
    /// point carried a label.
    pub dominant_zone: Option<ZoneName>,
    pub league_avg: f64,
    pub color: Color,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HexKey {
    q: i32,
    r: i32,
}

#[derive(Debug, Default)]
struct CellAccum {
    fga: u32,
    fgm: u32,
    zone_counts: IndexMap<ZoneName, u32>,
}

/// Bins valid shots into hex cells and computes per-cell statistics.
///
/// Invalid shots are silently filtered; an empty (or fully invalid) input
/// yields an empty bin list.
pub fn hex_bins(
    shots: &[Shot],
    transform: CourtTransform,
    radius: f64,
    baseline: &LeagueBaseline,
    scale: DivergingScale,
) -> ShotChartResult<Vec<HexBin>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ShotChartError::InvalidConfig(
            "hex radius must be finite and > 0".to_owned(),
        ));
    }

    let mut cells: IndexMap<HexKey, CellAccum> = IndexMap::new();
    for shot in shots {
        if !transform.is_valid_shot(shot) {
            continue;
        }
        let draw = transform.to_draw(Point::new(shot.x, shot.y));
        let key = hex_key(draw, radius);
        let cell = cells.entry(key).or_default();
        cell.fga += 1;
        if shot.made {
            cell.fgm += 1;
        }
        if let Some(zone) = shot.zone {
            *cell.zone_counts.entry(zone).or_insert(0) += 1;
        }
    }

    let max_count = cells.values().map(|cell| cell.fga).max().unwrap_or(0);
    let cap = max_count.min(OPACITY_SATURATION_COUNT).max(1);

    let cells: Vec<(HexKey, CellAccum)> = cells.into_iter().collect();

    #[cfg(feature = "parallel-binning")]
    let bins = cells
        .par_iter()
        .map(|(key, cell)| project_cell(*key, cell, radius, cap, baseline, scale))
        .collect();

    #[cfg(not(feature = "parallel-binning"))]
    let bins = cells
        .iter()
        .map(|(key, cell)| project_cell(*key, cell, radius, cap, baseline, scale))
        .collect();

    Ok(bins)
}

fn project_cell(
    key: HexKey,
    cell: &CellAccum,
    radius: f64,
    cap: u32,
    baseline: &LeagueBaseline,
    scale: DivergingScale,
) -> HexBin {
    let fg_pct = if cell.fga > 0 {
        f64::from(cell.fgm) / f64::from(cell.fga)
    } else {
        0.0
    };
    let dominant_zone = dominant_zone(&cell.zone_counts);
    let league_avg = baseline.fg_pct(dominant_zone);

    HexBin {
        center: hex_center(key, radius),
        fga: cell.fga,
        fgm: cell.fgm,
        fg_pct,
        dominant_zone,
        league_avg,
        color: scale.encode(fg_pct, league_avg),
        opacity: cell_opacity(cell.fga, cap),
    }
}

/// Zone with the highest labeled count; ties keep the first-seen zone, which
/// is stable because the accumulator preserves insertion order.
fn dominant_zone(zone_counts: &IndexMap<ZoneName, u32>) -> Option<ZoneName> {
    let mut best: Option<(ZoneName, u32)> = None;
    for (zone, count) in zone_counts {
        match best {
            Some((_, best_count)) if *count <= best_count => {}
            _ => best = Some((*zone, *count)),
        }
    }
    best.map(|(zone, _)| zone)
}

/// Monotonic opacity ramp over a cell's attempt count:
/// 0.3 at one attempt, 0.7 at 40% of the effective cap, 1.0 at the cap,
/// clamped to [0.3, 1.0].
fn cell_opacity(fga: u32, cap: u32) -> f64 {
    let count = f64::from(fga);
    let cap = f64::from(cap);
    let knee = 0.4 * cap;

    let raw = if count <= 1.0 {
        MIN_CELL_OPACITY
    } else if count <= knee {
        MIN_CELL_OPACITY
            + (KNEE_CELL_OPACITY - MIN_CELL_OPACITY) * (count - 1.0) / (knee - 1.0)
    } else if count < cap {
        KNEE_CELL_OPACITY + (1.0 - KNEE_CELL_OPACITY) * (count - knee) / (cap - knee)
    } else {
        1.0
    };

    raw.clamp(MIN_CELL_OPACITY, 1.0)
}

fn hex_key(draw: Point, radius: f64) -> HexKey {
    let sqrt3 = 3.0_f64.sqrt();
    let qf = (sqrt3 / 3.0 * draw.x - draw.y / 3.0) / radius;
    let rf = (2.0 / 3.0 * draw.y) / radius;
    axial_round(qf, rf)
}

fn hex_center(key: HexKey, radius: f64) -> Point {
    let sqrt3 = 3.0_f64.sqrt();
    let q = f64::from(key.q);
    let r = f64::from(key.r);
    Point::new(
        radius * (sqrt3 * q + sqrt3 / 2.0 * r),
        radius * (1.5 * r),
    )
}

/// Cube rounding for fractional axial coordinates.
fn axial_round(qf: f64, rf: f64) -> HexKey {
    let xf = qf;
    let zf = rf;
    let yf = -xf - zf;

    let mut x = xf.round();
    let mut z = zf.round();
    let y = yf.round();

    let dx = (x - xf).abs();
    let dy = (y - yf).abs();
    let dz = (z - zf).abs();

    if dx > dy && dx > dz {
        x = -y - z;
    } else if dy <= dz {
        z = -x - y;
    }

    HexKey {
        q: x as i32,
        r: z as i32,
    }
}

/// Corner points of one pointy-top hex cell, for rendering.
#[must_use]
pub fn hex_corners(center: Point, radius: f64) -> Vec<Point> {
    (0..6)
        .map(|i| {
            let angle = std::f64::consts::TAU * (f64::from(i) + 0.5) / 6.0;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
