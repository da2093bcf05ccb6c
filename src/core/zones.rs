//! Static overlay geometry for the six shooting zones.
//!
//! These paths exist purely for rendering the zone layer; shot classification
//! always comes from the authoritative `zone` label on the row. The layout is
//! built from the court's physical constants so it stays consistent with that
//! classification.

use serde::{Deserialize, Serialize};

use crate::core::court::CourtTransform;
use crate::core::types::{Point, ZoneName};

/// Restricted-area radius around the basket, drawing units.
pub const RESTRICTED_AREA_RADIUS: f64 = 40.0;
/// Half the width of the paint.
pub const PAINT_HALF_WIDTH: f64 = 80.0;
/// Free-throw line distance from the basket.
pub const PAINT_TOP: f64 = 142.0;
/// Three-point arc radius.
pub const ARC_RADIUS: f64 = 237.5;
/// Corner three cutoff distance from the center line.
pub const CORNER_OFFSET: f64 = 220.0;
/// Samples along the three-point arc between the corner junctions.
pub const ARC_SAMPLES: usize = 64;

const CIRCLE_SAMPLES: usize = 48;

/// Closed fill path for one zone: an outer contour plus an optional
/// opposite-wound inner contour. Under an even-odd fill rule the inner
/// contour becomes a cutout (paint minus restricted area, etc.), which
/// avoids polygon boolean operations entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePath {
    pub outer: Vec<Point>,
    pub cutout: Option<Vec<Point>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneOverlay {
    pub zone: ZoneName,
    pub path: ZonePath,
    pub label_anchor: Point,
}

/// Angle between the baseline-parallel axis and the corner/arc junction.
#[must_use]
pub fn corner_junction_angle() -> f64 {
    (CORNER_OFFSET / ARC_RADIUS).acos()
}

/// Builds the six zone overlays in drawing space. Pure; depends only on the
/// transform's canvas layout.
#[must_use]
pub fn zone_overlays(transform: CourtTransform) -> Vec<ZoneOverlay> {
    let basket = transform.basket();
    let baseline = transform.baseline_draw_y();
    let width = f64::from(transform.canvas().width);

    let junction = corner_junction_angle();
    // Height of the corner/arc junction above the basket, court units.
    let junction_rise = ARC_RADIUS * junction.sin();
    let corner_top = basket.y - junction_rise;
    let corner_left_x = basket.x - CORNER_OFFSET;
    let corner_right_x = basket.x + CORNER_OFFSET;

    let restricted_circle = sample_circle(basket, RESTRICTED_AREA_RADIUS, CIRCLE_SAMPLES);
    let paint_rect = vec![
        Point::new(basket.x - PAINT_HALF_WIDTH, baseline),
        Point::new(basket.x - PAINT_HALF_WIDTH, basket.y - PAINT_TOP),
        Point::new(basket.x + PAINT_HALF_WIDTH, basket.y - PAINT_TOP),
        Point::new(basket.x + PAINT_HALF_WIDTH, baseline),
    ];
    let arc = sample_arc(basket, junction);

    // Inside-arc outline: baseline corner, up the corner line, across the arc,
    // down the far corner line. The arc's endpoints are the junctions, so the
    // corner lines join it without duplicate vertices.
    let mut inside_arc = Vec::with_capacity(arc.len() + 2);
    inside_arc.push(Point::new(corner_left_x, baseline));
    inside_arc.extend_from_slice(&arc);
    inside_arc.push(Point::new(corner_right_x, baseline));

    // Everything that is not above-the-break: the corners plus the inside-arc
    // region form one connected polygon bounded by the sidelines and baseline.
    let mut non_above_break = Vec::with_capacity(arc.len() + 4);
    non_above_break.push(Point::new(0.0, baseline));
    non_above_break.push(Point::new(0.0, corner_top));
    non_above_break.extend_from_slice(&arc);
    non_above_break.push(Point::new(width, corner_top));
    non_above_break.push(Point::new(width, baseline));

    vec![
        ZoneOverlay {
            zone: ZoneName::RestrictedArea,
            path: ZonePath {
                outer: restricted_circle.clone(),
                cutout: None,
            },
            label_anchor: Point::new(basket.x, basket.y - 55.0),
        },
        ZoneOverlay {
            zone: ZoneName::PaintNonRa,
            path: ZonePath {
                outer: paint_rect.clone(),
                cutout: Some(reversed(&restricted_circle)),
            },
            label_anchor: Point::new(basket.x, basket.y - 110.0),
        },
        ZoneOverlay {
            zone: ZoneName::MidRange,
            path: ZonePath {
                outer: inside_arc,
                cutout: Some(reversed(&paint_rect)),
            },
            label_anchor: Point::new(basket.x, basket.y - 185.0),
        },
        ZoneOverlay {
            zone: ZoneName::LeftCorner3,
            path: ZonePath {
                outer: vec![
                    Point::new(0.0, baseline),
                    Point::new(0.0, corner_top),
                    Point::new(corner_left_x, corner_top),
                    Point::new(corner_left_x, baseline),
                ],
                cutout: None,
            },
            label_anchor: Point::new(corner_left_x / 2.0, baseline - 25.0),
        },
        ZoneOverlay {
            zone: ZoneName::RightCorner3,
            path: ZonePath {
                outer: vec![
                    Point::new(corner_right_x, baseline),
                    Point::new(corner_right_x, corner_top),
                    Point::new(width, corner_top),
                    Point::new(width, baseline),
                ],
                cutout: None,
            },
            label_anchor: Point::new((corner_right_x + width) / 2.0, baseline - 25.0),
        },
        ZoneOverlay {
            zone: ZoneName::AboveBreak3,
            path: ZonePath {
                outer: vec![
                    Point::new(0.0, 0.0),
                    Point::new(width, 0.0),
                    Point::new(width, baseline),
                    Point::new(0.0, baseline),
                ],
                cutout: Some(reversed(&non_above_break)),
            },
            label_anchor: Point::new(basket.x, basket.y - ARC_RADIUS - 55.0),
        },
    ]
}

/// Samples the three-point arc from the left junction over the apex to the
/// right junction. Endpoints land exactly on the corner lines.
fn sample_arc(basket: Point, junction: f64) -> Vec<Point> {
    let start = std::f64::consts::PI - junction;
    let end = junction;
    let steps = ARC_SAMPLES;

    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let angle = start + (end - start) * t;
            Point::new(
                basket.x + ARC_RADIUS * angle.cos(),
                basket.y - ARC_RADIUS * angle.sin(),
            )
        })
        .collect()
}

fn sample_circle(center: Point, radius: f64, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / steps as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

fn reversed(points: &[Point]) -> Vec<Point> {
    points.iter().rev().copied().collect()
}
