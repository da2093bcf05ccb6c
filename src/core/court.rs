use serde::{Deserialize, Serialize};

use crate::core::types::{Canvas, Point, Shot};
use crate::error::{ShotChartError, ShotChartResult};

/// Default drawing surface: half court, 500x470 drawing units.
pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 470;

/// The basket sits this many drawing units above the baseline edge.
pub const BASKET_BASELINE_OFFSET: f64 = 50.0;

/// Invertible mapping between court coordinates (origin at the basket,
/// x left/right, y increasing toward half-court) and drawing coordinates
/// (origin top-left, y increasing downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtTransform {
    canvas: Canvas,
    basket_draw_y: f64,
}

impl Default for CourtTransform {
    fn default() -> Self {
        Self {
            canvas: Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            basket_draw_y: f64::from(CANVAS_HEIGHT) - BASKET_BASELINE_OFFSET,
        }
    }
}

impl CourtTransform {
    pub fn new(canvas: Canvas) -> ShotChartResult<Self> {
        if !canvas.is_valid() {
            return Err(ShotChartError::InvalidCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if f64::from(canvas.height) <= BASKET_BASELINE_OFFSET {
            return Err(ShotChartError::InvalidConfig(
                "canvas height must leave room below the basket".to_owned(),
            ));
        }

        Ok(Self {
            canvas,
            basket_draw_y: f64::from(canvas.height) - BASKET_BASELINE_OFFSET,
        })
    }

    #[must_use]
    pub fn canvas(self) -> Canvas {
        self.canvas
    }

    /// Basket position in drawing space.
    #[must_use]
    pub fn basket(self) -> Point {
        Point::new(f64::from(self.canvas.width) / 2.0, self.basket_draw_y)
    }

    /// Baseline edge y in drawing space.
    #[must_use]
    pub fn baseline_draw_y(self) -> f64 {
        f64::from(self.canvas.height)
    }

    /// Court -> drawing. Exactly invertible via [`Self::to_court`].
    #[must_use]
    pub fn to_draw(self, court: Point) -> Point {
        Point::new(
            court.x + f64::from(self.canvas.width) / 2.0,
            self.basket_draw_y - court.y,
        )
    }

    /// Drawing -> court. Exactly invertible via [`Self::to_draw`].
    #[must_use]
    pub fn to_court(self, draw: Point) -> Point {
        Point::new(
            draw.x - f64::from(self.canvas.width) / 2.0,
            self.basket_draw_y - draw.y,
        )
    }

    /// A shot is usable only when its coordinates are finite and land on the
    /// half-court drawing surface after transform. Anything else is dropped
    /// from downstream computation rather than reported.
    #[must_use]
    pub fn is_valid_shot(self, shot: &Shot) -> bool {
        let court = Point::new(shot.x, shot.y);
        court.is_finite() && self.canvas.contains(self.to_draw(court))
    }

    /// Filters a raw row set down to spatially valid shots, preserving order.
    #[must_use]
    pub fn valid_shots(self, shots: &[Shot]) -> Vec<Shot> {
        shots
            .iter()
            .copied()
            .filter(|shot| self.is_valid_shot(shot))
            .collect()
    }
}
