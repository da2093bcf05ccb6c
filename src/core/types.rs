use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 2D point, either in court space (origin at the basket, y toward
/// half-court) or in drawing space (origin top-left, y downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fixed drawing surface the chart is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.is_finite()
            && point.x >= 0.0
            && point.x <= f64::from(self.width)
            && point.y >= 0.0
            && point.y <= f64::from(self.height)
    }
}

/// The six canonical shooting zones, matching the upstream feed's
/// `SHOT_ZONE_BASIC` labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneName {
    #[serde(rename = "Restricted Area")]
    RestrictedArea,
    #[serde(rename = "In The Paint (Non-RA)")]
    PaintNonRa,
    #[serde(rename = "Mid-Range")]
    MidRange,
    #[serde(rename = "Left Corner 3")]
    LeftCorner3,
    #[serde(rename = "Right Corner 3")]
    RightCorner3,
    #[serde(rename = "Above the Break 3")]
    AboveBreak3,
}

impl ZoneName {
    /// Canonical ordering used for stable summary output.
    pub const ALL: [ZoneName; 6] = [
        ZoneName::RestrictedArea,
        ZoneName::PaintNonRa,
        ZoneName::MidRange,
        ZoneName::LeftCorner3,
        ZoneName::RightCorner3,
        ZoneName::AboveBreak3,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ZoneName::RestrictedArea => "Restricted Area",
            ZoneName::PaintNonRa => "In The Paint (Non-RA)",
            ZoneName::MidRange => "Mid-Range",
            ZoneName::LeftCorner3 => "Left Corner 3",
            ZoneName::RightCorner3 => "Right Corner 3",
            ZoneName::AboveBreak3 => "Above the Break 3",
        }
    }

    /// Parses the upstream feed label. Unknown labels map to `None` so
    /// malformed rows degrade instead of erroring.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|zone| zone.label() == label.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotType {
    #[serde(rename = "2PT")]
    TwoPt,
    #[serde(rename = "3PT")]
    ThreePt,
}

/// One shot attempt row as supplied by the data-store collaborator.
///
/// `zone` is the authoritative classification from the feed; the crate never
/// re-derives it from coordinates. `None` marks rows whose label was missing
/// or unrecognized upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub x: f64,
    pub y: f64,
    pub made: bool,
    pub zone: Option<ZoneName>,
    pub shot_type: ShotType,
    pub distance: Option<f64>,
}

impl Shot {
    #[must_use]
    pub const fn new(
        x: f64,
        y: f64,
        made: bool,
        zone: Option<ZoneName>,
        shot_type: ShotType,
    ) -> Self {
        Self {
            x,
            y,
            made,
            zone,
            shot_type,
            distance: None,
        }
    }

    #[must_use]
    pub const fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}

/// One per-game box-score row, most-recent-first when passed to the rolling
/// average engine. Column set follows the upstream game-log feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub date: NaiveDate,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub fgm: u32,
    pub fga: u32,
    pub fg3m: u32,
    pub fg3a: u32,
    pub ftm: u32,
    pub fta: u32,
}
