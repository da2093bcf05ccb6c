use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ZoneName;

/// Fallback FG% for zones absent from the table (or cells with no zone label).
pub const DEFAULT_ZONE_BASELINE: f64 = 0.40;

/// Per-zone league FG% baselines used to compute efficiency deltas.
///
/// The default values are acknowledged approximations; hosts with real cohort
/// data should inject their own table via [`LeagueBaseline::from_pairs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueBaseline {
    table: IndexMap<ZoneName, f64>,
}

impl Default for LeagueBaseline {
    fn default() -> Self {
        Self::from_pairs([
            (ZoneName::RestrictedArea, 0.63),
            (ZoneName::PaintNonRa, 0.42),
            (ZoneName::MidRange, 0.41),
            (ZoneName::LeftCorner3, 0.39),
            (ZoneName::RightCorner3, 0.39),
            (ZoneName::AboveBreak3, 0.35),
        ])
    }
}

impl LeagueBaseline {
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ZoneName, f64)>) -> Self {
        Self {
            table: pairs.into_iter().collect(),
        }
    }

    /// Baseline FG% for a zone, with the fixed fallback for missing labels
    /// and zones absent from the table.
    #[must_use]
    pub fn fg_pct(&self, zone: Option<ZoneName>) -> f64 {
        zone.and_then(|zone| self.table.get(&zone).copied())
            .unwrap_or(DEFAULT_ZONE_BASELINE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZoneName, f64)> + '_ {
        self.table.iter().map(|(zone, pct)| (*zone, *pct))
    }
}
