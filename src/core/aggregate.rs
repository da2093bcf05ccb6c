//! Zone-level rollups of the raw shot list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::baseline::LeagueBaseline;
use crate::core::court::CourtTransform;
use crate::core::stats::round_dp;
use crate::core::types::{Shot, ShotType, ZoneName};

/// Per-zone make/attempt rollup with its league baseline attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub zone: ZoneName,
    pub fgm: u32,
    pub fga: u32,
    /// `fgm / fga` rounded to three decimals; 0 when `fga` is 0.
    pub fg_pct: f64,
    pub league_avg: f64,
}

/// Caller-side pre-filter for the aggregation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShotFilter {
    #[default]
    All,
    TwoPt,
    ThreePt,
}

impl ShotFilter {
    #[must_use]
    pub fn matches(self, shot: &Shot) -> bool {
        match self {
            ShotFilter::All => true,
            ShotFilter::TwoPt => shot.shot_type == ShotType::TwoPt,
            ShotFilter::ThreePt => shot.shot_type == ShotType::ThreePt,
        }
    }
}

/// Returns shots passing the filter, preserving order.
#[must_use]
pub fn filter_shots(shots: &[Shot], filter: ShotFilter) -> Vec<Shot> {
    shots
        .iter()
        .copied()
        .filter(|shot| filter.matches(shot))
        .collect()
}

/// Groups valid, labeled shots by zone into one summary per present zone.
///
/// Output is in canonical zone order regardless of input ordering; zones
/// with zero attempts are omitted. Shots without a usable zone label are
/// excluded here (they still count in hex bins).
#[must_use]
pub fn zone_summaries(
    shots: &[Shot],
    transform: CourtTransform,
    baseline: &LeagueBaseline,
) -> Vec<ZoneSummary> {
    let mut counts: IndexMap<ZoneName, (u32, u32)> = IndexMap::new();
    for shot in shots {
        if !transform.is_valid_shot(shot) {
            continue;
        }
        let Some(zone) = shot.zone else {
            continue;
        };
        let (fgm, fga) = counts.entry(zone).or_insert((0, 0));
        *fga += 1;
        if shot.made {
            *fgm += 1;
        }
    }

    ZoneName::ALL
        .into_iter()
        .filter_map(|zone| {
            let (fgm, fga) = counts.get(&zone).copied()?;
            Some(ZoneSummary {
                zone,
                fgm,
                fga,
                fg_pct: if fga > 0 {
                    round_dp(f64::from(fgm) / f64::from(fga), 3)
                } else {
                    0.0
                },
                league_avg: baseline.fg_pct(Some(zone)),
            })
        })
        .collect()
}
