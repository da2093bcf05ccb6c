//! Percentile ranks, cohort means, rolling averages, and the radar profile.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::GameLog;

/// Cohorts smaller than this are treated as insufficient for percentile
/// ranking; the affected radar dimension falls back to the neutral score.
pub const MIN_COHORT_FOR_PERCENTILE: usize = 10;

/// Rounds to `places` decimal places, half away from zero.
#[must_use]
pub fn round_dp(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Percentile rank of `value` against a cohort: the share of cohort values
/// strictly below it, 0-100. Ties do not count toward the numerator. An
/// empty cohort ranks as 50 (average in the absence of information).
#[must_use]
pub fn percentile_rank(value: f64, cohort: &[f64]) -> u8 {
    if cohort.is_empty() {
        return 50;
    }
    let below = cohort.iter().filter(|&&other| other < value).count();
    (100.0 * below as f64 / cohort.len() as f64).round() as u8
}

/// Arithmetic mean rounded to two decimals; 0 on an empty slice.
#[must_use]
pub fn cohort_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    round_dp(values.iter().sum::<f64>() / values.len() as f64, 2)
}

/// Game window for rolling averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatWindow {
    Last5,
    Last10,
    Season,
}

impl StatWindow {
    /// Maximum number of games in the window; `None` means the full list.
    #[must_use]
    pub const fn game_limit(self) -> Option<usize> {
        match self {
            StatWindow::Last5 => Some(5),
            StatWindow::Last10 => Some(10),
            StatWindow::Season => None,
        }
    }
}

/// Windowed box-score averages. Counting stats are per-game means (one
/// decimal); percentage stats are ratios of summed makes to summed attempts
/// across the window, never means of per-game percentages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RollingAverage {
    pub pts_pg: f64,
    pub reb_pg: f64,
    pub ast_pg: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}

/// The three windows the dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RollingAverages {
    pub last5: RollingAverage,
    pub last10: RollingAverage,
    pub season: RollingAverage,
}

/// Computes one rolling-average window over game logs ordered
/// most-recent-first. Zero games yields the all-zero struct.
#[must_use]
pub fn rolling_average(games: &[GameLog], window: StatWindow) -> RollingAverage {
    let take = window
        .game_limit()
        .map_or(games.len(), |limit| limit.min(games.len()));
    let window_games = &games[..take];
    if window_games.is_empty() {
        return RollingAverage::default();
    }

    let count = window_games.len() as f64;
    let mean = |select: fn(&GameLog) -> f64| {
        round_dp(window_games.iter().map(select).sum::<f64>() / count, 1)
    };

    let summed_ratio = |makes: fn(&GameLog) -> u32, attempts: fn(&GameLog) -> u32| {
        let made: u64 = window_games.iter().map(|game| u64::from(makes(game))).sum();
        let att: u64 = window_games
            .iter()
            .map(|game| u64::from(attempts(game)))
            .sum();
        if att == 0 {
            0.0
        } else {
            round_dp(made as f64 / att as f64, 3)
        }
    };

    RollingAverage {
        pts_pg: mean(|game| game.pts),
        reb_pg: mean(|game| game.reb),
        ast_pg: mean(|game| game.ast),
        fg_pct: summed_ratio(|game| game.fgm, |game| game.fga),
        fg3_pct: summed_ratio(|game| game.fg3m, |game| game.fg3a),
        ft_pct: summed_ratio(|game| game.ftm, |game| game.fta),
    }
}

/// Computes all three windows in one pass over the same game list.
#[must_use]
pub fn rolling_averages(games: &[GameLog]) -> RollingAverages {
    RollingAverages {
        last5: rolling_average(games, StatWindow::Last5),
        last10: rolling_average(games, StatWindow::Last10),
        season: rolling_average(games, StatWindow::Season),
    }
}

/// One radar axis: the player's raw stat, its percentile score against the
/// cohort, and the cohort mean for reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDimension {
    pub label: String,
    pub raw: f64,
    pub score: u8,
    pub league_avg: f64,
}

/// The six dashboard dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    pub scoring: RadarDimension,
    pub playmaking: RadarDimension,
    pub rebounding: RadarDimension,
    pub defense: RadarDimension,
    pub efficiency: RadarDimension,
    pub volume: RadarDimension,
}

impl RadarProfile {
    #[must_use]
    pub fn dimensions(&self) -> [&RadarDimension; 6] {
        [
            &self.scoring,
            &self.playmaking,
            &self.rebounding,
            &self.defense,
            &self.efficiency,
            &self.volume,
        ]
    }
}

/// Player raw stats, one value per radar dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarInputs {
    pub scoring: f64,
    pub playmaking: f64,
    pub rebounding: f64,
    pub defense: f64,
    pub efficiency: f64,
    pub volume: f64,
}

/// League cohort arrays, one per radar dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarCohorts {
    pub scoring: Vec<f64>,
    pub playmaking: Vec<f64>,
    pub rebounding: Vec<f64>,
    pub defense: Vec<f64>,
    pub efficiency: Vec<f64>,
    pub volume: Vec<f64>,
}

/// Builds the six percentile-ranked radar dimensions.
///
/// Dimensions whose cohort is smaller than [`MIN_COHORT_FOR_PERCENTILE`]
/// fall back to the neutral score 50 (the cohort mean is still reported).
#[must_use]
pub fn radar_profile(inputs: &RadarInputs, cohorts: &RadarCohorts) -> RadarProfile {
    let dimension = |label: &str, raw: f64, cohort: &[f64]| {
        let score = if cohort.len() < MIN_COHORT_FOR_PERCENTILE {
            if !cohort.is_empty() {
                warn!(
                    label,
                    cohort_len = cohort.len(),
                    "cohort below percentile minimum, using neutral score"
                );
            }
            50
        } else {
            percentile_rank(raw, cohort)
        };

        RadarDimension {
            label: label.to_owned(),
            raw,
            score,
            league_avg: cohort_mean(cohort),
        }
    };

    RadarProfile {
        scoring: dimension("scoring", inputs.scoring, &cohorts.scoring),
        playmaking: dimension("playmaking", inputs.playmaking, &cohorts.playmaking),
        rebounding: dimension("rebounding", inputs.rebounding, &cohorts.rebounding),
        defense: dimension("defense", inputs.defense, &cohorts.defense),
        efficiency: dimension("efficiency", inputs.efficiency, &cohorts.efficiency),
        volume: dimension("volume", inputs.volume, &cohorts.volume),
    }
}
