pub mod aggregate;
pub mod baseline;
pub mod court;
pub mod hexbin;
pub mod stats;
pub mod types;
pub mod zones;

pub use aggregate::{ShotFilter, ZoneSummary, filter_shots, zone_summaries};
pub use baseline::LeagueBaseline;
pub use court::CourtTransform;
pub use hexbin::{HexBin, hex_bins, hex_corners};
pub use stats::{
    RadarCohorts, RadarDimension, RadarInputs, RadarProfile, RollingAverage, RollingAverages,
    StatWindow, cohort_mean, percentile_rank, radar_profile, rolling_average, rolling_averages,
};
pub use types::{Canvas, GameLog, Point, Shot, ShotType, ZoneName};
