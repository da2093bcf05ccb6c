//! shotchart-rs: shot-chart analytics core for basketball dashboards.
//!
//! This crate turns per-shot spatial events and per-game box scores into the
//! derived shapes a dashboard draws: hex-binned efficiency cells, six-zone
//! court summaries, percentile-ranked radar dimensions, and rolling averages.
//! Storage, HTTP framing, and drawing backends are host concerns.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DashboardFrame, ShotChartConfig, ShotChartEngine};
pub use error::{ShotChartError, ShotChartResult};
