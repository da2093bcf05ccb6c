mod engine;
mod scene;

pub use engine::{DashboardFrame, ShotChartConfig, ShotChartEngine};
