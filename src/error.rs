use thiserror::Error;

pub type ShotChartResult<T> = Result<T, ShotChartError>;

#[derive(Debug, Error)]
pub enum ShotChartError {
    #[error("invalid canvas size: width={width}, height={height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
