use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Rejected construction or update input (series shape, styles, class names).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("chart has been torn down")]
    TornDown,

    #[error("render backend failure: {0}")]
    Backend(String),
}
