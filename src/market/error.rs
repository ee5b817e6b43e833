use thiserror::Error;

/// Contract violations rejected at the predictor boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PredictorError {
    #[error("unknown commodity '{name}'")]
    UnknownCommodity { name: String },

    #[error("horizon must be at least 1 day, got {days}")]
    InvalidHorizon { days: u32 },

    #[error("cannot analyze an empty price series")]
    EmptySeries,
}
