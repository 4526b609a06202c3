use crate::types::parameter::Parameter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("{parameter}: series is empty")]
    EmptyInput { parameter: Parameter },

    #[error("{parameter}: outlier filter removed every value")]
    AllOutliersRemoved { parameter: Parameter },

    #[error("{parameter}: value at index {index} is not finite")]
    NonFiniteValue { parameter: Parameter, index: usize },

    #[error("{parameter}: series has {found} values, expected {expected}")]
    LengthMismatch {
        parameter: Parameter,
        expected: usize,
        found: usize,
    },

    #[error("{parameter}: weighted parameter has no series")]
    MissingSeries { parameter: Parameter },

    #[error("{parameter}: weight must be finite and non-negative (found {weight})")]
    InvalidWeight { parameter: Parameter, weight: f64 },

    #[error("no weighted parameters to score")]
    NoParameters,

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
