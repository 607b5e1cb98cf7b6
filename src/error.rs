use thiserror::Error;

pub type AxisResult<T> = Result<T, AxisError>;

#[derive(Debug, Error)]
pub enum AxisError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid range: end precedes begin ({begin} > {end})")]
    InvalidRange { begin: String, end: String },

    #[error("arrangement set is empty")]
    EmptyArrangementSet,

    #[error("no rounding rule registered for cycle `{cycle}`")]
    UnknownCycle { cycle: String },

    #[error("label format `{format}` cannot be rendered by this axis domain")]
    InvalidFormat { format: String },

    #[error("invalid arrangement: {0}")]
    InvalidArrangement(String),
}
