#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LabelError {
    #[error("Unknown sample identifier: {0}")]
    UnknownSample(String),

    #[error("Unknown variable identifier: {0}")]
    UnknownVariable(String),

    #[error("Histogram needs at least one bin")]
    InvalidBinCount,

    #[error("Histogram range is empty or inverted: [{low}, {high}]")]
    InvalidBinRange { low: f64, high: f64 },
}
