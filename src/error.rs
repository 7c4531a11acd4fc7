use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("No {0} coefficients supplied")]
    EmptyCoefficients(&'static str),

    #[error("Wrong number of {which} coefficients: expected {expected}, got {actual}")]
    OrderMismatch {
        which: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Normalization coefficient a[0] must be non-zero")]
    ZeroNormalization,

    #[error("{which} coefficient {index} is not finite: {value}")]
    NonFiniteCoefficient {
        which: &'static str,
        index: usize,
        value: f32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid sample on line {line}: {value:?}")]
    InvalidSample { line: usize, value: String },

    #[error("WAV error: {0}")]
    Wav(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hound::Error> for FilterError {
    fn from(e: hound::Error) -> Self {
        FilterError::Wav(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
