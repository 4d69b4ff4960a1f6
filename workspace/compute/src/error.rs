use thiserror::Error;
use tracing::error;

/// A series that cannot be reduced or fitted.
///
/// These are programmer or configuration errors: the generator never produces
/// such a series with its fixed constants, but callers building series by hand
/// can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidSeriesError {
    /// Not enough samples for the requested operation
    #[error("series has {actual} samples, at least {required} required")]
    TooShort { required: usize, actual: usize },

    /// A sample value is NaN or infinite
    #[error("sample {index} has non-finite value {value}")]
    NonFinite { index: usize, value: f64 },

    /// Finite samples whose reduction overflowed
    #[error("{quantity} is not finite for this series")]
    Overflow { quantity: &'static str },
}

impl InvalidSeriesError {
    /// Passes `value` through when finite, otherwise reports `quantity` as overflowed.
    pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(InvalidSeriesError::Overflow { quantity }.into())
        }
    }
}

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// The input series violates a precondition
    #[error("Invalid series: {0}")]
    InvalidSeries(#[from] InvalidSeriesError),

    /// The sampling distribution rejected its parameters
    #[error("Distribution error: {0}")]
    Distribution(String),

    /// The series cache could not be accessed
    #[error("Cache error: {0}")]
    Cache(String),
}

impl From<rand_distr::NormalError> for ComputeError {
    fn from(error: rand_distr::NormalError) -> Self {
        let err = ComputeError::Distribution(error.to_string());
        error!(?err, "Normal distribution rejected its parameters");
        err
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
