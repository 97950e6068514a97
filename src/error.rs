//! Error types for score distribution building

use thiserror::Error;

/// Errors that can occur while accumulating scores or computing a distribution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The configured range is empty or inverted
    #[error("Invalid range: min ({min}) must be strictly smaller than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    /// Malformed input at the dynamically typed boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A score fell outside the configured range
    #[error("Value {value} at index {index} is out of bounds [{min}, {max}]")]
    OutOfBounds {
        value: i64,
        index: usize,
        min: i64,
        max: i64,
    },

    /// The range span is not evenly divisible by the requested bin count
    #[error("Range of span {span} cannot be divided into {bins} equal bins")]
    NonDivisibleBins { span: i64, bins: usize },

    /// The requested bin count is not positive
    #[error("Bin count must be positive, got {bins}")]
    InvalidBinCount { bins: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check that a range is well formed
    pub fn check_range(min: i64, max: i64) -> Result<()> {
        if max <= min {
            return Err(Error::InvalidRange { min, max });
        }
        Ok(())
    }

    /// Check that a bin count is positive and divides the range span
    pub fn check_bin_count(span: i64, bins: usize) -> Result<()> {
        if bins == 0 {
            return Err(Error::InvalidBinCount { bins });
        }
        if span % bins as i64 != 0 {
            return Err(Error::NonDivisibleBins { span, bins });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRange { min: 10, max: 5 };
        assert_eq!(
            err.to_string(),
            "Invalid range: min (10) must be strictly smaller than max (5)"
        );

        let err = Error::InvalidInput("expected an array".to_string());
        assert_eq!(err.to_string(), "Invalid input: expected an array");

        let err = Error::OutOfBounds {
            value: 101,
            index: 3,
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "Value 101 at index 3 is out of bounds [0, 100]"
        );

        let err = Error::NonDivisibleBins { span: 10, bins: 3 };
        assert_eq!(
            err.to_string(),
            "Range of span 10 cannot be divided into 3 equal bins"
        );

        let err = Error::InvalidBinCount { bins: 0 };
        assert_eq!(err.to_string(), "Bin count must be positive, got 0");
    }

    #[test]
    fn test_check_range() {
        assert!(Error::check_range(0, 100).is_ok());
        assert!(Error::check_range(-50, 50).is_ok());
        assert_eq!(
            Error::check_range(5, 5),
            Err(Error::InvalidRange { min: 5, max: 5 })
        );
        assert_eq!(
            Error::check_range(10, 0),
            Err(Error::InvalidRange { min: 10, max: 0 })
        );
    }

    #[test]
    fn test_check_bin_count() {
        assert!(Error::check_bin_count(100, 10).is_ok());
        assert!(Error::check_bin_count(100, 100).is_ok());
        assert_eq!(
            Error::check_bin_count(100, 0),
            Err(Error::InvalidBinCount { bins: 0 })
        );
        assert_eq!(
            Error::check_bin_count(10, 3),
            Err(Error::NonDivisibleBins { span: 10, bins: 3 })
        );
    }
}
