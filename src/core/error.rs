//! # Errors
//!
//! Everything that can go wrong while building a pair.
//!
//! All three variants are construction-time failures: a pair either
//! validates completely or you never get one. Overlap computation and
//! classification cannot fail on a validated pair.

/// Result type for pair construction
pub type PairResult<T> = Result<T, PairError>;

/// Errors raised while validating the six input values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PairError {
    /// The input tuple did not hold exactly six values
    #[error("requires exactly six numeric values; received {got}")]
    ArgumentCount { got: usize },

    /// A value was not a plain number (booleans included)
    #[error("argument {index} must be an int or float; received {found}")]
    ArgumentType { index: usize, found: String },

    /// A radius was zero, negative, or NaN
    #[error("radii must be positive numbers; received {value}")]
    InvalidRadius { value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = PairError::ArgumentCount { got: 4 };
        assert_eq!(e.to_string(), "requires exactly six numeric values; received 4");

        let e = PairError::ArgumentType {
            index: 2,
            found: "boolean".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "argument 2 must be an int or float; received boolean"
        );

        let e = PairError::InvalidRadius { value: -1.0 };
        assert_eq!(e.to_string(), "radii must be positive numbers; received -1");
    }
}
