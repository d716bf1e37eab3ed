//! Error types for simdport.
//!
//! The numeric core never fails at run time: out-of-range immediates are
//! rejected at compile time and hardware oddities (conversion overflow, large
//! shift counts, NaN propagation) are specified results. The errors below only
//! arise when a caller hands a *runtime* value to an API that normally takes a
//! compile-time constant, such as decoding a comparison predicate or parsing a
//! rounding mode or backend name.

use std::fmt;

/// Errors that can occur when validating runtime control values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimdportError {
    /// A control value lies outside the range the instruction encodes.
    ImmediateError {
        /// What the value controls (e.g. "predicate").
        operand: &'static str,
        /// The rejected value.
        value: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// A textual name did not match any known value.
    ParseError {
        /// What was being parsed.
        kind: &'static str,
        /// The input that failed to parse.
        input: String,
    },
}

impl fmt::Display for SimdportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimdportError::ImmediateError {
                operand,
                value,
                max,
            } => write!(
                f,
                "Invalid {} operand: {} (accepted range 0..={})",
                operand, value, max
            ),
            SimdportError::ParseError { kind, input } => {
                write!(f, "Unknown {}: {:?}", kind, input)
            }
        }
    }
}

impl std::error::Error for SimdportError {}

/// Result type alias for simdport operations.
pub type Result<T> = std::result::Result<T, SimdportError>;

/// Creates an immediate range error.
pub fn immediate_error(operand: &'static str, value: i64, max: i64) -> SimdportError {
    SimdportError::ImmediateError {
        operand,
        value,
        max,
    }
}

/// Creates a parse error.
pub fn parse_error(kind: &'static str, input: impl Into<String>) -> SimdportError {
    SimdportError::ParseError {
        kind,
        input: input.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_error_display() {
        let error = immediate_error("predicate", 40, 31);
        let display = format!("{}", error);
        assert!(display.contains("Invalid predicate operand"));
        assert!(display.contains("40"));
        assert!(display.contains("0..=31"));
    }

    #[test]
    fn test_parse_error_display() {
        let error = parse_error("backend", "avx1024");
        let display = format!("{}", error);
        assert!(display.contains("Unknown backend"));
        assert!(display.contains("avx1024"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = immediate_error("predicate", 40, 31);
        let error2 = immediate_error("predicate", 40, 31);
        let error3 = immediate_error("predicate", 41, 31);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = parse_error("rounding mode", "sideways");

        let _: &dyn std::error::Error = &error;

        assert!(std::error::Error::source(&error).is_none());
    }
}
