//! Error types for structured error handling.
//!
//! This module provides `SamplingError`, the single error kind raised by the
//! generation API. Parameter errors are caller bugs, not transient
//! conditions: they are raised synchronously before any random draw occurs
//! and propagate directly to the caller without retry.

use thiserror::Error;

/// Parameter-contract violation.
///
/// Every fallible operation in the workspace fails with this error. The
/// message names the violated constraint (ordering violation such as
/// `a < c < b` failing, non-positive sample count, non-finite parameter).
///
/// Statistical edge cases are deliberately *not* errors: the Pareto tail is
/// unbounded above, and the Gamma acceptance-rejection sampler may accept
/// zero proposals for small counts. Both are documented properties that
/// calling code must tolerate.
///
/// # Examples
/// ```
/// use sampler_core::types::SamplingError;
///
/// let err = SamplingError::invalid_parameters("a < c < b must be satisfied");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameters: a < c < b must be satisfied"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Parameter contract violated before any random draw.
    #[error("Invalid parameters: {message}")]
    InvalidParameters {
        /// Description of the violated constraint
        message: String,
    },
}

impl SamplingError {
    /// Builds an [`InvalidParameters`](SamplingError::InvalidParameters)
    /// error from any displayable message.
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_constraint() {
        let err = SamplingError::invalid_parameters("sample count must be greater than 0");
        assert!(err.to_string().contains("sample count"));
        assert!(err.to_string().starts_with("Invalid parameters:"));
    }

    #[test]
    fn test_error_is_cloneable_and_comparable() {
        let err = SamplingError::invalid_parameters("x");
        assert_eq!(err.clone(), err);
    }
}
