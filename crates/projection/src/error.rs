//! Error types for projection selection.

use thiserror::Error;

/// Errors raised while choosing or parameterizing a projection.
///
/// Inversion itself never fails; a plane point with no counterpart on the
/// globe is an ordinary `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Unknown projection '{name}' (expected one of: {expected})")]
    UnknownProjection { name: String, expected: String },

    #[error("Invalid parameter '{param}': {message}")]
    InvalidParameter { param: &'static str, message: String },
}
