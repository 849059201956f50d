//! Error types for pose construction and inversion.

use thiserror::Error;

/// Errors that can occur when building or inverting a [`Pose`](crate::Pose).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PoseError {
    /// A flat component slice did not hold exactly 16 values.
    #[error("expected {expected} matrix components, got {got}")]
    InvalidLength {
        /// Number of components required.
        expected: usize,
        /// Number of components provided.
        got: usize,
    },

    /// The matrix determinant is too close to zero to invert.
    #[error("matrix is singular (determinant {determinant:e})")]
    Singular {
        /// The offending determinant.
        determinant: f64,
    },
}

/// Result type for pose operations.
pub type PoseResult<T> = Result<T, PoseError>;
