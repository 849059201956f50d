//! Affine pose matrices for offset matching.
//!
//! This crate provides the value type shared by the pose workspace:
//!
//! - [`Pose`] - a 4×4 affine matrix (rotation, scale, translation)
//! - [`PoseError`] - construction and inversion failures
//!
//! Poses are compared by value with a per-component tolerance. Fifteen of the
//! sixteen components take part in validity and equality checks; the
//! bottom-right homogeneous corner is never inspected (see
//! [`CHECKED_COMPONENTS`]).
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Example
//!
//! ```
//! use pose_types::{Pose, DEFAULT_TOLERANCE};
//! use nalgebra::Vector3;
//!
//! let anchor = Pose::identity();
//! let observed = Pose::from_translation(&Vector3::new(5.0, 0.0, 0.0));
//!
//! let offset = observed * anchor.inverse().unwrap();
//! assert!(offset.is_close(&observed, DEFAULT_TOLERANCE));
//! ```
//!
//! # Features
//!
//! - `serde` (default): (de)serialize a pose as an object with the 16 named
//!   fields `m00` … `m33`.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod pose;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{PoseError, PoseResult};
pub use pose::{CHECKED_COMPONENTS, DEFAULT_TOLERANCE, EPSILON, Pose};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, UnitQuaternion, Vector3};
