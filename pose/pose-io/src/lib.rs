//! Pose list persistence.
//!
//! This crate reads and writes the JSON pose lists consumed and produced by
//! the offset search:
//!
//! - [`parse_poses`] / [`to_json_string`] - in-memory conversion
//! - [`load_poses`] / [`save_poses`] - file conversion
//! - [`PoseLibrary`] - pose lists stored by name
//! - [`MatchInputs`] - the model/space file pair for one search
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Example
//!
//! ```no_run
//! use pose_io::{load_poses, save_poses};
//!
//! let space = load_poses("space.json").unwrap();
//! save_poses(&space, "out/space_copy.json").unwrap();
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod inputs;
mod json;
mod library;

pub use error::{IoError, IoResult};
pub use inputs::MatchInputs;
pub use json::{load_poses, parse_poses, save_poses, to_json_string};
pub use library::PoseLibrary;
