//! Offset matching between a model pose set and a space pose set.
//!
//! Given a small *model* set of 4×4 poses describing a template arrangement
//! and a larger *space* set of observed poses, this crate finds every offset
//! `O` such that `O · m` lands on some space pose (within tolerance) for every
//! model pose `m`.
//!
//! - [`find_all_offsets`] - the plain search: `(model, space, tolerance) -> offsets`
//! - [`OffsetMatcher`] - the same search with [`MatchParams`] and [`MatchStats`]
//! - [`SpatialHash`] - grid-quantized lookup over space translations
//! - [`OffsetSet`] - insertion-ordered deduplication of accepted offsets
//!
//! # Algorithm
//!
//! 1. Index every valid space pose by its translation rounded to a grid of
//!    cell size `T` (the tolerance, at least `1e-6`).
//! 2. For each valid space pose `s`, form `O = s · model[0]⁻¹`.
//! 3. Accept `O` if, for every valid model pose `m`, `O · m` is valid and the
//!    query's own grid cell holds a pose within squared translation distance
//!    `T²` whose 15 checked components all differ by less than `T`.
//! 4. Drop `O` if it is close to an offset accepted earlier.
//!
//! The search never fails. Missing or empty inputs, a negative tolerance and
//! an invalid or singular anchor all produce an empty result.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero Bevy dependencies.
//!
//! # Quick Start
//!
//! ```
//! use pose_match::{find_all_offsets, MatchParams, OffsetMatcher};
//! use pose_types::{Pose, Vector3, DEFAULT_TOLERANCE};
//!
//! let step = Pose::from_translation(&Vector3::new(1.0, 0.0, 0.0));
//! let model = vec![Pose::identity(), step];
//!
//! let t = Pose::from_translation(&Vector3::new(5.0, 0.0, 0.0));
//! let space = vec![t, t * step];
//!
//! let offsets = find_all_offsets(&model, &space, DEFAULT_TOLERANCE);
//! assert_eq!(offsets.len(), 1);
//!
//! // Same search on the rayon pool, with statistics.
//! let result = OffsetMatcher::new(MatchParams::default().with_parallel(true)).run(&model, &space);
//! assert_eq!(result.offsets, offsets);
//! assert_eq!(result.stats.rejected_unmatched, 1);
//! ```
//!
//! # Known approximations
//!
//! Only the query's own grid cell is probed, so two poses closer than the
//! tolerance but straddling a cell boundary do not match. Raising the
//! tolerance can therefore move a pair across a boundary and lose a match
//! that a smaller tolerance found.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod dedup;
mod hash;
mod matcher;
mod params;
mod result;

pub use dedup::OffsetSet;
pub use hash::{CellKey, SpatialHash};
pub use matcher::{OffsetMatcher, find_all_offsets, find_all_offsets_opt};
pub use params::MatchParams;
pub use result::{EarlyExit, MatchResult, MatchStats};

pub use pose_types::{DEFAULT_TOLERANCE, EPSILON, Pose};
