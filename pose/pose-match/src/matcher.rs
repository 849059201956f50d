//! Candidate generation and verification.

use pose_types::Pose;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::dedup::OffsetSet;
use crate::hash::SpatialHash;
use crate::params::MatchParams;
use crate::result::{EarlyExit, MatchResult, MatchStats};

/// Outcome of evaluating one space entry.
#[derive(Debug, Clone, Copy)]
enum Verdict {
    InvalidSpace,
    InvalidCandidate,
    Degenerate,
    Unmatched,
    Verified(Pose),
}

/// Outcome of checking a candidate against the whole model set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verification {
    Matched,
    Degenerate,
    Unmatched,
}

/// Offset search over a model set and a space set.
///
/// For every valid space entry `s`, the candidate `O = s · model[0]⁻¹` is
/// accepted when `O · m` has a counterpart in the space set for every valid
/// model entry `m`. Accepted candidates are deduplicated in scan order.
///
/// # Example
///
/// ```
/// use pose_match::{MatchParams, OffsetMatcher};
/// use pose_types::{Pose, Vector3};
///
/// let model = vec![
///     Pose::identity(),
///     Pose::from_translation(&Vector3::new(1.0, 0.0, 0.0)),
/// ];
/// let t = Pose::from_translation(&Vector3::new(5.0, 0.0, 0.0));
/// let space = vec![t, t * model[1]];
///
/// let result = OffsetMatcher::new(MatchParams::default()).run(&model, &space);
/// assert_eq!(result.offsets.len(), 1);
/// assert!(result.offsets[0].is_close(&t, 1e-9));
/// println!("{result}");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetMatcher {
    params: MatchParams,
}

impl OffsetMatcher {
    /// Creates a matcher.
    #[must_use]
    pub const fn new(params: MatchParams) -> Self {
        Self { params }
    }

    /// Parameters in use.
    #[must_use]
    pub const fn params(&self) -> &MatchParams {
        &self.params
    }

    /// Runs the search. Never fails: bad input yields an empty result whose
    /// statistics carry the [`EarlyExit`] reason.
    #[must_use]
    pub fn run(&self, model: &[Pose], space: &[Pose]) -> MatchResult {
        self.run_opt(Some(model), Some(space))
    }

    /// Runs the search on possibly absent inputs.
    #[must_use]
    pub fn run_opt(&self, model: Option<&[Pose]>, space: Option<&[Pose]>) -> MatchResult {
        let space_entries = space.map_or(0, <[Pose]>::len);
        let exit = |reason: EarlyExit| {
            debug!(%reason, "Offset search skipped");
            MatchResult::early_exit(space_entries, reason)
        };

        let (Some(model), Some(space)) = (model, space) else {
            return exit(EarlyExit::MissingInput);
        };
        let Some(anchor) = model.first() else {
            return exit(EarlyExit::EmptyInput);
        };
        if space.is_empty() {
            return exit(EarlyExit::EmptyInput);
        }
        let Some(tolerance) = self.params.effective_tolerance() else {
            return exit(EarlyExit::NegativeTolerance);
        };
        if !anchor.is_valid() {
            return exit(EarlyExit::InvalidAnchor);
        }
        let Ok(anchor_inverse) = anchor.inverse() else {
            return exit(EarlyExit::SingularAnchor);
        };

        let hash = SpatialHash::build(space, tolerance);
        debug!(
            indexed = hash.len(),
            cells = hash.cell_count(),
            cell_size = tolerance,
            "Built spatial hash"
        );

        let check = |entry: &Pose| evaluate(entry, &anchor_inverse, model, &hash);
        let verdicts: Vec<Verdict> = if self.params.parallel {
            space.par_iter().map(check).collect()
        } else {
            space.iter().map(check).collect()
        };

        let mut stats = MatchStats {
            space_entries,
            ..MatchStats::default()
        };
        let mut offsets = OffsetSet::new(tolerance);

        for verdict in verdicts {
            match verdict {
                Verdict::InvalidSpace => stats.skipped_invalid_space += 1,
                Verdict::InvalidCandidate => stats.invalid_candidates += 1,
                Verdict::Degenerate => {
                    stats.candidates += 1;
                    stats.rejected_degenerate += 1;
                }
                Verdict::Unmatched => {
                    stats.candidates += 1;
                    stats.rejected_unmatched += 1;
                }
                Verdict::Verified(offset) => {
                    stats.candidates += 1;
                    if offsets.insert(offset) {
                        stats.accepted += 1;
                    } else {
                        stats.duplicates += 1;
                    }
                }
            }
        }

        info!(
            model = model.len(),
            space = space_entries,
            candidates = stats.candidates,
            accepted = stats.accepted,
            duplicates = stats.duplicates,
            "Offset search complete"
        );

        MatchResult {
            offsets: offsets.into_vec(),
            stats,
        }
    }
}

fn evaluate(
    entry: &Pose,
    anchor_inverse: &Pose,
    model: &[Pose],
    hash: &SpatialHash<'_>,
) -> Verdict {
    if !entry.is_valid() {
        return Verdict::InvalidSpace;
    }
    let Some(candidate) = candidate_offset(entry, anchor_inverse) else {
        return Verdict::InvalidCandidate;
    };
    match verify(&candidate, model, hash) {
        Verification::Matched => Verdict::Verified(candidate),
        Verification::Degenerate => Verdict::Degenerate,
        Verification::Unmatched => Verdict::Unmatched,
    }
}

/// `space_entry · anchor⁻¹`, or `None` if the product is invalid.
pub(crate) fn candidate_offset(space_entry: &Pose, anchor_inverse: &Pose) -> Option<Pose> {
    let candidate = space_entry * anchor_inverse;
    candidate.is_valid().then_some(candidate)
}

/// Checks `offset · m` against the hash for every valid model entry `m`.
pub(crate) fn verify(offset: &Pose, model: &[Pose], hash: &SpatialHash<'_>) -> Verification {
    for entry in model.iter().filter(|m| m.is_valid()) {
        let transformed = offset * entry;
        if !transformed.is_valid() {
            return Verification::Degenerate;
        }
        if !hash.contains_match(&transformed) {
            return Verification::Unmatched;
        }
    }
    Verification::Matched
}

/// Finds every offset that maps the whole model set onto the space set.
///
/// Returns an empty list when either set is empty, the tolerance is
/// negative, or `model[0]` is invalid or singular.
///
/// # Example
///
/// ```
/// use pose_match::find_all_offsets;
/// use pose_types::{Pose, Vector3, DEFAULT_TOLERANCE};
///
/// let t = Pose::from_translation(&Vector3::new(5.0, 0.0, 0.0));
/// let offsets = find_all_offsets(&[Pose::identity()], &[t], DEFAULT_TOLERANCE);
/// assert_eq!(offsets, vec![t]);
/// ```
#[must_use]
pub fn find_all_offsets(model: &[Pose], space: &[Pose], tolerance: f64) -> Vec<Pose> {
    find_all_offsets_opt(Some(model), Some(space), tolerance)
}

/// [`find_all_offsets`] for inputs that may be absent; absence yields an empty list.
#[must_use]
pub fn find_all_offsets_opt(
    model: Option<&[Pose]>,
    space: Option<&[Pose]>,
    tolerance: f64,
) -> Vec<Pose> {
    OffsetMatcher::new(MatchParams::new().with_tolerance(tolerance))
        .run_opt(model, space)
        .offsets
}
