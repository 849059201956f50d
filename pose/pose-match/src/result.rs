//! Offset search results and statistics.

use std::fmt;

use pose_types::Pose;

/// Why a search returned before scanning the space set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyExit {
    /// The model or space set was absent.
    MissingInput,
    /// The model or space set was empty.
    EmptyInput,
    /// The tolerance was negative.
    NegativeTolerance,
    /// The anchor (`model[0]`) has a non-finite or all-zero matrix.
    InvalidAnchor,
    /// The anchor cannot be inverted.
    SingularAnchor,
}

impl fmt::Display for EarlyExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::MissingInput => "model or space set missing",
            Self::EmptyInput => "model or space set empty",
            Self::NegativeTolerance => "tolerance is negative",
            Self::InvalidAnchor => "anchor pose is invalid",
            Self::SingularAnchor => "anchor pose is not invertible",
        };
        f.write_str(reason)
    }
}

/// Counters describing what happened to each space entry.
///
/// Every scanned entry lands in exactly one of `skipped_invalid_space`,
/// `invalid_candidates`, `rejected_degenerate`, `rejected_unmatched`,
/// `duplicates` or `accepted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Number of space entries supplied.
    pub space_entries: usize,
    /// Space entries skipped because their matrix is invalid.
    pub skipped_invalid_space: usize,
    /// Space entries whose derived offset was invalid.
    pub invalid_candidates: usize,
    /// Candidate offsets that went through verification.
    pub candidates: usize,
    /// Candidates rejected because a transformed model entry was invalid.
    pub rejected_degenerate: usize,
    /// Candidates rejected because a transformed model entry had no match.
    pub rejected_unmatched: usize,
    /// Verified candidates discarded as duplicates of an earlier offset.
    pub duplicates: usize,
    /// Offsets in the result.
    pub accepted: usize,
    /// Set when the search stopped before scanning.
    pub early_exit: Option<EarlyExit>,
}

/// Output of [`OffsetMatcher::run`](crate::OffsetMatcher::run).
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    /// Accepted offsets in the order they were accepted.
    pub offsets: Vec<Pose>,
    /// Diagnostics; never affects `offsets`.
    pub stats: MatchStats,
}

impl MatchResult {
    pub(crate) fn early_exit(space_entries: usize, reason: EarlyExit) -> Self {
        Self {
            offsets: Vec::new(),
            stats: MatchStats {
                space_entries,
                early_exit: Some(reason),
                ..MatchStats::default()
            },
        }
    }

    /// Returns true if at least one offset was found.
    #[must_use]
    pub fn found_any(&self) -> bool {
        !self.offsets.is_empty()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        if let Some(reason) = s.early_exit {
            return write!(f, "Offset search skipped: {reason}");
        }
        write!(
            f,
            "Offset search: {} offsets from {} space entries ({} candidates, {} unmatched, {} degenerate, {} duplicates, {} invalid)",
            s.accepted,
            s.space_entries,
            s.candidates,
            s.rejected_unmatched,
            s.rejected_degenerate,
            s.duplicates,
            s.skipped_invalid_space + s.invalid_candidates,
        )
    }
}
