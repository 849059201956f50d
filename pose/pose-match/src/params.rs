//! Parameters for offset matching.

use pose_types::{DEFAULT_TOLERANCE, EPSILON};

/// Parameters for [`OffsetMatcher`](crate::OffsetMatcher).
///
/// # Example
///
/// ```
/// use pose_match::MatchParams;
///
/// let params = MatchParams::default();
/// assert!((params.tolerance - 0.001).abs() < 1e-12);
/// assert!(!params.parallel);
///
/// let params = MatchParams::new().with_tolerance(0.01).with_parallel(true);
/// assert!(params.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchParams {
    /// Per-axis and per-component tolerance. Negative values make every
    /// search return nothing; values below [`EPSILON`] are raised to it.
    pub tolerance: f64,

    /// Whether to generate and verify candidates on the rayon thread pool.
    ///
    /// Output is identical either way; deduplication always runs in scan order.
    pub parallel: bool,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            parallel: false,
        }
    }
}

impl MatchParams {
    /// Creates default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enables or disables parallel candidate verification.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Tolerance after clamping to [`EPSILON`], or `None` if it is negative.
    ///
    /// NaN is not negative and clamps to [`EPSILON`].
    #[must_use]
    pub fn effective_tolerance(&self) -> Option<f64> {
        if self.tolerance < 0.0 {
            None
        } else {
            Some(self.tolerance.max(EPSILON))
        }
    }
}
