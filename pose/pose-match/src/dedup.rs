//! Insertion-ordered set of accepted offsets.

use pose_types::{EPSILON, Pose};

/// Accepted offsets, unique under the tolerance rule, in acceptance order.
///
/// Two offsets are duplicates when their translations lie within the
/// tolerance radius (inclusive) and all 15 checked components differ by
/// strictly less than the tolerance. Lookup is a linear scan.
///
/// # Example
///
/// ```
/// use pose_match::OffsetSet;
/// use pose_types::{Pose, Vector3};
///
/// let mut set = OffsetSet::new(0.001);
/// assert!(set.insert(Pose::identity()));
/// assert!(!set.insert(Pose::from_translation(&Vector3::new(0.0005, 0.0, 0.0))));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct OffsetSet {
    offsets: Vec<Pose>,
    tolerance: f64,
    tolerance_sq: f64,
}

impl OffsetSet {
    /// Creates an empty set; `tolerance` is clamped to at least [`EPSILON`].
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        let tolerance = tolerance.max(EPSILON);
        Self {
            offsets: Vec::new(),
            tolerance,
            tolerance_sq: tolerance * tolerance,
        }
    }

    /// Returns true if an equivalent offset is already present.
    #[must_use]
    pub fn contains(&self, offset: &Pose) -> bool {
        self.offsets
            .iter()
            .any(|accepted| offset.is_close_sq(accepted, self.tolerance, self.tolerance_sq))
    }

    /// Appends `offset` unless an equivalent one is present.
    ///
    /// Returns true if the offset was added.
    pub fn insert(&mut self, offset: Pose) -> bool {
        if self.contains(&offset) {
            return false;
        }
        self.offsets.push(offset);
        true
    }

    /// Number of accepted offsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns true if nothing was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Accepted offsets in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Pose] {
        &self.offsets
    }

    /// Consumes the set, returning the offsets in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Pose> {
        self.offsets
    }
}
