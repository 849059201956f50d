//! Grid-quantized spatial lookup over pose translations.

use hashbrown::HashMap;
use pose_types::{EPSILON, Pose, Vector3};

/// Integer grid cell derived from a translation divided by the cell size.
///
/// # Example
///
/// ```
/// use pose_match::CellKey;
/// use pose_types::Vector3;
///
/// let key = CellKey::from_translation(&Vector3::new(0.0104, -0.0026, 0.0), 0.001);
/// assert_eq!(key, CellKey::new(10, -3, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellKey {
    /// X cell index.
    pub x: i64,
    /// Y cell index.
    pub y: i64,
    /// Z cell index.
    pub z: i64,
}

impl CellKey {
    /// Creates a cell key.
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Quantizes a translation: each axis is divided by `cell_size` and
    /// rounded to the nearest integer, ties to even.
    #[must_use]
    pub fn from_translation(translation: &Vector3<f64>, cell_size: f64) -> Self {
        let cell_size = cell_size.max(EPSILON);
        Self::new(
            quantize(translation.x, cell_size),
            quantize(translation.y, cell_size),
            quantize(translation.z, cell_size),
        )
    }

    /// Returns the key as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i64, i64, i64) {
        (self.x, self.y, self.z)
    }
}

// Out-of-range values saturate; callers only quantize finite translations.
#[allow(clippy::cast_possible_truncation)]
fn quantize(value: f64, cell_size: f64) -> i64 {
    (value / cell_size).round_ties_even() as i64
}

/// Read-only index from grid cells to the poses whose translation falls in them.
///
/// The cell size equals the matching tolerance. A query only probes the
/// query's own cell, never the 26 surrounding ones, so a true match sitting
/// just across a cell boundary is not found.
///
/// # Example
///
/// ```
/// use pose_match::SpatialHash;
/// use pose_types::{Pose, Vector3};
///
/// let space = vec![
///     Pose::from_translation(&Vector3::new(1.0, 0.0, 0.0)),
///     Pose::from_translation(&Vector3::new(2.0, 0.0, 0.0)),
/// ];
/// let hash = SpatialHash::build(&space, 0.001);
///
/// assert_eq!(hash.len(), 2);
/// assert!(hash.contains_match(&Pose::from_translation(&Vector3::new(1.0002, 0.0, 0.0))));
/// assert!(!hash.contains_match(&Pose::from_translation(&Vector3::new(1.5, 0.0, 0.0))));
/// ```
#[derive(Debug, Clone)]
pub struct SpatialHash<'a> {
    cells: HashMap<CellKey, Vec<&'a Pose>>,
    cell_size: f64,
    tolerance_sq: f64,
    len: usize,
}

impl<'a> SpatialHash<'a> {
    /// Indexes every valid pose of `poses`; invalid poses are skipped.
    ///
    /// `tolerance` is clamped to at least [`EPSILON`] and used as both the
    /// cell size and the match tolerance.
    #[must_use]
    pub fn build(poses: &'a [Pose], tolerance: f64) -> Self {
        let cell_size = tolerance.max(EPSILON);
        let mut cells: HashMap<CellKey, Vec<&'a Pose>> = HashMap::with_capacity(poses.len());
        let mut len = 0;

        for pose in poses.iter().filter(|p| p.is_valid()) {
            let key = CellKey::from_translation(&pose.translation(), cell_size);
            cells.entry(key).or_default().push(pose);
            len += 1;
        }

        Self {
            cells,
            cell_size,
            tolerance_sq: cell_size * cell_size,
            len,
        }
    }

    /// Cell size (the clamped tolerance).
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of indexed poses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no pose was indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell a pose falls into.
    #[must_use]
    pub fn cell_of(&self, pose: &Pose) -> CellKey {
        CellKey::from_translation(&pose.translation(), self.cell_size)
    }

    /// Poses stored in a cell, in input order.
    #[must_use]
    pub fn bucket(&self, key: CellKey) -> Option<&[&'a Pose]> {
        self.cells.get(&key).map(Vec::as_slice)
    }

    /// Returns true if the query's own cell holds a pose within the
    /// translation radius whose checked components all differ by less than
    /// the tolerance.
    #[must_use]
    pub fn contains_match(&self, pose: &Pose) -> bool {
        self.bucket(self.cell_of(pose)).is_some_and(|bucket| {
            bucket
                .iter()
                .any(|candidate| pose.is_close_sq(candidate, self.cell_size, self.tolerance_sq))
        })
    }
}
