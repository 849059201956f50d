//! Named pose collections.

use std::collections::BTreeMap;
use std::path::Path;

use pose_types::Pose;
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::json::load_poses;

/// Pose lists stored by name, iterated in name order.
///
/// # Example
///
/// ```
/// use pose_io::PoseLibrary;
/// use pose_types::Pose;
///
/// let mut library = PoseLibrary::new();
/// library.insert("model", vec![Pose::identity()]).unwrap();
/// assert!(library.insert("model", Vec::new()).is_err());
/// assert_eq!(library.get("model").map(<[Pose]>::len), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoseLibrary {
    collections: BTreeMap<String, Vec<Pose>>,
}

impl PoseLibrary {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DuplicateName`] if `name` is already taken; the
    /// existing collection is left untouched.
    pub fn insert(&mut self, name: impl Into<String>, poses: Vec<Pose>) -> IoResult<()> {
        let name = name.into();
        if self.collections.contains_key(&name) {
            return Err(IoError::DuplicateName { name });
        }
        debug!(name = %name, count = poses.len(), "Added pose collection");
        self.collections.insert(name, poses);
        Ok(())
    }

    /// Loads a JSON pose list and adds it under `name`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`load_poses`], or [`IoError::DuplicateName`].
    pub fn insert_file<P: AsRef<Path>>(&mut self, name: impl Into<String>, path: P) -> IoResult<()> {
        let name = name.into();
        if self.collections.contains_key(&name) {
            return Err(IoError::DuplicateName { name });
        }
        let poses = load_poses(path)?;
        self.insert(name, poses)
    }

    /// Collection stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Pose]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// Collection names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Number of collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if the library holds no collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// `(name, poses)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pose])> {
        self.collections
            .iter()
            .map(|(name, poses)| (name.as_str(), poses.as_slice()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pose_types::Vector3;

    #[test]
    fn test_insert_and_get() {
        let mut library = PoseLibrary::new();
        assert!(library.is_empty());

        let t = Pose::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        library.insert("space", vec![t, Pose::identity()]).unwrap();
        library.insert("model", vec![Pose::identity()]).unwrap();

        assert_eq!(library.len(), 2);
        assert_eq!(library.get("space").unwrap(), &[t, Pose::identity()]);
        assert!(library.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_name_keeps_original() {
        let mut library = PoseLibrary::new();
        library.insert("model", vec![Pose::identity()]).unwrap();

        let err = library.insert("model", Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::DuplicateName { ref name } if name == "model"));
        assert_eq!(library.get("model").unwrap().len(), 1);
    }

    #[test]
    fn test_names_and_iter_sorted() {
        let mut library = PoseLibrary::new();
        library.insert("space", Vec::new()).unwrap();
        library.insert("model", Vec::new()).unwrap();
        library.insert("offset", Vec::new()).unwrap();

        assert_eq!(library.names().collect::<Vec<_>>(), ["model", "offset", "space"]);
        let first = library.iter().next().unwrap();
        assert_eq!(first.0, "model");
        assert!(first.1.is_empty());
    }

    #[test]
    fn test_insert_file_missing() {
        let mut library = PoseLibrary::new();
        let err = library
            .insert_file("model", "/nonexistent/pose-io/model.json")
            .unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
        assert!(library.is_empty());
    }
}
