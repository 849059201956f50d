//! Model/space input pair.

use std::path::{Path, PathBuf};

use pose_types::Pose;
use tracing::info;

use crate::error::{IoError, IoResult};
use crate::json::load_poses;

/// Paths to the model and space pose lists for one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchInputs {
    /// JSON file holding the model set (`model[0]` is the anchor).
    pub model: PathBuf,
    /// JSON file holding the space set.
    pub space: PathBuf,
}

impl MatchInputs {
    /// Creates an input pair.
    #[must_use]
    pub fn new(model: impl Into<PathBuf>, space: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            space: space.into(),
        }
    }

    /// Returns true if both paths are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing().is_none()
    }

    fn missing(&self) -> Option<&'static str> {
        let empty = |p: &Path| p.as_os_str().is_empty();
        if empty(&self.model) {
            Some("model")
        } else if empty(&self.space) {
            Some("space")
        } else {
            None
        }
    }

    /// Loads both lists, returning `(model, space)`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::IncompleteInputs`] if a path is empty, otherwise any
    /// error from [`load_poses`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pose_io::MatchInputs;
    ///
    /// let (model, space) = MatchInputs::new("model.json", "space.json").load().unwrap();
    /// println!("{} model poses, {} space poses", model.len(), space.len());
    /// ```
    pub fn load(&self) -> IoResult<(Vec<Pose>, Vec<Pose>)> {
        if let Some(missing) = self.missing() {
            return Err(IoError::IncompleteInputs { missing });
        }
        let model = load_poses(&self.model)?;
        let space = load_poses(&self.space)?;
        info!(
            model = model.len(),
            space = space.len(),
            "Loaded match inputs"
        );
        Ok((model, space))
    }
}
