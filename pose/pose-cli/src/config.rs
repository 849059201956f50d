//! Configuration loading for the `pose-match` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pose_io::MatchInputs;
use pose_match::{DEFAULT_TOLERANCE, MatchParams};
use serde::Deserialize;

/// Default output file for accepted offsets.
pub const DEFAULT_OUTPUT: &str = "offset.json";

/// Top-level configuration file.
///
/// ```toml
/// [input]
/// model = "model.json"
/// space = "space.json"
///
/// [matching]
/// tolerance = 0.001
/// parallel = true
///
/// [output]
/// path = "offset.json"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Model and space files
    pub input: InputConfig,
    /// Tolerance and parallelism
    pub matching: MatchingConfig,
    /// Offset destination
    pub output: OutputConfig,
}

/// Pose list sources
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Model pose list (first entry is the anchor)
    pub model: PathBuf,

    /// Space pose list
    pub space: PathBuf,
}

/// Search parameters
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MatchingConfig {
    /// Match tolerance (default: 0.001)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Verify candidates on the rayon pool (default: false)
    #[serde(default)]
    pub parallel: bool,
}

/// Output settings
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Where accepted offsets are written (default: offset.json)
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            parallel: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl MatchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Model/space pair to load
    pub fn inputs(&self) -> MatchInputs {
        MatchInputs::new(&self.input.model, &self.input.space)
    }

    /// Matcher parameters
    pub fn params(&self) -> MatchParams {
        MatchParams::new()
            .with_tolerance(self.matching.tolerance)
            .with_parallel(self.matching.parallel)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.matching.tolerance, DEFAULT_TOLERANCE);
        assert!(!config.matching.parallel);
        assert_eq!(config.output.path, PathBuf::from("offset.json"));
        assert!(!config.inputs().is_complete());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: MatchConfig = toml::from_str("").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config: MatchConfig = toml::from_str(
            r#"
            [input]
            model = "data/model.json"

            [matching]
            parallel = true
            "#,
        )
        .unwrap();

        assert_eq!(config.input.model, PathBuf::from("data/model.json"));
        assert_eq!(config.input.space, PathBuf::new());
        assert!(config.matching.parallel);
        assert_eq!(config.matching.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_params_and_inputs() {
        let config: MatchConfig = toml::from_str(
            r#"
            [input]
            model = "m.json"
            space = "s.json"

            [matching]
            tolerance = 0.05
            "#,
        )
        .unwrap();

        let params = config.params();
        assert_eq!(params.tolerance, 0.05);
        assert!(!params.parallel);
        assert!(config.inputs().is_complete());
    }

    #[test]
    fn test_load_missing_file() {
        let err = MatchConfig::load(Path::new("/nonexistent/pose-match.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_load_rejects_bad_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[matching]\ntolerance = \"wide\"\n").unwrap();

        let err = MatchConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
