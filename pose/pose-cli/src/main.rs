//! `pose-match` - find where a model pose set occurs inside a space pose set.
//!
//! Loads two JSON pose lists, runs the offset search and writes every
//! accepted offset to a JSON pose list.
//!
//! # Usage
//!
//! ```text
//! pose-match --model model.json --space space.json
//! pose-match --config pose-match.toml --tolerance 0.01 --parallel
//! ```
//!
//! Settings come from the optional TOML file first; command-line flags
//! override them. Logging honours `RUST_LOG` and defaults to `info` for the
//! pose crates.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use config::MatchConfig;
use pose_io::save_poses;
use pose_match::{MatchResult, OffsetMatcher};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Find every offset that maps a model pose set onto a space pose set
#[derive(Parser, Debug)]
#[command(name = "pose-match")]
#[command(about = "Find every offset that maps a model pose set onto a space pose set", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON pose list describing the model (first entry is the anchor)
    #[arg(long)]
    model: Option<PathBuf>,

    /// JSON pose list to search
    #[arg(long)]
    space: Option<PathBuf>,

    /// Match tolerance (default: 0.001)
    #[arg(long, allow_negative_numbers = true)]
    tolerance: Option<f64>,

    /// Where to write the offsets (default: offset.json)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Verify candidates in parallel
    #[arg(long)]
    parallel: bool,

    /// TOML configuration file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Configuration file contents with command-line overrides applied.
    fn resolve(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                MatchConfig::load(path)?
            }
            None => MatchConfig::default(),
        };

        if let Some(model) = &self.model {
            config.input.model.clone_from(model);
        }
        if let Some(space) = &self.space {
            config.input.space.clone_from(space);
        }
        if let Some(tolerance) = self.tolerance {
            config.matching.tolerance = tolerance;
        }
        if self.parallel {
            config.matching.parallel = true;
        }
        if let Some(output) = &self.output {
            config.output.path.clone_from(output);
        }

        Ok(config)
    }
}

/// Loads inputs, runs the search and saves the offsets.
fn run(config: &MatchConfig) -> Result<MatchResult> {
    let inputs = config.inputs();
    if !inputs.is_complete() {
        bail!("both --model and --space are required (or [input] in the config file)");
    }
    let (model, space) = inputs.load().context("failed to load match inputs")?;

    let result = OffsetMatcher::new(config.params()).run(&model, &space);
    if let Some(reason) = result.stats.early_exit {
        warn!(%reason, "No search performed");
    }

    let output = &config.output.path;
    save_poses(&result.offsets, output)
        .with_context(|| format!("failed to save offsets to {}", output.display()))?;
    info!(path = %output.display(), count = result.offsets.len(), "Saved offsets");

    Ok(result)
}

fn main() -> Result<()> {
    // This binary's crate name is also `pose_match`, so one directive covers it and the library.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pose_match=info".parse()?)
                .add_directive("pose_io=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    let result = run(&config)?;

    println!("{result}");
    for (i, offset) in result.offsets.iter().enumerate() {
        let (roll, pitch, yaw) = offset.rotation().euler_angles();
        println!("  [{i}] {offset} rpy=[{roll:.4}, {pitch:.4}, {yaw:.4}]");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pose_io::{load_poses, save_poses};
    use pose_types::{Pose, Vector3};
    use tempfile::tempdir;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pose-match"]).unwrap();
        let config = cli.resolve().unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pose-match.toml");
        std::fs::write(
            &path,
            "[input]\nmodel = \"a.json\"\nspace = \"b.json\"\n\n[matching]\ntolerance = 0.5\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "pose-match",
            "--config",
            path.to_str().unwrap(),
            "--space",
            "c.json",
            "--tolerance",
            "0.01",
            "--parallel",
        ])
        .unwrap();
        let config = cli.resolve().unwrap();

        assert_eq!(config.input.model, PathBuf::from("a.json"));
        assert_eq!(config.input.space, PathBuf::from("c.json"));
        assert_eq!(config.matching.tolerance, 0.01);
        assert!(config.matching.parallel);
        assert_eq!(config.output.path, PathBuf::from("offset.json"));
    }

    #[test]
    fn test_negative_tolerance_flag_parses() {
        let cli = Cli::try_parse_from(["pose-match", "--tolerance", "-1"]).unwrap();
        assert_eq!(cli.resolve().unwrap().matching.tolerance, -1.0);
    }

    #[test]
    fn test_run_writes_offsets() {
        let dir = tempdir().unwrap();
        let step = Pose::from_translation(&Vector3::new(1.0, 0.0, 0.0));
        let t = Pose::from_translation(&Vector3::new(4.0, 2.0, 0.0));
        save_poses(&[Pose::identity(), step], dir.path().join("model.json")).unwrap();
        save_poses(&[t, t * step], dir.path().join("space.json")).unwrap();

        let mut config = MatchConfig::default();
        config.input.model = dir.path().join("model.json");
        config.input.space = dir.path().join("space.json");
        config.output.path = dir.path().join("out").join("offset.json");

        let result = run(&config).unwrap();
        assert_eq!(result.offsets, vec![t]);
        assert_eq!(load_poses(&config.output.path).unwrap(), vec![t]);
    }

    #[test]
    fn test_run_requires_inputs() {
        let err = run(&MatchConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--model"));
    }

    #[test]
    fn test_run_reports_missing_file() {
        let dir = tempdir().unwrap();
        let mut config = MatchConfig::default();
        config.input.model = dir.path().join("model.json");
        config.input.space = dir.path().join("space.json");

        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("file not found"));
    }
}
