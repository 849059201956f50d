//! JSON pose lists.
//!
//! A pose list is a JSON array of objects with the sixteen named fields
//! `m00` … `m33` (row, column). Missing fields read as `0.0`.
//!
//! ```json
//! [
//!   { "m00": 1.0, "m01": 0.0, "m02": 0.0, "m03": 5.0,
//!     "m10": 0.0, "m11": 1.0, "m12": 0.0, "m13": 0.0,
//!     "m20": 0.0, "m21": 0.0, "m22": 1.0, "m23": 0.0,
//!     "m30": 0.0, "m31": 0.0, "m32": 0.0, "m33": 1.0 }
//! ]
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use pose_types::Pose;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Parses a JSON pose list.
///
/// Empty or whitespace-only input and the literal `null` yield an empty list.
///
/// # Errors
///
/// Returns [`IoError::Json`] if the text is not a JSON array of pose objects.
///
/// # Example
///
/// ```
/// use pose_io::parse_poses;
///
/// let poses = parse_poses(r#"[{"m00": 1.0, "m11": 1.0, "m22": 1.0, "m33": 1.0, "m03": 2.0}]"#).unwrap();
/// assert_eq!(poses.len(), 1);
/// assert!((poses[0].translation().x - 2.0).abs() < 1e-12);
///
/// assert!(parse_poses("  ").unwrap().is_empty());
/// assert!(parse_poses("null").unwrap().is_empty());
/// ```
pub fn parse_poses(text: &str) -> IoResult<Vec<Pose>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let poses: Option<Vec<Pose>> = serde_json::from_str(text)?;
    Ok(poses.unwrap_or_default())
}

/// Serializes poses as a JSON array, optionally indented.
///
/// # Errors
///
/// Returns [`IoError::Json`] if serialization fails.
pub fn to_json_string(poses: &[Pose], pretty: bool) -> IoResult<String> {
    let text = if pretty {
        serde_json::to_string_pretty(poses)?
    } else {
        serde_json::to_string(poses)?
    };
    Ok(text)
}

/// Loads a pose list from a JSON file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist,
/// [`IoError::Io`] if it cannot be read, or [`IoError::Json`] if the
/// content is not a pose list.
///
/// # Example
///
/// ```no_run
/// use pose_io::load_poses;
///
/// let model = load_poses("model.json").unwrap();
/// println!("Loaded {} poses", model.len());
/// ```
pub fn load_poses<P: AsRef<Path>>(path: P) -> IoResult<Vec<Pose>> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;

    let poses = parse_poses(&text)?;
    debug!(path = %path.display(), count = poses.len(), "Loaded poses");
    Ok(poses)
}

/// Saves poses to a JSON file as an indented array.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the directory or file cannot be written.
pub fn save_poses<P: AsRef<Path>>(poses: &[Pose], path: P) -> IoResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, poses)?;
    writer.flush()?;

    debug!(path = %path.display(), count = poses.len(), "Saved poses");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pose_types::Vector3;

    #[test]
    fn test_parse_empty_inputs() {
        assert!(parse_poses("").unwrap().is_empty());
        assert!(parse_poses("\n\t ").unwrap().is_empty());
        assert!(parse_poses("null").unwrap().is_empty());
        assert!(parse_poses("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_fields_default_to_zero() {
        let poses = parse_poses(r#"[{"m03": 4.0}]"#).unwrap();
        assert_eq!(poses.len(), 1);
        assert_relative_eq!(poses[0].get(0, 3), 4.0);
        assert_relative_eq!(poses[0].get(0, 0), 0.0);
        assert_relative_eq!(poses[0].get(3, 3), 0.0);
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(matches!(parse_poses("{}"), Err(IoError::Json(_))));
        assert!(matches!(parse_poses("[1, 2]"), Err(IoError::Json(_))));
        assert!(matches!(parse_poses("[{"), Err(IoError::Json(_))));
    }

    #[test]
    fn test_to_json_string_uses_named_fields() {
        let pose = Pose::from_translation(&Vector3::new(1.5, 0.0, 0.0));
        let compact = to_json_string(&[pose], false).unwrap();
        assert!(compact.starts_with("[{"));
        assert!(compact.contains("\"m03\":1.5"));
        assert!(!compact.contains('\n'));

        let pretty = to_json_string(&[pose], true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(parse_poses(&pretty).unwrap(), vec![pose]);
    }

    #[test]
    fn test_to_json_string_empty() {
        assert_eq!(to_json_string(&[], false).unwrap(), "[]");
    }
}
