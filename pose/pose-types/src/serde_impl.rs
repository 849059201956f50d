//! Serde support: a pose is an object with 16 named components `m00` … `m33`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Pose;

/// Wire shape of a pose. Missing fields read as `0.0`, unknown fields are ignored.
#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct PoseData {
    m00: f64,
    m01: f64,
    m02: f64,
    m03: f64,
    m10: f64,
    m11: f64,
    m12: f64,
    m13: f64,
    m20: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m30: f64,
    m31: f64,
    m32: f64,
    m33: f64,
}

impl From<&Pose> for PoseData {
    #[allow(clippy::similar_names)]
    fn from(pose: &Pose) -> Self {
        let [
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        ] = pose.to_row_major();
        Self {
            m00,
            m01,
            m02,
            m03,
            m10,
            m11,
            m12,
            m13,
            m20,
            m21,
            m22,
            m23,
            m30,
            m31,
            m32,
            m33,
        }
    }
}

impl From<PoseData> for Pose {
    fn from(d: PoseData) -> Self {
        Self::from_row_major([
            d.m00, d.m01, d.m02, d.m03, d.m10, d.m11, d.m12, d.m13, d.m20, d.m21, d.m22, d.m23,
            d.m30, d.m31, d.m32, d.m33,
        ])
    }
}

impl Serialize for Pose {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        PoseData::from(self).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Pose {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        PoseData::deserialize(d).map(Self::from)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use nalgebra::{UnitQuaternion, Vector3};

    #[test]
    fn pose_serializes_named_fields() {
        let pose = Pose::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        let json = serde_json::to_string(&pose).unwrap();
        assert!(json.contains("\"m03\":1.0"));
        assert!(json.contains("\"m13\":2.0"));
        assert!(json.contains("\"m23\":3.0"));
        assert!(json.contains("\"m33\":1.0"));
    }

    #[test]
    fn pose_serialization_round_trip_is_lossless() {
        let rotation = UnitQuaternion::from_euler_angles(0.3, -0.7, 1.1);
        let pose = Pose::from_trs(&Vector3::new(-4.5, 0.125, 9.0), &rotation, &Vector3::repeat(1.7));
        let json = serde_json::to_string(&pose).unwrap();
        let parsed: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pose);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let parsed: Pose = serde_json::from_str(r#"{"m00": 1.0, "m11": 1.0, "extra": 7}"#).unwrap();
        assert_eq!(parsed.get(0, 0), 1.0);
        assert_eq!(parsed.get(1, 1), 1.0);
        assert_eq!(parsed.get(2, 2), 0.0);
        assert_eq!(parsed.get(3, 3), 0.0);
    }
}
