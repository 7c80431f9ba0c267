//! Snapshot serialization.
//!
//! Key order follows [`Snapshot`] field order. Floats are written with one
//! decimal place; unknown keys are ignored on read so that older readers
//! accept newer snapshots.

use std::{fmt, str::FromStr};

use quality_probe_shared_kernel::{PresentationError, QualityProbeError, Result};
use serde::Serializer;

use crate::model::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    #[default]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl SnapshotFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            #[cfg(feature = "yaml")]
            Self::Yaml => "yaml",
        }
    }

    /// Guess from a file extension; anything unknown is JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnapshotFormat {
    type Err = QualityProbeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(PresentationError::InvalidValue {
                flag: "format".to_string(),
                value: other.to_string(),
                reason: "unsupported snapshot format".to_string(),
            }
            .into()),
        }
    }
}

pub fn serialize(snapshot: &Snapshot, format: SnapshotFormat) -> Result<String> {
    match format {
        SnapshotFormat::Json => {
            let mut out = serde_json::to_string_pretty(snapshot)?;
            out.push('\n');
            Ok(out)
        }
        #[cfg(feature = "yaml")]
        SnapshotFormat::Yaml => Ok(serde_yaml::to_string(snapshot)?),
    }
}

pub fn deserialize(input: &str, format: SnapshotFormat) -> Result<Snapshot> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::from_str(input)?),
        #[cfg(feature = "yaml")]
        SnapshotFormat::Yaml => Ok(serde_yaml::from_str(input)?),
    }
}

/// Half away from zero, with `-0.0` folded into `0.0`.
///
/// Magnitudes too large to scale by ten are returned as they are; they have
/// no fractional digit left to round.
pub fn round_one_decimal(value: f64) -> f64 {
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_one_decimal(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_one_decimal(72.25), 72.3);
        assert_eq!(round_one_decimal(33.333_333), 33.3);
        assert_eq!(round_one_decimal(-4.06), -4.1);
    }

    #[test]
    fn extreme_magnitudes_pass_through() {
        assert_eq!(round_one_decimal(-1.0e308), -1.0e308);
        assert_eq!(round_one_decimal(f64::MAX), f64::MAX);
        assert_eq!(round_one_decimal(f64::MIN), f64::MIN);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let value = round_one_decimal(-0.01);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn format_parsing() {
        assert_eq!("JSON".parse::<SnapshotFormat>().ok(), Some(SnapshotFormat::Json));
        assert!("toml".parse::<SnapshotFormat>().is_err());
        assert_eq!(SnapshotFormat::from_extension(Some("json")), SnapshotFormat::Json);
        assert_eq!(SnapshotFormat::from_extension(None), SnapshotFormat::Json);
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_extension_is_recognized() {
        assert_eq!(SnapshotFormat::from_extension(Some("YML")), SnapshotFormat::Yaml);
    }
}
