//! Converter descriptor schema and validation

use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};

/// Arguments for the multi-class drum converters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrumsArgs {
    /// Total timeline length in quantized steps
    pub step_count: usize,
    /// Conductor segmentation hint, passed through unused
    pub segment_count: Option<usize>,
    /// Pitch-class grouping; `None` selects the standard percussion table
    pub pitch_classes: Option<Vec<Vec<i32>>>,
}

impl Default for DrumsArgs {
    fn default() -> Self {
        Self {
            step_count: 32,
            segment_count: None,
            pitch_classes: None,
        }
    }
}

/// Arguments for the monophonic melody converter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MelodyArgs {
    /// Total timeline length in quantized steps
    pub step_count: usize,
    /// Lowest representable pitch, inclusive
    pub min_pitch: i32,
    /// Highest representable pitch, inclusive
    pub max_pitch: i32,
    /// Conductor segmentation hint, passed through unused
    pub segment_count: Option<usize>,
}

impl Default for MelodyArgs {
    fn default() -> Self {
        Self {
            step_count: 32,
            min_pitch: 21,
            max_pitch: 108,
            segment_count: None,
        }
    }
}

/// Converter descriptor: a kind tag plus the matching argument bundle
///
/// Serialized form is `{"kind": "...", "args": {...}}` with kinds `drums`,
/// `drum_roll`, and `melody`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum ConverterSpec {
    Drums(DrumsArgs),
    DrumRoll(DrumsArgs),
    Melody(MelodyArgs),
}

/// Parse a converter descriptor from JSON
///
/// An unrecognized `kind` string is reported as its own error so callers can
/// tell a typo'd kind from a malformed argument bundle.
pub fn spec_from_json(json: &str) -> Result<ConverterSpec> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let kind = value
        .get("kind")
        .and_then(|k| k.as_str())
        .map(str::to_string)
        .ok_or_else(|| CodecError::InvalidConverterSpec("missing `kind` field".to_string()))?;
    match kind.as_str() {
        "drums" | "drum_roll" | "melody" => {
            let spec: ConverterSpec = serde_json::from_value(value)?;
            validate_spec(&spec)?;
            Ok(spec)
        }
        other => Err(CodecError::UnknownConverterKind(other.to_string())),
    }
}

/// Validate descriptor parameters before a converter is built
pub fn validate_spec(spec: &ConverterSpec) -> Result<()> {
    match spec {
        ConverterSpec::Drums(args) | ConverterSpec::DrumRoll(args) => {
            if args.step_count == 0 {
                return Err(CodecError::InvalidConverterSpec(
                    "step_count must be > 0".to_string(),
                ));
            }
            if let Some(classes) = &args.pitch_classes {
                if classes.is_empty() {
                    return Err(CodecError::InvalidConverterSpec(
                        "pitch_classes must contain at least one class".to_string(),
                    ));
                }
                for (index, class) in classes.iter().enumerate() {
                    if class.is_empty() {
                        return Err(CodecError::InvalidConverterSpec(format!(
                            "pitch class {} is empty",
                            index
                        )));
                    }
                }
            }
        }
        ConverterSpec::Melody(args) => {
            if args.step_count == 0 {
                return Err(CodecError::InvalidConverterSpec(
                    "step_count must be > 0".to_string(),
                ));
            }
            if args.min_pitch > args.max_pitch {
                return Err(CodecError::InvalidConverterSpec(format!(
                    "min_pitch {} must be <= max_pitch {}",
                    args.min_pitch, args.max_pitch
                )));
            }
        }
    }
    Ok(())
}

/// Load a converter descriptor from a JSON file
pub fn load_spec<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<ConverterSpec> {
    let content = std::fs::read_to_string(path)?;
    let spec = spec_from_json(&content)?;
    Ok(spec)
}

/// Save a converter descriptor to a JSON file
pub fn save_spec<P: AsRef<std::path::Path>>(spec: &ConverterSpec, path: P) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(spec)?;
    std::fs::write(path, content)?;
    Ok(())
}
