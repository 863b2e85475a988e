//! Error types for the note-sequence codec

use std::fmt;

/// Custom error type for codec operations
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// E001: Pitch not registered in the pitch-class table
    UnknownPitch(i32),
    /// E002: Overlapping notes fed to the monophonic encoder
    NotMonophonic { start_step: usize, open_until: usize },
    /// E003: Pitch outside the configured melody range
    PitchOutOfRange {
        pitch: i32,
        min_pitch: i32,
        max_pitch: i32,
    },
    /// E004: Note start step beyond the converter timeline
    StepOutOfRange {
        start_step: usize,
        step_count: usize,
    },
    /// E005: Unrecognized converter kind
    UnknownConverterKind(String),
    /// E006: Malformed or inconsistent converter descriptor
    InvalidConverterSpec(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownPitch(pitch) => {
                write!(f, "E001: Pitch {} is not in the pitch-class table", pitch)
            }
            CodecError::NotMonophonic {
                start_step,
                open_until,
            } => {
                write!(
                    f,
                    "E002: Sequence is not monophonic - note at step {} overlaps a note open until step {}",
                    start_step, open_until
                )
            }
            CodecError::PitchOutOfRange {
                pitch,
                min_pitch,
                max_pitch,
            } => {
                write!(
                    f,
                    "E003: Pitch {} is outside the configured range [{}, {}]",
                    pitch, min_pitch, max_pitch
                )
            }
            CodecError::StepOutOfRange {
                start_step,
                step_count,
            } => {
                write!(
                    f,
                    "E004: Note start step {} is beyond the {}-step timeline",
                    start_step, step_count
                )
            }
            CodecError::UnknownConverterKind(kind) => {
                write!(f, "E005: Unknown converter kind '{}'", kind)
            }
            CodecError::InvalidConverterSpec(msg) => {
                write!(f, "E006: Invalid converter spec - {}", msg)
            }
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::InvalidConverterSpec(format!("JSON deserialization error: {}", err))
    }
}

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
