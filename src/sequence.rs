//! Quantized note-sequence data types

use serde::{Deserialize, Serialize};

/// A single note event on the quantized timeline
///
/// `start_step` is inclusive and `end_step` exclusive, both in quantized
/// steps. A one-step hit spans `[s, s + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: i32,
    pub start_step: usize,
    pub end_step: usize,
}

impl Note {
    pub fn new(pitch: i32, start_step: usize, end_step: usize) -> Self {
        Self {
            pitch,
            start_step,
            end_step,
        }
    }
}

/// An ordered, mutable collection of note events
///
/// Ordering is whatever the caller put in; encoders that need a particular
/// order sort a local copy and leave the input untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteSequence {
    pub notes: Vec<Note>,
    pub total_steps: usize,
}

impl NoteSequence {
    /// Create an empty sequence spanning `total_steps` quantized steps
    pub fn new(total_steps: usize) -> Self {
        Self {
            notes: Vec::new(),
            total_steps,
        }
    }

    /// Create a sequence from an existing note collection
    pub fn with_notes(total_steps: usize, notes: Vec<Note>) -> Self {
        Self { notes, total_steps }
    }
}
