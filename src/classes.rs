//! Pitch-class table: grouping of raw pitches into encoding classes

use crate::error::{CodecError, Result};
use std::collections::HashMap;

/// Standard 9-voice percussion grouping
///
/// Every General MIDI percussion pitch maps onto one of nine kit voices; the
/// first pitch in each group is the canonical one emitted on decode.
pub fn default_drum_classes() -> Vec<Vec<i32>> {
    vec![
        vec![36, 35],                                                 // kick
        vec![38, 27, 28, 31, 32, 33, 34, 37, 39, 40, 56, 65, 66, 75, 85], // snare
        vec![42, 44, 54, 68, 69, 70, 71, 73, 78, 80],                 // closed hi-hat
        vec![46, 67, 72, 74, 79, 81],                                 // open hi-hat
        vec![45, 29, 41, 61, 64, 84],                                 // low tom
        vec![48, 47, 60, 63, 77, 86, 87],                             // mid tom
        vec![50, 30, 43, 62, 76, 83],                                 // high tom
        vec![49, 55, 57, 58],                                         // crash
        vec![51, 52, 53, 59, 82],                                     // ride
    ]
}

/// Ordered pitch classes with a precomputed reverse lookup
///
/// Built once at converter construction and immutable afterwards. Lookup is
/// first-match: if a pitch appears in more than one class, the first class
/// listing it owns it.
#[derive(Debug, Clone)]
pub struct PitchClassTable {
    classes: Vec<Vec<i32>>,
    pitch_to_class: HashMap<i32, usize>,
}

impl PitchClassTable {
    pub fn new(classes: Vec<Vec<i32>>) -> Self {
        let mut pitch_to_class = HashMap::new();
        for (index, class) in classes.iter().enumerate() {
            for &pitch in class {
                pitch_to_class.entry(pitch).or_insert(index);
            }
        }
        Self {
            classes,
            pitch_to_class,
        }
    }

    /// Table over the standard percussion grouping
    pub fn default_drums() -> Self {
        Self::new(default_drum_classes())
    }

    /// Number of classes in the table
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Map a raw pitch to its class index
    pub fn classify(&self, pitch: i32) -> Result<usize> {
        self.pitch_to_class
            .get(&pitch)
            .copied()
            .ok_or(CodecError::UnknownPitch(pitch))
    }

    /// Canonical pitch emitted for a class on decode (first entry of the class)
    ///
    /// Total for any `class_index` in `[0, class_count)`.
    pub fn canonical_pitch(&self, class_index: usize) -> i32 {
        self.classes[class_index][0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_nine_classes() {
        let table = PitchClassTable::default_drums();
        assert_eq!(table.class_count(), 9);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let table = PitchClassTable::new(vec![vec![36, 38], vec![38]]);
        assert_eq!(table.classify(38).unwrap(), 0);
    }

    #[test]
    fn test_unknown_pitch_is_rejected() {
        let table = PitchClassTable::default_drums();
        assert_eq!(table.classify(0), Err(CodecError::UnknownPitch(0)));
    }
}
