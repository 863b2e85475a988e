//! Monophonic melody converter: per-step event labels, one-hot encode, scan decode

use crate::config::MelodyArgs;
use crate::converters::{argmax_rows, SequenceConverter};
use crate::error::{CodecError, Result};
use crate::sequence::{Note, NoteSequence};
use ndarray::Array2;

/// Label for a step with nothing happening (rest or sustained note)
const NON_EVENT: usize = 0;
/// Label ending the currently sounding note
const NOTE_OFF: usize = 1;
/// First note-on label; label `n` is a note-on at `n - FIRST_PITCH + min_pitch`
const FIRST_PITCH: usize = 2;

/// Monophonic converter over a categorical per-step event alphabet
///
/// Each step carries exactly one label: non-event, note-off, or note-on at a
/// pitch in `[min_pitch, max_pitch]`, giving a label depth of
/// `max_pitch - min_pitch + 3`.
#[derive(Debug, Clone)]
pub struct MelodyConverter {
    step_count: usize,
    segment_count: Option<usize>,
    min_pitch: i32,
    max_pitch: i32,
}

impl MelodyConverter {
    pub fn new(args: &MelodyArgs) -> Self {
        Self {
            step_count: args.step_count,
            segment_count: args.segment_count,
            min_pitch: args.min_pitch,
            max_pitch: args.max_pitch,
        }
    }

    pub fn min_pitch(&self) -> i32 {
        self.min_pitch
    }

    pub fn max_pitch(&self) -> i32 {
        self.max_pitch
    }

    /// Per-step event labels for a sequence
    ///
    /// Walks the notes in start order. Each note writes its note-on label at
    /// `start_step` and a note-off at `end_step`; a following note starting
    /// exactly at that end step overwrites the note-off with its own note-on.
    /// A note-off landing exactly at `step_count` is dropped - decode recovers
    /// it by closing the note at the end of the timeline.
    fn event_labels(&self, sequence: &NoteSequence) -> Result<Vec<usize>> {
        let mut sorted: Vec<&Note> = sequence.notes.iter().collect();
        sorted.sort_by_key(|note| note.start_step);

        let mut labels = vec![NON_EVENT; self.step_count];
        let mut last_end: Option<usize> = None;
        for note in sorted {
            if let Some(open_until) = last_end {
                if note.start_step < open_until {
                    return Err(CodecError::NotMonophonic {
                        start_step: note.start_step,
                        open_until,
                    });
                }
            }
            if note.pitch < self.min_pitch || note.pitch > self.max_pitch {
                return Err(CodecError::PitchOutOfRange {
                    pitch: note.pitch,
                    min_pitch: self.min_pitch,
                    max_pitch: self.max_pitch,
                });
            }
            if note.start_step >= self.step_count {
                return Err(CodecError::StepOutOfRange {
                    start_step: note.start_step,
                    step_count: self.step_count,
                });
            }

            labels[note.start_step] = (note.pitch - self.min_pitch) as usize + FIRST_PITCH;
            if note.end_step < self.step_count {
                labels[note.end_step] = NOTE_OFF;
            }
            last_end = Some(note.end_step);
        }
        Ok(labels)
    }
}

impl SequenceConverter for MelodyConverter {
    fn step_count(&self) -> usize {
        self.step_count
    }

    fn segment_count(&self) -> Option<usize> {
        self.segment_count
    }

    fn depth(&self) -> usize {
        (self.max_pitch - self.min_pitch) as usize + 1 + FIRST_PITCH
    }

    fn encode(&self, sequence: &NoteSequence) -> Result<Array2<f32>> {
        let labels = self.event_labels(sequence)?;
        let mut tensor = Array2::<f32>::zeros((self.step_count, self.depth()));
        for (step, &label) in labels.iter().enumerate() {
            tensor[[step, label]] = 1.0;
        }
        Ok(tensor)
    }

    fn decode(&self, tensor: &Array2<f32>) -> Result<NoteSequence> {
        assert!(
            tensor.ncols() >= self.depth(),
            "melody tensor must be at least {} wide, got {}",
            self.depth(),
            tensor.ncols()
        );

        let labels = argmax_rows(tensor);
        let mut sequence = NoteSequence::new(labels.len());
        // (pitch, start_step) of the note currently sounding
        let mut open: Option<(i32, usize)> = None;
        for (step, &label) in labels.iter().enumerate() {
            match label {
                NON_EVENT => {}
                NOTE_OFF => {
                    if let Some((pitch, start_step)) = open.take() {
                        sequence.notes.push(Note::new(pitch, start_step, step));
                    }
                }
                _ => {
                    // A new note-on implicitly ends the previous note
                    if let Some((pitch, start_step)) = open.take() {
                        sequence.notes.push(Note::new(pitch, start_step, step));
                    }
                    let pitch = label as i32 - FIRST_PITCH as i32 + self.min_pitch;
                    open = Some((pitch, step));
                }
            }
        }
        // A note still sounding terminates at the end of the timeline
        if let Some((pitch, start_step)) = open {
            sequence
                .notes
                .push(Note::new(pitch, start_step, labels.len()));
        }
        Ok(sequence)
    }
}
