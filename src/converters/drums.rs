//! Multi-class drum converters: multi-hot roll encode, categorical and raw decode

use crate::classes::PitchClassTable;
use crate::config::DrumsArgs;
use crate::converters::{argmax_rows, SequenceConverter};
use crate::error::{CodecError, Result};
use crate::sequence::{Note, NoteSequence};
use ndarray::Array2;

/// Encode simultaneous class activations into a multi-hot roll
///
/// Output shape is `[step_count, class_count + 1]`. The final column starts
/// at 1 on every row and drops to 0 once any class fires at that step, so it
/// reads as "no voice active here".
fn encode_drum_roll(
    table: &PitchClassTable,
    step_count: usize,
    sequence: &NoteSequence,
) -> Result<Array2<f32>> {
    let class_count = table.class_count();
    let mut roll = Array2::<f32>::zeros((step_count, class_count + 1));
    roll.column_mut(class_count).fill(1.0);

    for note in &sequence.notes {
        if note.start_step >= step_count {
            return Err(CodecError::StepOutOfRange {
                start_step: note.start_step,
                step_count,
            });
        }
        let class = table.classify(note.pitch)?;
        roll[[note.start_step, class]] = 1.0;
        roll[[note.start_step, class_count]] = 0.0;
    }
    Ok(roll)
}

/// One-step hit at a class's canonical pitch
fn hit(table: &PitchClassTable, class: usize, step: usize) -> Note {
    Note::new(table.canonical_pitch(class), step, step + 1)
}

/// Multi-class converter over a categorical model output
///
/// Encodes to the multi-hot roll; decodes a one-hot tensor over the power set
/// of classes (`2^class_count` labels), reading each argmaxed label as a
/// bitmask with bit `p` = class `p`, least-significant bit = class 0.
#[derive(Debug, Clone)]
pub struct DrumsConverter {
    step_count: usize,
    segment_count: Option<usize>,
    table: PitchClassTable,
}

impl DrumsConverter {
    pub fn new(args: &DrumsArgs) -> Self {
        let table = match &args.pitch_classes {
            Some(classes) => PitchClassTable::new(classes.clone()),
            None => PitchClassTable::default_drums(),
        };
        Self {
            step_count: args.step_count,
            segment_count: args.segment_count,
            table,
        }
    }

    pub fn pitch_classes(&self) -> &PitchClassTable {
        &self.table
    }

    /// Width of the categorical decode input: one label per subset of classes
    pub fn label_count(&self) -> usize {
        1 << self.table.class_count()
    }
}

impl SequenceConverter for DrumsConverter {
    fn step_count(&self) -> usize {
        self.step_count
    }

    fn segment_count(&self) -> Option<usize> {
        self.segment_count
    }

    fn depth(&self) -> usize {
        self.table.class_count() + 1
    }

    fn encode(&self, sequence: &NoteSequence) -> Result<Array2<f32>> {
        encode_drum_roll(&self.table, self.step_count, sequence)
    }

    fn decode(&self, tensor: &Array2<f32>) -> Result<NoteSequence> {
        let class_count = self.table.class_count();
        assert!(
            tensor.ncols() >= self.label_count(),
            "categorical drum tensor must be at least {} wide, got {}",
            self.label_count(),
            tensor.ncols()
        );

        let labels = argmax_rows(tensor);
        let mut sequence = NoteSequence::new(labels.len());
        for (step, &label) in labels.iter().enumerate() {
            for class in 0..class_count {
                if (label >> class) & 1 == 1 {
                    sequence.notes.push(hit(&self.table, class, step));
                }
            }
        }
        Ok(sequence)
    }
}

/// Multi-class converter over the raw roll
///
/// Shares the multi-hot encode; decodes the `[step_count, class_count + 1]`
/// roll directly, one hit per set cell, ignoring the trailing no-voice
/// column. Cells are expected to already be 0/1 - any nonzero cell counts as
/// a hit, with no clamping or rounding.
#[derive(Debug, Clone)]
pub struct DrumRollConverter {
    inner: DrumsConverter,
}

impl DrumRollConverter {
    pub fn new(args: &DrumsArgs) -> Self {
        Self {
            inner: DrumsConverter::new(args),
        }
    }

    pub fn pitch_classes(&self) -> &PitchClassTable {
        self.inner.pitch_classes()
    }
}

impl SequenceConverter for DrumRollConverter {
    fn step_count(&self) -> usize {
        self.inner.step_count()
    }

    fn segment_count(&self) -> Option<usize> {
        self.inner.segment_count()
    }

    fn depth(&self) -> usize {
        self.inner.depth()
    }

    fn encode(&self, sequence: &NoteSequence) -> Result<Array2<f32>> {
        self.inner.encode(sequence)
    }

    fn decode(&self, tensor: &Array2<f32>) -> Result<NoteSequence> {
        let table = self.inner.pitch_classes();
        let class_count = table.class_count();
        assert!(
            tensor.ncols() >= class_count,
            "drum roll tensor must be at least {} wide, got {}",
            class_count,
            tensor.ncols()
        );

        let mut sequence = NoteSequence::new(tensor.nrows());
        for (step, row) in tensor.rows().into_iter().enumerate() {
            for class in 0..class_count {
                if row[class] != 0.0 {
                    sequence.notes.push(hit(table, class, step));
                }
            }
        }
        Ok(sequence)
    }
}
