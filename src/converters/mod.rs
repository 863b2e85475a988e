//! Converter capability contract and kind dispatch

pub mod drums;
pub mod melody;

pub use drums::{DrumRollConverter, DrumsConverter};
pub use melody::MelodyConverter;

use crate::config::{self, ConverterSpec};
use crate::error::Result;
use crate::sequence::NoteSequence;
use ndarray::Array2;

/// Capability contract shared by all converters
///
/// Converters are immutable after construction and hold no cross-call state,
/// so a single instance may encode/decode independent sequences concurrently.
pub trait SequenceConverter {
    /// Timeline length in quantized steps
    fn step_count(&self) -> usize;

    /// Conductor segmentation hint, passed through unused
    fn segment_count(&self) -> Option<usize>;

    /// Number of separate splits in the representation
    fn split_count(&self) -> usize {
        0
    }

    /// Width of the encoded tensor (second dimension)
    fn depth(&self) -> usize;

    /// Encode a note sequence into a `[step_count, depth]` tensor
    fn encode(&self, sequence: &NoteSequence) -> Result<Array2<f32>>;

    /// Decode a model-output tensor back into a note sequence
    fn decode(&self, tensor: &Array2<f32>) -> Result<NoteSequence>;
}

/// Closed union over the recognized converter kinds
#[derive(Debug, Clone)]
pub enum Converter {
    Drums(DrumsConverter),
    DrumRoll(DrumRollConverter),
    Melody(MelodyConverter),
}

impl Converter {
    /// Build the concrete converter named by a descriptor
    pub fn from_spec(spec: &ConverterSpec) -> Result<Converter> {
        config::validate_spec(spec)?;
        match spec {
            ConverterSpec::Drums(args) => Ok(Converter::Drums(DrumsConverter::new(args))),
            ConverterSpec::DrumRoll(args) => Ok(Converter::DrumRoll(DrumRollConverter::new(args))),
            ConverterSpec::Melody(args) => Ok(Converter::Melody(MelodyConverter::new(args))),
        }
    }
}

impl SequenceConverter for Converter {
    fn step_count(&self) -> usize {
        match self {
            Converter::Drums(c) => c.step_count(),
            Converter::DrumRoll(c) => c.step_count(),
            Converter::Melody(c) => c.step_count(),
        }
    }

    fn segment_count(&self) -> Option<usize> {
        match self {
            Converter::Drums(c) => c.segment_count(),
            Converter::DrumRoll(c) => c.segment_count(),
            Converter::Melody(c) => c.segment_count(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Converter::Drums(c) => c.depth(),
            Converter::DrumRoll(c) => c.depth(),
            Converter::Melody(c) => c.depth(),
        }
    }

    fn encode(&self, sequence: &NoteSequence) -> Result<Array2<f32>> {
        match self {
            Converter::Drums(c) => c.encode(sequence),
            Converter::DrumRoll(c) => c.encode(sequence),
            Converter::Melody(c) => c.encode(sequence),
        }
    }

    fn decode(&self, tensor: &Array2<f32>) -> Result<NoteSequence> {
        match self {
            Converter::Drums(c) => c.decode(tensor),
            Converter::DrumRoll(c) => c.decode(tensor),
            Converter::Melody(c) => c.decode(tensor),
        }
    }
}

/// Per-row argmax over a categorical tensor
///
/// The one bulk read of tensor memory a decode performs; ties resolve to the
/// lowest label index.
pub(crate) fn argmax_rows(tensor: &Array2<f32>) -> Vec<usize> {
    tensor
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0;
            let mut best_value = f32::NEG_INFINITY;
            for (label, &value) in row.iter().enumerate() {
                if value > best_value {
                    best = label;
                    best_value = value;
                }
            }
            best
        })
        .collect()
}
