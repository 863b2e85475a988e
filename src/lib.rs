//! Note-Sequence Tensor Codec
//!
//! A bidirectional codec between quantized symbolic note sequences and the
//! fixed-shape numeric tensors a generative sequence model consumes and
//! produces. Covers polyphonic drum hits (multi-hot roll, categorical
//! power-set labels) and monophonic melodies (per-step event labels).

pub mod classes;
pub mod config;
pub mod converters;
pub mod error;
pub mod sequence;

pub use classes::PitchClassTable;
pub use config::{ConverterSpec, DrumsArgs, MelodyArgs};
pub use converters::{
    Converter, DrumRollConverter, DrumsConverter, MelodyConverter, SequenceConverter,
};
pub use error::{CodecError, Result as CodecResult};
pub use sequence::{Note, NoteSequence};

/// Build the converter named by a descriptor
pub fn converter_from_spec(spec: &ConverterSpec) -> CodecResult<Converter> {
    Converter::from_spec(spec)
}
