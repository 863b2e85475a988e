//! Comprehensive validation tests for the converter factory and descriptor schema

use notecodec::config::{spec_from_json, validate_spec};
use notecodec::{
    converter_from_spec, CodecError, Converter, ConverterSpec, DrumsArgs, MelodyArgs,
    SequenceConverter,
};

/// Descriptor JSON for a melody converter
fn melody_json() -> &'static str {
    r#"{"kind": "melody", "args": {"step_count": 4, "min_pitch": 60, "max_pitch": 61}}"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_each_kind() {
        let drums = converter_from_spec(&ConverterSpec::Drums(DrumsArgs::default())).unwrap();
        assert!(matches!(drums, Converter::Drums(_)));
        assert_eq!(drums.depth(), 10);

        let roll = converter_from_spec(&ConverterSpec::DrumRoll(DrumsArgs::default())).unwrap();
        assert!(matches!(roll, Converter::DrumRoll(_)));
        assert_eq!(roll.depth(), 10);

        let melody = converter_from_spec(&ConverterSpec::Melody(MelodyArgs {
            step_count: 4,
            min_pitch: 60,
            max_pitch: 61,
            segment_count: Some(2),
        }))
        .unwrap();
        assert!(matches!(melody, Converter::Melody(_)));
        assert_eq!(melody.depth(), 5);
        assert_eq!(melody.segment_count(), Some(2));
    }

    #[test]
    fn test_spec_parses_from_json() {
        let spec = spec_from_json(melody_json()).unwrap();
        let converter = converter_from_spec(&spec).unwrap();
        assert_eq!(converter.step_count(), 4);
        assert_eq!(converter.depth(), 5);
    }

    #[test]
    fn test_omitted_args_take_defaults() {
        let spec = spec_from_json(r#"{"kind": "drums", "args": {}}"#).unwrap();
        let converter = converter_from_spec(&spec).unwrap();
        assert_eq!(converter.step_count(), 32);
        assert_eq!(converter.segment_count(), None);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = spec_from_json(r#"{"kind": "tempo", "args": {}}"#);
        assert_eq!(
            result.err(),
            Some(CodecError::UnknownConverterKind("tempo".to_string()))
        );
    }

    #[test]
    fn test_missing_kind_is_rejected() {
        let result = spec_from_json(r#"{"args": {"step_count": 4}}"#);
        assert!(matches!(
            result,
            Err(CodecError::InvalidConverterSpec(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            spec_from_json("not json"),
            Err(CodecError::InvalidConverterSpec(_))
        ));
    }

    #[test]
    fn test_inverted_pitch_range_is_rejected() {
        let spec = ConverterSpec::Melody(MelodyArgs {
            step_count: 4,
            min_pitch: 72,
            max_pitch: 60,
            segment_count: None,
        });
        assert!(matches!(
            validate_spec(&spec),
            Err(CodecError::InvalidConverterSpec(_))
        ));
        assert!(converter_from_spec(&spec).is_err());
    }

    #[test]
    fn test_zero_step_timeline_is_rejected() {
        let spec = ConverterSpec::Drums(DrumsArgs {
            step_count: 0,
            ..Default::default()
        });
        assert!(matches!(
            validate_spec(&spec),
            Err(CodecError::InvalidConverterSpec(_))
        ));
    }

    #[test]
    fn test_empty_pitch_class_is_rejected() {
        let spec = ConverterSpec::DrumRoll(DrumsArgs {
            step_count: 4,
            segment_count: None,
            pitch_classes: Some(vec![vec![36], vec![]]),
        });
        assert!(matches!(
            validate_spec(&spec),
            Err(CodecError::InvalidConverterSpec(_))
        ));
    }

    #[test]
    fn test_spec_serialization_round_trips() {
        let spec = ConverterSpec::Melody(MelodyArgs {
            step_count: 16,
            min_pitch: 48,
            max_pitch: 83,
            segment_count: None,
        });
        let json = serde_json::to_string(&spec).unwrap();
        let parsed = spec_from_json(&json).unwrap();
        let converter = converter_from_spec(&parsed).unwrap();
        assert_eq!(converter.step_count(), 16);
        assert_eq!(converter.depth(), 38);
    }
}
