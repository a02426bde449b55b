//! Table validation
//!
//! Checks blocked segment tables for authoring mistakes that the table type
//! cannot rule out: stray entries in row padding, mask bits that belong to no
//! segment, and pieces that are only partly modelled.

use std::fmt;

use trackpaint_track::{TrackElemType, MAX_SEQUENCES_PER_PIECE};

use crate::blocked_segments::{BlockedSegmentsType, SegmentEntry, SegmentLookup};

/// Problem found in a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An entry past the piece's sequence count blocks something
    NonEmptyPadding {
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
        sequence: usize,
    },
    /// A mask sets bits that belong to no segment
    UnknownSegmentBits {
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
        sequence: usize,
        bits: u16,
    },
    /// A piece mixes unimplemented entries with real masks
    PartiallyImplemented {
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
    },
    /// An inversion flag is set past the piece's sequence count
    InvertOutOfRange {
        track_elem: TrackElemType,
        sequence: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonEmptyPadding { variant, track_elem, sequence } => write!(
                f,
                "{} ({}): padding sequence {} is not empty",
                track_elem, variant, sequence
            ),
            ValidationError::UnknownSegmentBits { variant, track_elem, sequence, bits } => write!(
                f,
                "{} ({}): sequence {} sets unknown segment bits {:#06x}",
                track_elem, variant, sequence, bits
            ),
            ValidationError::PartiallyImplemented { variant, track_elem } => write!(
                f,
                "{} ({}): mixes unimplemented and implemented sequences",
                track_elem, variant
            ),
            ValidationError::InvertOutOfRange { track_elem, sequence } => write!(
                f,
                "{}: inversion flag set on sequence {} past the piece's {} sequences",
                track_elem,
                sequence,
                track_elem.sequence_count()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validator for blocked segment tables
///
/// # Example
/// ```ignore
/// let errors = TableValidator::validate(&BuiltinSegments);
/// for error in &errors {
///     eprintln!("Validation error: {}", error);
/// }
/// ```
pub struct TableValidator;

impl TableValidator {
    /// Validate every variant of a table, returning all errors found
    pub fn validate<L: SegmentLookup + ?Sized>(lookup: &L) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for variant in BlockedSegmentsType::ALL {
            for track_elem in TrackElemType::ALL {
                Self::validate_piece(lookup, variant, track_elem, &mut errors);
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error<L: SegmentLookup + ?Sized>(lookup: &L) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(lookup);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate an inversion table indexed by piece ordinal
    pub fn validate_invert_table(
        table: &[[bool; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT],
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for track_elem in TrackElemType::ALL {
            let row = &table[track_elem.ordinal()];
            for sequence in track_elem.sequence_count()..MAX_SEQUENCES_PER_PIECE {
                if row[sequence] {
                    errors.push(ValidationError::InvertOutOfRange { track_elem, sequence });
                }
            }
        }
        errors
    }

    fn validate_piece<L: SegmentLookup + ?Sized>(
        lookup: &L,
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
        errors: &mut Vec<ValidationError>,
    ) {
        let count = track_elem.sequence_count();
        let mut unimplemented = 0;

        for sequence in 0..MAX_SEQUENCES_PER_PIECE {
            let entry = lookup.entry(variant, track_elem, sequence);

            if sequence >= count {
                if entry != SegmentEntry::NONE {
                    errors.push(ValidationError::NonEmptyPadding {
                        variant,
                        track_elem,
                        sequence,
                    });
                }
                continue;
            }

            match entry {
                SegmentEntry::Unimplemented => unimplemented += 1,
                SegmentEntry::Blocked(mask) if mask.unknown_bits() != 0 => {
                    errors.push(ValidationError::UnknownSegmentBits {
                        variant,
                        track_elem,
                        sequence,
                        bits: mask.unknown_bits(),
                    });
                }
                SegmentEntry::Blocked(_) => {}
            }
        }

        if unimplemented != 0 && unimplemented != count {
            errors.push(ValidationError::PartiallyImplemented { variant, track_elem });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked_segments::{BuiltinSegments, INVERT_PRE_POST_TABLE};
    use crate::table_file::BlockedSegmentsFile;
    use trackpaint_paint::SegmentMask;

    #[test]
    fn test_builtin_tables_are_valid() {
        let errors = TableValidator::validate(&BuiltinSegments);
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
        assert!(TableValidator::validate_or_error(&BuiltinSegments).is_ok());
    }

    #[test]
    fn test_builtin_invert_table_is_valid() {
        assert!(TableValidator::validate_invert_table(&INVERT_PRE_POST_TABLE).is_empty());
    }

    /// Blocks the centre on every sequence of every piece, padding included
    struct CentreEverywhere;

    impl SegmentLookup for CentreEverywhere {
        fn entry(&self, _: BlockedSegmentsType, _: TrackElemType, _: usize) -> SegmentEntry {
            SegmentEntry::Blocked(SegmentMask::CENTRE)
        }
    }

    #[test]
    fn test_non_empty_padding_detected() {
        let errors = TableValidator::validate(&CentreEverywhere);
        assert!(errors.contains(&ValidationError::NonEmptyPadding {
            variant: BlockedSegmentsType::Narrow,
            track_elem: TrackElemType::Flat,
            sequence: 1,
        }));
        // Maze uses all sixteen sequences, so it has no padding
        assert!(!errors.iter().any(|e| matches!(
            e,
            ValidationError::NonEmptyPadding { track_elem: TrackElemType::Maze, .. }
        )));
        assert!(TableValidator::validate_or_error(&CentreEverywhere).is_err());
    }

    #[test]
    fn test_unknown_bits_detected() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants[0].pieces[TrackElemType::Flat.ordinal()].segments[0] =
            SegmentEntry::Blocked(SegmentMask::from_bits_retain(0x0400) | SegmentMask::CENTRE);
        let table = file.to_table().unwrap();

        let errors = TableValidator::validate(&table);
        assert_eq!(
            errors,
            vec![ValidationError::UnknownSegmentBits {
                variant: BlockedSegmentsType::Narrow,
                track_elem: TrackElemType::Flat,
                sequence: 0,
                bits: 0x0400,
            }]
        );
    }

    #[test]
    fn test_partially_implemented_detected() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants[0].pieces[TrackElemType::LeftQuarterTurn3Tiles.ordinal()].segments[1] =
            SegmentEntry::Unimplemented;
        let table = file.to_table().unwrap();

        let errors = TableValidator::validate(&table);
        assert!(errors.contains(&ValidationError::PartiallyImplemented {
            variant: BlockedSegmentsType::Narrow,
            track_elem: TrackElemType::LeftQuarterTurn3Tiles,
        }));
    }

    #[test]
    fn test_invert_out_of_range_detected() {
        let mut table = INVERT_PRE_POST_TABLE;
        table[TrackElemType::Flat.ordinal()][1] = true;
        let errors = TableValidator::validate_invert_table(&table);
        assert_eq!(
            errors,
            vec![ValidationError::InvertOutOfRange {
                track_elem: TrackElemType::Flat,
                sequence: 1,
            }]
        );
    }

    #[test]
    fn test_padding_error_display() {
        let err = ValidationError::NonEmptyPadding {
            variant: BlockedSegmentsType::Wide,
            track_elem: TrackElemType::Flat,
            sequence: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Flat"));
        assert!(msg.contains("wide"));
        assert!(msg.contains("padding sequence 3"));
    }

    #[test]
    fn test_unknown_bits_display() {
        let err = ValidationError::UnknownSegmentBits {
            variant: BlockedSegmentsType::Narrow,
            track_elem: TrackElemType::Up25,
            sequence: 0,
            bits: 0x0200,
        };
        assert!(format!("{}", err).contains("0x0200"));
    }
}
