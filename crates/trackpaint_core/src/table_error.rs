//! Table error types
//!
//! Errors raised while turning a table document into a lookup table.

use std::fmt;

use trackpaint_track::TrackElemType;

use crate::blocked_segments::BlockedSegmentsType;

/// Error building a [`SegmentTable`](crate::SegmentTable) from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A variant has no table in the document
    MissingVariant(BlockedSegmentsType),
    /// A variant appears more than once
    DuplicateVariant(BlockedSegmentsType),
    /// A piece has no row in a variant's table
    MissingPiece {
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
    },
    /// A piece appears more than once in a variant's table
    DuplicatePiece {
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
    },
    /// A row lists more sequences than the piece has
    TooManySequences {
        variant: BlockedSegmentsType,
        track_elem: TrackElemType,
        count: usize,
    },
    /// A piece has more than one inversion row
    DuplicateInversion { track_elem: TrackElemType },
    /// An inversion row lists more sequences than the piece has
    TooManyInvertSequences {
        track_elem: TrackElemType,
        count: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::MissingVariant(variant) => {
                write!(f, "Table for variant '{}' is missing", variant)
            }
            TableError::DuplicateVariant(variant) => {
                write!(f, "Table for variant '{}' appears more than once", variant)
            }
            TableError::MissingPiece { variant, track_elem } => {
                write!(f, "Variant '{}' has no row for {}", variant, track_elem)
            }
            TableError::DuplicatePiece { variant, track_elem } => {
                write!(f, "Variant '{}' has more than one row for {}", variant, track_elem)
            }
            TableError::TooManySequences { variant, track_elem, count } => write!(
                f,
                "Variant '{}' lists {} sequences for {} (piece has {})",
                variant,
                count,
                track_elem,
                track_elem.sequence_count()
            ),
            TableError::DuplicateInversion { track_elem } => {
                write!(f, "More than one inversion row for {}", track_elem)
            }
            TableError::TooManyInvertSequences { track_elem, count } => write!(
                f,
                "Inversion row lists {} sequences for {} (piece has {})",
                count,
                track_elem,
                track_elem.sequence_count()
            ),
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variant_display() {
        let err = TableError::MissingVariant(BlockedSegmentsType::WideTrain);
        let msg = format!("{}", err);
        assert!(msg.contains("wideTrain"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_missing_piece_display() {
        let err = TableError::MissingPiece {
            variant: BlockedSegmentsType::Narrow,
            track_elem: TrackElemType::DiagFlat,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("narrow"));
        assert!(msg.contains("DiagFlat"));
    }

    #[test]
    fn test_too_many_sequences_display() {
        let err = TableError::TooManySequences {
            variant: BlockedSegmentsType::Wide,
            track_elem: TrackElemType::Flat,
            count: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("3 sequences"));
        assert!(msg.contains("piece has 1"));
    }

    #[test]
    fn test_duplicate_inversion_display() {
        let err = TableError::DuplicateInversion {
            track_elem: TrackElemType::LeftTwistDownToUp,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("LeftTwistDownToUp"));
        assert!(msg.contains("More than one inversion row"));
    }

    #[test]
    fn test_debug_format() {
        let err = TableError::DuplicateVariant(BlockedSegmentsType::Inverted);
        let debug = format!("{:?}", err);
        assert!(debug.contains("DuplicateVariant"));
        assert!(debug.contains("Inverted"));
    }
}
