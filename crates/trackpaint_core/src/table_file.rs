//! Table files
//!
//! Blocked segment tables can be exported to and loaded from RON files keyed
//! by variant, piece name and sequence. A loaded document is turned into a
//! [`SegmentTable`], which answers the same lookups as the compiled tables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use trackpaint_track::{TrackElemType, MAX_SEQUENCES_PER_PIECE};

use crate::blocked_segments::{
    BlockedSegmentTable, BlockedSegmentsType, SegmentEntry, SegmentLookup, INVERT_PRE_POST_TABLE,
};
use crate::table_error::TableError;

/// Blocked segments of one piece, one entry per sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSegments {
    pub track_elem: TrackElemType,
    pub segments: Vec<SegmentEntry>,
}

/// Every piece's blocked segments for one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSegments {
    pub variant: BlockedSegmentsType,
    pub pieces: Vec<PieceSegments>,
}

/// Pre/post inversion flags of one piece, one flag per sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceInversion {
    pub track_elem: TrackElemType,
    pub sequences: Vec<bool>,
}

/// A serializable blocked segments document
///
/// Holds a table for each variant plus the pieces that invert their pre/post
/// paint calls. Pieces missing from `invert_pre_post` never invert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedSegmentsFile {
    pub variants: Vec<VariantSegments>,
    #[serde(default)]
    pub invert_pre_post: Vec<PieceInversion>,
}

impl BlockedSegmentsFile {
    /// Document describing the compiled tables
    pub fn builtin() -> Self {
        let variants = BlockedSegmentsType::ALL
            .into_iter()
            .map(|variant| VariantSegments {
                variant,
                pieces: TrackElemType::ALL
                    .into_iter()
                    .map(|track_elem| PieceSegments {
                        track_elem,
                        segments: variant.table()[track_elem.ordinal()]
                            [..track_elem.sequence_count()]
                            .to_vec(),
                    })
                    .collect(),
            })
            .collect();

        let invert_pre_post = TrackElemType::ALL
            .into_iter()
            .filter_map(|track_elem| {
                let sequences = &INVERT_PRE_POST_TABLE[track_elem.ordinal()]
                    [..track_elem.sequence_count()];
                sequences.contains(&true).then(|| PieceInversion {
                    track_elem,
                    sequences: sequences.to_vec(),
                })
            })
            .collect();

        Self {
            variants,
            invert_pre_post,
        }
    }

    /// Load a document from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableLoadError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_ron_str(&contents)?)
    }

    /// Save this document to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<(), TableSaveError> {
        let contents = self.to_ron_string(pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Parse a document from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    /// Serialize this document as RON text
    pub fn to_ron_string(&self, pretty: bool) -> Result<String, ron::Error> {
        if pretty {
            let config = ron::ser::PrettyConfig::new()
                .struct_names(true)
                .enumerate_arrays(false);
            ron::ser::to_string_pretty(self, config)
        } else {
            ron::to_string(self)
        }
    }

    /// Build a lookup table from this document
    ///
    /// Every variant must list every piece exactly once. Rows shorter than
    /// the piece's sequence count are padded with [`SegmentEntry::NONE`].
    pub fn to_table(&self) -> Result<SegmentTable, TableError> {
        let mut tables: [Option<Box<BlockedSegmentTable>>; BlockedSegmentsType::COUNT] =
            Default::default();

        for variant_segments in &self.variants {
            let slot = &mut tables[variant_segments.variant as usize];
            if slot.is_some() {
                return Err(TableError::DuplicateVariant(variant_segments.variant));
            }
            *slot = Some(variant_segments.to_rows()?);
        }

        let mut variants = Vec::with_capacity(BlockedSegmentsType::COUNT);
        for variant in BlockedSegmentsType::ALL {
            let table = tables[variant as usize]
                .take()
                .ok_or(TableError::MissingVariant(variant))?;
            variants.push(table);
        }

        let mut invert = Box::new([[false; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT]);
        let mut seen = [false; TrackElemType::COUNT];
        for inversion in &self.invert_pre_post {
            let index = inversion.track_elem.ordinal();
            if seen[index] {
                return Err(TableError::DuplicateInversion {
                    track_elem: inversion.track_elem,
                });
            }
            seen[index] = true;

            let count = inversion.sequences.len();
            if count > inversion.track_elem.sequence_count() {
                return Err(TableError::TooManyInvertSequences {
                    track_elem: inversion.track_elem,
                    count,
                });
            }
            invert[index][..count].copy_from_slice(&inversion.sequences);
        }

        log::debug!(
            "Built segment table from document ({} variants, {} inverting pieces)",
            variants.len(),
            self.invert_pre_post.len()
        );

        Ok(SegmentTable { variants, invert })
    }
}

impl VariantSegments {
    fn to_rows(&self) -> Result<Box<BlockedSegmentTable>, TableError> {
        let mut rows = Box::new([[SegmentEntry::NONE; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT]);
        let mut seen = [false; TrackElemType::COUNT];

        for piece in &self.pieces {
            let index = piece.track_elem.ordinal();
            if seen[index] {
                return Err(TableError::DuplicatePiece {
                    variant: self.variant,
                    track_elem: piece.track_elem,
                });
            }
            seen[index] = true;

            let count = piece.segments.len();
            if count > piece.track_elem.sequence_count() {
                return Err(TableError::TooManySequences {
                    variant: self.variant,
                    track_elem: piece.track_elem,
                    count,
                });
            }
            rows[index][..count].copy_from_slice(&piece.segments);
        }

        if let Some(missing) = seen.iter().position(|&found| !found) {
            return Err(TableError::MissingPiece {
                variant: self.variant,
                track_elem: TrackElemType::ALL[missing],
            });
        }

        Ok(rows)
    }
}

/// Blocked segment tables loaded at runtime
///
/// Indexed the same way as the compiled tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentTable {
    variants: Vec<Box<BlockedSegmentTable>>,
    invert: Box<[[bool; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT]>,
}

impl SegmentTable {
    /// Rows of one variant
    pub fn variant_table(&self, variant: BlockedSegmentsType) -> &BlockedSegmentTable {
        &self.variants[variant as usize]
    }

    /// Whether the caller must invert its pre/post paint calls for this sequence
    pub fn should_invert_pre_post_call(&self, track_elem: TrackElemType, track_sequence: usize) -> bool {
        self.invert[track_elem.ordinal()][track_sequence]
    }
}

impl SegmentLookup for SegmentTable {
    fn entry(
        &self,
        variant: BlockedSegmentsType,
        track_elem_type: TrackElemType,
        track_sequence: usize,
    ) -> SegmentEntry {
        self.variant_table(variant)[track_elem_type.ordinal()][track_sequence]
    }
}

/// Error loading a table file
#[derive(Debug)]
pub enum TableLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax, unknown piece name)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for TableLoadError {
    fn from(e: io::Error) -> Self {
        TableLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for TableLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        TableLoadError::Parse(e)
    }
}

impl std::fmt::Display for TableLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableLoadError::Io(e) => write!(f, "IO error: {}", e),
            TableLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for TableLoadError {}

/// Error saving a table file
#[derive(Debug)]
pub enum TableSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for TableSaveError {
    fn from(e: io::Error) -> Self {
        TableSaveError::Io(e)
    }
}

impl From<ron::Error> for TableSaveError {
    fn from(e: ron::Error) -> Self {
        TableSaveError::Serialize(e)
    }
}

impl std::fmt::Display for TableSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSaveError::Io(e) => write!(f, "IO error: {}", e),
            TableSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for TableSaveError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocked_segments::{get_should_invert_pre_post_call, segment_entry, BuiltinSegments};
    use trackpaint_paint::SegmentMask;

    #[test]
    fn test_builtin_lists_every_piece() {
        let file = BlockedSegmentsFile::builtin();
        assert_eq!(file.variants.len(), BlockedSegmentsType::COUNT);
        for variant in &file.variants {
            assert_eq!(variant.pieces.len(), TrackElemType::COUNT);
        }
    }

    #[test]
    fn test_builtin_rows_trimmed_to_sequence_count() {
        let file = BlockedSegmentsFile::builtin();
        let narrow = &file.variants[0];
        let turn = &narrow.pieces[TrackElemType::LeftQuarterTurn5Tiles.ordinal()];
        assert_eq!(turn.track_elem, TrackElemType::LeftQuarterTurn5Tiles);
        assert_eq!(turn.segments.len(), 7);
    }

    #[test]
    fn test_builtin_inversion_rows() {
        let file = BlockedSegmentsFile::builtin();
        let twist = file
            .invert_pre_post
            .iter()
            .find(|row| row.track_elem == TrackElemType::LeftTwistDownToUp)
            .expect("twist should invert");
        assert_eq!(twist.sequences, vec![false, false, true]);
        assert!(!file
            .invert_pre_post
            .iter()
            .any(|row| row.track_elem == TrackElemType::Flat));
    }

    #[test]
    fn test_builtin_converts_to_equal_table() {
        let table = BlockedSegmentsFile::builtin().to_table().unwrap();
        for variant in BlockedSegmentsType::ALL {
            assert_eq!(table.variant_table(variant), variant.table());
        }
        for elem in TrackElemType::ALL {
            for seq in 0..MAX_SEQUENCES_PER_PIECE {
                assert_eq!(
                    table.should_invert_pre_post_call(elem, seq),
                    get_should_invert_pre_post_call(elem, seq)
                );
            }
        }
    }

    #[test]
    fn test_pretty_ron_parses_back() {
        let file = BlockedSegmentsFile::builtin();
        let text = file.to_ron_string(true).unwrap();
        assert!(text.contains("LeftQuarterTurn5Tiles"));
        assert!(text.contains("suspendedSwinging"));
        let parsed = BlockedSegmentsFile::from_ron_str(&text).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn test_short_rows_padded_with_none() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants[0].pieces[TrackElemType::TowerBase.ordinal()].segments.clear();
        let table = file.to_table().unwrap();
        assert_eq!(
            table.entry(BlockedSegmentsType::Narrow, TrackElemType::TowerBase, 3),
            SegmentEntry::NONE
        );
    }

    #[test]
    fn test_edited_entry_is_used() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants[2].pieces[TrackElemType::Flat.ordinal()].segments[0] =
            SegmentEntry::Blocked(SegmentMask::CENTRE);
        let table = file.to_table().unwrap();
        assert_eq!(
            table.entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 0),
            SegmentEntry::Blocked(SegmentMask::CENTRE)
        );
        assert_eq!(
            BuiltinSegments.entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 0),
            segment_entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 0)
        );
    }

    #[test]
    fn test_missing_variant() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants.retain(|v| v.variant != BlockedSegmentsType::Inverted);
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::MissingVariant(BlockedSegmentsType::Inverted)
        );
    }

    #[test]
    fn test_duplicate_variant() {
        let mut file = BlockedSegmentsFile::builtin();
        let copy = file.variants[1].clone();
        file.variants.push(copy);
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::DuplicateVariant(BlockedSegmentsType::Inverted)
        );
    }

    #[test]
    fn test_missing_piece() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants[0].pieces.retain(|p| p.track_elem != TrackElemType::DiagFlat);
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::MissingPiece {
                variant: BlockedSegmentsType::Narrow,
                track_elem: TrackElemType::DiagFlat,
            }
        );
    }

    #[test]
    fn test_duplicate_piece() {
        let mut file = BlockedSegmentsFile::builtin();
        let copy = file.variants[3].pieces[0].clone();
        file.variants[3].pieces.push(copy);
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::DuplicatePiece {
                variant: BlockedSegmentsType::SuspendedSwinging,
                track_elem: TrackElemType::Flat,
            }
        );
    }

    #[test]
    fn test_duplicate_inversion() {
        let mut file = BlockedSegmentsFile::builtin();
        file.invert_pre_post.push(PieceInversion {
            track_elem: TrackElemType::LeftTwistDownToUp,
            sequences: vec![false, false, false],
        });
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::DuplicateInversion {
                track_elem: TrackElemType::LeftTwistDownToUp,
            }
        );
    }

    #[test]
    fn test_too_many_sequences() {
        let mut file = BlockedSegmentsFile::builtin();
        file.variants[0].pieces[0].segments.push(SegmentEntry::NONE);
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::TooManySequences {
                variant: BlockedSegmentsType::Narrow,
                track_elem: TrackElemType::Flat,
                count: 2,
            }
        );
    }

    #[test]
    fn test_too_many_invert_sequences() {
        let mut file = BlockedSegmentsFile::builtin();
        file.invert_pre_post.push(PieceInversion {
            track_elem: TrackElemType::Flat,
            sequences: vec![false, true],
        });
        assert_eq!(
            file.to_table().unwrap_err(),
            TableError::TooManyInvertSequences {
                track_elem: TrackElemType::Flat,
                count: 2,
            }
        );
    }

    #[test]
    fn test_unknown_piece_name_is_parse_error() {
        let text = "(variants: [(variant: narrow, pieces: [(track_elem: Teleporter, segments: [])])])";
        assert!(BlockedSegmentsFile::from_ron_str(text).is_err());
    }

    #[test]
    fn test_save_compact_loads_back() {
        let path = std::env::temp_dir().join("trackpaint_table_file_compact.ron");
        let file = BlockedSegmentsFile::builtin();
        file.save(&path, false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let loaded = BlockedSegmentsFile::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert!(!text.contains('\n'));
        assert_eq!(loaded, file);
    }

    #[test]
    fn test_save_to_missing_dir() {
        let err = BlockedSegmentsFile::builtin()
            .save("does/not/exist/tables.ron", true)
            .unwrap_err();
        assert!(matches!(err, TableSaveError::Io(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BlockedSegmentsFile::load("does/not/exist.ron").unwrap_err();
        assert!(matches!(err, TableLoadError::Io(_)));
        assert!(format!("{}", err).contains("IO error"));
    }
}
