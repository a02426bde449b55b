//! Blocked paint segments for track pieces
//!
//! This crate provides the tables that say which parts of a tile a track
//! piece covers, and the lookups the track painter calls:
//!
//! - [`block_segments_for_track_sequence`] - Mark a piece sequence's segments as blocked
//! - [`get_should_invert_pre_post_call`] - Whether a sequence paints upside down
//! - [`BlockedSegmentsType`] - The five paint variants, one table each
//! - [`SegmentEntry`] - A table entry: a mask, or unimplemented
//! - [`BlockedSegmentsFile`] - RON document form of the tables
//! - [`SegmentTable`] - Tables loaded from a document
//! - [`TableValidator`] - Consistency checks over any table

pub mod blocked_segments;
mod table_error;
mod table_file;
mod table_validator;

pub use blocked_segments::{
    block_segments_for_track_sequence, block_segments_with, blocked_segments,
    get_should_invert_pre_post_call, segment_entry, BlockedSegmentTable, BlockedSegmentsType,
    BuiltinSegments, ParseVariantError, SegmentEntry, SegmentLookup, BLOCKED_SEGMENTS_MAP,
    INVERT_PRE_POST_TABLE,
};
pub use table_error::TableError;
pub use table_file::{
    BlockedSegmentsFile, PieceInversion, PieceSegments, SegmentTable, TableLoadError,
    TableSaveError, VariantSegments,
};
pub use table_validator::{TableValidator, ValidationError};

// Re-export commonly used types for convenience
pub use trackpaint_paint::{PaintSegment, PaintSession, SegmentMask, SegmentSupport};
pub use trackpaint_track::{Direction, TrackElemType, MAX_SEQUENCES_PER_PIECE};
