//! Blocked paint segments
//!
//! For every paint variant, track piece and sequence this module records
//! which segments of the tile the piece covers. Masks are authored for
//! direction 0 and rotated into the piece's direction at lookup time. The
//! covered segments are then marked as blocked in the paint session so
//! supports painted afterwards do not show through the track.
//!
//! Each variant owns one [`BlockedSegmentTable`]. The table type fixes the
//! row count to [`TrackElemType::COUNT`], so a missing or surplus row is a
//! compile error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use trackpaint_paint::{rotate_segments, SegmentMask, SegmentSupport, SUPPORT_HEIGHT_BLOCKED};
use trackpaint_track::{Direction, TrackElemType, MAX_SEQUENCES_PER_PIECE};

macro_rules! blocked {
    ($($segment:ident)|+) => {
        $crate::blocked_segments::SegmentEntry::Blocked(
            ::trackpaint_paint::SegmentMask::empty()
                $(.union(::trackpaint_paint::SegmentMask::$segment))+
        )
    };
}

mod invert;
mod inverted;
mod narrow;
mod suspended_swinging;
mod wide;
mod wide_train;

pub use invert::{get_should_invert_pre_post_call, INVERT_PRE_POST_TABLE};

/// Paint style a piece is drawn with
///
/// The same piece covers a different part of the tile depending on how its
/// track and vehicles are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum BlockedSegmentsType {
    /// Standard track with the train riding on top
    #[default]
    Narrow,
    /// Track with the train hanging underneath
    Inverted,
    /// Wooden and water ride track spanning the whole tile
    Wide,
    /// Suspended track whose cars swing out on curves
    SuspendedSwinging,
    /// Wide track carrying long trains
    WideTrain,
}

impl BlockedSegmentsType {
    /// Number of variants
    pub const COUNT: usize = 5;

    /// Every variant in ordinal order
    pub const ALL: [BlockedSegmentsType; Self::COUNT] = [
        BlockedSegmentsType::Narrow,
        BlockedSegmentsType::Inverted,
        BlockedSegmentsType::Wide,
        BlockedSegmentsType::SuspendedSwinging,
        BlockedSegmentsType::WideTrain,
    ];

    /// Name used in files, config and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            BlockedSegmentsType::Narrow => "narrow",
            BlockedSegmentsType::Inverted => "inverted",
            BlockedSegmentsType::Wide => "wide",
            BlockedSegmentsType::SuspendedSwinging => "suspendedSwinging",
            BlockedSegmentsType::WideTrain => "wideTrain",
        }
    }

    /// The compiled table for this variant
    pub fn table(self) -> &'static BlockedSegmentTable {
        &BLOCKED_SEGMENTS_MAP[self as usize]
    }
}

impl fmt::Display for BlockedSegmentsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`BlockedSegmentsType`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVariantError {
    name: String,
}

impl fmt::Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown blocked segments type: '{}' (expected narrow, inverted, wide, suspendedSwinging or wideTrain)",
            self.name
        )
    }
}

impl std::error::Error for ParseVariantError {}

impl FromStr for BlockedSegmentsType {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars().filter(|c| *c != '_' && *c != '-').collect();
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ParseVariantError { name: s.to_string() })
    }
}

/// Blocked segments of one piece sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentEntry {
    /// The piece covers exactly these segments
    Blocked(SegmentMask),
    /// The piece is not modelled for this variant
    Unimplemented,
}

impl SegmentEntry {
    /// Entry that blocks nothing
    pub const NONE: SegmentEntry = SegmentEntry::Blocked(SegmentMask::NONE);

    /// Mask to mark as blocked
    ///
    /// Unmodelled entries block the whole tile.
    pub const fn resolve(self) -> SegmentMask {
        match self {
            SegmentEntry::Blocked(mask) => mask,
            SegmentEntry::Unimplemented => SegmentMask::ALL,
        }
    }

    /// Whether the piece is unmodelled for this variant
    pub const fn is_unimplemented(self) -> bool {
        matches!(self, SegmentEntry::Unimplemented)
    }
}

/// Blocked segments for every sequence of every piece, for one variant
pub type BlockedSegmentTable = [[SegmentEntry; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT];

const NONE: SegmentEntry = SegmentEntry::NONE;
const ALL: SegmentEntry = SegmentEntry::Blocked(SegmentMask::ALL);
const UNIMPLEMENTED: SegmentEntry = SegmentEntry::Unimplemented;

/// Single-tile straight track along the direction-0 axis
const STRAIGHT: SegmentEntry = blocked!(TOP_RIGHT | BOTTOM_LEFT | CENTRE);

/// The four sequences of a narrow diagonal straight
const DIAG_STRAIGHT: [SegmentEntry; 4] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
];

/// Pad a piece's entries to a full table row
const fn row(entries: &[SegmentEntry]) -> [SegmentEntry; MAX_SEQUENCES_PER_PIECE] {
    let mut out = [NONE; MAX_SEQUENCES_PER_PIECE];
    let mut i = 0;
    while i < entries.len() {
        out[i] = entries[i];
        i += 1;
    }
    out
}

/// Tables for every variant, indexed by [`BlockedSegmentsType`] ordinal
pub static BLOCKED_SEGMENTS_MAP: [BlockedSegmentTable; BlockedSegmentsType::COUNT] = [
    narrow::NARROW,
    inverted::INVERTED,
    wide::WIDE,
    suspended_swinging::SUSPENDED_SWINGING,
    wide_train::WIDE_TRAIN,
];

/// Source of blocked segment entries
///
/// Implemented by the compiled tables and by tables loaded from a file.
pub trait SegmentLookup {
    /// Raw entry for one piece sequence, before rotation
    fn entry(
        &self,
        variant: BlockedSegmentsType,
        track_elem_type: TrackElemType,
        track_sequence: usize,
    ) -> SegmentEntry;
}

/// The tables compiled into the crate
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinSegments;

impl SegmentLookup for BuiltinSegments {
    fn entry(
        &self,
        variant: BlockedSegmentsType,
        track_elem_type: TrackElemType,
        track_sequence: usize,
    ) -> SegmentEntry {
        segment_entry(variant, track_elem_type, track_sequence)
    }
}

/// Raw compiled entry for one piece sequence
///
/// Sequences past the piece's count return the row padding. Sequences of
/// [`MAX_SEQUENCES_PER_PIECE`] or more panic.
pub fn segment_entry(
    variant: BlockedSegmentsType,
    track_elem_type: TrackElemType,
    track_sequence: usize,
) -> SegmentEntry {
    variant.table()[track_elem_type.ordinal()][track_sequence]
}

/// Blocked segments of one piece sequence, rotated into `direction`
pub fn blocked_segments(
    variant: BlockedSegmentsType,
    track_elem_type: TrackElemType,
    track_sequence: usize,
    direction: Direction,
) -> SegmentMask {
    resolve_rotated(segment_entry(variant, track_elem_type, track_sequence), direction)
}

fn resolve_rotated(entry: SegmentEntry, direction: Direction) -> SegmentMask {
    if entry.is_unimplemented() {
        log::trace!("Unimplemented blocked segments entry, blocking whole tile");
    }
    rotate_segments(entry.resolve(), direction)
}

/// Mark the segments a piece sequence covers as blocked
///
/// `height` is the height the piece is painted at. Blocking does not depend
/// on it; it is accepted so callers can pass their paint arguments through.
pub fn block_segments_for_track_sequence<S: SegmentSupport + ?Sized>(
    session: &mut S,
    track_sequence: u8,
    direction: Direction,
    height: u16,
    track_elem_type: TrackElemType,
    blocked_segments_type: BlockedSegmentsType,
) {
    block_segments_with(
        &BuiltinSegments,
        session,
        track_sequence,
        direction,
        height,
        track_elem_type,
        blocked_segments_type,
    );
}

/// [`block_segments_for_track_sequence`] reading from any [`SegmentLookup`]
pub fn block_segments_with<L, S>(
    lookup: &L,
    session: &mut S,
    track_sequence: u8,
    direction: Direction,
    _height: u16,
    track_elem_type: TrackElemType,
    blocked_segments_type: BlockedSegmentsType,
) where
    L: SegmentLookup + ?Sized,
    S: SegmentSupport + ?Sized,
{
    let entry = lookup.entry(blocked_segments_type, track_elem_type, track_sequence as usize);
    let mask = resolve_rotated(entry, direction);
    session.set_segment_support_height(mask, SUPPORT_HEIGHT_BLOCKED, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackpaint_paint::{PaintSegment, PaintSession};

    /// Records every call made through [`SegmentSupport`]
    #[derive(Default)]
    struct RecordingSupport {
        calls: Vec<(SegmentMask, u16, u8)>,
    }

    impl SegmentSupport for RecordingSupport {
        fn set_segment_support_height(&mut self, segments: SegmentMask, height: u16, slope: u8) {
            self.calls.push((segments, height, slope));
        }
    }

    fn straight() -> SegmentMask {
        SegmentMask::CENTRE | SegmentMask::TOP_RIGHT | SegmentMask::BOTTOM_LEFT
    }

    #[test]
    fn test_table_shape() {
        for variant in BlockedSegmentsType::ALL {
            let table = variant.table();
            assert_eq!(table.len(), TrackElemType::COUNT);
            assert!(table.iter().all(|row| row.len() == MAX_SEQUENCES_PER_PIECE));
        }
    }

    #[test]
    fn test_map_order_matches_variants() {
        assert!(std::ptr::eq(
            BlockedSegmentsType::Narrow.table(),
            &BLOCKED_SEGMENTS_MAP[0]
        ));
        assert!(std::ptr::eq(
            BlockedSegmentsType::WideTrain.table(),
            &BLOCKED_SEGMENTS_MAP[4]
        ));
    }

    #[test]
    fn test_narrow_flat() {
        let entry = segment_entry(BlockedSegmentsType::Narrow, TrackElemType::Flat, 0);
        assert_eq!(
            entry,
            SegmentEntry::Blocked(SegmentMask::from_segments(&[
                PaintSegment::Centre,
                PaintSegment::TopRight,
                PaintSegment::BottomLeft,
            ]))
        );
    }

    #[test]
    fn test_wide_flat_blocks_all() {
        let entry = segment_entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 0);
        assert_eq!(entry, SegmentEntry::Blocked(SegmentMask::ALL));
    }

    #[test]
    fn test_narrow_tower_base_blocks_nothing() {
        for seq in 0..TrackElemType::TowerBase.sequence_count() {
            assert_eq!(
                segment_entry(BlockedSegmentsType::Narrow, TrackElemType::TowerBase, seq),
                SegmentEntry::NONE,
                "sequence {}",
                seq
            );
        }
    }

    #[test]
    fn test_padding_is_none() {
        let entry = segment_entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 5);
        assert_eq!(entry, SegmentEntry::NONE);
    }

    #[test]
    fn test_unimplemented_distinct_from_none() {
        assert_ne!(SegmentEntry::Unimplemented, SegmentEntry::NONE);
        assert_eq!(SegmentEntry::Unimplemented.resolve(), SegmentMask::ALL);
        assert_eq!(SegmentEntry::NONE.resolve(), SegmentMask::NONE);
        assert!(SegmentEntry::Unimplemented.is_unimplemented());
        assert!(!SegmentEntry::NONE.is_unimplemented());
    }

    #[test]
    fn test_block_segments_forwards_blocked_height() {
        let mut support = RecordingSupport::default();
        block_segments_for_track_sequence(
            &mut support,
            0,
            0,
            48,
            TrackElemType::Flat,
            BlockedSegmentsType::Narrow,
        );
        assert_eq!(support.calls, vec![(straight(), SUPPORT_HEIGHT_BLOCKED, 0)]);
    }

    #[test]
    fn test_block_segments_rotates_by_direction() {
        let mut support = RecordingSupport::default();
        block_segments_for_track_sequence(
            &mut support,
            0,
            1,
            0,
            TrackElemType::Flat,
            BlockedSegmentsType::Narrow,
        );
        let expected = SegmentMask::CENTRE | SegmentMask::BOTTOM_RIGHT | SegmentMask::TOP_LEFT;
        assert_eq!(support.calls[0].0, expected);
    }

    #[test]
    fn test_block_segments_marks_session() {
        let mut session = PaintSession::new();
        block_segments_for_track_sequence(
            &mut session,
            0,
            0,
            0,
            TrackElemType::Flat,
            BlockedSegmentsType::Narrow,
        );
        assert_eq!(session.blocked_segments(), straight());
        assert!(!session.segment_support(PaintSegment::Top).is_blocked());
    }

    #[test]
    fn test_height_does_not_change_mask() {
        let low = blocked_segments(BlockedSegmentsType::Inverted, TrackElemType::Up25, 0, 2);
        let mut session = PaintSession::new();
        block_segments_for_track_sequence(
            &mut session,
            0,
            2,
            1024,
            TrackElemType::Up25,
            BlockedSegmentsType::Inverted,
        );
        assert_eq!(session.blocked_segments(), low);
    }

    #[test]
    fn test_variant_names_round_trip() {
        for variant in BlockedSegmentsType::ALL {
            assert_eq!(variant.name().parse::<BlockedSegmentsType>(), Ok(variant));
        }
        assert_eq!(
            "wide_train".parse::<BlockedSegmentsType>(),
            Ok(BlockedSegmentsType::WideTrain)
        );
        assert_eq!(
            "SUSPENDED-SWINGING".parse::<BlockedSegmentsType>(),
            Ok(BlockedSegmentsType::SuspendedSwinging)
        );
    }

    #[test]
    fn test_unknown_variant_error() {
        let err = "monorail".parse::<BlockedSegmentsType>().unwrap_err();
        assert!(format!("{}", err).contains("monorail"));
    }

    #[test]
    fn test_default_variant_is_narrow() {
        assert_eq!(BlockedSegmentsType::default(), BlockedSegmentsType::Narrow);
    }

    #[test]
    fn test_blocked_macro_builds_union() {
        assert_eq!(
            blocked!(TOP | CENTRE),
            SegmentEntry::Blocked(SegmentMask::TOP | SegmentMask::CENTRE)
        );
    }
}
