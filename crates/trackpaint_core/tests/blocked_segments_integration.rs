//! Integration tests for blocked segment lookups
//!
//! These tests exercise the tables through the public API:
//! 1. Every variant table is complete and padded consistently
//! 2. Known pieces block the expected segments
//! 3. Rotation by direction behaves as a quarter-turn group
//! 4. Related pieces share their masks
//! 5. Exported documents drive the same lookups as the compiled tables

use trackpaint_core::{
    block_segments_for_track_sequence, block_segments_with, blocked_segments,
    get_should_invert_pre_post_call, segment_entry, BlockedSegmentsFile, BlockedSegmentsType,
    BuiltinSegments, PaintSegment, PaintSession, PieceInversion, SegmentEntry, SegmentLookup,
    SegmentMask, TableError, TableValidator, TrackElemType, MAX_SEQUENCES_PER_PIECE,
};
use trackpaint_paint::rotate_segments;

fn straight() -> SegmentMask {
    SegmentMask::from_segments(&[
        PaintSegment::Centre,
        PaintSegment::TopRight,
        PaintSegment::BottomLeft,
    ])
}

// ==================== Table Shape Tests ====================

#[test]
fn test_every_variant_has_every_piece() {
    for variant in BlockedSegmentsType::ALL {
        let table = variant.table();
        assert_eq!(table.len(), TrackElemType::COUNT, "{}", variant);
        for row in table.iter() {
            assert_eq!(row.len(), MAX_SEQUENCES_PER_PIECE);
        }
    }
}

#[test]
fn test_builtin_tables_pass_validation() {
    let errors = TableValidator::validate(&BuiltinSegments);
    assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
}

// ==================== Known Value Tests ====================

#[test]
fn test_narrow_flat_blocks_straight_strip() {
    assert_eq!(
        segment_entry(BlockedSegmentsType::Narrow, TrackElemType::Flat, 0),
        SegmentEntry::Blocked(straight())
    );
}

#[test]
fn test_wide_flat_blocks_whole_tile() {
    assert_eq!(
        segment_entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 0),
        SegmentEntry::Blocked(SegmentMask::ALL)
    );
}

#[test]
fn test_narrow_tower_base_blocks_nothing() {
    assert_eq!(TrackElemType::TowerBase.sequence_count(), 9);
    for seq in 0..9 {
        assert_eq!(
            blocked_segments(BlockedSegmentsType::Narrow, TrackElemType::TowerBase, seq, 0),
            SegmentMask::NONE
        );
    }
}

#[test]
fn test_invert_pre_post_known_values() {
    assert!(!get_should_invert_pre_post_call(TrackElemType::Flat, 0));
    assert!(get_should_invert_pre_post_call(TrackElemType::LeftTwistDownToUp, 2));
    assert!(!get_should_invert_pre_post_call(TrackElemType::LeftTwistDownToUp, 0));
}

#[test]
fn test_inversions_unimplemented_on_wide_track() {
    for seq in 0..TrackElemType::HalfLoopUp.sequence_count() {
        let entry = segment_entry(BlockedSegmentsType::Wide, TrackElemType::HalfLoopUp, seq);
        assert_eq!(entry, SegmentEntry::Unimplemented);
        assert_ne!(entry, SegmentEntry::NONE);
    }
}

#[test]
fn test_unimplemented_entry_blocks_whole_tile() {
    let mut session = PaintSession::new();
    block_segments_for_track_sequence(
        &mut session,
        0,
        3,
        0,
        TrackElemType::LeftCorkscrewUp,
        BlockedSegmentsType::WideTrain,
    );
    assert_eq!(session.blocked_segments(), SegmentMask::ALL);
}

// ==================== Rotation Tests ====================

#[test]
fn test_direction_0_matches_raw_entry() {
    for variant in BlockedSegmentsType::ALL {
        for elem in TrackElemType::ALL {
            for seq in 0..elem.sequence_count() {
                let raw = segment_entry(variant, elem, seq).resolve();
                assert_eq!(blocked_segments(variant, elem, seq, 0), raw);
            }
        }
    }
}

#[test]
fn test_rotations_compose() {
    for variant in BlockedSegmentsType::ALL {
        for elem in TrackElemType::ALL {
            for seq in 0..elem.sequence_count() {
                let base = blocked_segments(variant, elem, seq, 0);
                for direction in 0..4u8 {
                    let rotated = blocked_segments(variant, elem, seq, direction);
                    assert_eq!(rotated, rotate_segments(base, direction));
                    assert_eq!(rotate_segments(rotated, 4 - direction), base);
                }
            }
        }
    }
}

#[test]
fn test_rotated_flat_marks_crossed_strip() {
    let mut session = PaintSession::new();
    block_segments_for_track_sequence(
        &mut session,
        0,
        1,
        0,
        TrackElemType::Flat,
        BlockedSegmentsType::Narrow,
    );
    for segment in [PaintSegment::Centre, PaintSegment::BottomRight, PaintSegment::TopLeft] {
        assert!(session.segment_support(segment).is_blocked(), "{:?}", segment);
    }
    assert!(!session.segment_support(PaintSegment::TopRight).is_blocked());
}

// ==================== Determinism Tests ====================

#[test]
fn test_lookup_is_deterministic() {
    let mut first = PaintSession::new();
    let mut second = PaintSession::new();
    for session in [&mut first, &mut second] {
        for seq in 0..7u8 {
            block_segments_for_track_sequence(
                session,
                seq,
                2,
                56,
                TrackElemType::LeftQuarterTurn5Tiles,
                BlockedSegmentsType::Inverted,
            );
        }
    }
    assert_eq!(first, second);
}

// ==================== Aliasing Tests ====================

#[test]
fn test_wide_up25_matches_wide_flat() {
    assert_eq!(
        segment_entry(BlockedSegmentsType::Wide, TrackElemType::Up25, 0),
        segment_entry(BlockedSegmentsType::Wide, TrackElemType::Flat, 0)
    );
}

#[test]
fn test_covered_pieces_match_uncovered() {
    let pairs = [
        (TrackElemType::FlatCovered, TrackElemType::Flat),
        (TrackElemType::Up25Covered, TrackElemType::Up25),
        (TrackElemType::Up60Covered, TrackElemType::Up60),
        (TrackElemType::FlatToUp25Covered, TrackElemType::FlatToUp25),
        (TrackElemType::LeftQuarterTurn5TilesCovered, TrackElemType::LeftQuarterTurn5Tiles),
        (TrackElemType::SBendLeftCovered, TrackElemType::SBendLeft),
    ];
    for variant in BlockedSegmentsType::ALL {
        for (covered, uncovered) in pairs {
            assert_eq!(
                variant.table()[covered.ordinal()],
                variant.table()[uncovered.ordinal()],
                "{} vs {} ({})",
                covered,
                uncovered,
                variant
            );
        }
    }
}

#[test]
fn test_banked_turn_matches_unbanked_turn() {
    let table = BlockedSegmentsType::Narrow.table();
    assert_eq!(
        table[TrackElemType::BankedLeftQuarterTurn5Tiles.ordinal()],
        table[TrackElemType::LeftQuarterTurn5Tiles.ordinal()]
    );
    assert_eq!(
        table[TrackElemType::LeftBankedQuarterTurn3Tiles.ordinal()],
        table[TrackElemType::LeftQuarterTurn3Tiles.ordinal()]
    );
}

#[test]
fn test_diagonal_slopes_match_diagonal_flat() {
    for variant in BlockedSegmentsType::ALL {
        let table = variant.table();
        assert_eq!(
            table[TrackElemType::DiagUp25.ordinal()],
            table[TrackElemType::DiagFlat.ordinal()],
            "{}",
            variant
        );
    }
}

// ==================== Table File Tests ====================

#[test]
fn test_exported_document_drives_same_lookups() {
    let text = BlockedSegmentsFile::builtin().to_ron_string(false).unwrap();
    let table = BlockedSegmentsFile::from_ron_str(&text)
        .unwrap()
        .to_table()
        .unwrap();

    let mut from_file = PaintSession::new();
    let mut builtin = PaintSession::new();
    for seq in 0..4u8 {
        block_segments_with(
            &table,
            &mut from_file,
            seq,
            1,
            0,
            TrackElemType::LeftQuarterTurn3Tiles,
            BlockedSegmentsType::SuspendedSwinging,
        );
        block_segments_for_track_sequence(
            &mut builtin,
            seq,
            1,
            0,
            TrackElemType::LeftQuarterTurn3Tiles,
            BlockedSegmentsType::SuspendedSwinging,
        );
    }
    assert_eq!(from_file, builtin);
    assert_eq!(
        table.entry(BlockedSegmentsType::Narrow, TrackElemType::Flat, 0),
        BuiltinSegments.entry(BlockedSegmentsType::Narrow, TrackElemType::Flat, 0)
    );
}

#[test]
fn test_saved_file_loads_back() {
    let path = std::env::temp_dir().join("trackpaint_blocked_segments_test.ron");
    let file = BlockedSegmentsFile::builtin();
    file.save(&path, true).unwrap();
    let loaded = BlockedSegmentsFile::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, file);
}

#[test]
fn test_saved_file_with_repeated_inversion_is_rejected() {
    let path = std::env::temp_dir().join("trackpaint_repeated_inversion_test.ron");
    let mut file = BlockedSegmentsFile::builtin();
    file.invert_pre_post.push(PieceInversion {
        track_elem: TrackElemType::LeftTwistDownToUp,
        sequences: vec![false, false, false],
    });
    file.save(&path, false).unwrap();
    let loaded = BlockedSegmentsFile::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(
        loaded.to_table().unwrap_err(),
        TableError::DuplicateInversion {
            track_elem: TrackElemType::LeftTwistDownToUp,
        }
    );
    assert!(get_should_invert_pre_post_call(TrackElemType::LeftTwistDownToUp, 2));
}
