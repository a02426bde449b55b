//! Pre/post paint call inversion
//!
//! Pieces that roll the train over paint some of their sequences upside
//! down. On those sequences the caller must swap the order of its pre- and
//! post-track paint calls.

use trackpaint_track::{TrackElemType, MAX_SEQUENCES_PER_PIECE};

use TrackElemType::*;

/// Sequences painted with inverted pre/post call order
const INVERTED_SEQUENCES: &[(TrackElemType, usize)] = &[
    (LeftTwistDownToUp, 2),
    (RightTwistDownToUp, 2),
    (LeftTwistUpToDown, 0),
    (RightTwistUpToDown, 0),
    (HalfLoopUp, 3),
    (HalfLoopDown, 0),
    (LeftCorkscrewUp, 2),
    (RightCorkscrewUp, 2),
    (LeftCorkscrewDown, 0),
    (RightCorkscrewDown, 0),
    (LeftBarrelRollUpToDown, 2),
    (LeftBarrelRollUpToDown, 5),
    (RightBarrelRollUpToDown, 2),
    (RightBarrelRollUpToDown, 5),
    (LeftBarrelRollDownToUp, 0),
    (LeftBarrelRollDownToUp, 3),
    (RightBarrelRollDownToUp, 0),
    (RightBarrelRollDownToUp, 3),
    (LeftLargeHalfLoopUp, 6),
    (RightLargeHalfLoopUp, 6),
    (LeftLargeHalfLoopDown, 0),
    (RightLargeHalfLoopDown, 0),
    (LeftFlyerTwistUp, 2),
    (RightFlyerTwistUp, 2),
    (LeftFlyerTwistDown, 0),
    (RightFlyerTwistDown, 0),
    (FlyerHalfLoopUninvertedUp, 3),
    (FlyerHalfLoopInvertedDown, 0),
    (LeftFlyerCorkscrewUp, 2),
    (RightFlyerCorkscrewUp, 2),
    (LeftFlyerCorkscrewDown, 0),
    (RightFlyerCorkscrewDown, 0),
    (Up90ToInvertedFlatQuarterLoop, 2),
    (InvertedFlatToDown90QuarterLoop, 0),
    (MultiDimUp90ToInvertedFlatQuarterLoop, 2),
    (MultiDimInvertedFlatToDown90QuarterLoop, 0),
    (LeftLargeCorkscrewUp, 5),
    (RightLargeCorkscrewUp, 5),
    (LeftLargeCorkscrewDown, 0),
    (RightLargeCorkscrewDown, 0),
    (LeftMediumHalfLoopUp, 4),
    (RightMediumHalfLoopUp, 4),
    (LeftMediumHalfLoopDown, 0),
    (RightMediumHalfLoopDown, 0),
    (LeftZeroGRollUp, 3),
    (RightZeroGRollUp, 3),
    (LeftZeroGRollDown, 0),
    (RightZeroGRollDown, 0),
    (LeftLargeZeroGRollUp, 3),
    (RightLargeZeroGRollUp, 3),
    (LeftLargeZeroGRollDown, 0),
    (RightLargeZeroGRollDown, 0),
    (LeftFlyerLargeHalfLoopUninvertedUp, 6),
    (RightFlyerLargeHalfLoopUninvertedUp, 6),
    (LeftFlyerLargeHalfLoopInvertedDown, 0),
    (RightFlyerLargeHalfLoopInvertedDown, 0),
    (LeftFlyerLargeHalfLoopInvertedUp, 0),
    (RightFlyerLargeHalfLoopInvertedUp, 0),
    (LeftFlyerLargeHalfLoopUninvertedDown, 6),
    (RightFlyerLargeHalfLoopUninvertedDown, 6),
    (FlyerHalfLoopInvertedUp, 0),
    (FlyerHalfLoopUninvertedDown, 3),
    (LeftEighthDiveLoopUpToOrthogonal, 5),
    (RightEighthDiveLoopUpToOrthogonal, 5),
    (LeftEighthDiveLoopDownToDiag, 0),
    (RightEighthDiveLoopDownToDiag, 0),
];

/// Inversion flag for every sequence of every piece
pub static INVERT_PRE_POST_TABLE: [[bool; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT] =
    compute_invert_table();

/// Expand the sparse sequence list at compile time
const fn compute_invert_table() -> [[bool; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT] {
    let mut table = [[false; MAX_SEQUENCES_PER_PIECE]; TrackElemType::COUNT];
    let mut i = 0;

    while i < INVERTED_SEQUENCES.len() {
        let (elem, sequence) = INVERTED_SEQUENCES[i];
        // Out-of-range sequences fail the build here
        assert!(sequence < elem.sequence_count());
        table[elem as usize][sequence] = true;
        i += 1;
    }

    table
}

/// Whether the caller must invert its pre/post paint calls for this sequence
pub fn get_should_invert_pre_post_call(track_elem_type: TrackElemType, track_sequence: usize) -> bool {
    INVERT_PRE_POST_TABLE[track_elem_type.ordinal()][track_sequence]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_not_inverted() {
        assert!(!get_should_invert_pre_post_call(TrackElemType::Flat, 0));
    }

    #[test]
    fn test_left_twist_down_to_up_row() {
        let row: Vec<bool> = (0..3)
            .map(|seq| get_should_invert_pre_post_call(TrackElemType::LeftTwistDownToUp, seq))
            .collect();
        assert_eq!(row, vec![false, false, true]);
    }

    #[test]
    fn test_up_and_down_halves_mirror() {
        assert!(get_should_invert_pre_post_call(TrackElemType::HalfLoopUp, 3));
        assert!(get_should_invert_pre_post_call(TrackElemType::HalfLoopDown, 0));
        assert!(!get_should_invert_pre_post_call(TrackElemType::HalfLoopUp, 0));
    }

    #[test]
    fn test_vertical_loop_ends_upright() {
        for seq in 0..TrackElemType::LeftVerticalLoop.sequence_count() {
            assert!(!get_should_invert_pre_post_call(TrackElemType::LeftVerticalLoop, seq));
        }
    }

    #[test]
    fn test_flags_only_within_sequence_count() {
        for elem in TrackElemType::ALL {
            for seq in elem.sequence_count()..MAX_SEQUENCES_PER_PIECE {
                assert!(!INVERT_PRE_POST_TABLE[elem.ordinal()][seq], "{} seq {}", elem, seq);
            }
        }
    }

    #[test]
    fn test_flag_count_matches_list() {
        let flagged: usize = INVERT_PRE_POST_TABLE
            .iter()
            .map(|row| row.iter().filter(|&&f| f).count())
            .sum();
        assert_eq!(flagged, INVERTED_SEQUENCES.len());
    }
}
