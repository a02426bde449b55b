//! Track piece types
//!
//! [`TrackElemType`] enumerates every kind of track piece. Variants keep the
//! upstream ordinal order, so `TrackElemType::X as usize` can index tables
//! laid out row by row. Each piece also records how many sequences (tiles)
//! it occupies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of sequences any single piece can occupy
pub const MAX_SEQUENCES_PER_PIECE: usize = 16;

macro_rules! track_elem_types {
    ($($name:ident => $sequences:literal,)*) => {
        /// A kind of track piece
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum TrackElemType {
            $($name,)*
        }

        impl TrackElemType {
            /// Number of track piece kinds
            pub const COUNT: usize = [$(stringify!($name),)*].len();

            /// Every piece kind in ordinal order
            pub const ALL: [TrackElemType; Self::COUNT] = [$(TrackElemType::$name,)*];

            /// Identifier of this piece kind, e.g. `"LeftQuarterTurn5Tiles"`
            pub const fn name(self) -> &'static str {
                match self {
                    $(TrackElemType::$name => stringify!($name),)*
                }
            }

            /// Number of sequences this piece occupies
            pub const fn sequence_count(self) -> usize {
                match self {
                    $(TrackElemType::$name => $sequences,)*
                }
            }
        }
    };
}

track_elem_types! {
    Flat => 1,
    EndStation => 1,
    BeginStation => 1,
    MiddleStation => 1,
    Up25 => 1,
    Up60 => 1,
    FlatToUp25 => 1,
    Up25ToUp60 => 1,
    Up60ToUp25 => 1,
    Up25ToFlat => 1,
    Down25 => 1,
    Down60 => 1,
    FlatToDown25 => 1,
    Down25ToDown60 => 1,
    Down60ToDown25 => 1,
    Down25ToFlat => 1,
    LeftQuarterTurn5Tiles => 7,
    RightQuarterTurn5Tiles => 7,
    FlatToLeftBank => 1,
    FlatToRightBank => 1,
    LeftBankToFlat => 1,
    RightBankToFlat => 1,
    BankedLeftQuarterTurn5Tiles => 7,
    BankedRightQuarterTurn5Tiles => 7,
    LeftBankToUp25 => 1,
    RightBankToUp25 => 1,
    Up25ToLeftBank => 1,
    Up25ToRightBank => 1,
    LeftBankToDown25 => 1,
    RightBankToDown25 => 1,
    Down25ToLeftBank => 1,
    Down25ToRightBank => 1,
    LeftBank => 1,
    RightBank => 1,
    LeftQuarterTurn5TilesUp25 => 7,
    RightQuarterTurn5TilesUp25 => 7,
    LeftQuarterTurn5TilesDown25 => 7,
    RightQuarterTurn5TilesDown25 => 7,
    SBendLeft => 4,
    SBendRight => 4,
    LeftVerticalLoop => 10,
    RightVerticalLoop => 10,
    LeftQuarterTurn3Tiles => 4,
    RightQuarterTurn3Tiles => 4,
    LeftBankedQuarterTurn3Tiles => 4,
    RightBankedQuarterTurn3Tiles => 4,
    LeftQuarterTurn3TilesUp25 => 4,
    RightQuarterTurn3TilesUp25 => 4,
    LeftQuarterTurn3TilesDown25 => 4,
    RightQuarterTurn3TilesDown25 => 4,
    LeftQuarterTurn1Tile => 1,
    RightQuarterTurn1Tile => 1,
    LeftTwistDownToUp => 3,
    RightTwistDownToUp => 3,
    LeftTwistUpToDown => 3,
    RightTwistUpToDown => 3,
    HalfLoopUp => 4,
    HalfLoopDown => 4,
    LeftCorkscrewUp => 3,
    RightCorkscrewUp => 3,
    LeftCorkscrewDown => 3,
    RightCorkscrewDown => 3,
    FlatToUp60 => 1,
    Up60ToFlat => 1,
    FlatToDown60 => 1,
    Down60ToFlat => 1,
    TowerBase => 9,
    TowerSection => 1,
    FlatCovered => 1,
    Up25Covered => 1,
    Up60Covered => 1,
    FlatToUp25Covered => 1,
    Up25ToUp60Covered => 1,
    Up60ToUp25Covered => 1,
    Up25ToFlatCovered => 1,
    Down25Covered => 1,
    Down60Covered => 1,
    FlatToDown25Covered => 1,
    Down25ToDown60Covered => 1,
    Down60ToDown25Covered => 1,
    Down25ToFlatCovered => 1,
    LeftQuarterTurn5TilesCovered => 7,
    RightQuarterTurn5TilesCovered => 7,
    SBendLeftCovered => 4,
    SBendRightCovered => 4,
    LeftQuarterTurn3TilesCovered => 4,
    RightQuarterTurn3TilesCovered => 4,
    LeftHalfBankedHelixUpSmall => 8,
    RightHalfBankedHelixUpSmall => 8,
    LeftHalfBankedHelixDownSmall => 8,
    RightHalfBankedHelixDownSmall => 8,
    LeftHalfBankedHelixUpLarge => 14,
    RightHalfBankedHelixUpLarge => 14,
    LeftHalfBankedHelixDownLarge => 14,
    RightHalfBankedHelixDownLarge => 14,
    LeftQuarterTurn1TileUp60 => 1,
    RightQuarterTurn1TileUp60 => 1,
    LeftQuarterTurn1TileDown60 => 1,
    RightQuarterTurn1TileDown60 => 1,
    Brakes => 1,
    Booster => 1,
    Maze => 16,
    LeftQuarterBankedHelixLargeUp => 7,
    RightQuarterBankedHelixLargeUp => 7,
    LeftQuarterBankedHelixLargeDown => 7,
    RightQuarterBankedHelixLargeDown => 7,
    LeftQuarterHelixLargeUp => 7,
    RightQuarterHelixLargeUp => 7,
    LeftQuarterHelixLargeDown => 7,
    RightQuarterHelixLargeDown => 7,
    Up25LeftBanked => 1,
    Up25RightBanked => 1,
    Waterfall => 1,
    Rapids => 1,
    OnRidePhoto => 1,
    Down25LeftBanked => 1,
    Down25RightBanked => 1,
    Watersplash => 5,
    FlatToUp60LongBase => 4,
    Up60ToFlatLongBase => 4,
    Whirlpool => 1,
    Down60ToFlatLongBase => 4,
    FlatToDown60LongBase => 4,
    CableLiftHill => 4,
    ReverseFreefallSlope => 7,
    ReverseFreefallVertical => 2,
    Up90 => 2,
    Down90 => 2,
    Up60ToUp90 => 2,
    Down90ToDown60 => 1,
    Up90ToUp60 => 1,
    Down60ToDown90 => 2,
    BrakeForDrop => 1,
    LeftEighthToDiag => 5,
    RightEighthToDiag => 5,
    LeftEighthToOrthogonal => 5,
    RightEighthToOrthogonal => 5,
    LeftEighthBankToDiag => 5,
    RightEighthBankToDiag => 5,
    LeftEighthBankToOrthogonal => 5,
    RightEighthBankToOrthogonal => 5,
    DiagFlat => 4,
    DiagUp25 => 4,
    DiagUp60 => 4,
    DiagFlatToUp25 => 4,
    DiagUp25ToUp60 => 4,
    DiagUp60ToUp25 => 4,
    DiagUp25ToFlat => 4,
    DiagDown25 => 4,
    DiagDown60 => 4,
    DiagFlatToDown25 => 4,
    DiagDown25ToDown60 => 4,
    DiagDown60ToDown25 => 4,
    DiagDown25ToFlat => 4,
    DiagFlatToUp60 => 4,
    DiagUp60ToFlat => 4,
    DiagFlatToDown60 => 4,
    DiagDown60ToFlat => 4,
    DiagFlatToLeftBank => 4,
    DiagFlatToRightBank => 4,
    DiagLeftBankToFlat => 4,
    DiagRightBankToFlat => 4,
    DiagLeftBankToUp25 => 4,
    DiagRightBankToUp25 => 4,
    DiagUp25ToLeftBank => 4,
    DiagUp25ToRightBank => 4,
    DiagLeftBankToDown25 => 4,
    DiagRightBankToDown25 => 4,
    DiagDown25ToLeftBank => 4,
    DiagDown25ToRightBank => 4,
    DiagLeftBank => 4,
    DiagRightBank => 4,
    LogFlumeReverser => 1,
    SpinningTunnel => 1,
    LeftBarrelRollUpToDown => 6,
    RightBarrelRollUpToDown => 6,
    LeftBarrelRollDownToUp => 6,
    RightBarrelRollDownToUp => 6,
    LeftBankToLeftQuarterTurn3TilesUp25 => 4,
    RightBankToRightQuarterTurn3TilesUp25 => 4,
    LeftQuarterTurn3TilesDown25ToLeftBank => 4,
    RightQuarterTurn3TilesDown25ToRightBank => 4,
    PoweredLift => 1,
    LeftLargeHalfLoopUp => 7,
    RightLargeHalfLoopUp => 7,
    LeftLargeHalfLoopDown => 7,
    RightLargeHalfLoopDown => 7,
    LeftFlyerTwistUp => 3,
    RightFlyerTwistUp => 3,
    LeftFlyerTwistDown => 3,
    RightFlyerTwistDown => 3,
    FlyerHalfLoopUninvertedUp => 4,
    FlyerHalfLoopInvertedDown => 4,
    LeftFlyerCorkscrewUp => 3,
    RightFlyerCorkscrewUp => 3,
    LeftFlyerCorkscrewDown => 3,
    RightFlyerCorkscrewDown => 3,
    HeartLineTransferUp => 4,
    HeartLineTransferDown => 4,
    LeftHeartLineRoll => 6,
    RightHeartLineRoll => 6,
    MinigolfHoleA => 2,
    MinigolfHoleB => 2,
    MinigolfHoleC => 2,
    MinigolfHoleD => 3,
    MinigolfHoleE => 3,
    MultiDimInvertedFlatToDown90QuarterLoop => 3,
    Up90ToInvertedFlatQuarterLoop => 3,
    InvertedFlatToDown90QuarterLoop => 3,
    LeftCurvedLiftHill => 4,
    RightCurvedLiftHill => 4,
    LeftReverser => 6,
    RightReverser => 6,
    AirThrustTopCap => 4,
    AirThrustVerticalDown => 2,
    AirThrustVerticalDownToLevel => 7,
    BlockBrakes => 1,
    LeftBankedQuarterTurn3TileUp25 => 4,
    RightBankedQuarterTurn3TileUp25 => 4,
    LeftBankedQuarterTurn3TileDown25 => 4,
    RightBankedQuarterTurn3TileDown25 => 4,
    LeftBankedQuarterTurn5TileUp25 => 7,
    RightBankedQuarterTurn5TileUp25 => 7,
    LeftBankedQuarterTurn5TileDown25 => 7,
    RightBankedQuarterTurn5TileDown25 => 7,
    Up25ToLeftBankedUp25 => 1,
    Up25ToRightBankedUp25 => 1,
    LeftBankedUp25ToUp25 => 1,
    RightBankedUp25ToUp25 => 1,
    Down25ToLeftBankedDown25 => 1,
    Down25ToRightBankedDown25 => 1,
    LeftBankedDown25ToDown25 => 1,
    RightBankedDown25ToDown25 => 1,
    LeftBankedFlatToLeftBankedUp25 => 1,
    RightBankedFlatToRightBankedUp25 => 1,
    LeftBankedUp25ToLeftBankedFlat => 1,
    RightBankedUp25ToRightBankedFlat => 1,
    LeftBankedFlatToLeftBankedDown25 => 1,
    RightBankedFlatToRightBankedDown25 => 1,
    LeftBankedDown25ToLeftBankedFlat => 1,
    RightBankedDown25ToRightBankedFlat => 1,
    FlatToLeftBankedUp25 => 1,
    FlatToRightBankedUp25 => 1,
    LeftBankedUp25ToFlat => 1,
    RightBankedUp25ToFlat => 1,
    FlatToLeftBankedDown25 => 1,
    FlatToRightBankedDown25 => 1,
    LeftBankedDown25ToFlat => 1,
    RightBankedDown25ToFlat => 1,
    LeftQuarterTurn1TileUp90 => 2,
    RightQuarterTurn1TileUp90 => 2,
    LeftQuarterTurn1TileDown90 => 2,
    RightQuarterTurn1TileDown90 => 2,
    MultiDimUp90ToInvertedFlatQuarterLoop => 3,
    MultiDimFlatToDown90QuarterLoop => 3,
    MultiDimInvertedUp90ToFlatQuarterLoop => 3,
    RotationControlToggle => 1,
    FlatTrack1x4A => 4,
    FlatTrack2x2 => 4,
    FlatTrack4x4 => 16,
    FlatTrack2x4 => 8,
    FlatTrack1x5 => 5,
    FlatTrack1x1A => 1,
    FlatTrack1x4B => 4,
    FlatTrack1x1B => 1,
    FlatTrack1x4C => 4,
    FlatTrack3x3 => 9,
    LeftLargeCorkscrewUp => 6,
    RightLargeCorkscrewUp => 6,
    LeftLargeCorkscrewDown => 6,
    RightLargeCorkscrewDown => 6,
    LeftMediumHalfLoopUp => 5,
    RightMediumHalfLoopUp => 5,
    LeftMediumHalfLoopDown => 5,
    RightMediumHalfLoopDown => 5,
    LeftZeroGRollUp => 4,
    RightZeroGRollUp => 4,
    LeftZeroGRollDown => 4,
    RightZeroGRollDown => 4,
    LeftLargeZeroGRollUp => 4,
    RightLargeZeroGRollUp => 4,
    LeftLargeZeroGRollDown => 4,
    RightLargeZeroGRollDown => 4,
    LeftFlyerLargeHalfLoopUninvertedUp => 7,
    RightFlyerLargeHalfLoopUninvertedUp => 7,
    LeftFlyerLargeHalfLoopInvertedDown => 7,
    RightFlyerLargeHalfLoopInvertedDown => 7,
    LeftFlyerLargeHalfLoopInvertedUp => 7,
    RightFlyerLargeHalfLoopInvertedUp => 7,
    LeftFlyerLargeHalfLoopUninvertedDown => 7,
    RightFlyerLargeHalfLoopUninvertedDown => 7,
    FlyerHalfLoopInvertedUp => 4,
    FlyerHalfLoopUninvertedDown => 4,
    LeftEighthToDiagUp25 => 5,
    RightEighthToDiagUp25 => 5,
    LeftEighthToDiagDown25 => 5,
    RightEighthToDiagDown25 => 5,
    LeftEighthToOrthogonalUp25 => 5,
    RightEighthToOrthogonalUp25 => 5,
    LeftEighthToOrthogonalDown25 => 5,
    RightEighthToOrthogonalDown25 => 5,
    DiagUp25ToLeftBankedUp25 => 4,
    DiagUp25ToRightBankedUp25 => 4,
    DiagLeftBankedUp25ToUp25 => 4,
    DiagRightBankedUp25ToUp25 => 4,
    DiagDown25ToLeftBankedDown25 => 4,
    DiagDown25ToRightBankedDown25 => 4,
    DiagLeftBankedDown25ToDown25 => 4,
    DiagRightBankedDown25ToDown25 => 4,
    DiagLeftBankedFlatToLeftBankedUp25 => 4,
    DiagRightBankedFlatToRightBankedUp25 => 4,
    DiagLeftBankedUp25ToLeftBankedFlat => 4,
    DiagRightBankedUp25ToRightBankedFlat => 4,
    DiagLeftBankedFlatToLeftBankedDown25 => 4,
    DiagRightBankedFlatToRightBankedDown25 => 4,
    DiagLeftBankedDown25ToLeftBankedFlat => 4,
    DiagRightBankedDown25ToRightBankedFlat => 4,
    DiagFlatToLeftBankedUp25 => 4,
    DiagFlatToRightBankedUp25 => 4,
    DiagLeftBankedUp25ToFlat => 4,
    DiagRightBankedUp25ToFlat => 4,
    DiagFlatToLeftBankedDown25 => 4,
    DiagFlatToRightBankedDown25 => 4,
    DiagLeftBankedDown25ToFlat => 4,
    DiagRightBankedDown25ToFlat => 4,
    DiagUp25LeftBanked => 4,
    DiagUp25RightBanked => 4,
    DiagDown25LeftBanked => 4,
    DiagDown25RightBanked => 4,
    LeftEighthBankToDiagUp25 => 5,
    RightEighthBankToDiagUp25 => 5,
    LeftEighthBankToDiagDown25 => 5,
    RightEighthBankToDiagDown25 => 5,
    LeftEighthBankToOrthogonalUp25 => 5,
    RightEighthBankToOrthogonalUp25 => 5,
    LeftEighthBankToOrthogonalDown25 => 5,
    RightEighthBankToOrthogonalDown25 => 5,
    DiagBrakes => 4,
    DiagBlockBrakes => 4,
    Down25Brakes => 1,
    DiagBooster => 4,
    DiagFlatToUp60LongBase => 10,
    DiagUp60ToFlatLongBase => 10,
    DiagFlatToDown60LongBase => 10,
    DiagDown60ToFlatLongBase => 10,
    LeftEighthDiveLoopUpToOrthogonal => 6,
    RightEighthDiveLoopUpToOrthogonal => 6,
    LeftEighthDiveLoopDownToDiag => 6,
    RightEighthDiveLoopDownToDiag => 6,
    DiagDown25Brakes => 4,
}

impl TrackElemType {
    /// Ordinal of this piece kind
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Look up a piece kind by ordinal
    pub fn from_ordinal(ordinal: u16) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Whether `sequence` is one of this piece's sequences
    pub const fn has_sequence(self, sequence: usize) -> bool {
        sequence < self.sequence_count()
    }
}

impl fmt::Display for TrackElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`TrackElemType`] from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrackElemError {
    name: String,
}

impl fmt::Display for ParseTrackElemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown track element type: '{}'", self.name)
    }
}

impl std::error::Error for ParseTrackElemError {}

impl FromStr for TrackElemType {
    type Err = ParseTrackElemError;

    /// Parse a piece kind from its identifier (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|elem| elem.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTrackElemError { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        assert_eq!(TrackElemType::COUNT, 350);
        assert_eq!(TrackElemType::ALL.len(), TrackElemType::COUNT);
    }

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, elem) in TrackElemType::ALL.iter().enumerate() {
            assert_eq!(elem.ordinal(), i);
        }
        assert_eq!(TrackElemType::Flat.ordinal(), 0);
        assert_eq!(TrackElemType::Up25.ordinal(), 4);
        assert_eq!(TrackElemType::DiagDown25Brakes.ordinal(), TrackElemType::COUNT - 1);
    }

    #[test]
    fn test_from_ordinal() {
        assert_eq!(TrackElemType::from_ordinal(0), Some(TrackElemType::Flat));
        assert_eq!(TrackElemType::from_ordinal(TrackElemType::COUNT as u16), None);
    }

    #[test]
    fn test_sequence_counts() {
        assert_eq!(TrackElemType::Flat.sequence_count(), 1);
        assert_eq!(TrackElemType::LeftQuarterTurn5Tiles.sequence_count(), 7);
        assert_eq!(TrackElemType::LeftQuarterTurn3Tiles.sequence_count(), 4);
        assert_eq!(TrackElemType::LeftVerticalLoop.sequence_count(), 10);
        assert_eq!(TrackElemType::TowerBase.sequence_count(), 9);
        assert_eq!(TrackElemType::LeftTwistDownToUp.sequence_count(), 3);
        assert_eq!(TrackElemType::Maze.sequence_count(), 16);
    }

    #[test]
    fn test_sequence_counts_in_bounds() {
        for elem in TrackElemType::ALL {
            let count = elem.sequence_count();
            assert!(
                (1..=MAX_SEQUENCES_PER_PIECE).contains(&count),
                "{} has {} sequences",
                elem,
                count
            );
        }
    }

    #[test]
    fn test_has_sequence() {
        assert!(TrackElemType::Flat.has_sequence(0));
        assert!(!TrackElemType::Flat.has_sequence(1));
        assert!(TrackElemType::TowerBase.has_sequence(8));
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("Flat".parse::<TrackElemType>(), Ok(TrackElemType::Flat));
        assert_eq!(
            "leftquarterturn5tiles".parse::<TrackElemType>(),
            Ok(TrackElemType::LeftQuarterTurn5Tiles)
        );
        for elem in TrackElemType::ALL {
            assert_eq!(elem.name().parse::<TrackElemType>(), Ok(elem));
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "Teleporter".parse::<TrackElemType>().unwrap_err();
        let msg = format!("{}", err);
        assert!(msg.contains("Unknown track element type"));
        assert!(msg.contains("Teleporter"));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(TrackElemType::DiagFlat.to_string(), "DiagFlat");
    }
}
