//! Wide track segments
//!
//! Wooden and water ride track that covers the whole tile on straight runs.

use super::{row, BlockedSegmentTable, SegmentEntry};
use super::{ALL, NONE, STRAIGHT, UNIMPLEMENTED};

const LEFT_QUARTER_TURN_5_TILES: [SegmentEntry; 7] = [
    ALL,
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT),
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ALL,
];

const RIGHT_QUARTER_TURN_5_TILES: [SegmentEntry; 7] = [
    ALL,
    blocked!(TOP | TOP_RIGHT | TOP_LEFT),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ALL,
];

const S_BEND_LEFT: [SegmentEntry; 4] = [
    ALL,
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    ALL,
];

const S_BEND_RIGHT: [SegmentEntry; 4] = [
    ALL,
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ALL,
];

const LEFT_QUARTER_TURN_3_TILES: [SegmentEntry; 4] = [
    ALL,
    NONE,
    blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ALL,
];

const RIGHT_QUARTER_TURN_3_TILES: [SegmentEntry; 4] = [
    ALL,
    NONE,
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    ALL,
];

const REVERSE_FREEFALL_VERTICAL: [SegmentEntry; 2] = [
    ALL,
    NONE,
];

pub(super) const WIDE: BlockedSegmentTable = [
    // Flat
    row(&[ALL]),
    // EndStation
    row(&[ALL]),
    // BeginStation
    row(&[ALL]),
    // MiddleStation
    row(&[ALL]),
    // Up25
    row(&[ALL]),
    // Up60
    row(&[ALL]),
    // FlatToUp25
    row(&[ALL]),
    // Up25ToUp60
    row(&[ALL]),
    // Up60ToUp25
    row(&[ALL]),
    // Up25ToFlat
    row(&[ALL]),
    // Down25
    row(&[ALL]),
    // Down60
    row(&[ALL]),
    // FlatToDown25
    row(&[ALL]),
    // Down25ToDown60
    row(&[ALL]),
    // Down60ToDown25
    row(&[ALL]),
    // Down25ToFlat
    row(&[ALL]),
    // LeftQuarterTurn5Tiles
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterTurn5Tiles
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // FlatToLeftBank
    row(&[ALL]),
    // FlatToRightBank
    row(&[ALL]),
    // LeftBankToFlat
    row(&[ALL]),
    // RightBankToFlat
    row(&[ALL]),
    // BankedLeftQuarterTurn5Tiles
    row(&LEFT_QUARTER_TURN_5_TILES),
    // BankedRightQuarterTurn5Tiles
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftBankToUp25
    row(&[ALL]),
    // RightBankToUp25
    row(&[ALL]),
    // Up25ToLeftBank
    row(&[ALL]),
    // Up25ToRightBank
    row(&[ALL]),
    // LeftBankToDown25
    row(&[ALL]),
    // RightBankToDown25
    row(&[ALL]),
    // Down25ToLeftBank
    row(&[ALL]),
    // Down25ToRightBank
    row(&[ALL]),
    // LeftBank
    row(&[ALL]),
    // RightBank
    row(&[ALL]),
    // LeftQuarterTurn5TilesUp25
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterTurn5TilesUp25
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftQuarterTurn5TilesDown25
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterTurn5TilesDown25
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // SBendLeft
    row(&S_BEND_LEFT),
    // SBendRight
    row(&S_BEND_RIGHT),
    // LeftVerticalLoop
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        NONE,
        NONE,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    ]),
    // RightVerticalLoop
    row(&[UNIMPLEMENTED; 10]),
    // LeftQuarterTurn3Tiles
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightQuarterTurn3Tiles
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftBankedQuarterTurn3Tiles
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightBankedQuarterTurn3Tiles
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftQuarterTurn3TilesUp25
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightQuarterTurn3TilesUp25
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftQuarterTurn3TilesDown25
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightQuarterTurn3TilesDown25
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftQuarterTurn1Tile
    row(&[ALL]),
    // RightQuarterTurn1Tile
    row(&[ALL]),
    // LeftTwistDownToUp
    row(&[UNIMPLEMENTED; 3]),
    // RightTwistDownToUp
    row(&[UNIMPLEMENTED; 3]),
    // LeftTwistUpToDown
    row(&[UNIMPLEMENTED; 3]),
    // RightTwistUpToDown
    row(&[UNIMPLEMENTED; 3]),
    // HalfLoopUp
    row(&[UNIMPLEMENTED; 4]),
    // HalfLoopDown
    row(&[UNIMPLEMENTED; 4]),
    // LeftCorkscrewUp
    row(&[UNIMPLEMENTED; 3]),
    // RightCorkscrewUp
    row(&[UNIMPLEMENTED; 3]),
    // LeftCorkscrewDown
    row(&[UNIMPLEMENTED; 3]),
    // RightCorkscrewDown
    row(&[UNIMPLEMENTED; 3]),
    // FlatToUp60
    row(&[ALL]),
    // Up60ToFlat
    row(&[ALL]),
    // FlatToDown60
    row(&[ALL]),
    // Down60ToFlat
    row(&[ALL]),
    // TowerBase
    row(&[NONE; 9]),
    // TowerSection
    row(&[NONE]),
    // FlatCovered
    row(&[ALL]),
    // Up25Covered
    row(&[ALL]),
    // Up60Covered
    row(&[ALL]),
    // FlatToUp25Covered
    row(&[ALL]),
    // Up25ToUp60Covered
    row(&[ALL]),
    // Up60ToUp25Covered
    row(&[ALL]),
    // Up25ToFlatCovered
    row(&[ALL]),
    // Down25Covered
    row(&[ALL]),
    // Down60Covered
    row(&[ALL]),
    // FlatToDown25Covered
    row(&[ALL]),
    // Down25ToDown60Covered
    row(&[ALL]),
    // Down60ToDown25Covered
    row(&[ALL]),
    // Down25ToFlatCovered
    row(&[ALL]),
    // LeftQuarterTurn5TilesCovered
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterTurn5TilesCovered
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // SBendLeftCovered
    row(&S_BEND_LEFT),
    // SBendRightCovered
    row(&S_BEND_RIGHT),
    // LeftQuarterTurn3TilesCovered
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightQuarterTurn3TilesCovered
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftHalfBankedHelixUpSmall
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
    ]),
    // RightHalfBankedHelixUpSmall
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    ]),
    // LeftHalfBankedHelixDownSmall
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    ]),
    // RightHalfBankedHelixDownSmall
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
    ]),
    // LeftHalfBankedHelixUpLarge
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
    ]),
    // RightHalfBankedHelixUpLarge
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
        NONE,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
        NONE,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    ]),
    // LeftHalfBankedHelixDownLarge
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
        NONE,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    ]),
    // RightHalfBankedHelixDownLarge
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
        NONE,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
        NONE,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | CENTRE),
    ]),
    // LeftQuarterTurn1TileUp60
    row(&[ALL]),
    // RightQuarterTurn1TileUp60
    row(&[ALL]),
    // LeftQuarterTurn1TileDown60
    row(&[ALL]),
    // RightQuarterTurn1TileDown60
    row(&[ALL]),
    // Brakes
    row(&[ALL]),
    // Booster
    row(&[ALL]),
    // Maze
    row(&[NONE; 16]),
    // LeftQuarterBankedHelixLargeUp
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterBankedHelixLargeUp
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftQuarterBankedHelixLargeDown
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterBankedHelixLargeDown
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftQuarterHelixLargeUp
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterHelixLargeUp
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftQuarterHelixLargeDown
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterHelixLargeDown
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // Up25LeftBanked
    row(&[ALL]),
    // Up25RightBanked
    row(&[ALL]),
    // Waterfall
    row(&[ALL]),
    // Rapids
    row(&[ALL]),
    // OnRidePhoto
    row(&[ALL]),
    // Down25LeftBanked
    row(&[ALL]),
    // Down25RightBanked
    row(&[ALL]),
    // Watersplash
    row(&[ALL; 5]),
    // FlatToUp60LongBase
    row(&[ALL; 4]),
    // Up60ToFlatLongBase
    row(&[ALL; 4]),
    // Whirlpool
    row(&[ALL]),
    // Down60ToFlatLongBase
    row(&[ALL; 4]),
    // FlatToDown60LongBase
    row(&[ALL; 4]),
    // CableLiftHill
    row(&[ALL; 4]),
    // ReverseFreefallSlope
    row(&[ALL; 7]),
    // ReverseFreefallVertical
    row(&REVERSE_FREEFALL_VERTICAL),
    // Up90
    row(&[UNIMPLEMENTED; 2]),
    // Down90
    row(&[UNIMPLEMENTED; 2]),
    // Up60ToUp90
    row(&[UNIMPLEMENTED; 2]),
    // Down90ToDown60
    row(&[UNIMPLEMENTED]),
    // Up90ToUp60
    row(&[UNIMPLEMENTED]),
    // Down60ToDown90
    row(&[UNIMPLEMENTED; 2]),
    // BrakeForDrop
    row(&[ALL]),
    // LeftEighthToDiag
    row(&[ALL; 5]),
    // RightEighthToDiag
    row(&[ALL; 5]),
    // LeftEighthToOrthogonal
    row(&[ALL; 5]),
    // RightEighthToOrthogonal
    row(&[ALL; 5]),
    // LeftEighthBankToDiag
    row(&[ALL; 5]),
    // RightEighthBankToDiag
    row(&[ALL; 5]),
    // LeftEighthBankToOrthogonal
    row(&[ALL; 5]),
    // RightEighthBankToOrthogonal
    row(&[ALL; 5]),
    // DiagFlat
    row(&[ALL; 4]),
    // DiagUp25
    row(&[ALL; 4]),
    // DiagUp60
    row(&[ALL; 4]),
    // DiagFlatToUp25
    row(&[ALL; 4]),
    // DiagUp25ToUp60
    row(&[ALL; 4]),
    // DiagUp60ToUp25
    row(&[ALL; 4]),
    // DiagUp25ToFlat
    row(&[ALL; 4]),
    // DiagDown25
    row(&[ALL; 4]),
    // DiagDown60
    row(&[ALL; 4]),
    // DiagFlatToDown25
    row(&[ALL; 4]),
    // DiagDown25ToDown60
    row(&[ALL; 4]),
    // DiagDown60ToDown25
    row(&[ALL; 4]),
    // DiagDown25ToFlat
    row(&[ALL; 4]),
    // DiagFlatToUp60
    row(&[ALL; 4]),
    // DiagUp60ToFlat
    row(&[ALL; 4]),
    // DiagFlatToDown60
    row(&[ALL; 4]),
    // DiagDown60ToFlat
    row(&[ALL; 4]),
    // DiagFlatToLeftBank
    row(&[ALL; 4]),
    // DiagFlatToRightBank
    row(&[ALL; 4]),
    // DiagLeftBankToFlat
    row(&[ALL; 4]),
    // DiagRightBankToFlat
    row(&[ALL; 4]),
    // DiagLeftBankToUp25
    row(&[ALL; 4]),
    // DiagRightBankToUp25
    row(&[ALL; 4]),
    // DiagUp25ToLeftBank
    row(&[ALL; 4]),
    // DiagUp25ToRightBank
    row(&[ALL; 4]),
    // DiagLeftBankToDown25
    row(&[ALL; 4]),
    // DiagRightBankToDown25
    row(&[ALL; 4]),
    // DiagDown25ToLeftBank
    row(&[ALL; 4]),
    // DiagDown25ToRightBank
    row(&[ALL; 4]),
    // DiagLeftBank
    row(&[ALL; 4]),
    // DiagRightBank
    row(&[ALL; 4]),
    // LogFlumeReverser
    row(&[UNIMPLEMENTED]),
    // SpinningTunnel
    row(&[ALL]),
    // LeftBarrelRollUpToDown
    row(&[UNIMPLEMENTED; 6]),
    // RightBarrelRollUpToDown
    row(&[UNIMPLEMENTED; 6]),
    // LeftBarrelRollDownToUp
    row(&[UNIMPLEMENTED; 6]),
    // RightBarrelRollDownToUp
    row(&[UNIMPLEMENTED; 6]),
    // LeftBankToLeftQuarterTurn3TilesUp25
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightBankToRightQuarterTurn3TilesUp25
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftQuarterTurn3TilesDown25ToLeftBank
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightQuarterTurn3TilesDown25ToRightBank
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // PoweredLift
    row(&[ALL]),
    // LeftLargeHalfLoopUp
    row(&[
        STRAIGHT,
        STRAIGHT,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    ]),
    // RightLargeHalfLoopUp
    row(&[
        STRAIGHT,
        STRAIGHT,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ]),
    // LeftLargeHalfLoopDown
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        STRAIGHT,
        STRAIGHT,
    ]),
    // RightLargeHalfLoopDown
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        STRAIGHT,
        STRAIGHT,
    ]),
    // LeftFlyerTwistUp
    row(&[UNIMPLEMENTED; 3]),
    // RightFlyerTwistUp
    row(&[UNIMPLEMENTED; 3]),
    // LeftFlyerTwistDown
    row(&[UNIMPLEMENTED; 3]),
    // RightFlyerTwistDown
    row(&[UNIMPLEMENTED; 3]),
    // FlyerHalfLoopUninvertedUp
    row(&[UNIMPLEMENTED; 4]),
    // FlyerHalfLoopInvertedDown
    row(&[UNIMPLEMENTED; 4]),
    // LeftFlyerCorkscrewUp
    row(&[UNIMPLEMENTED; 3]),
    // RightFlyerCorkscrewUp
    row(&[UNIMPLEMENTED; 3]),
    // LeftFlyerCorkscrewDown
    row(&[UNIMPLEMENTED; 3]),
    // RightFlyerCorkscrewDown
    row(&[UNIMPLEMENTED; 3]),
    // HeartLineTransferUp
    row(&[UNIMPLEMENTED; 4]),
    // HeartLineTransferDown
    row(&[UNIMPLEMENTED; 4]),
    // LeftHeartLineRoll
    row(&[UNIMPLEMENTED; 6]),
    // RightHeartLineRoll
    row(&[UNIMPLEMENTED; 6]),
    // MinigolfHoleA
    row(&[NONE; 2]),
    // MinigolfHoleB
    row(&[NONE; 2]),
    // MinigolfHoleC
    row(&[NONE; 2]),
    // MinigolfHoleD
    row(&[NONE; 3]),
    // MinigolfHoleE
    row(&[NONE; 3]),
    // MultiDimInvertedFlatToDown90QuarterLoop
    row(&[UNIMPLEMENTED; 3]),
    // Up90ToInvertedFlatQuarterLoop
    row(&[UNIMPLEMENTED; 3]),
    // InvertedFlatToDown90QuarterLoop
    row(&[UNIMPLEMENTED; 3]),
    // LeftCurvedLiftHill
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightCurvedLiftHill
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftReverser
    row(&[ALL; 6]),
    // RightReverser
    row(&[ALL; 6]),
    // AirThrustTopCap
    row(&[ALL, NONE, NONE, NONE]),
    // AirThrustVerticalDown
    row(&REVERSE_FREEFALL_VERTICAL),
    // AirThrustVerticalDownToLevel
    row(&[ALL, NONE, NONE, NONE, NONE, NONE, NONE]),
    // BlockBrakes
    row(&[ALL]),
    // LeftBankedQuarterTurn3TileUp25
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightBankedQuarterTurn3TileUp25
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftBankedQuarterTurn3TileDown25
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightBankedQuarterTurn3TileDown25
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftBankedQuarterTurn5TileUp25
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightBankedQuarterTurn5TileUp25
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftBankedQuarterTurn5TileDown25
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightBankedQuarterTurn5TileDown25
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // Up25ToLeftBankedUp25
    row(&[ALL]),
    // Up25ToRightBankedUp25
    row(&[ALL]),
    // LeftBankedUp25ToUp25
    row(&[ALL]),
    // RightBankedUp25ToUp25
    row(&[ALL]),
    // Down25ToLeftBankedDown25
    row(&[ALL]),
    // Down25ToRightBankedDown25
    row(&[ALL]),
    // LeftBankedDown25ToDown25
    row(&[ALL]),
    // RightBankedDown25ToDown25
    row(&[ALL]),
    // LeftBankedFlatToLeftBankedUp25
    row(&[ALL]),
    // RightBankedFlatToRightBankedUp25
    row(&[ALL]),
    // LeftBankedUp25ToLeftBankedFlat
    row(&[ALL]),
    // RightBankedUp25ToRightBankedFlat
    row(&[ALL]),
    // LeftBankedFlatToLeftBankedDown25
    row(&[ALL]),
    // RightBankedFlatToRightBankedDown25
    row(&[ALL]),
    // LeftBankedDown25ToLeftBankedFlat
    row(&[ALL]),
    // RightBankedDown25ToRightBankedFlat
    row(&[ALL]),
    // FlatToLeftBankedUp25
    row(&[ALL]),
    // FlatToRightBankedUp25
    row(&[ALL]),
    // LeftBankedUp25ToFlat
    row(&[ALL]),
    // RightBankedUp25ToFlat
    row(&[ALL]),
    // FlatToLeftBankedDown25
    row(&[ALL]),
    // FlatToRightBankedDown25
    row(&[ALL]),
    // LeftBankedDown25ToFlat
    row(&[ALL]),
    // RightBankedDown25ToFlat
    row(&[ALL]),
    // LeftQuarterTurn1TileUp90
    row(&[UNIMPLEMENTED; 2]),
    // RightQuarterTurn1TileUp90
    row(&[UNIMPLEMENTED; 2]),
    // LeftQuarterTurn1TileDown90
    row(&[UNIMPLEMENTED; 2]),
    // RightQuarterTurn1TileDown90
    row(&[UNIMPLEMENTED; 2]),
    // MultiDimUp90ToInvertedFlatQuarterLoop
    row(&[UNIMPLEMENTED; 3]),
    // MultiDimFlatToDown90QuarterLoop
    row(&[UNIMPLEMENTED; 3]),
    // MultiDimInvertedUp90ToFlatQuarterLoop
    row(&[UNIMPLEMENTED; 3]),
    // RotationControlToggle
    row(&[ALL]),
    // FlatTrack1x4A
    row(&[NONE; 4]),
    // FlatTrack2x2
    row(&[NONE; 4]),
    // FlatTrack4x4
    row(&[NONE; 16]),
    // FlatTrack2x4
    row(&[NONE; 8]),
    // FlatTrack1x5
    row(&[NONE; 5]),
    // FlatTrack1x1A
    row(&[NONE]),
    // FlatTrack1x4B
    row(&[NONE; 4]),
    // FlatTrack1x1B
    row(&[NONE]),
    // FlatTrack1x4C
    row(&[NONE; 4]),
    // FlatTrack3x3
    row(&[NONE; 9]),
    // LeftLargeCorkscrewUp
    row(&[UNIMPLEMENTED; 6]),
    // RightLargeCorkscrewUp
    row(&[UNIMPLEMENTED; 6]),
    // LeftLargeCorkscrewDown
    row(&[UNIMPLEMENTED; 6]),
    // RightLargeCorkscrewDown
    row(&[UNIMPLEMENTED; 6]),
    // LeftMediumHalfLoopUp
    row(&[
        STRAIGHT,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    ]),
    // RightMediumHalfLoopUp
    row(&[
        STRAIGHT,
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ]),
    // LeftMediumHalfLoopDown
    row(&[
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        STRAIGHT,
    ]),
    // RightMediumHalfLoopDown
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        STRAIGHT,
    ]),
    // LeftZeroGRollUp
    row(&[UNIMPLEMENTED; 4]),
    // RightZeroGRollUp
    row(&[UNIMPLEMENTED; 4]),
    // LeftZeroGRollDown
    row(&[UNIMPLEMENTED; 4]),
    // RightZeroGRollDown
    row(&[UNIMPLEMENTED; 4]),
    // LeftLargeZeroGRollUp
    row(&[UNIMPLEMENTED; 4]),
    // RightLargeZeroGRollUp
    row(&[UNIMPLEMENTED; 4]),
    // LeftLargeZeroGRollDown
    row(&[UNIMPLEMENTED; 4]),
    // RightLargeZeroGRollDown
    row(&[UNIMPLEMENTED; 4]),
    // LeftFlyerLargeHalfLoopUninvertedUp
    row(&[UNIMPLEMENTED; 7]),
    // RightFlyerLargeHalfLoopUninvertedUp
    row(&[UNIMPLEMENTED; 7]),
    // LeftFlyerLargeHalfLoopInvertedDown
    row(&[UNIMPLEMENTED; 7]),
    // RightFlyerLargeHalfLoopInvertedDown
    row(&[UNIMPLEMENTED; 7]),
    // LeftFlyerLargeHalfLoopInvertedUp
    row(&[UNIMPLEMENTED; 7]),
    // RightFlyerLargeHalfLoopInvertedUp
    row(&[UNIMPLEMENTED; 7]),
    // LeftFlyerLargeHalfLoopUninvertedDown
    row(&[UNIMPLEMENTED; 7]),
    // RightFlyerLargeHalfLoopUninvertedDown
    row(&[UNIMPLEMENTED; 7]),
    // FlyerHalfLoopInvertedUp
    row(&[UNIMPLEMENTED; 4]),
    // FlyerHalfLoopUninvertedDown
    row(&[UNIMPLEMENTED; 4]),
    // LeftEighthToDiagUp25
    row(&[ALL; 5]),
    // RightEighthToDiagUp25
    row(&[ALL; 5]),
    // LeftEighthToDiagDown25
    row(&[ALL; 5]),
    // RightEighthToDiagDown25
    row(&[ALL; 5]),
    // LeftEighthToOrthogonalUp25
    row(&[ALL; 5]),
    // RightEighthToOrthogonalUp25
    row(&[ALL; 5]),
    // LeftEighthToOrthogonalDown25
    row(&[ALL; 5]),
    // RightEighthToOrthogonalDown25
    row(&[ALL; 5]),
    // DiagUp25ToLeftBankedUp25
    row(&[ALL; 4]),
    // DiagUp25ToRightBankedUp25
    row(&[ALL; 4]),
    // DiagLeftBankedUp25ToUp25
    row(&[ALL; 4]),
    // DiagRightBankedUp25ToUp25
    row(&[ALL; 4]),
    // DiagDown25ToLeftBankedDown25
    row(&[ALL; 4]),
    // DiagDown25ToRightBankedDown25
    row(&[ALL; 4]),
    // DiagLeftBankedDown25ToDown25
    row(&[ALL; 4]),
    // DiagRightBankedDown25ToDown25
    row(&[ALL; 4]),
    // DiagLeftBankedFlatToLeftBankedUp25
    row(&[ALL; 4]),
    // DiagRightBankedFlatToRightBankedUp25
    row(&[ALL; 4]),
    // DiagLeftBankedUp25ToLeftBankedFlat
    row(&[ALL; 4]),
    // DiagRightBankedUp25ToRightBankedFlat
    row(&[ALL; 4]),
    // DiagLeftBankedFlatToLeftBankedDown25
    row(&[ALL; 4]),
    // DiagRightBankedFlatToRightBankedDown25
    row(&[ALL; 4]),
    // DiagLeftBankedDown25ToLeftBankedFlat
    row(&[ALL; 4]),
    // DiagRightBankedDown25ToRightBankedFlat
    row(&[ALL; 4]),
    // DiagFlatToLeftBankedUp25
    row(&[ALL; 4]),
    // DiagFlatToRightBankedUp25
    row(&[ALL; 4]),
    // DiagLeftBankedUp25ToFlat
    row(&[ALL; 4]),
    // DiagRightBankedUp25ToFlat
    row(&[ALL; 4]),
    // DiagFlatToLeftBankedDown25
    row(&[ALL; 4]),
    // DiagFlatToRightBankedDown25
    row(&[ALL; 4]),
    // DiagLeftBankedDown25ToFlat
    row(&[ALL; 4]),
    // DiagRightBankedDown25ToFlat
    row(&[ALL; 4]),
    // DiagUp25LeftBanked
    row(&[ALL; 4]),
    // DiagUp25RightBanked
    row(&[ALL; 4]),
    // DiagDown25LeftBanked
    row(&[ALL; 4]),
    // DiagDown25RightBanked
    row(&[ALL; 4]),
    // LeftEighthBankToDiagUp25
    row(&[ALL; 5]),
    // RightEighthBankToDiagUp25
    row(&[ALL; 5]),
    // LeftEighthBankToDiagDown25
    row(&[ALL; 5]),
    // RightEighthBankToDiagDown25
    row(&[ALL; 5]),
    // LeftEighthBankToOrthogonalUp25
    row(&[ALL; 5]),
    // RightEighthBankToOrthogonalUp25
    row(&[ALL; 5]),
    // LeftEighthBankToOrthogonalDown25
    row(&[ALL; 5]),
    // RightEighthBankToOrthogonalDown25
    row(&[ALL; 5]),
    // DiagBrakes
    row(&[ALL; 4]),
    // DiagBlockBrakes
    row(&[ALL; 4]),
    // Down25Brakes
    row(&[ALL]),
    // DiagBooster
    row(&[ALL; 4]),
    // DiagFlatToUp60LongBase
    row(&[ALL; 10]),
    // DiagUp60ToFlatLongBase
    row(&[ALL; 10]),
    // DiagFlatToDown60LongBase
    row(&[ALL; 10]),
    // DiagDown60ToFlatLongBase
    row(&[ALL; 10]),
    // LeftEighthDiveLoopUpToOrthogonal
    row(&[UNIMPLEMENTED; 6]),
    // RightEighthDiveLoopUpToOrthogonal
    row(&[UNIMPLEMENTED; 6]),
    // LeftEighthDiveLoopDownToDiag
    row(&[UNIMPLEMENTED; 6]),
    // RightEighthDiveLoopDownToDiag
    row(&[UNIMPLEMENTED; 6]),
    // DiagDown25Brakes
    row(&[ALL; 4]),
];
