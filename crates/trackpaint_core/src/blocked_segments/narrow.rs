//! Narrow track segments
//!
//! Standard-gauge track drawn with the train riding above the rails. Most
//! single-tile pieces only block the centre strip the rails run along.

use super::{row, BlockedSegmentTable, SegmentEntry};
use super::{ALL, DIAG_STRAIGHT, NONE, STRAIGHT};

const LEFT_QUARTER_TURN_5_TILES: [SegmentEntry; 7] = [
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | CENTRE),
    NONE,
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
    NONE,
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | TOP_LEFT | CENTRE),
];

const RIGHT_QUARTER_TURN_5_TILES: [SegmentEntry; 7] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_LEFT | CENTRE),
    NONE,
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
    NONE,
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | LEFT | TOP_LEFT | CENTRE),
];

const S_BEND_LEFT: [SegmentEntry; 4] = [
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
];

const S_BEND_RIGHT: [SegmentEntry; 4] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | BOTTOM_LEFT | LEFT | CENTRE),
];

const LEFT_QUARTER_TURN_3_TILES: [SegmentEntry; 4] = [
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | CENTRE),
    NONE,
    blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | TOP_LEFT | CENTRE),
];

const RIGHT_QUARTER_TURN_3_TILES: [SegmentEntry; 4] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_LEFT | CENTRE),
    NONE,
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | LEFT | TOP_LEFT | CENTRE),
];

const LEFT_QUARTER_TURN_3_TILES_UP_25: [SegmentEntry; 4] = [
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | CENTRE),
    NONE,
    NONE,
    blocked!(BOTTOM_RIGHT | BOTTOM | TOP_LEFT | CENTRE),
];

const RIGHT_QUARTER_TURN_3_TILES_UP_25: [SegmentEntry; 4] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_LEFT | CENTRE),
    NONE,
    NONE,
    blocked!(BOTTOM_RIGHT | LEFT | TOP_LEFT | CENTRE),
];

const REVERSE_FREEFALL_VERTICAL: [SegmentEntry; 2] = [
    STRAIGHT,
    NONE,
];

const LEFT_EIGHTH_TO_DIAG: [SegmentEntry; 5] = [
    STRAIGHT,
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | CENTRE),
    blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | TOP_LEFT | CENTRE),
];

const RIGHT_EIGHTH_TO_DIAG: [SegmentEntry; 5] = [
    STRAIGHT,
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | LEFT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP_RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
];

const LEFT_EIGHTH_TO_ORTHOGONAL: [SegmentEntry; 5] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    blocked!(RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    STRAIGHT,
];

const RIGHT_EIGHTH_TO_ORTHOGONAL: [SegmentEntry; 5] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM_LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP | TOP_RIGHT | RIGHT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | TOP_LEFT | CENTRE),
];

const MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP: [SegmentEntry; 3] = [
    STRAIGHT,
    NONE,
    NONE,
];

const DIAG_FLAT_TO_UP_60_LONG_BASE: [SegmentEntry; 10] = [
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
    blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
    blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | CENTRE),
    blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
];

pub(super) const NARROW: BlockedSegmentTable = [
    // Flat
    row(&[STRAIGHT]),
    // EndStation
    row(&[ALL]),
    // BeginStation
    row(&[ALL]),
    // MiddleStation
    row(&[ALL]),
    // Up25
    row(&[STRAIGHT]),
    // Up60
    row(&[STRAIGHT]),
    // FlatToUp25
    row(&[STRAIGHT]),
    // Up25ToUp60
    row(&[STRAIGHT]),
    // Up60ToUp25
    row(&[STRAIGHT]),
    // Up25ToFlat
    row(&[STRAIGHT]),
    // Down25
    row(&[STRAIGHT]),
    // Down60
    row(&[STRAIGHT]),
    // FlatToDown25
    row(&[STRAIGHT]),
    // Down25ToDown60
    row(&[STRAIGHT]),
    // Down60ToDown25
    row(&[STRAIGHT]),
    // Down25ToFlat
    row(&[STRAIGHT]),
    // LeftQuarterTurn5Tiles
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightQuarterTurn5Tiles
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // FlatToLeftBank
    row(&[STRAIGHT]),
    // FlatToRightBank
    row(&[STRAIGHT]),
    // LeftBankToFlat
    row(&[STRAIGHT]),
    // RightBankToFlat
    row(&[STRAIGHT]),
    // BankedLeftQuarterTurn5Tiles
    row(&LEFT_QUARTER_TURN_5_TILES),
    // BankedRightQuarterTurn5Tiles
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftBankToUp25
    row(&[STRAIGHT]),
    // RightBankToUp25
    row(&[STRAIGHT]),
    // Up25ToLeftBank
    row(&[STRAIGHT]),
    // Up25ToRightBank
    row(&[STRAIGHT]),
    // LeftBankToDown25
    row(&[STRAIGHT]),
    // RightBankToDown25
    row(&[STRAIGHT]),
    // Down25ToLeftBank
    row(&[STRAIGHT]),
    // Down25ToRightBank
    row(&[STRAIGHT]),
    // LeftBank
    row(&[STRAIGHT]),
    // RightBank
    row(&[STRAIGHT]),
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
    row(&[
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        blocked!(TOP_RIGHT | RIGHT | BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE),
        NONE,
        NONE,
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
        blocked!(TOP | TOP_RIGHT | BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE),
    ]),
    // LeftQuarterTurn3Tiles
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightQuarterTurn3Tiles
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftBankedQuarterTurn3Tiles
    row(&LEFT_QUARTER_TURN_3_TILES),
    // RightBankedQuarterTurn3Tiles
    row(&RIGHT_QUARTER_TURN_3_TILES),
    // LeftQuarterTurn3TilesUp25
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightQuarterTurn3TilesUp25
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // LeftQuarterTurn3TilesDown25
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightQuarterTurn3TilesDown25
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // LeftQuarterTurn1Tile
    row(&[blocked!(BOTTOM_LEFT | LEFT | TOP_LEFT | CENTRE)]),
    // RightQuarterTurn1Tile
    row(&[blocked!(BOTTOM_RIGHT | BOTTOM | BOTTOM_LEFT | CENTRE)]),
    // LeftTwistDownToUp
    row(&[STRAIGHT; 3]),
    // RightTwistDownToUp
    row(&[STRAIGHT; 3]),
    // LeftTwistUpToDown
    row(&[STRAIGHT; 3]),
    // RightTwistUpToDown
    row(&[STRAIGHT; 3]),
    // HalfLoopUp
    row(&[STRAIGHT; 4]),
    // HalfLoopDown
    row(&[STRAIGHT; 4]),
    // LeftCorkscrewUp
    row(&[STRAIGHT; 3]),
    // RightCorkscrewUp
    row(&[STRAIGHT; 3]),
    // LeftCorkscrewDown
    row(&[STRAIGHT; 3]),
    // RightCorkscrewDown
    row(&[STRAIGHT; 3]),
    // FlatToUp60
    row(&[STRAIGHT]),
    // Up60ToFlat
    row(&[STRAIGHT]),
    // FlatToDown60
    row(&[STRAIGHT]),
    // Down60ToFlat
    row(&[STRAIGHT]),
    // TowerBase
    row(&[NONE; 9]),
    // TowerSection
    row(&[NONE]),
    // FlatCovered
    row(&[STRAIGHT]),
    // Up25Covered
    row(&[STRAIGHT]),
    // Up60Covered
    row(&[STRAIGHT]),
    // FlatToUp25Covered
    row(&[STRAIGHT]),
    // Up25ToUp60Covered
    row(&[STRAIGHT]),
    // Up60ToUp25Covered
    row(&[STRAIGHT]),
    // Up25ToFlatCovered
    row(&[STRAIGHT]),
    // Down25Covered
    row(&[STRAIGHT]),
    // Down60Covered
    row(&[STRAIGHT]),
    // FlatToDown25Covered
    row(&[STRAIGHT]),
    // Down25ToDown60Covered
    row(&[STRAIGHT]),
    // Down60ToDown25Covered
    row(&[STRAIGHT]),
    // Down25ToFlatCovered
    row(&[STRAIGHT]),
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
    row(&[STRAIGHT]),
    // Booster
    row(&[STRAIGHT]),
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
    row(&[STRAIGHT]),
    // Up25RightBanked
    row(&[STRAIGHT]),
    // Waterfall
    row(&[STRAIGHT]),
    // Rapids
    row(&[STRAIGHT]),
    // OnRidePhoto
    row(&[STRAIGHT]),
    // Down25LeftBanked
    row(&[STRAIGHT]),
    // Down25RightBanked
    row(&[STRAIGHT]),
    // Watersplash
    row(&[STRAIGHT; 5]),
    // FlatToUp60LongBase
    row(&[STRAIGHT; 4]),
    // Up60ToFlatLongBase
    row(&[STRAIGHT; 4]),
    // Whirlpool
    row(&[STRAIGHT]),
    // Down60ToFlatLongBase
    row(&[STRAIGHT; 4]),
    // FlatToDown60LongBase
    row(&[STRAIGHT; 4]),
    // CableLiftHill
    row(&[STRAIGHT; 4]),
    // ReverseFreefallSlope
    row(&[STRAIGHT; 7]),
    // ReverseFreefallVertical
    row(&REVERSE_FREEFALL_VERTICAL),
    // Up90
    row(&REVERSE_FREEFALL_VERTICAL),
    // Down90
    row(&REVERSE_FREEFALL_VERTICAL),
    // Up60ToUp90
    row(&REVERSE_FREEFALL_VERTICAL),
    // Down90ToDown60
    row(&[STRAIGHT]),
    // Up90ToUp60
    row(&[STRAIGHT]),
    // Down60ToDown90
    row(&REVERSE_FREEFALL_VERTICAL),
    // BrakeForDrop
    row(&[STRAIGHT]),
    // LeftEighthToDiag
    row(&LEFT_EIGHTH_TO_DIAG),
    // RightEighthToDiag
    row(&RIGHT_EIGHTH_TO_DIAG),
    // LeftEighthToOrthogonal
    row(&LEFT_EIGHTH_TO_ORTHOGONAL),
    // RightEighthToOrthogonal
    row(&RIGHT_EIGHTH_TO_ORTHOGONAL),
    // LeftEighthBankToDiag
    row(&LEFT_EIGHTH_TO_DIAG),
    // RightEighthBankToDiag
    row(&RIGHT_EIGHTH_TO_DIAG),
    // LeftEighthBankToOrthogonal
    row(&LEFT_EIGHTH_TO_ORTHOGONAL),
    // RightEighthBankToOrthogonal
    row(&RIGHT_EIGHTH_TO_ORTHOGONAL),
    // DiagFlat
    row(&DIAG_STRAIGHT),
    // DiagUp25
    row(&DIAG_STRAIGHT),
    // DiagUp60
    row(&DIAG_STRAIGHT),
    // DiagFlatToUp25
    row(&DIAG_STRAIGHT),
    // DiagUp25ToUp60
    row(&DIAG_STRAIGHT),
    // DiagUp60ToUp25
    row(&DIAG_STRAIGHT),
    // DiagUp25ToFlat
    row(&DIAG_STRAIGHT),
    // DiagDown25
    row(&DIAG_STRAIGHT),
    // DiagDown60
    row(&DIAG_STRAIGHT),
    // DiagFlatToDown25
    row(&DIAG_STRAIGHT),
    // DiagDown25ToDown60
    row(&DIAG_STRAIGHT),
    // DiagDown60ToDown25
    row(&DIAG_STRAIGHT),
    // DiagDown25ToFlat
    row(&DIAG_STRAIGHT),
    // DiagFlatToUp60
    row(&DIAG_STRAIGHT),
    // DiagUp60ToFlat
    row(&DIAG_STRAIGHT),
    // DiagFlatToDown60
    row(&DIAG_STRAIGHT),
    // DiagDown60ToFlat
    row(&DIAG_STRAIGHT),
    // DiagFlatToLeftBank
    row(&DIAG_STRAIGHT),
    // DiagFlatToRightBank
    row(&DIAG_STRAIGHT),
    // DiagLeftBankToFlat
    row(&DIAG_STRAIGHT),
    // DiagRightBankToFlat
    row(&DIAG_STRAIGHT),
    // DiagLeftBankToUp25
    row(&DIAG_STRAIGHT),
    // DiagRightBankToUp25
    row(&DIAG_STRAIGHT),
    // DiagUp25ToLeftBank
    row(&DIAG_STRAIGHT),
    // DiagUp25ToRightBank
    row(&DIAG_STRAIGHT),
    // DiagLeftBankToDown25
    row(&DIAG_STRAIGHT),
    // DiagRightBankToDown25
    row(&DIAG_STRAIGHT),
    // DiagDown25ToLeftBank
    row(&DIAG_STRAIGHT),
    // DiagDown25ToRightBank
    row(&DIAG_STRAIGHT),
    // DiagLeftBank
    row(&DIAG_STRAIGHT),
    // DiagRightBank
    row(&DIAG_STRAIGHT),
    // LogFlumeReverser
    row(&[STRAIGHT]),
    // SpinningTunnel
    row(&[ALL]),
    // LeftBarrelRollUpToDown
    row(&[STRAIGHT; 6]),
    // RightBarrelRollUpToDown
    row(&[STRAIGHT; 6]),
    // LeftBarrelRollDownToUp
    row(&[STRAIGHT; 6]),
    // RightBarrelRollDownToUp
    row(&[STRAIGHT; 6]),
    // LeftBankToLeftQuarterTurn3TilesUp25
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightBankToRightQuarterTurn3TilesUp25
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // LeftQuarterTurn3TilesDown25ToLeftBank
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightQuarterTurn3TilesDown25ToRightBank
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // PoweredLift
    row(&[STRAIGHT]),
    // LeftLargeHalfLoopUp
    row(&[STRAIGHT; 7]),
    // RightLargeHalfLoopUp
    row(&[STRAIGHT; 7]),
    // LeftLargeHalfLoopDown
    row(&[STRAIGHT; 7]),
    // RightLargeHalfLoopDown
    row(&[STRAIGHT; 7]),
    // LeftFlyerTwistUp
    row(&[STRAIGHT; 3]),
    // RightFlyerTwistUp
    row(&[STRAIGHT; 3]),
    // LeftFlyerTwistDown
    row(&[STRAIGHT; 3]),
    // RightFlyerTwistDown
    row(&[STRAIGHT; 3]),
    // FlyerHalfLoopUninvertedUp
    row(&[STRAIGHT; 4]),
    // FlyerHalfLoopInvertedDown
    row(&[STRAIGHT; 4]),
    // LeftFlyerCorkscrewUp
    row(&[STRAIGHT; 3]),
    // RightFlyerCorkscrewUp
    row(&[STRAIGHT; 3]),
    // LeftFlyerCorkscrewDown
    row(&[STRAIGHT; 3]),
    // RightFlyerCorkscrewDown
    row(&[STRAIGHT; 3]),
    // HeartLineTransferUp
    row(&[ALL; 4]),
    // HeartLineTransferDown
    row(&[ALL; 4]),
    // LeftHeartLineRoll
    row(&[ALL; 6]),
    // RightHeartLineRoll
    row(&[ALL; 6]),
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
    row(&MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP),
    // Up90ToInvertedFlatQuarterLoop
    row(&MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP),
    // InvertedFlatToDown90QuarterLoop
    row(&MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP),
    // LeftCurvedLiftHill
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightCurvedLiftHill
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // LeftReverser
    row(&[STRAIGHT; 6]),
    // RightReverser
    row(&[STRAIGHT; 6]),
    // AirThrustTopCap
    row(&[STRAIGHT, NONE, NONE, NONE]),
    // AirThrustVerticalDown
    row(&REVERSE_FREEFALL_VERTICAL),
    // AirThrustVerticalDownToLevel
    row(&[STRAIGHT, NONE, NONE, NONE, NONE, NONE, NONE]),
    // BlockBrakes
    row(&[STRAIGHT]),
    // LeftBankedQuarterTurn3TileUp25
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightBankedQuarterTurn3TileUp25
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // LeftBankedQuarterTurn3TileDown25
    row(&LEFT_QUARTER_TURN_3_TILES_UP_25),
    // RightBankedQuarterTurn3TileDown25
    row(&RIGHT_QUARTER_TURN_3_TILES_UP_25),
    // LeftBankedQuarterTurn5TileUp25
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightBankedQuarterTurn5TileUp25
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // LeftBankedQuarterTurn5TileDown25
    row(&LEFT_QUARTER_TURN_5_TILES),
    // RightBankedQuarterTurn5TileDown25
    row(&RIGHT_QUARTER_TURN_5_TILES),
    // Up25ToLeftBankedUp25
    row(&[STRAIGHT]),
    // Up25ToRightBankedUp25
    row(&[STRAIGHT]),
    // LeftBankedUp25ToUp25
    row(&[STRAIGHT]),
    // RightBankedUp25ToUp25
    row(&[STRAIGHT]),
    // Down25ToLeftBankedDown25
    row(&[STRAIGHT]),
    // Down25ToRightBankedDown25
    row(&[STRAIGHT]),
    // LeftBankedDown25ToDown25
    row(&[STRAIGHT]),
    // RightBankedDown25ToDown25
    row(&[STRAIGHT]),
    // LeftBankedFlatToLeftBankedUp25
    row(&[STRAIGHT]),
    // RightBankedFlatToRightBankedUp25
    row(&[STRAIGHT]),
    // LeftBankedUp25ToLeftBankedFlat
    row(&[STRAIGHT]),
    // RightBankedUp25ToRightBankedFlat
    row(&[STRAIGHT]),
    // LeftBankedFlatToLeftBankedDown25
    row(&[STRAIGHT]),
    // RightBankedFlatToRightBankedDown25
    row(&[STRAIGHT]),
    // LeftBankedDown25ToLeftBankedFlat
    row(&[STRAIGHT]),
    // RightBankedDown25ToRightBankedFlat
    row(&[STRAIGHT]),
    // FlatToLeftBankedUp25
    row(&[STRAIGHT]),
    // FlatToRightBankedUp25
    row(&[STRAIGHT]),
    // LeftBankedUp25ToFlat
    row(&[STRAIGHT]),
    // RightBankedUp25ToFlat
    row(&[STRAIGHT]),
    // FlatToLeftBankedDown25
    row(&[STRAIGHT]),
    // FlatToRightBankedDown25
    row(&[STRAIGHT]),
    // LeftBankedDown25ToFlat
    row(&[STRAIGHT]),
    // RightBankedDown25ToFlat
    row(&[STRAIGHT]),
    // LeftQuarterTurn1TileUp90
    row(&REVERSE_FREEFALL_VERTICAL),
    // RightQuarterTurn1TileUp90
    row(&REVERSE_FREEFALL_VERTICAL),
    // LeftQuarterTurn1TileDown90
    row(&REVERSE_FREEFALL_VERTICAL),
    // RightQuarterTurn1TileDown90
    row(&REVERSE_FREEFALL_VERTICAL),
    // MultiDimUp90ToInvertedFlatQuarterLoop
    row(&MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP),
    // MultiDimFlatToDown90QuarterLoop
    row(&MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP),
    // MultiDimInvertedUp90ToFlatQuarterLoop
    row(&MULTI_DIM_INVERTED_FLAT_TO_DOWN_90_QUARTER_LOOP),
    // RotationControlToggle
    row(&[STRAIGHT]),
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
    row(&[STRAIGHT; 6]),
    // RightLargeCorkscrewUp
    row(&[STRAIGHT; 6]),
    // LeftLargeCorkscrewDown
    row(&[STRAIGHT; 6]),
    // RightLargeCorkscrewDown
    row(&[STRAIGHT; 6]),
    // LeftMediumHalfLoopUp
    row(&[STRAIGHT; 5]),
    // RightMediumHalfLoopUp
    row(&[STRAIGHT; 5]),
    // LeftMediumHalfLoopDown
    row(&[STRAIGHT; 5]),
    // RightMediumHalfLoopDown
    row(&[STRAIGHT; 5]),
    // LeftZeroGRollUp
    row(&[STRAIGHT; 4]),
    // RightZeroGRollUp
    row(&[STRAIGHT; 4]),
    // LeftZeroGRollDown
    row(&[STRAIGHT; 4]),
    // RightZeroGRollDown
    row(&[STRAIGHT; 4]),
    // LeftLargeZeroGRollUp
    row(&[STRAIGHT; 4]),
    // RightLargeZeroGRollUp
    row(&[STRAIGHT; 4]),
    // LeftLargeZeroGRollDown
    row(&[STRAIGHT; 4]),
    // RightLargeZeroGRollDown
    row(&[STRAIGHT; 4]),
    // LeftFlyerLargeHalfLoopUninvertedUp
    row(&[STRAIGHT; 7]),
    // RightFlyerLargeHalfLoopUninvertedUp
    row(&[STRAIGHT; 7]),
    // LeftFlyerLargeHalfLoopInvertedDown
    row(&[STRAIGHT; 7]),
    // RightFlyerLargeHalfLoopInvertedDown
    row(&[STRAIGHT; 7]),
    // LeftFlyerLargeHalfLoopInvertedUp
    row(&[STRAIGHT; 7]),
    // RightFlyerLargeHalfLoopInvertedUp
    row(&[STRAIGHT; 7]),
    // LeftFlyerLargeHalfLoopUninvertedDown
    row(&[STRAIGHT; 7]),
    // RightFlyerLargeHalfLoopUninvertedDown
    row(&[STRAIGHT; 7]),
    // FlyerHalfLoopInvertedUp
    row(&[STRAIGHT; 4]),
    // FlyerHalfLoopUninvertedDown
    row(&[STRAIGHT; 4]),
    // LeftEighthToDiagUp25
    row(&LEFT_EIGHTH_TO_DIAG),
    // RightEighthToDiagUp25
    row(&RIGHT_EIGHTH_TO_DIAG),
    // LeftEighthToDiagDown25
    row(&LEFT_EIGHTH_TO_DIAG),
    // RightEighthToDiagDown25
    row(&RIGHT_EIGHTH_TO_DIAG),
    // LeftEighthToOrthogonalUp25
    row(&LEFT_EIGHTH_TO_ORTHOGONAL),
    // RightEighthToOrthogonalUp25
    row(&RIGHT_EIGHTH_TO_ORTHOGONAL),
    // LeftEighthToOrthogonalDown25
    row(&LEFT_EIGHTH_TO_ORTHOGONAL),
    // RightEighthToOrthogonalDown25
    row(&RIGHT_EIGHTH_TO_ORTHOGONAL),
    // DiagUp25ToLeftBankedUp25
    row(&DIAG_STRAIGHT),
    // DiagUp25ToRightBankedUp25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedUp25ToUp25
    row(&DIAG_STRAIGHT),
    // DiagRightBankedUp25ToUp25
    row(&DIAG_STRAIGHT),
    // DiagDown25ToLeftBankedDown25
    row(&DIAG_STRAIGHT),
    // DiagDown25ToRightBankedDown25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedDown25ToDown25
    row(&DIAG_STRAIGHT),
    // DiagRightBankedDown25ToDown25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedFlatToLeftBankedUp25
    row(&DIAG_STRAIGHT),
    // DiagRightBankedFlatToRightBankedUp25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedUp25ToLeftBankedFlat
    row(&DIAG_STRAIGHT),
    // DiagRightBankedUp25ToRightBankedFlat
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedFlatToLeftBankedDown25
    row(&DIAG_STRAIGHT),
    // DiagRightBankedFlatToRightBankedDown25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedDown25ToLeftBankedFlat
    row(&DIAG_STRAIGHT),
    // DiagRightBankedDown25ToRightBankedFlat
    row(&DIAG_STRAIGHT),
    // DiagFlatToLeftBankedUp25
    row(&DIAG_STRAIGHT),
    // DiagFlatToRightBankedUp25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedUp25ToFlat
    row(&DIAG_STRAIGHT),
    // DiagRightBankedUp25ToFlat
    row(&DIAG_STRAIGHT),
    // DiagFlatToLeftBankedDown25
    row(&DIAG_STRAIGHT),
    // DiagFlatToRightBankedDown25
    row(&DIAG_STRAIGHT),
    // DiagLeftBankedDown25ToFlat
    row(&DIAG_STRAIGHT),
    // DiagRightBankedDown25ToFlat
    row(&DIAG_STRAIGHT),
    // DiagUp25LeftBanked
    row(&DIAG_STRAIGHT),
    // DiagUp25RightBanked
    row(&DIAG_STRAIGHT),
    // DiagDown25LeftBanked
    row(&DIAG_STRAIGHT),
    // DiagDown25RightBanked
    row(&DIAG_STRAIGHT),
    // LeftEighthBankToDiagUp25
    row(&LEFT_EIGHTH_TO_DIAG),
    // RightEighthBankToDiagUp25
    row(&RIGHT_EIGHTH_TO_DIAG),
    // LeftEighthBankToDiagDown25
    row(&LEFT_EIGHTH_TO_DIAG),
    // RightEighthBankToDiagDown25
    row(&RIGHT_EIGHTH_TO_DIAG),
    // LeftEighthBankToOrthogonalUp25
    row(&LEFT_EIGHTH_TO_ORTHOGONAL),
    // RightEighthBankToOrthogonalUp25
    row(&RIGHT_EIGHTH_TO_ORTHOGONAL),
    // LeftEighthBankToOrthogonalDown25
    row(&LEFT_EIGHTH_TO_ORTHOGONAL),
    // RightEighthBankToOrthogonalDown25
    row(&RIGHT_EIGHTH_TO_ORTHOGONAL),
    // DiagBrakes
    row(&DIAG_STRAIGHT),
    // DiagBlockBrakes
    row(&DIAG_STRAIGHT),
    // Down25Brakes
    row(&[STRAIGHT]),
    // DiagBooster
    row(&DIAG_STRAIGHT),
    // DiagFlatToUp60LongBase
    row(&DIAG_FLAT_TO_UP_60_LONG_BASE),
    // DiagUp60ToFlatLongBase
    row(&DIAG_FLAT_TO_UP_60_LONG_BASE),
    // DiagFlatToDown60LongBase
    row(&DIAG_FLAT_TO_UP_60_LONG_BASE),
    // DiagDown60ToFlatLongBase
    row(&DIAG_FLAT_TO_UP_60_LONG_BASE),
    // LeftEighthDiveLoopUpToOrthogonal
    row(&[STRAIGHT; 6]),
    // RightEighthDiveLoopUpToOrthogonal
    row(&[STRAIGHT; 6]),
    // LeftEighthDiveLoopDownToDiag
    row(&[STRAIGHT; 6]),
    // RightEighthDiveLoopDownToDiag
    row(&[STRAIGHT; 6]),
    // DiagDown25Brakes
    row(&DIAG_STRAIGHT),
];
