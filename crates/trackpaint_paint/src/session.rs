//! Support height bookkeeping
//!
//! While a tile is painted, [`PaintSession`] tracks for every segment the
//! height up to which supports have been accounted for. Track pieces mark the
//! segments they cover with [`SUPPORT_HEIGHT_BLOCKED`] so that later support
//! painting on the same tile leaves those segments alone.

use serde::{Deserialize, Serialize};

use crate::segment::{PaintSegment, SegmentMask};

/// Height marking a segment as covered; supports are never painted into it
pub const SUPPORT_HEIGHT_BLOCKED: u16 = 0xFFFF;

/// Slope value used when supports are flat
pub const SUPPORT_SLOPE_FLAT: u8 = 0x20;

/// Slope value of a segment nothing has written to yet
pub const SUPPORT_SLOPE_UNSET: u8 = 0xFF;

/// Support height and slope of one segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportHeight {
    pub height: u16,
    pub slope: u8,
}

impl SupportHeight {
    /// State of a segment at the start of a tile
    pub const UNSET: SupportHeight = SupportHeight {
        height: 0,
        slope: SUPPORT_SLOPE_UNSET,
    };

    /// Whether supports may not be painted into this segment
    pub fn is_blocked(&self) -> bool {
        self.height == SUPPORT_HEIGHT_BLOCKED
    }
}

impl Default for SupportHeight {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Sink for per-segment support heights
///
/// Blocked segment lookups write through this trait so callers can supply
/// their own session type.
pub trait SegmentSupport {
    /// Set the support height of every segment in `segments`
    ///
    /// `slope` is only recorded when `height` is not
    /// [`SUPPORT_HEIGHT_BLOCKED`].
    fn set_segment_support_height(&mut self, segments: SegmentMask, height: u16, slope: u8);
}

/// Support state of the tile currently being painted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaintSession {
    segments: [SupportHeight; PaintSegment::COUNT],
    general: SupportHeight,
}

impl PaintSession {
    /// Create a session with every segment unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all support heights before painting the next tile
    pub fn reset_support_heights(&mut self) {
        self.segments = [SupportHeight::UNSET; PaintSegment::COUNT];
        self.general = SupportHeight::UNSET;
    }

    /// Support state of one segment
    pub fn segment_support(&self, segment: PaintSegment) -> SupportHeight {
        self.segments[segment.index()]
    }

    /// Support state of all segments, indexed by [`PaintSegment::index`]
    pub fn segment_supports(&self) -> &[SupportHeight; PaintSegment::COUNT] {
        &self.segments
    }

    /// Tile-wide support state
    pub fn general_support(&self) -> SupportHeight {
        self.general
    }

    /// Set the tile-wide support height; the slope resets to flat
    pub fn set_general_support_height(&mut self, height: u16) {
        self.general = SupportHeight {
            height,
            slope: SUPPORT_SLOPE_FLAT,
        };
    }

    /// Segments currently marked as blocked
    pub fn blocked_segments(&self) -> SegmentMask {
        PaintSegment::ALL
            .into_iter()
            .filter(|segment| self.segments[segment.index()].is_blocked())
            .fold(SegmentMask::NONE, |mask, segment| mask | segment.mask())
    }
}

impl SegmentSupport for PaintSession {
    fn set_segment_support_height(&mut self, segments: SegmentMask, height: u16, slope: u8) {
        for segment in segments.segments() {
            let support = &mut self.segments[segment.index()];
            support.height = height;
            if height != SUPPORT_HEIGHT_BLOCKED {
                support.slope = slope;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unset() {
        let session = PaintSession::new();
        for segment in PaintSegment::ALL {
            assert_eq!(session.segment_support(segment), SupportHeight::UNSET);
        }
        assert_eq!(session.general_support(), SupportHeight::UNSET);
        assert!(session.blocked_segments().is_empty());
    }

    #[test]
    fn test_set_segment_support_height() {
        let mut session = PaintSession::new();
        session.set_segment_support_height(SegmentMask::TOP | SegmentMask::CENTRE, 48, 4);

        assert_eq!(
            session.segment_support(PaintSegment::Top),
            SupportHeight { height: 48, slope: 4 }
        );
        assert_eq!(
            session.segment_support(PaintSegment::Centre),
            SupportHeight { height: 48, slope: 4 }
        );
        assert_eq!(session.segment_support(PaintSegment::Left), SupportHeight::UNSET);
    }

    #[test]
    fn test_blocked_height_keeps_slope() {
        let mut session = PaintSession::new();
        session.set_segment_support_height(SegmentMask::TOP, 32, 6);
        session.set_segment_support_height(SegmentMask::TOP, SUPPORT_HEIGHT_BLOCKED, 0);

        let top = session.segment_support(PaintSegment::Top);
        assert!(top.is_blocked());
        assert_eq!(top.slope, 6);
    }

    #[test]
    fn test_unknown_bits_ignored() {
        let mut session = PaintSession::new();
        let mask = SegmentMask::from_bits_retain(0xFE00);
        session.set_segment_support_height(mask, SUPPORT_HEIGHT_BLOCKED, 0);
        assert!(session.blocked_segments().is_empty());
    }

    #[test]
    fn test_blocked_segments() {
        let mut session = PaintSession::new();
        let mask = SegmentMask::CENTRE | SegmentMask::TOP_RIGHT | SegmentMask::BOTTOM_LEFT;
        session.set_segment_support_height(mask, SUPPORT_HEIGHT_BLOCKED, 0);
        assert_eq!(session.blocked_segments(), mask);
    }

    #[test]
    fn test_general_support_height() {
        let mut session = PaintSession::new();
        session.set_general_support_height(64);
        assert_eq!(
            session.general_support(),
            SupportHeight { height: 64, slope: SUPPORT_SLOPE_FLAT }
        );
    }

    #[test]
    fn test_reset_support_heights() {
        let mut session = PaintSession::new();
        session.set_segment_support_height(SegmentMask::ALL, SUPPORT_HEIGHT_BLOCKED, 0);
        session.set_general_support_height(16);
        session.reset_support_heights();
        assert_eq!(session, PaintSession::new());
    }
}
