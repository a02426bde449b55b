//! Paint segments
//!
//! A tile's diamond is divided into nine segments: the centre, four edges
//! and four corners. The eight outer segments form a ring, numbered
//! clockwise from the top, so a quarter turn of the tile moves every ring
//! segment two places along.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use trackpaint_track::{Direction, NUM_DIRECTIONS};

/// One of the nine segments of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PaintSegment {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
    Centre = 8,
}

impl PaintSegment {
    /// Number of segments on a tile
    pub const COUNT: usize = 9;

    /// Every segment in bit order
    pub const ALL: [PaintSegment; Self::COUNT] = [
        PaintSegment::Top,
        PaintSegment::TopRight,
        PaintSegment::Right,
        PaintSegment::BottomRight,
        PaintSegment::Bottom,
        PaintSegment::BottomLeft,
        PaintSegment::Left,
        PaintSegment::TopLeft,
        PaintSegment::Centre,
    ];

    /// Bit index of this segment within a [`SegmentMask`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Mask containing only this segment
    pub const fn mask(self) -> SegmentMask {
        SegmentMask::from_bits_retain(1 << self as u16)
    }
}

bitflags! {
    /// Set of paint segments
    ///
    /// Bit `n` corresponds to the [`PaintSegment`] with index `n`. The upper
    /// seven bits are unused by the tile layout.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SegmentMask: u16 {
        /// Top edge
        const TOP = 1 << 0;
        /// Top-right corner
        const TOP_RIGHT = 1 << 1;
        /// Right edge
        const RIGHT = 1 << 2;
        /// Bottom-right corner
        const BOTTOM_RIGHT = 1 << 3;
        /// Bottom edge
        const BOTTOM = 1 << 4;
        /// Bottom-left corner
        const BOTTOM_LEFT = 1 << 5;
        /// Left edge
        const LEFT = 1 << 6;
        /// Top-left corner
        const TOP_LEFT = 1 << 7;
        /// Centre of the tile
        const CENTRE = 1 << 8;
        /// Every segment of the tile
        const ALL = Self::TOP.bits()
            | Self::TOP_RIGHT.bits()
            | Self::RIGHT.bits()
            | Self::BOTTOM_RIGHT.bits()
            | Self::BOTTOM.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::LEFT.bits()
            | Self::TOP_LEFT.bits()
            | Self::CENTRE.bits();
    }
}

impl SegmentMask {
    /// No segments
    pub const NONE: SegmentMask = SegmentMask::empty();

    /// The eight outer segments that rotate with the tile
    const RING: u16 = 0x00FF;

    /// Build a mask from a list of segments
    pub const fn from_segments(segments: &[PaintSegment]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < segments.len() {
            bits |= 1 << segments[i] as u16;
            i += 1;
        }
        SegmentMask::from_bits_retain(bits)
    }

    /// Whether `segment` is part of this mask
    pub const fn has_segment(self, segment: PaintSegment) -> bool {
        self.bits() & (1 << segment as u16) != 0
    }

    /// The segments in this mask, in bit order
    pub fn segments(self) -> impl Iterator<Item = PaintSegment> {
        PaintSegment::ALL
            .into_iter()
            .filter(move |segment| self.has_segment(*segment))
    }

    /// Bits that do not belong to any segment
    pub const fn unknown_bits(self) -> u16 {
        self.bits() & !SegmentMask::ALL.bits()
    }
}

/// Rotate a mask authored for direction 0 into `direction`
///
/// Ring segments move two places clockwise per quarter turn. The centre and
/// any bits above the ring are left in place. `direction` is reduced modulo 4.
pub const fn rotate_segments(mask: SegmentMask, direction: Direction) -> SegmentMask {
    let bits = mask.bits();
    let ring = (bits & SegmentMask::RING) as u8;
    let steps = (direction % NUM_DIRECTIONS) as u32 * 2;
    let rotated = ring.rotate_left(steps) as u16;
    SegmentMask::from_bits_retain((bits & !SegmentMask::RING) | rotated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_nine_segments() {
        assert_eq!(SegmentMask::ALL.bits(), 0x01FF);
        assert_eq!(SegmentMask::ALL.segments().count(), PaintSegment::COUNT);
        assert_eq!(SegmentMask::NONE.bits(), 0);
    }

    #[test]
    fn test_segment_mask_matches_flag() {
        assert_eq!(PaintSegment::Top.mask(), SegmentMask::TOP);
        assert_eq!(PaintSegment::BottomLeft.mask(), SegmentMask::BOTTOM_LEFT);
        assert_eq!(PaintSegment::Centre.mask(), SegmentMask::CENTRE);
    }

    #[test]
    fn test_from_segments() {
        let mask = SegmentMask::from_segments(&[
            PaintSegment::Centre,
            PaintSegment::TopRight,
            PaintSegment::BottomLeft,
        ]);
        assert_eq!(
            mask,
            SegmentMask::CENTRE | SegmentMask::TOP_RIGHT | SegmentMask::BOTTOM_LEFT
        );
        assert!(mask.has_segment(PaintSegment::Centre));
        assert!(!mask.has_segment(PaintSegment::Top));
    }

    #[test]
    fn test_rotate_direction_0_is_identity() {
        let mask = SegmentMask::TOP | SegmentMask::TOP_RIGHT | SegmentMask::CENTRE;
        assert_eq!(rotate_segments(mask, 0), mask);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // Top -> Right, TopRight -> BottomRight, Left -> Top
        let mask = SegmentMask::TOP | SegmentMask::TOP_RIGHT | SegmentMask::LEFT;
        assert_eq!(
            rotate_segments(mask, 1),
            SegmentMask::RIGHT | SegmentMask::BOTTOM_RIGHT | SegmentMask::TOP
        );
    }

    #[test]
    fn test_rotate_keeps_centre() {
        assert_eq!(rotate_segments(SegmentMask::CENTRE, 3), SegmentMask::CENTRE);
    }

    #[test]
    fn test_rotate_straight_track() {
        // A straight piece along the TopRight/BottomLeft axis turns onto the
        // other axis after one step and back after two.
        let straight = SegmentMask::CENTRE | SegmentMask::TOP_RIGHT | SegmentMask::BOTTOM_LEFT;
        let crossed = SegmentMask::CENTRE | SegmentMask::BOTTOM_RIGHT | SegmentMask::TOP_LEFT;
        assert_eq!(rotate_segments(straight, 1), crossed);
        assert_eq!(rotate_segments(straight, 2), straight);
    }

    #[test]
    fn test_four_steps_return_to_start() {
        let mask = SegmentMask::TOP | SegmentMask::BOTTOM_RIGHT | SegmentMask::CENTRE;
        let mut rotated = mask;
        for _ in 0..4 {
            rotated = rotate_segments(rotated, 1);
        }
        assert_eq!(rotated, mask);
    }

    #[test]
    fn test_direction_taken_modulo_4() {
        let mask = SegmentMask::TOP | SegmentMask::LEFT;
        assert_eq!(rotate_segments(mask, 5), rotate_segments(mask, 1));
        assert_eq!(rotate_segments(mask, 4), mask);
    }

    #[test]
    fn test_rotate_preserves_unknown_bits() {
        let mask = SegmentMask::from_bits_retain(0x8000) | SegmentMask::TOP;
        let rotated = rotate_segments(mask, 2);
        assert_eq!(rotated.unknown_bits(), 0x8000);
        assert!(rotated.contains(SegmentMask::BOTTOM));
    }

    #[test]
    fn test_segments_iterates_in_bit_order() {
        let mask = SegmentMask::CENTRE | SegmentMask::TOP;
        let segments: Vec<_> = mask.segments().collect();
        assert_eq!(segments, vec![PaintSegment::Top, PaintSegment::Centre]);
    }
}
