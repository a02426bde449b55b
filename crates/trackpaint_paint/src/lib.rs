//! Paint segments and support heights
//!
//! This crate provides the tile subdivision the track painter works with:
//! - Paint segments and segment masks
//! - Rotating masks into the direction a piece is painted in
//! - Per-segment support height bookkeeping for the tile being painted

pub mod segment;
pub mod session;

// Re-export commonly used types
pub use segment::{rotate_segments, PaintSegment, SegmentMask};
pub use session::{
    PaintSession, SegmentSupport, SupportHeight, SUPPORT_HEIGHT_BLOCKED, SUPPORT_SLOPE_FLAT,
    SUPPORT_SLOPE_UNSET,
};
