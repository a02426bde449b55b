//! Track piece metadata
//!
//! This crate provides the track piece types shared by the paint crates.
//!
//! ## Core Types
//!
//! - [`TrackElemType`] - Every kind of track piece, in upstream ordinal order
//! - [`Direction`] - Rotation index (0-3) a piece is placed in
//! - [`MAX_SEQUENCES_PER_PIECE`] - Upper bound on the tiles one piece occupies

mod direction;
pub mod track_elem;

pub use direction::{Direction, ALL_DIRECTIONS, NUM_DIRECTIONS};
pub use track_elem::{ParseTrackElemError, TrackElemType, MAX_SEQUENCES_PER_PIECE};
