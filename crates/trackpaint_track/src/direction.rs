//! Piece orientation

/// Rotation index of a piece on the map
///
/// Each step is a quarter turn clockwise. Only the low two bits are
/// meaningful; consumers reduce the value modulo [`NUM_DIRECTIONS`].
pub type Direction = u8;

/// Number of distinct directions
pub const NUM_DIRECTIONS: u8 = 4;

/// Every direction in order
pub const ALL_DIRECTIONS: [Direction; NUM_DIRECTIONS as usize] = [0, 1, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions_in_range() {
        assert!(ALL_DIRECTIONS.iter().all(|&d| d < NUM_DIRECTIONS));
        assert_eq!(ALL_DIRECTIONS.len(), 4);
    }
}
