//! Two-way cell addressing: linear index (1-9, row-major) and coordinate.

use super::types::{CELL_COUNT, Coord, SIDE};
use crate::error::MoveError;
use tracing::instrument;

/// Precomputed bijection between linear cell indices and board coordinates.
///
/// Built once when a game starts; lookups are plain array indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTable {
    coords: [Coord; CELL_COUNT],
    indices: [[u8; SIDE]; SIDE],
}

impl CellTable {
    /// Builds the row-major table: 1 is top-left, 9 is bottom-right.
    #[instrument]
    pub fn new() -> Self {
        let mut coords = [Coord::new(0, 0); CELL_COUNT];
        let mut indices = [[0u8; SIDE]; SIDE];

        for (slot, coord) in coords.iter_mut().enumerate() {
            *coord = Coord::new(slot / SIDE, slot % SIDE);
            indices[coord.row][coord.col] = (slot + 1) as u8;
        }

        Self { coords, indices }
    }

    /// Maps a linear index (1-9) to its coordinate.
    pub fn coord(&self, index: u8) -> Result<Coord, MoveError> {
        match index {
            1..=9 => Ok(self.coords[usize::from(index - 1)]),
            _ => Err(MoveError::CellOutOfRange(index)),
        }
    }

    /// Maps a coordinate to its linear index (1-9).
    pub fn index(&self, coord: Coord) -> Result<u8, MoveError> {
        self.indices
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .ok_or(MoveError::CoordOutOfRange(coord))
    }

    /// All (index, coordinate) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Coord)> + '_ {
        self.coords
            .iter()
            .enumerate()
            .map(|(slot, coord)| ((slot + 1) as u8, *coord))
    }
}

impl Default for CellTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        let table = CellTable::new();
        assert_eq!(table.coord(1), Ok(Coord::new(0, 0)));
        assert_eq!(table.coord(3), Ok(Coord::new(0, 2)));
        assert_eq!(table.coord(5), Ok(Coord::new(1, 1)));
        assert_eq!(table.coord(7), Ok(Coord::new(2, 0)));
        assert_eq!(table.coord(9), Ok(Coord::new(2, 2)));
    }

    #[test]
    fn test_out_of_range() {
        let table = CellTable::new();
        assert_eq!(table.coord(0), Err(MoveError::CellOutOfRange(0)));
        assert_eq!(table.coord(10), Err(MoveError::CellOutOfRange(10)));
        assert_eq!(
            table.index(Coord::new(0, 3)),
            Err(MoveError::CoordOutOfRange(Coord::new(0, 3)))
        );
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        let table = CellTable::new();
        let mut seen = std::collections::HashSet::new();

        for index in 1..=9u8 {
            let coord = table.coord(index).unwrap();
            assert!(seen.insert(coord), "coordinate {} mapped twice", coord);
            assert_eq!(table.index(coord), Ok(index));
        }
        assert_eq!(seen.len(), CELL_COUNT);
    }

    #[test]
    fn test_iter_is_row_major() {
        let table = CellTable::new();
        let indices: Vec<u8> = table.iter().map(|(index, _)| index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
