//! Terrain codec.
//!
//! Each non-grass cell becomes one tile code `grid_index * 256 + terrain`,
//! where `grid_index = y * width + x`. Cells are visited in `RowMajor` order
//! (rows top to bottom, columns left to right); the remote decoder relies on
//! that order, so it is spelled out here rather than inherited from however
//! the grid happens to be stored.

use crate::board::{Grid, Position, TerrainKind};

/// Multiplier separating the grid index from the terrain code.
pub const TILE_INDEX_SHIFT: u32 = 256;

/// Scan order over a `width` x `height` grid: `y` outer, `x` inner.
#[derive(Debug, Clone)]
pub struct RowMajor {
    width: u8,
    height: u8,
    x: u8,
    y: u8,
}

impl RowMajor {
    pub fn new(width: u8, height: u8) -> Self {
        RowMajor {
            width,
            height,
            x: 0,
            y: 0,
        }
    }
}

impl Iterator for RowMajor {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.width == 0 || self.y >= self.height {
            return None;
        }
        let pos = Position::new(self.x, self.y);
        if self.x + 1 < self.width {
            self.x += 1;
        } else {
            self.x = 0;
            self.y += 1;
        }
        Some(pos)
    }
}

/// One packed, non-grass tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCode(pub u32);

impl TileCode {
    /// Packs the terrain at `pos` of a grid `width` cells wide.
    pub fn new(pos: Position, width: u8, kind: TerrainKind) -> Self {
        TileCode(grid_index(pos, width) * TILE_INDEX_SHIFT + u32::from(kind.code()))
    }

    /// The row-major cell index.
    pub const fn grid_index(self) -> u32 {
        self.0 / TILE_INDEX_SHIFT
    }

    /// The raw terrain code.
    pub const fn terrain_code(self) -> u32 {
        self.0 % TILE_INDEX_SHIFT
    }
}

/// Row-major index of `pos` in a grid `width` cells wide.
pub fn grid_index(pos: Position, width: u8) -> u32 {
    u32::from(pos.y) * u32::from(width) + u32::from(pos.x)
}

/// Encodes every non-grass cell of `grid`, in row-major order.
pub fn encode_tiles(grid: &Grid) -> Vec<TileCode> {
    RowMajor::new(grid.width(), grid.height())
        .filter_map(|pos| match grid.get(pos) {
            Some(kind) if !kind.is_default() => Some(TileCode::new(pos, grid.width(), kind)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ALL_TERRAIN, GRID_SIZE};
    use proptest::prelude::*;

    #[test]
    fn row_major_visits_rows_first() {
        let order: Vec<_> = RowMajor::new(3, 2).map(|p| (p.x, p.y)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn row_major_covers_every_cell_once() {
        assert_eq!(RowMajor::new(GRID_SIZE, GRID_SIZE).count(), 400);
        assert_eq!(RowMajor::new(0, 5).count(), 0);
        assert_eq!(RowMajor::new(5, 0).count(), 0);
    }

    #[test]
    fn empty_grid_has_no_tiles() {
        assert!(encode_tiles(&Grid::standard()).is_empty());
    }

    #[test]
    fn single_mountain() {
        let mut grid = Grid::standard();
        grid.set(Position::new(3, 4), TerrainKind::Mountain);
        assert_eq!(encode_tiles(&grid), vec![TileCode(21_249)]);
    }

    #[test]
    fn tiles_follow_scan_order_not_insertion_order() {
        let mut grid = Grid::standard();
        grid.set(Position::new(19, 19), TerrainKind::Headquarters);
        grid.set(Position::new(5, 0), TerrainKind::Tree);
        grid.set(Position::new(0, 1), TerrainKind::Road);
        let indices: Vec<_> = encode_tiles(&grid).iter().map(|t| t.grid_index()).collect();
        assert_eq!(indices, vec![5, 20, 399]);
    }

    #[test]
    fn last_cell_of_standard_grid() {
        let code = TileCode::new(Position::new(19, 19), GRID_SIZE, TerrainKind::DirtRoad);
        assert_eq!(code.0, 399 * 256 + 7);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        prop::collection::vec(0usize..ALL_TERRAIN.len(), 400).prop_map(|kinds| {
            let mut grid = Grid::standard();
            for (pos, k) in RowMajor::new(GRID_SIZE, GRID_SIZE).zip(kinds) {
                grid.set(pos, ALL_TERRAIN[k]);
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn tile_count_matches_non_grass_cells(grid in arb_grid()) {
            prop_assert_eq!(encode_tiles(&grid).len(), grid.non_default_count());
        }

        #[test]
        fn tile_codes_decode_to_their_cells(grid in arb_grid()) {
            for tile in encode_tiles(&grid) {
                let index = tile.grid_index();
                let pos = Position::new((index % 20) as u8, (index / 20) as u8);
                let kind = grid.get(pos).unwrap();
                prop_assert_eq!(tile.terrain_code(), u32::from(kind.code()));
                prop_assert!(!kind.is_default());
            }
        }

        #[test]
        fn tile_indices_strictly_increase(grid in arb_grid()) {
            let tiles = encode_tiles(&grid);
            prop_assert!(tiles.windows(2).all(|w| w[0].grid_index() < w[1].grid_index()));
        }
    }
}
