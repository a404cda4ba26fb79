//! Terrain kinds and the square terrain grid.
//!
//! A map's ground layer is a `GRID_SIZE` x `GRID_SIZE` matrix of
//! `TerrainKind`s. Grass is the implicit default: a freshly created grid is
//! all grass, and grass cells are never transmitted on-chain.

use serde::{Deserialize, Serialize};

use super::entity::Position;

/// Side length of every registered map.
pub const GRID_SIZE: u8 = 20;

/// The number of terrain variants.
pub const TERRAIN_KIND_COUNT: usize = 8;

/// A terrain type. Discriminants are the on-chain tile type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum TerrainKind {
    #[default]
    Grass = 0,
    Mountain = 1,
    City = 2,
    Factory = 3,
    Headquarters = 4,
    Road = 5,
    Tree = 6,
    DirtRoad = 7,
}

/// All terrain variants in code order.
pub const ALL_TERRAIN: [TerrainKind; TERRAIN_KIND_COUNT] = [
    TerrainKind::Grass,
    TerrainKind::Mountain,
    TerrainKind::City,
    TerrainKind::Factory,
    TerrainKind::Headquarters,
    TerrainKind::Road,
    TerrainKind::Tree,
    TerrainKind::DirtRoad,
];

impl TerrainKind {
    /// Returns the on-chain tile type code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a terrain kind by its tile type code.
    pub fn from_code(code: u8) -> Option<TerrainKind> {
        ALL_TERRAIN.get(code as usize).copied()
    }

    /// Returns the single-character symbol used in map previews.
    pub const fn symbol(self) -> char {
        match self {
            TerrainKind::Grass => '.',
            TerrainKind::Mountain => 'M',
            TerrainKind::City => 'C',
            TerrainKind::Factory => 'F',
            TerrainKind::Headquarters => 'H',
            TerrainKind::Road => 'R',
            TerrainKind::Tree => 'T',
            TerrainKind::DirtRoad => 'D',
        }
    }

    /// True for the implicit default terrain.
    pub const fn is_default(self) -> bool {
        matches!(self, TerrainKind::Grass)
    }
}

/// A rectangular terrain matrix stored row by row.
///
/// Registered maps are always square `GRID_SIZE` grids, but the grid keeps
/// its own dimensions so that maps loaded from files can be checked by the
/// validator instead of being silently reshaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u8,
    height: u8,
    rows: Vec<Vec<TerrainKind>>,
}

impl Grid {
    /// Creates an all-grass grid of the given dimensions.
    pub fn new(width: u8, height: u8) -> Self {
        Grid {
            width,
            height,
            rows: vec![vec![TerrainKind::Grass; width as usize]; height as usize],
        }
    }

    /// Creates an all-grass grid of the standard map size.
    pub fn standard() -> Self {
        Grid::new(GRID_SIZE, GRID_SIZE)
    }

    /// Builds a grid from explicit rows (row `y` holds cells `x = 0..`).
    ///
    /// The declared dimensions come from the row count and the first row's
    /// length; ragged rows are kept as-is and rejected by the validator.
    pub fn from_rows(rows: Vec<Vec<TerrainKind>>) -> Self {
        let height = u8::try_from(rows.len()).unwrap_or(u8::MAX);
        let width = rows
            .first()
            .map(|r| u8::try_from(r.len()).unwrap_or(u8::MAX))
            .unwrap_or(0);
        Grid { width, height, rows }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Raw rows, in `y` order.
    pub fn rows(&self) -> &[Vec<TerrainKind>] {
        &self.rows
    }

    /// True when `pos` addresses a cell of this grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns the terrain at `pos`, or None when out of bounds.
    pub fn get(&self, pos: Position) -> Option<TerrainKind> {
        self.rows
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    /// Sets the terrain at `pos`. Returns false if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, kind: TerrainKind) -> bool {
        match self
            .rows
            .get_mut(pos.y as usize)
            .and_then(|row| row.get_mut(pos.x as usize))
        {
            Some(cell) => {
                *cell = kind;
                true
            }
            None => false,
        }
    }

    /// Number of cells holding something other than grass.
    pub fn non_default_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|kind| !kind.is_default())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terrain_code_roundtrip() {
        for kind in ALL_TERRAIN {
            assert_eq!(TerrainKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(TerrainKind::from_code(8), None);
    }

    #[test]
    fn only_grass_is_default() {
        let defaults: Vec<_> = ALL_TERRAIN.iter().filter(|k| k.is_default()).collect();
        assert_eq!(defaults, vec![&TerrainKind::Grass]);
    }

    #[test]
    fn standard_grid_is_all_grass() {
        let grid = Grid::standard();
        assert_eq!(grid.width(), GRID_SIZE);
        assert_eq!(grid.height(), GRID_SIZE);
        assert_eq!(grid.non_default_count(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut grid = Grid::standard();
        assert!(grid.set(Position::new(3, 4), TerrainKind::Mountain));
        assert_eq!(grid.get(Position::new(3, 4)), Some(TerrainKind::Mountain));
        assert_eq!(grid.get(Position::new(4, 3)), Some(TerrainKind::Grass));
        assert_eq!(grid.non_default_count(), 1);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut grid = Grid::standard();
        assert!(!grid.set(Position::new(20, 0), TerrainKind::Tree));
        assert!(!grid.set(Position::new(0, 20), TerrainKind::Tree));
        assert_eq!(grid.get(Position::new(20, 0)), None);
        assert_eq!(grid.non_default_count(), 0);
    }

    #[test]
    fn from_rows_takes_dimensions_from_data() {
        let grid = Grid::from_rows(vec![vec![TerrainKind::Grass; 3]; 2]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.contains(Position::new(2, 1)));
        assert!(!grid.contains(Position::new(3, 1)));
    }
}
