//! Map data model.
//!
//! Contains the terrain grid, the positioned entities (buildings and
//! units), and the `MapDefinition` that bundles them for encoding.

pub mod entity;
pub mod map;
pub mod terrain;

pub use entity::{
    Building, BuildingKind, Player, Position, Unit, UnitKind, ALL_PLAYERS, ALL_UNIT_KINDS,
};
pub use map::MapDefinition;
pub use terrain::{Grid, TerrainKind, ALL_TERRAIN, GRID_SIZE, TERRAIN_KIND_COUNT};
