//! The complete definition of one registrable map.

use serde::{Deserialize, Serialize};

use super::entity::{Building, BuildingKind, Player, Position, Unit};
use super::terrain::Grid;

/// A map ready for validation and encoding.
///
/// Produced once by the authoring step and treated as an immutable value
/// afterwards. `width` and `height` are the dimensions declared to the
/// remote call; the validator checks them against the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDefinition {
    pub name: String,
    pub width: u8,
    pub height: u8,
    pub grid: Grid,
    pub buildings: Vec<Building>,
    pub units: Vec<Unit>,
}

impl MapDefinition {
    /// Creates a map whose declared dimensions are taken from `grid`.
    pub fn new(
        name: impl Into<String>,
        grid: Grid,
        buildings: Vec<Building>,
        units: Vec<Unit>,
    ) -> Self {
        MapDefinition {
            name: name.into(),
            width: grid.width(),
            height: grid.height(),
            grid,
            buildings,
            units,
        }
    }

    /// Position of `player`'s first Headquarters, if any.
    pub fn headquarters_of(&self, player: Player) -> Option<Position> {
        self.buildings
            .iter()
            .find(|b| b.owner == player && b.kind == BuildingKind::Headquarters)
            .map(|b| b.position)
    }

    /// Units owned by `player`, in authored order.
    pub fn units_of(&self, player: Player) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.owner == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::entity::UnitKind;

    #[test]
    fn dimensions_follow_grid() {
        let map = MapDefinition::new("tiny", Grid::new(5, 7), Vec::new(), Vec::new());
        assert_eq!(map.width, 5);
        assert_eq!(map.height, 7);
    }

    #[test]
    fn headquarters_lookup() {
        let map = MapDefinition::new(
            "hq",
            Grid::standard(),
            vec![
                Building::headquarters(Player::One, Position::new(0, 0)),
                Building::headquarters(Player::Two, Position::new(19, 19)),
            ],
            vec![Unit::new(Player::Two, UnitKind::Tank, Position::new(18, 18))],
        );
        assert_eq!(map.headquarters_of(Player::One), Some(Position::new(0, 0)));
        assert_eq!(map.headquarters_of(Player::Two), Some(Position::new(19, 19)));
        assert_eq!(map.units_of(Player::One).count(), 0);
        assert_eq!(map.units_of(Player::Two).count(), 1);
    }

    #[test]
    fn json_roundtrip_preserves_map() {
        let mut grid = Grid::standard();
        grid.set(Position::new(1, 2), crate::board::TerrainKind::Tree);
        let map = MapDefinition::new(
            "json",
            grid,
            vec![Building::headquarters(Player::One, Position::new(0, 0))],
            Vec::new(),
        );
        let text = serde_json::to_string(&map).unwrap();
        let back: MapDefinition = serde_json::from_str(&text).unwrap();
        assert_eq!(back, map);
    }
}
