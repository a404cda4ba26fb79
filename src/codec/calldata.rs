//! Calldata assembly for `register_map`.
//!
//! The remote signature is
//! `register_map(name: ByteArray, width, height, tiles: Array, buildings: Array, units: Array)`.
//! Arguments are flattened into one ordered token list:
//!
//! ```text
//! 0, 0x<name>, <name_len>, <width>, <height>,
//! <n_tiles>, tile..., <n_buildings>, building..., <n_units>, unit...
//! ```
//!
//! Every array is prefixed by its element count. Token positions are
//! meaningful; the assembler never reorders entities.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bytearray::{encode_byte_array, EncodedByteArray};
use super::entity::{encode_buildings, encode_units, BuildingCode, UnitCode};
use super::terrain::{encode_tiles, TileCode};
use crate::board::MapDefinition;
use crate::pipeline::MapError;

/// One decimal (or, for the name word, hex) argument token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalldataToken(String);

impl CalldataToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CalldataToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for CalldataToken {
    fn from(v: u32) -> Self {
        CalldataToken(v.to_string())
    }
}

impl From<u8> for CalldataToken {
    fn from(v: u8) -> Self {
        CalldataToken(v.to_string())
    }
}

impl From<usize> for CalldataToken {
    fn from(v: usize) -> Self {
        CalldataToken(v.to_string())
    }
}

impl From<String> for CalldataToken {
    fn from(v: String) -> Self {
        CalldataToken(v)
    }
}

/// The ordered argument list of one `register_map` call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Calldata {
    tokens: Vec<CalldataToken>,
}

impl Calldata {
    pub fn tokens(&self) -> &[CalldataToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Joins the tokens with `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.tokens
            .iter()
            .map(CalldataToken::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }

    fn push(&mut self, token: impl Into<CalldataToken>) {
        self.tokens.push(token.into());
    }

    /// Appends a length-prefixed array.
    fn push_array<T: Into<CalldataToken>>(&mut self, items: impl ExactSizeIterator<Item = T>) {
        self.push(items.len());
        for item in items {
            self.push(item);
        }
    }
}

/// The encoded sections of one map, before flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMap {
    pub name: EncodedByteArray,
    pub width: u8,
    pub height: u8,
    pub tiles: Vec<TileCode>,
    pub buildings: Vec<BuildingCode>,
    pub units: Vec<UnitCode>,
}

impl EncodedMap {
    /// Flattens the sections into calldata order.
    pub fn calldata(&self) -> Calldata {
        let mut data = Calldata::default();
        for token in self.name.tokens() {
            data.push(token);
        }
        data.push(self.width);
        data.push(self.height);
        data.push_array(self.tiles.iter().map(|t| t.0));
        data.push_array(self.buildings.iter().map(|b| b.value()));
        data.push_array(self.units.iter().map(|u| u.value()));
        data
    }
}

/// Runs the name, terrain, and entity codecs over `map`.
///
/// Performs no structural checks; run the validator first.
pub fn encode_sections(map: &MapDefinition) -> Result<EncodedMap, MapError> {
    let encoded = EncodedMap {
        name: encode_byte_array(&map.name)?,
        width: map.width,
        height: map.height,
        tiles: encode_tiles(&map.grid),
        buildings: encode_buildings(&map.buildings)?,
        units: encode_units(&map.units)?,
    };
    debug!(
        map = %map.name,
        tiles = encoded.tiles.len(),
        buildings = encoded.buildings.len(),
        units = encoded.units.len(),
        "encoded map sections"
    );
    Ok(encoded)
}

/// Encodes `map` straight to calldata. Performs no structural checks.
pub fn assemble_calldata(map: &MapDefinition) -> Result<Calldata, MapError> {
    Ok(encode_sections(map)?.calldata())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Building, Grid, Player, Position, TerrainKind, Unit, UnitKind};

    fn tokens(data: &Calldata) -> Vec<&str> {
        data.tokens().iter().map(CalldataToken::as_str).collect()
    }

    #[test]
    fn minimal_map_layout() {
        let mut grid = Grid::standard();
        grid.set(Position::new(3, 4), TerrainKind::Mountain);
        let map = MapDefinition::new(
            "ridgeline",
            grid,
            vec![
                Building::headquarters(Player::One, Position::new(0, 0)),
                Building::headquarters(Player::Two, Position::new(19, 19)),
            ],
            vec![Unit::new(Player::One, UnitKind::Tank, Position::new(2, 1))],
        );
        let data = assemble_calldata(&map).unwrap();
        assert_eq!(
            tokens(&data),
            vec![
                "0",
                "0x72696467656c696e65",
                "9",
                "20",
                "20",
                "1",
                "21249",
                "2",
                "16973824",
                "33755923",
                "1",
                "16974337",
            ]
        );
    }

    #[test]
    fn empty_arrays_still_carry_a_length() {
        let map = MapDefinition::new("x", Grid::standard(), Vec::new(), Vec::new());
        let data = assemble_calldata(&map).unwrap();
        assert_eq!(tokens(&data), vec!["0", "0x78", "1", "20", "20", "0", "0", "0"]);
    }

    #[test]
    fn entity_order_is_caller_order() {
        let map = MapDefinition::new(
            "order",
            Grid::standard(),
            Vec::new(),
            vec![
                Unit::new(Player::Two, UnitKind::Infantry, Position::new(9, 9)),
                Unit::new(Player::One, UnitKind::Infantry, Position::new(1, 1)),
            ],
        );
        let data = assemble_calldata(&map).unwrap();
        let t = tokens(&data);
        assert_eq!(t[t.len() - 3], "2");
        assert_eq!(t[t.len() - 2], (2 * 16_777_216 + 65_536 + 9 * 256 + 9).to_string());
        assert_eq!(t[t.len() - 1], (16_777_216 + 65_536 + 256 + 1).to_string());
    }

    #[test]
    fn oversized_name_is_a_length_error() {
        let map = MapDefinition::new("n".repeat(32), Grid::standard(), Vec::new(), Vec::new());
        assert!(matches!(assemble_calldata(&map), Err(MapError::Length(_))));
    }

    #[test]
    fn join_and_json_forms() {
        let map = MapDefinition::new("ab", Grid::new(2, 1), Vec::new(), Vec::new());
        let data = assemble_calldata(&map).unwrap();
        assert_eq!(data.join(","), "0,0x6162,2,2,1,0,0,0");
        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"["0","0x6162","2","2","1","0","0","0"]"#
        );
    }
}
