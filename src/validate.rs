//! Structural validation of map definitions.
//!
//! Checks run in a fixed order and stop at the first violation. Only
//! structure is checked (sizes, bounds, counts, overlaps); whether the
//! terrain makes for a playable map is not this module's concern.

use std::collections::HashSet;

use thiserror::Error;

use crate::board::{
    BuildingKind, MapDefinition, Player, Position, UnitKind, ALL_PLAYERS, ALL_UNIT_KINDS,
    GRID_SIZE,
};
use crate::codec::bytearray::{LengthError, MAX_PENDING_BYTES};

/// Units each player must field.
pub const UNITS_PER_PLAYER: usize = 7;

/// What an out-of-bounds position belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Terrain,
    Building,
    Unit,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Subject::Terrain => "terrain cell",
            Subject::Building => "building",
            Subject::Unit => "unit",
        })
    }
}

/// A structural invariant a map definition violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("map must be {expected}x{expected}, got {width}x{height}")]
    Dimensions { width: u8, height: u8, expected: u8 },

    #[error("grid does not match declared size {width}x{height}: row {row} has {len} cells of {rows} rows")]
    GridShape {
        width: u8,
        height: u8,
        rows: usize,
        row: usize,
        len: usize,
    },

    #[error("{subject} at {position} is outside the map")]
    OutOfBounds { subject: Subject, position: Position },

    #[error("{0} has no headquarters")]
    MissingHeadquarters(Player),

    #[error("{0} has more than one headquarters")]
    DuplicateHeadquarters(Player),

    #[error("both headquarters are at {0}")]
    OverlappingHeadquarters(Position),

    #[error("{player} has {found} units, expected {expected}", expected = UNITS_PER_PLAYER)]
    UnitCount { player: Player, found: usize },

    #[error("{player} has {found} {kind} units, expected {expected}")]
    UnitKindCount {
        player: Player,
        kind: UnitKind,
        expected: usize,
        found: usize,
    },

    #[error("more than one unit at {0}")]
    DuplicateUnitPosition(Position),

    #[error("unit of {player} sits on the enemy headquarters at {position}")]
    UnitOnEnemyHeadquarters { player: Player, position: Position },

    #[error("map name is empty")]
    EmptyName,

    #[error("map name {0:?} is not ASCII")]
    NonAsciiName(String),

    #[error("map name too long: {0}")]
    NameTooLong(#[from] LengthError),
}

/// Checks every structural invariant of `map`, reporting the first failure.
pub fn validate_map(map: &MapDefinition) -> Result<(), ValidationError> {
    check_name(&map.name)?;
    check_dimensions(map)?;
    check_bounds(map)?;
    check_headquarters(map)?;
    check_units(map)?;
    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !name.is_ascii() {
        return Err(ValidationError::NonAsciiName(name.to_string()));
    }
    if name.len() > MAX_PENDING_BYTES {
        return Err(LengthError {
            len: name.len(),
            max: MAX_PENDING_BYTES,
        }
        .into());
    }
    Ok(())
}

fn check_dimensions(map: &MapDefinition) -> Result<(), ValidationError> {
    if map.width != GRID_SIZE || map.height != GRID_SIZE {
        return Err(ValidationError::Dimensions {
            width: map.width,
            height: map.height,
            expected: GRID_SIZE,
        });
    }

    let grid = &map.grid;
    let rows = grid.rows();
    let shape_error = |row: usize, len: usize| ValidationError::GridShape {
        width: map.width,
        height: map.height,
        rows: rows.len(),
        row,
        len,
    };
    if grid.width() != map.width || grid.height() != map.height || rows.len() != map.height as usize
    {
        return Err(shape_error(0, rows.first().map_or(0, Vec::len)));
    }
    if let Some((row, cells)) = rows
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != map.width as usize)
    {
        return Err(shape_error(row, cells.len()));
    }
    Ok(())
}

fn check_bounds(map: &MapDefinition) -> Result<(), ValidationError> {
    let in_bounds = |p: Position| p.x < map.width && p.y < map.height;

    if let Some(b) = map.buildings.iter().find(|b| !in_bounds(b.position)) {
        return Err(ValidationError::OutOfBounds {
            subject: Subject::Building,
            position: b.position,
        });
    }
    if let Some(u) = map.units.iter().find(|u| !in_bounds(u.position)) {
        return Err(ValidationError::OutOfBounds {
            subject: Subject::Unit,
            position: u.position,
        });
    }
    Ok(())
}

fn check_headquarters(map: &MapDefinition) -> Result<(), ValidationError> {
    let mut positions = Vec::with_capacity(ALL_PLAYERS.len());
    for player in ALL_PLAYERS {
        let mut hqs = map
            .buildings
            .iter()
            .filter(|b| b.owner == player && b.kind == BuildingKind::Headquarters);
        let first = hqs
            .next()
            .ok_or(ValidationError::MissingHeadquarters(player))?;
        if hqs.next().is_some() {
            return Err(ValidationError::DuplicateHeadquarters(player));
        }
        positions.push(first.position);
    }
    if positions[0] == positions[1] {
        return Err(ValidationError::OverlappingHeadquarters(positions[0]));
    }
    Ok(())
}

fn check_units(map: &MapDefinition) -> Result<(), ValidationError> {
    for player in ALL_PLAYERS {
        let found = map.units_of(player).count();
        if found != UNITS_PER_PLAYER {
            return Err(ValidationError::UnitCount { player, found });
        }
        for kind in ALL_UNIT_KINDS {
            let found = map.units_of(player).filter(|u| u.kind == kind).count();
            if found != kind.roster_size() {
                return Err(ValidationError::UnitKindCount {
                    player,
                    kind,
                    expected: kind.roster_size(),
                    found,
                });
            }
        }
    }

    let mut occupied = HashSet::with_capacity(map.units.len());
    for unit in &map.units {
        if !occupied.insert(unit.position) {
            return Err(ValidationError::DuplicateUnitPosition(unit.position));
        }
        let enemy_hq = map.headquarters_of(unit.owner.opponent());
        if enemy_hq == Some(unit.position) {
            return Err(ValidationError::UnitOnEnemyHeadquarters {
                player: unit.owner,
                position: unit.position,
            });
        }
    }
    Ok(())
}
