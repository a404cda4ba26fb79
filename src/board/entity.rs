//! Players, positions, buildings, and units.
//!
//! Buildings and units are both "positioned entities": an owner, a kind,
//! and a cell. Their kind codes live in separate domains (a building code 3
//! is a Headquarters, a unit code 3 is a Tank), which the codec layer keeps
//! apart through the `KindDomain` trait.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the two sides of a match. Discriminants are the on-chain player ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

/// Both players in id order.
pub const ALL_PLAYERS: [Player; 2] = [Player::One, Player::Two];

impl Player {
    /// Returns the on-chain player id.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Parses an on-chain player id.
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The opposing player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.id())
    }
}

/// A capturable building type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BuildingKind {
    City = 1,
    Factory = 2,
    Headquarters = 3,
}

impl BuildingKind {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<BuildingKind> {
        match code {
            1 => Some(BuildingKind::City),
            2 => Some(BuildingKind::Factory),
            3 => Some(BuildingKind::Headquarters),
            _ => None,
        }
    }
}

/// A unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum UnitKind {
    Infantry = 1,
    Ranger = 2,
    Tank = 3,
}

/// All unit kinds in code order.
pub const ALL_UNIT_KINDS: [UnitKind; 3] = [UnitKind::Infantry, UnitKind::Ranger, UnitKind::Tank];

impl UnitKind {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<UnitKind> {
        match code {
            1 => Some(UnitKind::Infantry),
            2 => Some(UnitKind::Ranger),
            3 => Some(UnitKind::Tank),
            _ => None,
        }
    }

    /// Returns the preview letter (lower-case; player one renders upper-case).
    pub const fn symbol(self) -> char {
        match self {
            UnitKind::Infantry => 'i',
            UnitKind::Ranger => 'r',
            UnitKind::Tank => 't',
        }
    }

    /// How many units of this kind each player fields on a registered map.
    pub const fn roster_size(self) -> usize {
        match self {
            UnitKind::Infantry => 4,
            UnitKind::Ranger => 2,
            UnitKind::Tank => 1,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Infantry => "infantry",
            UnitKind::Ranger => "ranger",
            UnitKind::Tank => "tank",
        };
        f.write_str(name)
    }
}

/// A building placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Building {
    pub owner: Player,
    pub kind: BuildingKind,
    pub position: Position,
}

impl Building {
    /// Creates a Headquarters for `owner` at `position`.
    pub const fn headquarters(owner: Player, position: Position) -> Self {
        Building {
            owner,
            kind: BuildingKind::Headquarters,
            position,
        }
    }
}

/// A unit placed on the map at the start of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub owner: Player,
    pub kind: UnitKind,
    pub position: Position,
}

impl Unit {
    pub const fn new(owner: Player, kind: UnitKind, position: Position) -> Self {
        Unit { owner, kind, position }
    }
}
