//! Entity codec for buildings and units.
//!
//! Both entity lists share one packing, `owner | kind | x | y`, one byte
//! each with the owner in the highest byte. The kind byte means different
//! things per list, so codes are typed by their `KindDomain`: an
//! `EntityCode<BuildingKind>` cannot be pushed where unit codes are
//! expected.

use std::fmt;
use std::marker::PhantomData;

use super::pack::{pack4, unpack4, EncodingError};
use crate::board::{Building, BuildingKind, Player, Position, Unit, UnitKind};

/// A family of entity kinds that share one code space.
pub trait KindDomain: Copy {
    /// Human-readable domain name, used in logs.
    const DOMAIN: &'static str;

    /// The on-chain kind code.
    fn kind_code(self) -> u8;

    /// Parses an on-chain kind code of this domain.
    fn from_kind_code(code: u8) -> Option<Self>;
}

impl KindDomain for BuildingKind {
    const DOMAIN: &'static str = "building";

    fn kind_code(self) -> u8 {
        self.code()
    }

    fn from_kind_code(code: u8) -> Option<Self> {
        BuildingKind::from_code(code)
    }
}

impl KindDomain for UnitKind {
    const DOMAIN: &'static str = "unit";

    fn kind_code(self) -> u8 {
        self.code()
    }

    fn from_kind_code(code: u8) -> Option<Self> {
        UnitKind::from_code(code)
    }
}

/// A packed positional entity of kind domain `K`.
pub struct EntityCode<K> {
    value: u32,
    domain: PhantomData<K>,
}

// Manual impls: derives would needlessly bound `K`.
impl<K> Clone for EntityCode<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for EntityCode<K> {}

impl<K> PartialEq for EntityCode<K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<K> Eq for EntityCode<K> {}

impl<K: KindDomain> fmt::Debug for EntityCode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityCode<{}>({})", K::DOMAIN, self.value)
    }
}

/// The four fields of an entity code, as decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityFields {
    pub owner: u32,
    pub kind: u32,
    pub x: u32,
    pub y: u32,
}

impl<K: KindDomain> EntityCode<K> {
    /// Packs `owner`, `kind`, and `position` into one code.
    pub fn new(owner: Player, kind: K, position: Position) -> Result<Self, EncodingError> {
        let value = pack4(
            [
                u32::from(owner.id()),
                u32::from(kind.kind_code()),
                u32::from(position.x),
                u32::from(position.y),
            ],
            ["owner", "kind", "x", "y"],
        )?;
        Ok(EntityCode {
            value,
            domain: PhantomData,
        })
    }

    /// The raw packed integer.
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Splits the code back into its raw fields.
    pub const fn fields(self) -> EntityFields {
        let [owner, kind, x, y] = unpack4(self.value);
        EntityFields { owner, kind, x, y }
    }

    /// Decodes the code into typed parts, if every field is valid.
    pub fn decode(self) -> Option<(Player, K, Position)> {
        let f = self.fields();
        let owner = Player::from_id(u8::try_from(f.owner).ok()?)?;
        let kind = K::from_kind_code(u8::try_from(f.kind).ok()?)?;
        let pos = Position::new(u8::try_from(f.x).ok()?, u8::try_from(f.y).ok()?);
        Some((owner, kind, pos))
    }
}

pub type BuildingCode = EntityCode<BuildingKind>;
pub type UnitCode = EntityCode<UnitKind>;

/// Encodes one building.
pub fn encode_building(building: &Building) -> Result<BuildingCode, EncodingError> {
    EntityCode::new(building.owner, building.kind, building.position)
}

/// Encodes one unit.
pub fn encode_unit(unit: &Unit) -> Result<UnitCode, EncodingError> {
    EntityCode::new(unit.owner, unit.kind, unit.position)
}

/// Encodes buildings in the given order.
pub fn encode_buildings(buildings: &[Building]) -> Result<Vec<BuildingCode>, EncodingError> {
    buildings.iter().map(encode_building).collect()
}

/// Encodes units in the given order.
pub fn encode_units(units: &[Unit]) -> Result<Vec<UnitCode>, EncodingError> {
    units.iter().map(encode_unit).collect()
}
