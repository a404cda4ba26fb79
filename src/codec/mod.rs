//! Encoding of maps into `register_map` calldata.
//!
//! The leaf codecs (`terrain`, `entity`, `bytearray`, built on the `pack`
//! utility) turn parts of a map into integers or hex words; `calldata`
//! flattens them into the ordered token stream the remote call expects.

pub mod bytearray;
pub mod calldata;
pub mod entity;
pub mod pack;
pub mod terrain;

pub use bytearray::{encode_byte_array, EncodedByteArray, LengthError, MAX_PENDING_BYTES};
pub use calldata::{assemble_calldata, encode_sections, Calldata, CalldataToken, EncodedMap};
pub use entity::{
    encode_building, encode_buildings, encode_unit, encode_units, BuildingCode, EntityCode,
    EntityFields, KindDomain, UnitCode,
};
pub use pack::{pack4, unpack4, EncodingError};
pub use terrain::{encode_tiles, grid_index, RowMajor, TileCode};
