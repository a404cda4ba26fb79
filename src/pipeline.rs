//! The validate-then-encode pipeline.
//!
//! `encode_map` is the single entry point used by the CLI: it validates the
//! map, then runs the codecs and assembles calldata. Nothing is encoded for
//! a map that fails validation.

use thiserror::Error;

use crate::board::MapDefinition;
use crate::codec::bytearray::LengthError;
use crate::codec::calldata::{encode_sections, Calldata, EncodedMap};
use crate::codec::pack::EncodingError;
use crate::validate::{validate_map, ValidationError};

/// Any failure on the way from a map definition to calldata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("invalid map: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Length(#[from] LengthError),

    #[error("encoding invariant violated: {0}")]
    Encoding(#[from] EncodingError),
}

/// Validates `map` and encodes its sections.
pub fn encode_validated(map: &MapDefinition) -> Result<EncodedMap, MapError> {
    validate_map(map)?;
    encode_sections(map)
}

/// Validates `map` and produces its `register_map` calldata.
pub fn encode_map(map: &MapDefinition) -> Result<Calldata, MapError> {
    Ok(encode_validated(map)?.calldata())
}
