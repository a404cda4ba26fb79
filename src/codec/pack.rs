//! Four-byte positional packing.
//!
//! Entity codes pack four one-byte fields into one integer with fixed
//! multipliers: `a * 16777216 + b * 65536 + c * 256 + d`. The multipliers
//! are part of the on-chain format and must never change.

use thiserror::Error;

/// Multiplier of the highest packed field.
pub const FIELD_A_SHIFT: u32 = 16_777_216;
/// Multiplier of the second packed field.
pub const FIELD_B_SHIFT: u32 = 65_536;
/// Multiplier of the third packed field.
pub const FIELD_C_SHIFT: u32 = 256;

/// Exclusive upper bound of every packed field.
pub const FIELD_LIMIT: u32 = 256;

/// A packed field that does not fit in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("packed field '{field}' value {value} does not fit in one byte")]
    FieldOverflow { field: &'static str, value: u32 },
}

/// Field names, highest byte first, used in overflow reports.
pub type FieldNames = [&'static str; 4];

/// Generic field names for callers that have no better ones.
pub const ANONYMOUS_FIELDS: FieldNames = ["a", "b", "c", "d"];

/// Packs four one-byte fields, highest first.
///
/// Every field must be below `FIELD_LIMIT`; a larger value would bleed into
/// the neighboring field, so it is reported instead of packed.
pub fn pack4(fields: [u32; 4], names: FieldNames) -> Result<u32, EncodingError> {
    for (value, field) in fields.iter().zip(names) {
        if *value >= FIELD_LIMIT {
            return Err(EncodingError::FieldOverflow {
                field,
                value: *value,
            });
        }
    }
    let [a, b, c, d] = fields;
    Ok(a * FIELD_A_SHIFT + b * FIELD_B_SHIFT + c * FIELD_C_SHIFT + d)
}

/// Splits a packed code back into its four fields by successive division.
pub const fn unpack4(code: u32) -> [u32; 4] {
    let a = code / FIELD_A_SHIFT;
    let rest = code % FIELD_A_SHIFT;
    let b = rest / FIELD_B_SHIFT;
    let rest = rest % FIELD_B_SHIFT;
    [a, b, rest / FIELD_C_SHIFT, rest % FIELD_C_SHIFT]
}
