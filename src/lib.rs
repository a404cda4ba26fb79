//! Hashfront map library.
//!
//! Authors fixed-size battle maps, validates their structure, and encodes
//! them into the calldata accepted by the on-chain `register_map` entry
//! point. Exposes the board model, codecs, validator, authored map catalog,
//! previews, and submission client for the binary and integration tests.

pub mod board;
pub mod codec;
pub mod config;
pub mod maps;
pub mod pipeline;
pub mod render;
pub mod submit;
pub mod validate;

pub use pipeline::{encode_map, encode_validated, MapError};
