//! The authored map catalog.
//!
//! Layouts are plain data tables (see `tables`); `layout` paints them into
//! `MapDefinition`s. Catalog order is registration order.

pub mod layout;
pub mod tables;

pub use layout::{Area, Layout, Stroke};

use crate::board::MapDefinition;
use crate::validate::ValidationError;

/// Every authored layout, in registration order.
pub static CATALOG: [&Layout; 5] = [
    &tables::RIDGELINE,
    &tables::ARCHIPELAGO,
    &tables::AMBUSH,
    &tables::CLIFFSIDE,
    &tables::NO_MANS_LAND,
];

/// Names of the authored maps, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|l| l.name)
}

/// Looks up an authored layout by name.
pub fn find(name: &str) -> Option<&'static Layout> {
    CATALOG.iter().copied().find(|l| l.name == name)
}

/// Builds every authored map, in registration order.
pub fn build_all() -> Result<Vec<MapDefinition>, ValidationError> {
    CATALOG.iter().map(|l| l.build()).collect()
}
