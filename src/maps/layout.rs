//! Declarative map layouts and the painter that turns them into maps.
//!
//! A `Layout` is static data: a list of terrain strokes, the two
//! headquarters cells, and the unit roster. `Layout::build` paints the
//! strokes in order over an all-grass standard grid, paints both
//! headquarters cells, and attaches the buildings and units.

use std::ops::Range;

use tracing::trace;

use crate::board::{Building, Grid, MapDefinition, Player, Position, TerrainKind, Unit, UnitKind};
use crate::validate::{Subject, ValidationError};

/// A rectangle of cells: columns `xs`, rows `ys` (both half-open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub xs: Range<u8>,
    pub ys: Range<u8>,
}

impl Area {
    pub fn contains(&self, pos: Position) -> bool {
        self.xs.contains(&pos.x) && self.ys.contains(&pos.y)
    }

    /// Cells of the area, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.ys
            .clone()
            .flat_map(move |y| self.xs.clone().map(move |x| Position::new(x, y)))
    }
}

/// One terrain painting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    /// Paint each listed `(x, y)` cell.
    Cells(TerrainKind, &'static [(u8, u8)]),
    /// Paint every cell of the area.
    Fill(TerrainKind, Area),
    /// Repaint cells of the area currently holding `from`.
    Replace {
        from: TerrainKind,
        to: TerrainKind,
        area: Area,
    },
    /// Paint every cell of `area` with `(x + y) % spacing == 0`, skipping
    /// cells inside any of the `except` areas.
    Diagonals {
        kind: TerrainKind,
        spacing: u8,
        area: Area,
        except: &'static [Area],
    },
}

/// The authored content of one map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    /// Headquarters cells of player one and player two.
    pub headquarters: [(u8, u8); 2],
    pub terrain: &'static [Stroke],
    /// `(owner, kind, x, y)` in on-chain order.
    pub units: &'static [(Player, UnitKind, u8, u8)],
}

impl Layout {
    /// Paints the layout into a map definition.
    ///
    /// Any stroke touching a cell outside the grid fails the build rather
    /// than being dropped.
    pub fn build(&self) -> Result<MapDefinition, ValidationError> {
        let mut grid = Grid::standard();
        for stroke in self.terrain {
            paint(&mut grid, stroke)?;
        }

        let [(x1, y1), (x2, y2)] = self.headquarters;
        let hq1 = Position::new(x1, y1);
        let hq2 = Position::new(x2, y2);
        set_cell(&mut grid, hq1, TerrainKind::Headquarters)?;
        set_cell(&mut grid, hq2, TerrainKind::Headquarters)?;

        let buildings = vec![
            Building::headquarters(Player::One, hq1),
            Building::headquarters(Player::Two, hq2),
        ];
        let units = self
            .units
            .iter()
            .map(|&(owner, kind, x, y)| Unit::new(owner, kind, Position::new(x, y)))
            .collect();

        trace!(map = self.name, tiles = grid.non_default_count(), "painted layout");
        Ok(MapDefinition::new(self.name, grid, buildings, units))
    }
}

fn set_cell(grid: &mut Grid, pos: Position, kind: TerrainKind) -> Result<(), ValidationError> {
    if grid.set(pos, kind) {
        Ok(())
    } else {
        Err(ValidationError::OutOfBounds {
            subject: Subject::Terrain,
            position: pos,
        })
    }
}

fn paint(grid: &mut Grid, stroke: &Stroke) -> Result<(), ValidationError> {
    match stroke {
        Stroke::Cells(kind, cells) => {
            for &(x, y) in cells.iter() {
                set_cell(grid, Position::new(x, y), *kind)?;
            }
        }
        Stroke::Fill(kind, area) => {
            for pos in area.cells() {
                set_cell(grid, pos, *kind)?;
            }
        }
        Stroke::Replace { from, to, area } => {
            for pos in area.cells() {
                match grid.get(pos) {
                    Some(current) if current == *from => set_cell(grid, pos, *to)?,
                    Some(_) => {}
                    None => {
                        return Err(ValidationError::OutOfBounds {
                            subject: Subject::Terrain,
                            position: pos,
                        })
                    }
                }
            }
        }
        Stroke::Diagonals {
            kind,
            spacing,
            area,
            except,
        } => {
            let spacing = u16::from((*spacing).max(1));
            for pos in area.cells() {
                let on_diagonal = (u16::from(pos.x) + u16::from(pos.y)) % spacing == 0;
                if on_diagonal && !except.iter().any(|a| a.contains(pos)) {
                    set_cell(grid, pos, *kind)?;
                }
            }
        }
    }
    Ok(())
}
