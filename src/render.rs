//! Plain-text map previews for review before registration.
//!
//! Each cell shows, by priority: a unit letter (`i`/`r`/`t`, upper-case for
//! player one), a headquarters digit (the owning player's id), or the
//! terrain symbol.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::board::{BuildingKind, MapDefinition, Player, Position};
use crate::codec::terrain::RowMajor;

const RULE_WIDTH: usize = 50;

/// The character shown for `pos`.
fn cell_char(
    map: &MapDefinition,
    units: &HashMap<Position, char>,
    hqs: &HashMap<Position, char>,
    pos: Position,
) -> char {
    if let Some(&c) = units.get(&pos) {
        return c;
    }
    if let Some(&c) = hqs.get(&pos) {
        return c;
    }
    map.grid.get(pos).map_or('?', |t| t.symbol())
}

/// Writes a preview of `map` to `out`.
pub fn render_map<W: Write>(map: &MapDefinition, out: &mut W) -> io::Result<()> {
    let units: HashMap<Position, char> = map
        .units
        .iter()
        .map(|u| {
            let c = u.kind.symbol();
            let c = if u.owner == Player::One {
                c.to_ascii_uppercase()
            } else {
                c
            };
            (u.position, c)
        })
        .collect();
    let hqs: HashMap<Position, char> = map
        .buildings
        .iter()
        .filter(|b| b.kind == BuildingKind::Headquarters)
        .filter_map(|b| char::from_digit(u32::from(b.owner.id()), 10).map(|c| (b.position, c)))
        .collect();

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "  {}", map.name)?;
    writeln!(out, "{}", rule)?;

    let header: Vec<String> = (0..map.grid.width()).map(|x| (x % 10).to_string()).collect();
    writeln!(out, "   {}", header.join(" "))?;

    let mut row = Vec::with_capacity(map.grid.width() as usize);
    for pos in RowMajor::new(map.grid.width(), map.grid.height()) {
        row.push(cell_char(map, &units, &hqs, pos).to_string());
        if pos.x + 1 == map.grid.width() {
            writeln!(out, "{:2} {}", pos.y, row.join(" "))?;
            row.clear();
        }
    }

    writeln!(
        out,
        "  Non-grass tiles: {}, Units: {}",
        map.grid.non_default_count(),
        map.units.len()
    )?;
    Ok(())
}

/// Renders a preview of `map` into a string.
pub fn render_to_string(map: &MapDefinition) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_map(map, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Building, Grid, TerrainKind, Unit, UnitKind};

    fn sample() -> MapDefinition {
        let mut grid = Grid::new(3, 2);
        grid.set(Position::new(1, 0), TerrainKind::Mountain);
        grid.set(Position::new(2, 1), TerrainKind::Headquarters);
        MapDefinition::new(
            "tiny",
            grid,
            vec![
                Building::headquarters(Player::One, Position::new(0, 0)),
                Building::headquarters(Player::Two, Position::new(2, 1)),
            ],
            vec![
                Unit::new(Player::One, UnitKind::Tank, Position::new(0, 1)),
                Unit::new(Player::Two, UnitKind::Ranger, Position::new(1, 1)),
            ],
        )
    }

    #[test]
    fn renders_grid_rows() {
        let text = render_to_string(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "  tiny");
        assert_eq!(lines[4], "   0 1 2");
        assert_eq!(lines[5], " 0 1 M .");
        assert_eq!(lines[6], " 1 T r 2");
        assert_eq!(lines[7], "  Non-grass tiles: 2, Units: 2");
    }

    #[test]
    fn units_hide_headquarters_digits() {
        let mut map = sample();
        map.units[0].position = Position::new(0, 0);
        let text = render_to_string(&map);
        assert!(text.lines().any(|l| l == " 0 T M ."));
    }
}
