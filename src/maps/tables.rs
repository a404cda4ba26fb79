//! Authored layouts of the registered maps.
//!
//! Pure data: terrain strokes are applied in order over an all-grass grid,
//! then the headquarters cells are painted. Unit lists are in on-chain order.

use super::layout::{Area, Layout, Stroke};
use crate::board::{Player, TerrainKind, UnitKind};

use Player::{One, Two};
use UnitKind::{Infantry, Ranger, Tank};

/// Diagonal mountain ridge from the northwest to the southeast, with a
/// single dirt-road pass through its middle and tree cover on both flanks.
pub const RIDGELINE: Layout = Layout {
    name: "ridgeline",
    headquarters: [(0, 0), (19, 19)],
    terrain: &[
        // Ridge crest, thickest through the middle
        Stroke::Cells(
            TerrainKind::Mountain,
            &[
                (2, 1), (3, 1), (3, 2), (4, 2), (4, 3), (5, 3), (5, 4), (6, 4), (6, 5), (7, 5),
                (7, 6), (8, 6), (8, 7), (9, 7), (9, 8), (10, 8), (10, 9), (11, 9), (11, 10),
                (12, 10), (12, 11), (13, 11), (13, 12), (14, 12), (14, 13), (15, 13), (15, 14),
                (16, 14), (16, 15), (17, 15), (17, 16), (7, 7), (8, 8), (9, 9), (10, 10),
                (11, 11), (12, 12), (6, 6), (13, 13), (14, 14),
            ],
        ),
        // Pass through the center
        Stroke::Cells(TerrainKind::DirtRoad, &[(9, 8), (10, 9), (9, 9)]),
        // Cover along both flanks of the ridge
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (1, 0), (2, 0), (4, 1), (5, 2), (6, 3), (7, 4), (8, 5), (11, 8), (12, 9),
                (13, 10), (14, 11), (15, 12), (16, 13), (17, 14), (18, 15), (18, 16), (0, 3),
                (1, 4), (2, 5), (0, 6), (1, 7), (19, 13), (18, 12), (17, 11), (19, 16),
                (18, 17), (3, 8), (4, 9), (15, 10), (16, 11),
            ],
        ),
    ],
    units: &[
        (One, Infantry, 1, 1),
        (One, Infantry, 2, 2),
        (One, Infantry, 0, 2),
        (One, Infantry, 1, 3),
        (One, Ranger, 3, 0),
        (One, Ranger, 0, 4),
        (One, Tank, 2, 1),
        (Two, Infantry, 18, 18),
        (Two, Infantry, 17, 17),
        (Two, Infantry, 19, 17),
        (Two, Infantry, 18, 16),
        (Two, Ranger, 16, 19),
        (Two, Ranger, 19, 15),
        (Two, Tank, 17, 18),
    ],
};

/// Tree islands scattered over open grass, short mountain bars forcing
/// detours, and no single chokepoint.
pub const ARCHIPELAGO: Layout = Layout {
    name: "archipelago",
    headquarters: [(1, 0), (18, 19)],
    terrain: &[
        // Tree islands
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (3, 3), (4, 3), (3, 4), (4, 4), (5, 4), (14, 2), (15, 2), (16, 2), (15, 3),
                (16, 3), (2, 9), (3, 9), (2, 10), (3, 10), (4, 10), (15, 9), (16, 9), (17, 9),
                (16, 10), (17, 10), (3, 15), (4, 15), (5, 15), (4, 16), (5, 16), (14, 16),
                (15, 16), (14, 17), (15, 17), (16, 17), (9, 9), (10, 9), (9, 10), (10, 10),
            ],
        ),
        // Short mountain bars, with the center island made rocky
        Stroke::Cells(
            TerrainKind::Mountain,
            &[
                (7, 5), (8, 5), (7, 14), (8, 14), (11, 5), (12, 5), (11, 14), (12, 14), (5, 7),
                (5, 8), (14, 7), (14, 8), (5, 11), (5, 12), (14, 11), (14, 12), (9, 9),
                (10, 10),
            ],
        ),
        // Dirt roads between islands
        Stroke::Cells(
            TerrainKind::DirtRoad,
            &[
                (6, 6), (7, 6), (12, 6), (13, 6), (6, 13), (7, 13), (12, 13), (13, 13),
            ],
        ),
    ],
    units: &[
        (One, Infantry, 0, 0),
        (One, Infantry, 2, 0),
        (One, Infantry, 0, 1),
        (One, Infantry, 2, 1),
        (One, Ranger, 1, 2),
        (One, Ranger, 3, 1),
        (One, Tank, 1, 1),
        (Two, Infantry, 19, 19),
        (Two, Infantry, 17, 19),
        (Two, Infantry, 19, 18),
        (Two, Infantry, 17, 18),
        (Two, Ranger, 18, 17),
        (Two, Ranger, 16, 18),
        (Two, Tank, 18, 18),
    ],
};

/// Forest blocks cut by open lanes; mountains choke the lane crossings and
/// a road runs down the center lane.
pub const AMBUSH: Layout = Layout {
    name: "ambush",
    headquarters: [(0, 0), (19, 19)],
    terrain: &[
        // Forest blocks
        Stroke::Fill(TerrainKind::Tree, Area { xs: 6..10, ys: 2..6 }),
        Stroke::Fill(TerrainKind::Tree, Area { xs: 12..17, ys: 1..5 }),
        Stroke::Fill(TerrainKind::Tree, Area { xs: 3..8, ys: 15..19 }),
        Stroke::Fill(TerrainKind::Tree, Area { xs: 10..14, ys: 14..18 }),
        Stroke::Fill(TerrainKind::Tree, Area { xs: 7..13, ys: 8..12 }),
        // Lanes cut through the forest
        Stroke::Fill(TerrainKind::Grass, Area { xs: 0..20, ys: 10..11 }),
        Stroke::Fill(TerrainKind::Grass, Area { xs: 5..6, ys: 0..20 }),
        Stroke::Fill(TerrainKind::Grass, Area { xs: 14..15, ys: 0..20 }),
        // Chokepoints
        Stroke::Cells(
            TerrainKind::Mountain,
            &[
                (5, 4), (5, 5), (14, 14), (14, 15), (9, 10), (10, 10),
            ],
        ),
        // Road down the open stretch of the center lane
        Stroke::Replace {
            from: TerrainKind::Grass,
            to: TerrainKind::Road,
            area: Area { xs: 6..14, ys: 10..11 },
        },
        // Flank cover
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (0, 7), (1, 7), (0, 12), (1, 12), (18, 7), (19, 7), (18, 12), (19, 12),
            ],
        ),
    ],
    units: &[
        (One, Infantry, 1, 0),
        (One, Infantry, 0, 1),
        (One, Infantry, 2, 1),
        (One, Infantry, 1, 2),
        (One, Ranger, 3, 0),
        (One, Ranger, 0, 3),
        (One, Tank, 1, 1),
        (Two, Infantry, 18, 19),
        (Two, Infantry, 19, 18),
        (Two, Infantry, 17, 18),
        (Two, Infantry, 18, 17),
        (Two, Ranger, 19, 17),
        (Two, Ranger, 17, 19),
        (Two, Tank, 18, 18),
    ],
};

/// Mountainous west half threaded by infantry paths, open east half with
/// scattered trees. Player one starts in the mountains.
pub const CLIFFSIDE: Layout = Layout {
    name: "cliffside",
    headquarters: [(0, 0), (19, 19)],
    terrain: &[
        // Mountain belt on the west half, open around both western corners
        Stroke::Diagonals {
            kind: TerrainKind::Mountain,
            spacing: 3,
            area: Area { xs: 0..10, ys: 0..20 },
            except: &[
                Area { xs: 0..3, ys: 0..3 },
                Area { xs: 0..3, ys: 17..20 },
            ],
        },
        // Infantry paths
        Stroke::Fill(TerrainKind::Grass, Area { xs: 1..2, ys: 0..20 }),
        Stroke::Cells(
            TerrainKind::Grass,
            &[
                (4, 0), (4, 2), (4, 4), (4, 6), (4, 8), (4, 10), (4, 12), (4, 14), (4, 16),
                (4, 18),
            ],
        ),
        Stroke::Cells(
            TerrainKind::Grass,
            &[
                (5, 1), (5, 3), (5, 5), (5, 7), (5, 9), (5, 11), (5, 13), (5, 15), (5, 17),
                (5, 19),
            ],
        ),
        Stroke::Fill(TerrainKind::Grass, Area { xs: 9..10, ys: 0..20 }),
        // Dirt road along the cliff edge
        Stroke::Fill(TerrainKind::DirtRoad, Area { xs: 9..10, ys: 3..17 }),
        // Cover on the open east half
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (12, 3), (13, 3), (12, 4), (16, 6), (17, 6), (16, 7), (11, 10), (12, 10),
                (11, 11), (15, 12), (16, 12), (15, 13), (16, 13), (13, 16), (14, 16), (13, 17),
                (18, 8), (18, 9),
            ],
        ),
        // Cover inside the mountains
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (2, 4), (2, 8), (2, 12), (2, 16), (7, 3), (7, 9), (7, 15),
            ],
        ),
        // Clear ground around the northwest headquarters
        Stroke::Replace {
            from: TerrainKind::Mountain,
            to: TerrainKind::Grass,
            area: Area { xs: 0..3, ys: 0..3 },
        },
    ],
    units: &[
        (One, Infantry, 1, 0),
        (One, Infantry, 0, 1),
        (One, Infantry, 2, 0),
        (One, Infantry, 1, 2),
        (One, Ranger, 2, 1),
        (One, Ranger, 0, 2),
        (One, Tank, 1, 1),
        (Two, Infantry, 18, 19),
        (Two, Infantry, 19, 18),
        (Two, Infantry, 17, 19),
        (Two, Infantry, 18, 17),
        (Two, Ranger, 19, 17),
        (Two, Ranger, 17, 18),
        (Two, Tank, 18, 18),
    ],
};

/// Fortified northern and southern walls around an open center dotted
/// with city ruins.
pub const NO_MANS_LAND: Layout = Layout {
    name: "no_mans_land",
    headquarters: [(10, 0), (10, 19)],
    terrain: &[
        // Northern wall
        Stroke::Cells(
            TerrainKind::Mountain,
            &[
                (3, 3), (4, 3), (5, 3), (7, 3), (8, 3), (11, 3), (12, 3), (14, 3), (15, 3),
                (16, 3),
            ],
        ),
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (2, 1), (3, 1), (4, 1), (6, 2), (7, 2), (12, 2), (13, 2), (17, 1), (18, 1),
                (1, 2), (2, 2), (15, 1), (16, 1), (5, 4), (6, 4), (13, 4), (14, 4), (9, 5),
                (10, 5),
            ],
        ),
        // Southern wall
        Stroke::Cells(
            TerrainKind::Mountain,
            &[
                (3, 16), (4, 16), (5, 16), (8, 16), (9, 16), (10, 16), (14, 16), (15, 16),
                (16, 16),
            ],
        ),
        Stroke::Cells(
            TerrainKind::Tree,
            &[
                (2, 18), (3, 18), (4, 18), (7, 17), (8, 17), (13, 17), (14, 17), (17, 18),
                (18, 18), (1, 17), (2, 17), (16, 17), (17, 17), (5, 15), (6, 15), (13, 15),
                (14, 15), (9, 14), (10, 14),
            ],
        ),
        // City ruins in the open center
        Stroke::Cells(
            TerrainKind::City,
            &[
                (4, 8), (8, 7), (11, 7), (15, 8), (6, 11), (9, 12), (12, 12), (16, 11),
            ],
        ),
        // Dirt roads into the center along both edges
        Stroke::Fill(TerrainKind::DirtRoad, Area { xs: 0..1, ys: 5..8 }),
        Stroke::Fill(TerrainKind::DirtRoad, Area { xs: 19..20, ys: 5..8 }),
        Stroke::Fill(TerrainKind::DirtRoad, Area { xs: 0..1, ys: 12..15 }),
        Stroke::Fill(TerrainKind::DirtRoad, Area { xs: 19..20, ys: 12..15 }),
    ],
    units: &[
        (One, Infantry, 9, 0),
        (One, Infantry, 11, 0),
        (One, Infantry, 8, 1),
        (One, Infantry, 12, 1),
        (One, Ranger, 6, 1),
        (One, Ranger, 14, 1),
        (One, Tank, 10, 1),
        (Two, Infantry, 9, 19),
        (Two, Infantry, 11, 19),
        (Two, Infantry, 8, 18),
        (Two, Infantry, 12, 18),
        (Two, Ranger, 6, 18),
        (Two, Ranger, 14, 18),
        (Two, Tank, 10, 18),
    ],
};
