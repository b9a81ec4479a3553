//! Built-in patterns.
//!
//! Offsets are `(row, col)` relative to the top-left of each shape's
//! bounding box.

use crate::pattern::Pattern;

/// Gosper glider gun: 36 cells in a 9x36 box, emits a glider every 30
/// generations heading down-right.
pub const GLIDER_GUN: Pattern = Pattern::fixed(
    "glider_gun",
    &[
        // left block
        (4, 0), (4, 1), (5, 0), (5, 1),
        // left queen-bee section
        (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
        (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
        (6, 16), (5, 17),
        // right section
        (2, 20), (3, 20), (4, 20), (2, 21), (3, 21), (4, 21), (1, 22),
        (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
        // right block
        (2, 34), (3, 34), (2, 35), (3, 35),
    ],
);

/// Period-4 glider travelling `(+1, +1)` per cycle.
pub const GLIDER: Pattern = Pattern::fixed("glider", &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);

/// Horizontal period-2 blinker.
pub const BLINKER: Pattern = Pattern::fixed("blinker", &[(0, 0), (0, 1), (0, 2)]);

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern::fixed("block", &[(0, 0), (0, 1), (1, 0), (1, 1)]);

/// Period-2 toad.
pub const TOAD: Pattern = Pattern::fixed(
    "toad",
    &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
);

/// Period-2 beacon.
pub const BEACON: Pattern = Pattern::fixed(
    "beacon",
    &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
);

/// Period-3 pulsar, 48 cells in a 13x13 box.
pub const PULSAR: Pattern = Pattern::fixed(
    "pulsar",
    &[
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
);

/// R-pentomino methuselah.
pub const R_PENTOMINO: Pattern = Pattern::fixed(
    "r_pentomino",
    &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
);

/// Every built-in pattern, in catalogue order.
pub const BUILTIN: [Pattern; 8] = [
    GLIDER_GUN,
    GLIDER,
    BLINKER,
    BLOCK,
    TOAD,
    BEACON,
    PULSAR,
    R_PENTOMINO,
];
