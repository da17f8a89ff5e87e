// patterns.rs - Seed constellations, as (dx, dy) offsets from a start cell

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Extent of the constellation as `(width, height)`.
    pub fn bounds(&self) -> (i32, i32) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(dx, dy)| (w.max(dx + 1), h.max(dy + 1)))
    }
}

//   .#.
//   ..#
//   ###
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Upper half of a pulsar: two bars of three above and below, four
/// columns of three between them.
pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Bars
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        // Columns
        (0, 2), (0, 3), (0, 4), (5, 2), (5, 3), (5, 4),
        (7, 2), (7, 3), (7, 4), (12, 2), (12, 3), (12, 4),
    ],
};

pub const GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        // Left square
        (1, 5), (2, 5), (1, 6), (2, 6),
        // Left body
        (11, 5), (11, 6), (11, 7), (12, 4), (12, 8), (13, 3), (13, 9),
        (14, 3), (14, 9), (15, 6), (16, 4), (16, 8), (17, 5), (17, 6),
        (17, 7), (18, 6),
        // Right body
        (21, 3), (21, 4), (21, 5), (22, 3), (22, 4), (22, 5), (23, 2),
        (23, 6), (25, 1), (25, 2), (25, 6), (25, 7),
        // Right square
        (35, 3), (35, 4), (36, 3), (36, 4),
    ],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, PULSAR, GLIDER_GUN];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cell_counts() {
        assert_eq!(GLIDER.cells.len(), 5);
        assert_eq!(BLINKER.cells.len(), 3);
        assert_eq!(PULSAR.cells.len(), 24);
        assert_eq!(GLIDER_GUN.cells.len(), 36);
    }

    #[test]
    fn no_duplicate_offsets() {
        for pattern in PATTERNS {
            let unique: HashSet<_> = pattern.cells.iter().collect();
            assert_eq!(unique.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn gun_spans_37_by_10() {
        assert_eq!(GLIDER_GUN.bounds(), (37, 10));
        assert_eq!(GLIDER.bounds(), (3, 3));
    }
}
