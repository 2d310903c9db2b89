// patterns.rs - Fixed cell tables for the scripted phase animation

/// Number of cells in the scripted grid (20 rows x 10 columns).
pub const TOTAL_CELLS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellColor {
    Black,
    Blue,
    Red,
    Green,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// 1-based cell index in [1, TOTAL_CELLS].
    pub number: u16,
    pub color: CellColor,
    pub is_active: bool,
}

// Cell indices are 1-based, row-major over the 20x10 grid.
// Green cells are landmarks that keep their color through every phase.
pub const GREEN_PATTERNS: &[&[u16]] = &[
    &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
    &[191, 192],
];

// [0] drives the blue reveal phase, [1] the combined zigzag.
pub const BLUE_PATTERNS: &[&[u16]] = &[
    &[
        12, 13, 14, 15, 16, 17, 18, 19,
        29, 28, 27, 26, 25, 24, 23, 22,
        32, 33, 34, 35,
    ],
    &[
        101, 112, 123, 134, 145, 156, 167, 178, 189, 200,
        199, 188, 177, 166, 155, 144, 133, 122, 111, 102,
        103, 114, 125, 136,
    ],
];

// [0] drives the red reveal phase, [1] the combined zigzag (half rate).
pub const RED_PATTERNS: &[&[u16]] = &[
    &[
        45, 46, 47, 48, 49, 50,
        60, 59, 58, 57, 56, 55,
        65, 66, 67, 68,
    ],
    &[
        110, 109, 108, 107, 106, 105,
        104, 113, 124, 135, 126, 117,
    ],
];

/// Precomputed index -> color membership, replacing per-cell linear
/// scans of the tables above.
pub struct Membership {
    green: [bool; TOTAL_CELLS + 1],
    blue: [bool; TOTAL_CELLS + 1],
    red: [bool; TOTAL_CELLS + 1],
}

impl Membership {
    pub fn new() -> Self {
        let mut m = Self {
            green: [false; TOTAL_CELLS + 1],
            blue: [false; TOTAL_CELLS + 1],
            red: [false; TOTAL_CELLS + 1],
        };
        for (table, flags) in [
            (GREEN_PATTERNS, &mut m.green),
            (BLUE_PATTERNS, &mut m.blue),
            (RED_PATTERNS, &mut m.red),
        ] {
            for list in table {
                for &n in *list {
                    // Indices outside the grid are ignored, not errors
                    if (1..=TOTAL_CELLS as u16).contains(&n) {
                        flags[n as usize] = true;
                    }
                }
            }
        }
        m
    }

    pub fn is_green(&self, number: u16) -> bool {
        (1..=TOTAL_CELLS as u16).contains(&number) && self.green[number as usize]
    }

    pub fn is_blue(&self, number: u16) -> bool {
        (1..=TOTAL_CELLS as u16).contains(&number) && self.blue[number as usize]
    }

    pub fn is_red(&self, number: u16) -> bool {
        (1..=TOTAL_CELLS as u16).contains(&number) && self.red[number as usize]
    }
}

impl Default for Membership {
    fn default() -> Self {
        Self::new()
    }
}

/// Base state of all 200 cells before any animation runs.
/// Color precedence on overlapping tables: green > blue > red > black.
pub fn initial_cells() -> Vec<Cell> {
    let membership = Membership::new();
    (1..=TOTAL_CELLS as u16)
        .map(|number| {
            let color = if membership.is_green(number) {
                CellColor::Green
            } else if membership.is_blue(number) {
                CellColor::Blue
            } else if membership.is_red(number) {
                CellColor::Red
            } else {
                CellColor::Black
            };
            Cell {
                number,
                color,
                is_active: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_cells_covers_the_grid() {
        let cells = initial_cells();
        assert_eq!(cells.len(), TOTAL_CELLS);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.number as usize, i + 1);
            assert!(!cell.is_active);
        }
    }

    #[test]
    fn first_cell_is_green_and_inactive() {
        let cells = initial_cells();
        assert_eq!(cells[0].color, CellColor::Green);
        assert!(!cells[0].is_active);
    }

    #[test]
    fn green_cells_are_exactly_the_landmarks() {
        let cells = initial_cells();
        let expected = [1u16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 191, 192];
        for cell in &cells {
            assert_eq!(
                cell.color == CellColor::Green,
                expected.contains(&cell.number),
                "cell {}",
                cell.number
            );
        }
    }

    #[test]
    fn blue_phase_pattern_shape() {
        assert_eq!(BLUE_PATTERNS[0].len(), 20);
        assert_eq!(BLUE_PATTERNS[0][0], 12);
        assert_eq!(RED_PATTERNS[0].len(), 16);
    }

    #[test]
    fn pattern_tables_stay_clear_of_green_cells() {
        let membership = Membership::new();
        for list in BLUE_PATTERNS.iter().chain(RED_PATTERNS.iter()) {
            for &n in *list {
                assert!(!membership.is_green(n), "cell {n} is green-listed");
            }
        }
    }

    #[test]
    fn combined_lists_do_not_overlap() {
        for &b in BLUE_PATTERNS[1] {
            assert!(!RED_PATTERNS[1].contains(&b), "cell {b} in both lists");
        }
    }

    #[test]
    fn membership_rejects_out_of_range_indices() {
        let membership = Membership::new();
        assert!(!membership.is_green(0));
        assert!(!membership.is_blue(201));
        assert!(!membership.is_red(u16::MAX));
    }
}
