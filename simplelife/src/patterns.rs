// patterns.rs - Named starting patterns, as (x, y) offsets from an origin

use crate::{Board, LifeError};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Width and height of the pattern's bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| {
            (w.max(x + 1), h.max(y + 1))
        })
    }

    /// Origin that centres the pattern on `board`, or `None` if it does not fit.
    pub fn centred_origin(&self, board: &Board) -> Option<(usize, usize)> {
        let (w, h) = self.extent();
        let x = board.size_x().checked_sub(w)? / 2;
        let y = board.size_y().checked_sub(h)? / 2;
        Some((x, y))
    }

    /// Board coordinates of a pattern cell placed at `origin`.
    fn offset(origin: (usize, usize), cell: (usize, usize)) -> Result<(usize, usize), LifeError> {
        let (ox, oy) = origin;
        let overflow = || LifeError::OriginOverflow { x: ox, y: oy };
        let x = ox.checked_add(cell.0).ok_or_else(overflow)?;
        let y = oy.checked_add(cell.1).ok_or_else(overflow)?;
        Ok((x, y))
    }

    /// Fails unless every cell lands on `board` when placed at `origin`.
    pub fn check_fit(&self, board: &Board, origin: (usize, usize)) -> Result<(), LifeError> {
        let (w, h) = self.extent();
        if w == 0 || h == 0 {
            return Ok(());
        }
        // Every cell lies inside the bounding box, so its far corner decides.
        let (x, y) = Self::offset(origin, (w - 1, h - 1))?;
        board.cell(x, y)?;
        Ok(())
    }

    /// Sets the pattern's cells alive, offset by `origin`. Other cells are
    /// untouched, and nothing is written if any cell would miss the board.
    pub fn place(&self, board: &mut Board, origin: (usize, usize)) -> Result<(), LifeError> {
        self.check_fit(board, origin)?;
        for &cell in self.cells {
            let (x, y) = Self::offset(origin, cell)?;
            board.set(x, y, true)?;
        }
        Ok(())
    }
}

/// Clears `board` and places `pattern` at `origin`.
///
/// The board is left as it was if the pattern does not fit.
pub fn apply_pattern(
    board: &mut Board,
    pattern: &Pattern,
    origin: (usize, usize),
) -> Result<(), LifeError> {
    pattern.check_fit(board, origin)?;
    board.clear();
    pattern.place(board, origin)
}
