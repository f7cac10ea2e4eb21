// grid.rs - Board storage for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use tracing::{debug, trace};

use crate::LifeError;

/// One board position.
///
/// `next_state` is scratch space for [`Board::step`]; outside a step its
/// value carries no meaning, so only the stepping code can touch it.
///
/// ```compile_fail
/// let mut cell = simplelife::Cell::default();
/// cell.next_state = true;
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub(crate) next_state: bool,
}

/// A fixed `size_x` x `size_y` board stored column by column in one buffer.
///
/// Cell `(x, y)` lives at `x * size_y + y`, so iterating the buffer in order
/// visits columns on the outside and rows on the inside.
///
/// Two boards are equal when they have the same size and the same living
/// cells; scratch `next_state` values are ignored.
#[derive(Debug, Clone)]
pub struct Board {
    size_x: usize,
    size_y: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocates a board with every cell dead.
    pub fn new(size_x: usize, size_y: usize) -> Result<Self, LifeError> {
        let allocation = LifeError::Allocation { size_x, size_y };
        if size_x == 0 || size_y == 0 {
            return Err(allocation);
        }
        let Some(len) = size_x.checked_mul(size_y) else {
            return Err(allocation);
        };

        let mut cells = Vec::new();
        if cells.try_reserve_exact(len).is_err() {
            return Err(allocation);
        }
        cells.resize(len, Cell::default());

        debug!(size_x, size_y, "created board");
        Ok(Self { size_x, size_y, cells })
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// The single bounds check every cell access goes through.
    pub(crate) fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x >= self.size_x || y >= self.size_y {
            return Err(LifeError::IndexOutOfRange {
                x,
                y,
                size_x: self.size_x,
                size_y: self.size_y,
            });
        }
        Ok(x * self.size_y + y)
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, LifeError> {
        let index = self.index(x, y)?;
        Ok(&self.cells[index])
    }

    pub(crate) fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, LifeError> {
        let index = self.index(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Whether the cell at `(x, y)` is alive.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        Ok(self.cell(x, y)?.alive)
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        self.cell_mut(x, y)?.alive = alive;
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells in storage order: `x` outer, `y` inner.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of every living cell, `x` outer, `y` inner.
    pub fn living(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size_y = self.size_y;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(move |(index, _)| (index / size_y, index % size_y))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Hash of the living/dead plane, used to spot repeating generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.size_x.hash(&mut hasher);
        self.size_y.hash(&mut hasher);
        for cell in &self.cells {
            cell.alive.hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Copies every `next_state` into `alive`.
    pub(crate) fn commit(&mut self) {
        for cell in &mut self.cells {
            cell.alive = cell.next_state;
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size_x == other.size_x
            && self.size_y == other.size_y
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.alive == b.alive)
    }
}

impl Eq for Board {}

/// Releases the board held in `slot`, if any.
///
/// Calling it again, or on an empty slot, does nothing.
pub fn destroy(slot: &mut Option<Board>) {
    match slot.take() {
        Some(board) => {
            debug!(size_x = board.size_x, size_y = board.size_y, "destroyed board");
            drop(board);
        }
        None => trace!("destroy on an empty slot"),
    }
}
