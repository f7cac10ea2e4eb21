// step.rs - Generation transition

use tracing::trace;

use crate::{Board, LifeError};

/// Conway's rule for one cell given its living neighbour count.
pub fn transition(alive: bool, living_neighbours: u8) -> bool {
    match (alive, living_neighbours) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

impl Board {
    /// The state `(x, y)` takes in the next generation.
    pub fn next_state_of(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        let alive = self.get(x, y)?;
        Ok(transition(alive, self.count_living(x, y)?))
    }

    /// Advances every cell by one generation.
    ///
    /// All `next_state` values are computed from the current generation
    /// before any `alive` flag changes.
    pub fn step(&mut self) -> Result<(), LifeError> {
        for x in 0..self.size_x() {
            for y in 0..self.size_y() {
                let next = self.next_state_of(x, y)?;
                self.cell_mut(x, y)?.next_state = next;
            }
        }
        self.commit();
        trace!(size_x = self.size_x(), size_y = self.size_y(), "stepped board");
        Ok(())
    }
}

/// Something that can advance a board by one generation.
pub trait Stepper {
    fn step(&self, board: &mut Board) -> Result<(), LifeError>;
}

/// Single-threaded full-board scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sequential;

impl Stepper for Sequential {
    fn step(&self, board: &mut Board) -> Result<(), LifeError> {
        board.step()
    }
}
