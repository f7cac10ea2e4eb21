// seed.rs - Random seeding with an injected source of randomness

use rand::Rng;

use crate::{Board, LifeError};

/// Chance of a cell starting alive when no density is given.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Overwrites every cell of `board`, each alive with probability `density`.
pub fn seed_random<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    density: f64,
) -> Result<(), LifeError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::Density(density));
    }
    for x in 0..board.size_x() {
        for y in 0..board.size_y() {
            board.set(x, y, rng.random_bool(density))?;
        }
    }
    Ok(())
}
