// coro.rs - Parallel stepping with one coroutine per column
// Every column reads the same frozen snapshot, so the outcome matches the
// sequential scan bit for bit.

use std::sync::Arc;

use tokio::runtime::{Handle, Runtime};
use tracing::debug;

use crate::{Board, LifeError, Stepper};

/// Column coroutine: computes the next state of every cell in column `x`.
async fn process_column(x: usize, snapshot: Arc<Board>) -> Result<(usize, Vec<bool>), LifeError> {
    let mut column = Vec::with_capacity(snapshot.size_y());
    for y in 0..snapshot.size_y() {
        column.push(snapshot.next_state_of(x, y)?);
        tokio::task::yield_now().await; // Cooperative yielding
    }
    Ok((x, column))
}

/// Advances `board` one generation, spawning a task per column.
///
/// Must run inside a tokio runtime.
pub async fn step_columns(board: &mut Board) -> Result<(), LifeError> {
    let snapshot = Arc::new(board.clone());

    let mut handles = Vec::with_capacity(board.size_x());
    for x in 0..board.size_x() {
        handles.push(tokio::spawn(process_column(x, Arc::clone(&snapshot))));
    }

    // Barrier: nothing is committed until every column has reported.
    for handle in handles {
        let (x, column) = handle.await??;
        for (y, next) in column.into_iter().enumerate() {
            board.cell_mut(x, y)?.next_state = next;
        }
    }

    board.commit();
    Ok(())
}

/// Stepper that owns a multi-threaded runtime and runs [`step_columns`] on it.
///
/// [`Stepper::step`] blocks, so it fails with [`LifeError::NestedRuntime`]
/// when called from async code; await [`step_columns`] there instead.
pub struct ColumnStepper {
    runtime: Runtime,
}

impl ColumnStepper {
    pub fn new() -> Result<Self, LifeError> {
        let runtime = Runtime::new()?;
        debug!("started column stepper runtime");
        Ok(Self { runtime })
    }
}

impl Stepper for ColumnStepper {
    fn step(&self, board: &mut Board) -> Result<(), LifeError> {
        if Handle::try_current().is_ok() {
            return Err(LifeError::NestedRuntime);
        }
        self.runtime.block_on(step_columns(board))
    }
}
