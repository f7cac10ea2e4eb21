// lib.rs - Conway's Game of Life on a fixed board with a dead outer ring

pub mod coro;      // Column coroutine stepper
pub mod error;
pub mod grid;      // Board and cell storage
pub mod history;   // Cycle detection
pub mod neighbours;
pub mod patterns;
pub mod raster;    // PPM / PNG output
pub mod seed;
pub mod step;

pub use coro::ColumnStepper;
pub use error::LifeError;
pub use grid::{destroy, Board, Cell};
pub use history::CycleDetector;
pub use patterns::{find_pattern, Pattern, PATTERNS};
pub use raster::RasterFormat;
pub use step::{Sequential, Stepper};
