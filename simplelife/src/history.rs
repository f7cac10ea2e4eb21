// history.rs - Detects a board revisiting one of its recent generations

use crate::Board;

const HISTORY_LEN: usize = 10;

/// Ring of the last few board fingerprints.
#[derive(Debug, Default, Clone)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `board` and reports whether it repeats a remembered generation.
    /// A repeated generation is not recorded again.
    pub fn observe(&mut self, board: &Board) -> bool {
        let hash = board.fingerprint();
        let seen = self.count.min(HISTORY_LEN);
        if self.history[..seen].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
