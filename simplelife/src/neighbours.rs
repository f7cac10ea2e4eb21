// neighbours.rs - Neighbour counting with the dead outer ring

use crate::{Board, LifeError};

/// The 8 neighbour offsets: top row left to right, then left and right,
/// then bottom row left to right.
#[rustfmt::skip]
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Board {
    /// Number of living neighbours of `(x, y)`.
    ///
    /// Any cell on the outer ring, or outside the board, reports 0 without
    /// looking at a neighbour. This ring guard is what keeps the border dead.
    pub fn count_living(&self, x: usize, y: usize) -> Result<u8, LifeError> {
        if x == 0 || x >= self.size_x().saturating_sub(1) {
            return Ok(0);
        }
        if y == 0 || y >= self.size_y().saturating_sub(1) {
            return Ok(0);
        }
        self.count_matching(x, y, true)
    }

    /// Number of dead neighbours of `(x, y)`.
    ///
    /// The guard only rejects `x == 0`, `y == 0` and coordinates outside the
    /// board, so the last column and row are not short-circuited: their
    /// neighbour beyond the edge is out of range and the call fails with
    /// [`LifeError::IndexOutOfRange`].
    pub fn count_dead(&self, x: usize, y: usize) -> Result<u8, LifeError> {
        if x == 0 || x >= self.size_x() {
            return Ok(0);
        }
        if y == 0 || y >= self.size_y() {
            return Ok(0);
        }
        self.count_matching(x, y, false)
    }

    fn count_matching(&self, x: usize, y: usize, alive: bool) -> Result<u8, LifeError> {
        let mut count = 0;
        for (dx, dy) in OFFSETS {
            // Callers guarantee x, y >= 1 and x, y < usize::MAX.
            let nx = x.wrapping_add_signed(dx);
            let ny = y.wrapping_add_signed(dy);
            if self.get(nx, ny)? == alive {
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size_x: usize, size_y: usize, living: &[(usize, usize)]) -> Board {
        let mut board = Board::new(size_x, size_y).unwrap();
        for &(x, y) in living {
            board.set(x, y, true).unwrap();
        }
        board
    }

    #[test]
    fn counts_all_eight_neighbours() {
        let board = board_with(
            5,
            5,
            &[(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)],
        );
        assert_eq!(board.count_living(2, 2).unwrap(), 8);
        assert_eq!(board.count_dead(2, 2).unwrap(), 0);
    }

    #[test]
    fn centre_cell_is_not_its_own_neighbour() {
        let board = board_with(5, 5, &[(2, 2)]);
        assert_eq!(board.count_living(2, 2).unwrap(), 0);
        assert_eq!(board.count_dead(2, 2).unwrap(), 8);
    }

    #[test]
    fn living_and_dead_sum_to_eight_inside() {
        let board = board_with(6, 6, &[(1, 1), (2, 3), (3, 2), (4, 4)]);
        for x in 1..5 {
            for y in 1..5 {
                let living = board.count_living(x, y).unwrap();
                let dead = board.count_dead(x, y).unwrap();
                assert_eq!(living + dead, 8, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn outer_ring_has_no_living_neighbours() {
        let mut board = Board::new(5, 5).unwrap();
        for x in 0..5 {
            for y in 0..5 {
                board.set(x, y, true).unwrap();
            }
        }
        for i in 0..5 {
            assert_eq!(board.count_living(0, i).unwrap(), 0);
            assert_eq!(board.count_living(4, i).unwrap(), 0);
            assert_eq!(board.count_living(i, 0).unwrap(), 0);
            assert_eq!(board.count_living(i, 4).unwrap(), 0);
        }
        assert_eq!(board.count_living(2, 2).unwrap(), 8);
    }

    #[test]
    fn coordinates_past_the_board_count_nothing() {
        let board = board_with(5, 5, &[(2, 2)]);
        assert_eq!(board.count_living(9, 2).unwrap(), 0);
        assert_eq!(board.count_dead(5, 2).unwrap(), 0);
        assert_eq!(board.count_dead(2, 5).unwrap(), 0);
        assert_eq!(board.count_dead(usize::MAX, usize::MAX).unwrap(), 0);
    }

    #[test]
    fn dead_count_guard_differs_on_last_column_and_row() {
        let board = Board::new(5, 5).unwrap();

        // The living guard stops at size - 1...
        assert_eq!(board.count_living(4, 2).unwrap(), 0);
        assert_eq!(board.count_living(2, 4).unwrap(), 0);

        // ...the dead guard does not, and its read past the edge is caught.
        assert!(matches!(
            board.count_dead(4, 2),
            Err(LifeError::IndexOutOfRange { x: 5, y: 1, .. })
        ));
        assert!(matches!(
            board.count_dead(2, 4),
            Err(LifeError::IndexOutOfRange { x: 1, y: 5, .. })
        ));

        // Both agree on the first row and column.
        assert_eq!(board.count_dead(0, 2).unwrap(), 0);
        assert_eq!(board.count_dead(2, 0).unwrap(), 0);
        assert_eq!(board.count_dead(3, 3).unwrap(), 8);
    }
}
