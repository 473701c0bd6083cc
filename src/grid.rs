//! Neighbourhood topology of the objects.
//!
//! Objects are laid out row-major on a `rows x cols` grid. The neighbours of an
//! object are the cells right below it and below-left of it:
//!
//! ```text
//! - - -
//! - 0 -
//! x x -
//! ```
//!
//! Columns wrap around (the cell left of column 0 is in the last column), rows
//! do not, so objects in the bottom row have no neighbours.

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Below,
    BelowLeft,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Below, Direction::BelowLeft];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Below => write!(f, "below"),
            Direction::BelowLeft => write!(f, "below-left"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must be non-empty");
        Grid { rows, cols }
    }

    pub fn size(&self) -> usize {
        self.rows * self.cols
    }

    /// Neighbour of `object` in the given direction, if any.
    pub fn neighbor(&self, object: usize, direction: Direction) -> Option<usize> {
        assert!(object < self.size(), "object {} is outside of the grid", object);
        let row = object / self.cols;
        let col = object % self.cols;
        if row + 1 >= self.rows {
            return None;
        }
        let col = match direction {
            Direction::Below => col,
            Direction::BelowLeft => (col + self.cols - 1) % self.cols,
        };
        Some((row + 1) * self.cols + col)
    }

    /// All distinct neighbours of `object`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, object: usize) -> Vec<usize> {
        let mut result = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            if let Some(n) = self.neighbor(object, direction) {
                // A single column makes both directions point to the same cell
                if !result.contains(&n) {
                    result.push(n);
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_neighbors_3x3() {
        // 0 1 2
        // 3 4 5
        // 6 7 8
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbor(4, Direction::Below), Some(7));
        assert_eq!(grid.neighbor(4, Direction::BelowLeft), Some(6));
        assert_eq!(grid.neighbors(1), vec![4, 3]);
    }

    #[test]
    fn test_horizontal_wrap() {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbor(0, Direction::BelowLeft), Some(5));
        assert_eq!(grid.neighbor(3, Direction::BelowLeft), Some(8));
        assert_eq!(grid.neighbors(0), vec![3, 5]);
    }

    #[test]
    fn test_bottom_row() {
        let grid = Grid::new(3, 3);
        for object in 6..9 {
            for direction in Direction::ALL {
                assert_eq!(grid.neighbor(object, direction), None);
            }
            assert!(grid.neighbors(object).is_empty());
        }
    }

    #[test]
    fn test_single_column() {
        let grid = Grid::new(2, 1);
        assert_eq!(grid.neighbors(0), vec![1]);
    }
}
