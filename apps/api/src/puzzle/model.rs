//! Grid and placement types for the crossword placement engine.

use serde::{Deserialize, Serialize};

/// Orientation of a placed word. No diagonal placements exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// A fixed-size square letter grid.
///
/// Each cell holds either an uppercase letter or nothing. The grid is created
/// once per generation call and never resized; only the placement engine
/// writes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at `(row, col)`, or `None` for an empty cell.
    /// Out-of-range coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn set(&mut self, row: usize, col: usize, letter: char) {
        if row < self.size && col < self.size {
            self.cells[row][col] = Some(letter);
        }
    }

    /// Row-major view of the cells, in the wire shape (letter-or-null).
    pub fn cells(&self) -> &[Vec<Option<char>>] {
        &self.cells
    }
}

/// An accepted assignment of a word to a starting cell and orientation.
/// Immutable once committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
}

impl WordPlacement {
    /// The grid coordinates this placement occupies, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col, dir) = (self.start_row, self.start_col, self.direction);
        (0..self.word.len()).map(move |i| match dir {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
        })
    }
}

/// The outcome of one generation call: the filled grid plus every placement
/// that was committed, in commit order. Words that could not be connected are
/// simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct CrosswordResult {
    pub grid: Grid,
    pub width: usize,
    pub height: usize,
    pub placements: Vec<WordPlacement>,
}
