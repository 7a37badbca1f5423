//! Display numbering for puzzle placements.
//!
//! Crossword convention: starting cells are numbered 1, 2, 3… reading the
//! grid top-to-bottom, left-to-right, and an across word and a down word that
//! start in the same cell share a number.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::puzzle::model::{Direction, WordPlacement};

/// A placement annotated with its display number. This is what the API
/// returns; the engine's own result stays number-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedPlacement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub number: u32,
}

/// Attaches display numbers to placements.
///
/// Numbers are assigned to distinct starting cells in (row, col) order;
/// placements sharing a starting cell share a number. The returned list
/// preserves the placements' commit order; only the numbers follow the
/// reading order.
pub fn assign_numbers(placements: &[WordPlacement]) -> Vec<NumberedPlacement> {
    // BTreeMap keyed by (row, col) iterates in exactly the reading order the
    // numbering needs.
    let mut numbers: BTreeMap<(usize, usize), u32> = placements
        .iter()
        .map(|p| ((p.start_row, p.start_col), 0))
        .collect();
    for (next, number) in numbers.values_mut().enumerate() {
        *number = next as u32 + 1;
    }

    placements
        .iter()
        .map(|p| NumberedPlacement {
            word: p.word.clone(),
            start_row: p.start_row,
            start_col: p.start_col,
            direction: p.direction,
            number: numbers[&(p.start_row, p.start_col)],
        })
        .collect()
}
