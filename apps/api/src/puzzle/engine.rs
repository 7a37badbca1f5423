//! Placement Engine — puts an ordered word list onto a fixed-size grid.
//!
//! # Placement rules
//! - First word: horizontal, centered. Accepted unless longer than the grid.
//! - Every later word: must cross an already-placed word at a shared letter.
//! - Candidate checks, in order, short-circuiting: bounds → letter conflicts
//!   → perpendicular-word tolerance → connectivity.
//! - First-fit: the first passing candidate is committed. No backtracking,
//!   no comparison of alternatives. A word with no passing candidate is
//!   dropped from the result without error.
//!
//! The whole computation is synchronous and allocation-only; callers on the
//! request path run it inside `tokio::task::spawn_blocking`.

use crate::puzzle::model::{CrosswordResult, Direction, Grid, WordPlacement};

/// Grid dimension used when the caller does not specify one.
pub const DEFAULT_GRID_SIZE: usize = 15;

/// One word-per-five tolerance for accidental perpendicular words.
const UNINTENDED_WORDS_PER_INTENDED: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Owns one generation run: the word list, the grid dimension, and the
/// tolerance derived from the list length. Construct fresh per call; the
/// engine holds no state between `generate` invocations.
pub struct PlacementEngine {
    words: Vec<String>,
    grid_size: usize,
    /// Ceiling on accidental perpendicular words per candidate. This is a
    /// static puzzle-wide value checked locally at each candidate, not a
    /// running budget decremented across placements.
    max_unintended: usize,
}

impl PlacementEngine {
    /// Words are normalized to uppercase here; charset and length sanitation
    /// is the caller's job.
    pub fn new(words: Vec<String>, grid_size: usize) -> Self {
        let max_unintended = (words.len() / UNINTENDED_WORDS_PER_INTENDED).max(1);
        Self {
            words: words.into_iter().map(|w| w.to_ascii_uppercase()).collect(),
            grid_size,
            max_unintended,
        }
    }

    /// Runs the full placement pass and returns the grid plus every committed
    /// placement, in commit order. Never fails: unplaceable words (including
    /// a first word longer than the grid) are silently absent from the
    /// output, and callers detect that by counting placements.
    pub fn generate(&self) -> CrosswordResult {
        let mut grid = Grid::new(self.grid_size);
        let mut placements: Vec<WordPlacement> = Vec::new();

        let mut remaining = self.words.iter();

        // First word: horizontal, centered. Row is size/2; the column
        // centering goes negative for an oversized word and the bounds check
        // rejects it, leaving the result empty.
        if let Some(first) = remaining.next() {
            let start_row = (self.grid_size / 2) as isize;
            let start_col = (self.grid_size as isize - first.len() as isize) / 2;
            if self.place_word(&mut grid, first, start_row, start_col, Direction::Horizontal) {
                placements.push(WordPlacement {
                    word: first.clone(),
                    start_row: start_row as usize,
                    start_col: start_col as usize,
                    direction: Direction::Horizontal,
                });
            }
        }

        for word in remaining {
            let mut accepted: Option<WordPlacement> = None;

            'candidates: for placed in &placements {
                for (word_idx, placed_idx) in find_intersections(word, &placed.word) {
                    // A crossing at (word_idx, placed_idx) pins the new word
                    // perpendicular to the placed one.
                    let (row, col, direction) = match placed.direction {
                        Direction::Horizontal => (
                            placed.start_row as isize - word_idx as isize,
                            placed.start_col as isize + placed_idx as isize,
                            Direction::Vertical,
                        ),
                        Direction::Vertical => (
                            placed.start_row as isize + placed_idx as isize,
                            placed.start_col as isize - word_idx as isize,
                            Direction::Horizontal,
                        ),
                    };

                    if self.can_place(&grid, word, row, col, direction, true) {
                        accepted = Some(WordPlacement {
                            word: word.clone(),
                            start_row: row as usize,
                            start_col: col as usize,
                            direction,
                        });
                        break 'candidates;
                    }
                }
            }

            // First fit wins; a word with no passing candidate is dropped.
            if let Some(placement) = accepted {
                if self.place_word(
                    &mut grid,
                    &placement.word,
                    placement.start_row as isize,
                    placement.start_col as isize,
                    placement.direction,
                ) {
                    placements.push(placement);
                }
            }
        }

        CrosswordResult {
            grid,
            width: self.grid_size,
            height: self.grid_size,
            placements,
        }
    }

    /// Validates a candidate position. The four checks run in a fixed order
    /// and short-circuit: bounds, letter conflicts, and (only when
    /// `check_structure` is set) perpendicular-word tolerance and
    /// connectivity. The first word of a puzzle is validated with
    /// `check_structure = false` since there is no structure to connect to.
    pub fn can_place(
        &self,
        grid: &Grid,
        word: &str,
        start_row: isize,
        start_col: isize,
        direction: Direction,
        check_structure: bool,
    ) -> bool {
        if !self.fits_in_bounds(word, start_row, start_col, direction) {
            return false;
        }

        let (row, col) = (start_row as usize, start_col as usize);

        if self.has_letter_conflict(grid, word, row, col, direction) {
            return false;
        }

        if check_structure {
            if self.unintended_word_count(grid, word, row, col, direction) > self.max_unintended {
                return false;
            }
            // Always true for intersection-derived candidates; kept as a
            // guard for callers that pick positions directly.
            if !self.touches_existing(grid, word, row, col, direction) {
                return false;
            }
        }

        true
    }

    /// Writes a word into the grid if bounds and letter conflicts allow it.
    /// Structural checks are not applied here; that is `can_place`'s job on
    /// the candidate search path.
    pub fn place_word(
        &self,
        grid: &mut Grid,
        word: &str,
        start_row: isize,
        start_col: isize,
        direction: Direction,
    ) -> bool {
        if !self.can_place(grid, word, start_row, start_col, direction, false) {
            return false;
        }
        let (row, col) = (start_row as usize, start_col as usize);
        for (i, letter) in word.chars().enumerate() {
            match direction {
                Direction::Horizontal => grid.set(row, col + i, letter),
                Direction::Vertical => grid.set(row + i, col, letter),
            }
        }
        true
    }

    // ── Validators ──────────────────────────────────────────────────────────

    fn fits_in_bounds(
        &self,
        word: &str,
        start_row: isize,
        start_col: isize,
        direction: Direction,
    ) -> bool {
        if start_row < 0 || start_col < 0 {
            return false;
        }
        let (row, col) = (start_row as usize, start_col as usize);
        match direction {
            Direction::Horizontal => col + word.len() <= self.grid_size && row < self.grid_size,
            Direction::Vertical => row + word.len() <= self.grid_size && col < self.grid_size,
        }
    }

    fn has_letter_conflict(
        &self,
        grid: &Grid,
        word: &str,
        start_row: usize,
        start_col: usize,
        direction: Direction,
    ) -> bool {
        word.chars().enumerate().any(|(i, letter)| {
            let occupant = match direction {
                Direction::Horizontal => grid.get(start_row, start_col + i),
                Direction::Vertical => grid.get(start_row + i, start_col),
            };
            occupant.is_some_and(|existing| existing != letter)
        })
    }

    fn touches_existing(
        &self,
        grid: &Grid,
        word: &str,
        start_row: usize,
        start_col: usize,
        direction: Direction,
    ) -> bool {
        (0..word.len()).any(|i| {
            match direction {
                Direction::Horizontal => grid.get(start_row, start_col + i),
                Direction::Vertical => grid.get(start_row + i, start_col),
            }
            .is_some()
        })
    }

    /// Counts the perpendicular runs this candidate would create that are not
    /// words from the input list.
    fn unintended_word_count(
        &self,
        grid: &Grid,
        word: &str,
        start_row: usize,
        start_col: usize,
        direction: Direction,
    ) -> usize {
        self.perpendicular_words(grid, word, start_row, start_col, direction)
            .iter()
            .filter(|formed| !self.words.iter().any(|w| w == *formed))
            .count()
    }

    /// Every letter run of length > 1 that would exist perpendicular to the
    /// candidate after placing it: for each letter position, the maximal
    /// contiguous run through already-occupied cells plus the letter being
    /// placed.
    pub fn perpendicular_words(
        &self,
        grid: &Grid,
        word: &str,
        start_row: usize,
        start_col: usize,
        direction: Direction,
    ) -> Vec<String> {
        let mut formed = Vec::new();

        for (i, letter) in word.chars().enumerate() {
            let run = match direction {
                // A horizontal candidate forms vertical runs.
                Direction::Horizontal => {
                    self.scan_run(grid, letter, start_row, start_col + i, true)
                }
                // A vertical candidate forms horizontal runs.
                Direction::Vertical => self.scan_run(grid, letter, start_row + i, start_col, false),
            };
            if run.len() > 1 {
                formed.push(run);
            }
        }

        formed
    }

    /// Builds the maximal contiguous run through `(anchor_row, anchor_col)`,
    /// reading the anchor cell as `letter` and every other cell from the
    /// grid. `vertical` selects the scan axis.
    fn scan_run(
        &self,
        grid: &Grid,
        letter: char,
        anchor_row: usize,
        anchor_col: usize,
        vertical: bool,
    ) -> String {
        let (anchor, fixed) = if vertical {
            (anchor_row, anchor_col)
        } else {
            (anchor_col, anchor_row)
        };
        let read = |pos: usize| -> Option<char> {
            if vertical {
                grid.get(pos, fixed)
            } else {
                grid.get(fixed, pos)
            }
        };

        let mut start = anchor;
        while start > 0 && read(start - 1).is_some() {
            start -= 1;
        }

        let mut run = String::new();
        let mut pos = start;
        while pos < self.grid_size {
            let cell = if pos == anchor { Some(letter) } else { read(pos) };
            match cell {
                Some(c) => run.push(c),
                None => break,
            }
            pos += 1;
        }
        run
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Intersection search
// ────────────────────────────────────────────────────────────────────────────

/// All `(word_index, placed_index)` pairs where the two words share a letter.
/// Plain O(len × len) character comparison; crossword words are short enough
/// that anything cleverer would lose.
pub fn find_intersections(word: &str, placed: &str) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in word.chars().enumerate() {
        for (j, b) in placed.chars().enumerate() {
            if a == b {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

// ────────────────────────────────────────────────────────────────────────────
// Diagnostic rendering (read-only; not part of the placement contract)
// ────────────────────────────────────────────────────────────────────────────

/// A crossing between two committed placements, located on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIntersection {
    pub word_a: String,
    pub word_b: String,
    pub letter: char,
    pub row: usize,
    pub col: usize,
}

/// All cells where two committed placements cross with the same letter.
pub fn grid_intersections(result: &CrosswordResult) -> Vec<GridIntersection> {
    let mut crossings = Vec::new();
    for (i, a) in result.placements.iter().enumerate() {
        for b in result.placements.iter().skip(i + 1) {
            for (ai, (ar, ac)) in a.cells().enumerate() {
                for (bi, (br, bc)) in b.cells().enumerate() {
                    let (la, lb) = (a.word.chars().nth(ai), b.word.chars().nth(bi));
                    if ar == br && ac == bc && la == lb {
                        if let Some(letter) = la {
                            crossings.push(GridIntersection {
                                word_a: a.word.clone(),
                                word_b: b.word.clone(),
                                letter,
                                row: ar,
                                col: ac,
                            });
                        }
                    }
                }
            }
        }
    }
    crossings
}

/// Human-readable dump of a generated puzzle: the grid, the placements with
/// their orientations, and the crossings between them. Debugging aid only;
/// nothing reads this back.
pub fn diagnostic_report(result: &CrosswordResult) -> String {
    let mut out = Vec::new();

    out.push("Grid:".to_string());
    for (i, row) in result.grid.cells().iter().enumerate() {
        let rendered: String = row
            .iter()
            .map(|cell| format!(" {} ", cell.unwrap_or('.')))
            .collect();
        out.push(format!("{i:2} {rendered}"));
    }

    out.push(String::new());
    out.push("Placements:".to_string());
    for (i, p) in result.placements.iter().enumerate() {
        let arrow = match p.direction {
            Direction::Horizontal => "→",
            Direction::Vertical => "↓",
        };
        out.push(format!(
            "{}. {} {} at ({}, {})",
            i + 1,
            p.word,
            arrow,
            p.start_row,
            p.start_col
        ));
    }

    out.push(String::new());
    out.push("Intersections:".to_string());
    for x in grid_intersections(result) {
        out.push(format!(
            "'{}' and '{}' share '{}' at ({}, {})",
            x.word_a, x.word_b, x.letter, x.row, x.col
        ));
    }

    out.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_words() -> Vec<String> {
        ["PYTHON", "CODE", "TEST", "GRID", "WORD", "PLACE", "CROSS"]
            .iter()
            .map(|w| w.to_string())
            .collect()
    }

    fn engine(words: &[&str], grid_size: usize) -> PlacementEngine {
        PlacementEngine::new(words.iter().map(|w| w.to_string()).collect(), grid_size)
    }

    // ── Intersection search ─────────────────────────────────────────────────

    #[test]
    fn test_find_intersections_python_code_shares_o() {
        let pairs = find_intersections("PYTHON", "CODE");
        assert!(
            pairs.contains(&(4, 1)),
            "expected the O crossing at PYTHON[4] / CODE[1], got {pairs:?}"
        );
    }

    #[test]
    fn test_find_intersections_position_specific() {
        // Symmetric in content, not in indices.
        let forward = find_intersections("PYTHON", "CODE");
        let reverse = find_intersections("CODE", "PYTHON");
        assert_eq!(forward, vec![(4, 1)]);
        assert_eq!(reverse, vec![(1, 4)]);
    }

    #[test]
    fn test_find_intersections_repeated_letters() {
        // Every pairing of a repeated letter counts.
        let pairs = find_intersections("TEST", "TOT");
        assert_eq!(pairs, vec![(0, 0), (0, 2), (3, 0), (3, 2)]);
    }

    #[test]
    fn test_find_intersections_disjoint_words() {
        assert!(find_intersections("ABC", "XYZ").is_empty());
    }

    // ── Manual placement ────────────────────────────────────────────────────

    #[test]
    fn test_python_then_code_crossing_leaves_o_at_7_8() {
        let eng = engine(&["PYTHON", "CODE"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);

        assert!(eng.place_word(&mut grid, "PYTHON", 7, 4, Direction::Horizontal));
        assert!(eng.place_word(&mut grid, "CODE", 6, 8, Direction::Vertical));
        assert_eq!(grid.get(7, 8), Some('O'));
    }

    #[test]
    fn test_place_word_rejects_conflicting_letter() {
        let eng = engine(&["PYTHON", "WORD"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);

        assert!(eng.place_word(&mut grid, "PYTHON", 7, 4, Direction::Horizontal));
        // W lands on the P of PYTHON.
        assert!(!eng.place_word(&mut grid, "WORD", 7, 4, Direction::Vertical));
        assert_eq!(grid.get(7, 4), Some('P'));
    }

    #[test]
    fn test_place_word_rejects_out_of_bounds() {
        let eng = engine(&["PYTHON"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);

        assert!(!eng.place_word(&mut grid, "PYTHON", 7, 12, Direction::Horizontal));
        assert!(!eng.place_word(&mut grid, "PYTHON", -1, 4, Direction::Horizontal));
        assert!(!eng.place_word(&mut grid, "PYTHON", 7, -2, Direction::Horizontal));
    }

    // ── Validators ──────────────────────────────────────────────────────────

    #[test]
    fn test_can_place_rejects_disconnected_candidate() {
        let eng = engine(&["CAT", "DOG"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);
        assert!(eng.place_word(&mut grid, "CAT", 7, 4, Direction::Horizontal));

        // Far corner: in bounds, no conflicts, but touches nothing.
        assert!(!eng.can_place(&grid, "DOG", 0, 0, Direction::Horizontal, true));
        // Same position passes once structural checks are skipped.
        assert!(eng.can_place(&grid, "DOG", 0, 0, Direction::Horizontal, false));
    }

    #[test]
    fn test_perpendicular_extraction_reads_crossing_word() {
        let eng = engine(&["PYTHON", "CODE"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);
        assert!(eng.place_word(&mut grid, "PYTHON", 7, 4, Direction::Horizontal));

        // A vertical CODE at (6,8) crosses PYTHON at its O; the horizontal
        // run through that cell reads back the whole of PYTHON.
        let formed = eng.perpendicular_words(&grid, "CODE", 6, 8, Direction::Vertical);
        assert_eq!(formed, vec!["PYTHON".to_string()]);
    }

    #[test]
    fn test_perpendicular_extraction_finds_accidental_runs() {
        let eng = engine(&["CAT", "OAT"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);
        assert!(eng.place_word(&mut grid, "CAT", 7, 4, Direction::Horizontal));

        // OAT directly beneath CAT forms three two-letter vertical runs.
        let formed = eng.perpendicular_words(&grid, "OAT", 8, 4, Direction::Horizontal);
        assert_eq!(
            formed,
            vec!["CO".to_string(), "AA".to_string(), "TT".to_string()]
        );
    }

    #[test]
    fn test_can_place_rejects_over_tolerance_candidate() {
        // Two input words: tolerance is max(1, 2/5) = 1, and the OAT
        // candidate creates three accidental runs.
        let eng = engine(&["CAT", "OAT"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);
        assert!(eng.place_word(&mut grid, "CAT", 7, 4, Direction::Horizontal));

        assert!(!eng.can_place(&grid, "OAT", 8, 4, Direction::Horizontal, true));
    }

    #[test]
    fn test_isolated_letters_form_no_runs() {
        let eng = engine(&["PYTHON", "TEST"], DEFAULT_GRID_SIZE);
        let mut grid = Grid::new(DEFAULT_GRID_SIZE);
        assert!(eng.place_word(&mut grid, "PYTHON", 7, 4, Direction::Horizontal));

        // TEST crossing at the T only touches PYTHON at one cell; every other
        // letter sits alone, so the only run is the crossing word itself.
        let formed = eng.perpendicular_words(&grid, "TEST", 7, 6, Direction::Vertical);
        assert_eq!(formed, vec!["PYTHON".to_string()]);
    }

    // ── generate(): structure ───────────────────────────────────────────────

    #[test]
    fn test_first_word_is_centered_horizontally() {
        let eng = engine(&["PYTHON", "CODE"], DEFAULT_GRID_SIZE);
        let result = eng.generate();

        let first = &result.placements[0];
        assert_eq!(first.word, "PYTHON");
        assert_eq!(first.start_row, 7);
        assert_eq!(first.start_col, 4); // (15 - 6) / 2
        assert_eq!(first.direction, Direction::Horizontal);
    }

    #[test]
    fn test_generate_sample_list_places_at_least_three() {
        let eng = PlacementEngine::new(sample_words(), DEFAULT_GRID_SIZE);
        let result = eng.generate();

        assert!(
            result.placements.len() >= 3,
            "expected >= 3 placements, got {}",
            result.placements.len()
        );
        assert_eq!(result.width, 15);
        assert_eq!(result.height, 15);
        assert_eq!(result.grid.size(), 15);
    }

    #[test]
    fn test_generate_normalizes_case() {
        let eng = engine(&["python", "code"], DEFAULT_GRID_SIZE);
        let result = eng.generate();
        assert_eq!(result.placements[0].word, "PYTHON");
    }

    #[test]
    fn test_all_placement_cells_within_bounds() {
        let eng = PlacementEngine::new(sample_words(), DEFAULT_GRID_SIZE);
        let result = eng.generate();

        for p in &result.placements {
            for (row, col) in p.cells() {
                assert!(row < result.height, "{} row {row} out of bounds", p.word);
                assert!(col < result.width, "{} col {col} out of bounds", p.word);
            }
        }
    }

    #[test]
    fn test_no_conflicting_letters_cell_by_cell() {
        let eng = PlacementEngine::new(sample_words(), DEFAULT_GRID_SIZE);
        let result = eng.generate();

        // Rebuild the grid from the placements; every overlap must agree.
        let mut seen: std::collections::HashMap<(usize, usize), char> =
            std::collections::HashMap::new();
        for p in &result.placements {
            for (i, (row, col)) in p.cells().enumerate() {
                let letter = p.word.as_bytes()[i] as char;
                if let Some(existing) = seen.insert((row, col), letter) {
                    assert_eq!(
                        existing, letter,
                        "conflicting letters at ({row}, {col})"
                    );
                }
                assert_eq!(result.grid.get(row, col), Some(letter));
            }
        }
    }

    #[test]
    fn test_every_later_placement_touches_earlier_structure() {
        let eng = PlacementEngine::new(sample_words(), DEFAULT_GRID_SIZE);
        let result = eng.generate();
        assert!(result.placements.len() >= 2);

        let mut occupied: HashSet<(usize, usize)> = HashSet::new();
        for (i, p) in result.placements.iter().enumerate() {
            let cells: HashSet<(usize, usize)> = p.cells().collect();
            if i > 0 {
                assert!(
                    !occupied.is_disjoint(&cells),
                    "{} does not touch the existing structure",
                    p.word
                );
            }
            occupied.extend(cells);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = PlacementEngine::new(sample_words(), DEFAULT_GRID_SIZE).generate();
        let b = PlacementEngine::new(sample_words(), DEFAULT_GRID_SIZE).generate();
        assert_eq!(a.placements, b.placements);
        assert_eq!(a.grid, b.grid);
    }

    // ── generate(): dropped words ───────────────────────────────────────────

    #[test]
    fn test_word_longer_than_grid_is_never_placed() {
        let eng = engine(&["ALPHABETICAL", "CAB"], 5);
        let result = eng.generate();

        assert!(result.placements.iter().all(|p| p.word != "ALPHABETICAL"));
        assert_eq!(result.grid.size(), 5);
        assert_eq!(result.width, 5);
        assert_eq!(result.height, 5);
    }

    #[test]
    fn test_unconnectable_word_is_dropped_silently() {
        let eng = engine(&["CAT", "XYZ"], DEFAULT_GRID_SIZE);
        let result = eng.generate();

        assert_eq!(result.placements.len(), 1);
        assert_eq!(result.placements[0].word, "CAT");
    }

    #[test]
    fn test_oversized_first_word_leaves_result_empty() {
        // The second word has nothing to connect to once the first fails.
        let eng = engine(&["ALPHABETICAL", "CAB"], 5);
        let result = eng.generate();
        assert!(result.placements.is_empty());
    }

    #[test]
    fn test_dropped_word_leaves_grid_untouched() {
        let eng = engine(&["CAT", "XYZ"], DEFAULT_GRID_SIZE);
        let result = eng.generate();

        let solo = engine(&["CAT"], DEFAULT_GRID_SIZE).generate();
        assert_eq!(result.grid, solo.grid);
    }

    // ── Diagnostic rendering ────────────────────────────────────────────────

    #[test]
    fn test_grid_intersections_locates_crossings() {
        let eng = engine(&["PYTHON", "CODE"], DEFAULT_GRID_SIZE);
        let result = eng.generate();
        assert_eq!(result.placements.len(), 2);

        let crossings = grid_intersections(&result);
        assert_eq!(crossings.len(), 1);
        assert_eq!(crossings[0].letter, 'O');
        assert_eq!((crossings[0].row, crossings[0].col), (7, 8));
    }

    #[test]
    fn test_diagnostic_report_lists_placements_and_crossings() {
        let eng = engine(&["PYTHON", "CODE"], DEFAULT_GRID_SIZE);
        let report = diagnostic_report(&eng.generate());

        assert!(report.contains("PYTHON"));
        assert!(report.contains("CODE"));
        assert!(report.contains("share 'O'"));
    }

    #[test]
    fn test_diagnostic_report_is_read_only() {
        let eng = engine(&["PYTHON", "CODE"], DEFAULT_GRID_SIZE);
        let result = eng.generate();
        let before = result.clone();
        let _ = diagnostic_report(&result);
        assert_eq!(result, before);
    }

    // ── Tolerance derivation ────────────────────────────────────────────────

    #[test]
    fn test_tolerance_has_floor_of_one() {
        let eng = engine(&["CAT", "DOG"], DEFAULT_GRID_SIZE);
        assert_eq!(eng.max_unintended, 1);
    }

    #[test]
    fn test_tolerance_scales_with_word_count() {
        let words: Vec<String> = (0..12).map(|i| format!("WORD{i:02}")).collect();
        let eng = PlacementEngine::new(words, DEFAULT_GRID_SIZE);
        assert_eq!(eng.max_unintended, 2);
    }
}
