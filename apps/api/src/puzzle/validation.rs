//! Input sanitation for puzzle requests. Everything here runs before the
//! placement engine; the engine itself trusts its input.

use crate::puzzle::engine::DEFAULT_GRID_SIZE;

/// A puzzle needs at least this many words to be worth attempting.
pub const MIN_PUZZLE_WORDS: usize = 2;

/// Shortest word that can cross anything.
pub const MIN_WORD_LEN: usize = 2;

/// Upper bound on the requested grid dimension. Anything larger is a typo or
/// an abuse attempt, not a crossword.
pub const MAX_GRID_SIZE: usize = 50;

/// Cleans a raw word list: trims, uppercases, and rejects anything that is
/// not purely alphabetic or is too short. Returns the cleaned list or a
/// caller-facing message naming the offending word.
pub fn sanitize_word_list(raw: &[String]) -> Result<Vec<String>, String> {
    if raw.len() < MIN_PUZZLE_WORDS {
        return Err(format!("Please provide at least {MIN_PUZZLE_WORDS} words"));
    }

    let mut cleaned = Vec::with_capacity(raw.len());
    for word in raw {
        let trimmed = word.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "Word '{word}' contains invalid characters. Only letters allowed."
            ));
        }
        if trimmed.len() < MIN_WORD_LEN {
            return Err(format!(
                "Word '{word}' is too short. Minimum {MIN_WORD_LEN} letters required."
            ));
        }
        cleaned.push(trimmed.to_ascii_uppercase());
    }
    Ok(cleaned)
}

/// Resolves the requested grid size against the default and the sanity cap.
pub fn resolve_grid_size(requested: Option<usize>) -> Result<usize, String> {
    match requested {
        None => Ok(DEFAULT_GRID_SIZE),
        Some(0) => Err("grid_size must be positive".to_string()),
        Some(size) if size > MAX_GRID_SIZE => {
            Err(format!("grid_size must be at most {MAX_GRID_SIZE}"))
        }
        Some(size) => Ok(size),
    }
}
