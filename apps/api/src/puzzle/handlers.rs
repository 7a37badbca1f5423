use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::puzzle::engine::PlacementEngine;
use crate::puzzle::numbering::{assign_numbers, NumberedPlacement};
use crate::puzzle::validation::{resolve_grid_size, sanitize_word_list, MIN_PUZZLE_WORDS};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GeneratePuzzleRequest {
    pub words: Vec<String>,
    pub grid_size: Option<usize>,
    /// Optional word → clue map, usually straight from the topic endpoint.
    /// Entries for words that end up placed are stored under the new
    /// puzzle's id.
    pub clues: Option<HashMap<String, String>>,
}

#[derive(Serialize)]
pub struct PuzzleResponse {
    pub puzzle_id: Uuid,
    pub grid: Vec<Vec<Option<char>>>,
    pub width: usize,
    pub height: usize,
    pub placements: Vec<NumberedPlacement>,
}

#[derive(Serialize)]
pub struct CluesResponse {
    pub puzzle_id: Uuid,
    pub clues: HashMap<String, String>,
}

/// POST /api/v1/puzzles
pub async fn handle_generate_puzzle(
    State(state): State<AppState>,
    Json(req): Json<GeneratePuzzleRequest>,
) -> Result<Json<PuzzleResponse>, AppError> {
    let words = sanitize_word_list(&req.words).map_err(AppError::Validation)?;
    let grid_size = resolve_grid_size(req.grid_size).map_err(AppError::Validation)?;

    // The placement loop is CPU-bound; keep it off the async executor.
    let word_count = words.len();
    let result = tokio::task::spawn_blocking(move || {
        PlacementEngine::new(words, grid_size).generate()
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in generate: {e}")))?;

    if result.placements.len() < MIN_PUZZLE_WORDS {
        return Err(AppError::UnprocessableEntity(format!(
            "Could not generate a valid crossword with the given words. \
             Only {} of {} words could be placed. \
             Try different words with more overlapping letters.",
            result.placements.len(),
            word_count,
        )));
    }

    let puzzle_id = Uuid::new_v4();
    info!(
        %puzzle_id,
        placed = result.placements.len(),
        supplied = word_count,
        grid_size,
        "generated puzzle"
    );

    if let Some(clues) = req.clues {
        let relevant = clues_for_placed(&result, clues);
        if !relevant.is_empty() {
            state.clue_store.put(puzzle_id, relevant).await?;
        }
    }

    Ok(Json(PuzzleResponse {
        puzzle_id,
        grid: result.grid.cells().to_vec(),
        width: result.width,
        height: result.height,
        placements: assign_numbers(&result.placements),
    }))
}

/// GET /api/v1/puzzles/:id/clues
pub async fn handle_get_clues(
    State(state): State<AppState>,
    Path(puzzle_id): Path<Uuid>,
) -> Result<Json<CluesResponse>, AppError> {
    let clues = state.clue_store.get(puzzle_id).await?;
    Ok(Json(CluesResponse { puzzle_id, clues }))
}

/// Narrows a submitted clue map to the words that were actually placed,
/// normalizing keys to the engine's uppercase form.
fn clues_for_placed(
    result: &crate::puzzle::model::CrosswordResult,
    clues: HashMap<String, String>,
) -> HashMap<String, String> {
    clues
        .into_iter()
        .map(|(word, clue)| (word.trim().to_ascii_uppercase(), clue))
        .filter(|(word, _)| result.placements.iter().any(|p| &p.word == word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::engine::DEFAULT_GRID_SIZE;

    fn generated(words: &[&str]) -> crate::puzzle::model::CrosswordResult {
        PlacementEngine::new(
            words.iter().map(|w| w.to_string()).collect(),
            DEFAULT_GRID_SIZE,
        )
        .generate()
    }

    #[test]
    fn test_clues_filtered_to_placed_words() {
        // QQ shares no letter with the others, so it is never placed.
        let result = generated(&["PYTHON", "CODE", "QQ"]);
        let clues = HashMap::from([
            ("python".to_string(), "A language".to_string()),
            ("QQ".to_string(), "Never placed".to_string()),
            ("GHOST".to_string(), "Never submitted".to_string()),
        ]);

        let relevant = clues_for_placed(&result, clues);
        assert_eq!(relevant.len(), 1);
        assert_eq!(relevant["PYTHON"], "A language");
    }

    #[test]
    fn test_clue_keys_normalized_to_uppercase() {
        let result = generated(&["PYTHON", "CODE"]);
        let clues = HashMap::from([(" code ".to_string(), "What we write".to_string())]);

        let relevant = clues_for_placed(&result, clues);
        assert_eq!(relevant["CODE"], "What we write");
    }
}
