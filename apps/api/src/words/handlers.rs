use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::words::{word_list_for_topic, WordListSource};

#[derive(Deserialize)]
pub struct TopicRequest {
    pub topic: String,
}

#[derive(Serialize)]
pub struct TopicWordsResponse {
    pub topic: String,
    pub words: Vec<String>,
    pub clues: HashMap<String, String>,
    pub source: WordListSource,
}

/// POST /api/v1/topics/words
pub async fn handle_topic_words(
    State(state): State<AppState>,
    Json(req): Json<TopicRequest>,
) -> Result<Json<TopicWordsResponse>, AppError> {
    let topic = req.topic.trim().to_string();
    if topic.is_empty() {
        return Err(AppError::Validation("Please provide a topic".to_string()));
    }

    let list = word_list_for_topic(state.llm.as_ref(), &topic).await;
    info!(
        topic = %topic,
        words = list.words.len(),
        source = ?list.source,
        "generated topic word list"
    );

    Ok(Json(TopicWordsResponse {
        topic,
        words: list.words,
        clues: list.clues,
        source: list.source,
    }))
}
