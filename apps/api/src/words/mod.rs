//! Word Source — turns a free-text topic into a crossword word list.
//!
//! The LLM path asks for words plus one-line clues in one call; any failure
//! (transport, rate limit, malformed output, too few usable words) falls back
//! to the offline sets in [`fallback`] without surfacing an error to the
//! caller. With no API key configured the offline path is used directly.

pub mod fallback;
pub mod handlers;
pub mod prompts;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::words::prompts::{build_word_list_prompt, WORD_LIST_SYSTEM};

/// How many words we ask for and at most return.
pub const TARGET_WORD_COUNT: usize = 30;
/// Word length bounds for generated lists. Tighter than the engine's own
/// two-letter minimum: very short words make poor crossword fill.
pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 15;
/// An LLM response with fewer usable words than this counts as unusable.
const MIN_USABLE_WORDS: usize = 10;

/// Where a word list came from. Reported to the caller so the UI can show
/// when a topic ran offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordListSource {
    Llm,
    Offline,
}

/// A generated word list plus whatever clues came with it. Offline lists
/// carry no clues.
#[derive(Debug, Clone)]
pub struct TopicWordList {
    pub words: Vec<String>,
    pub clues: HashMap<String, String>,
    pub source: WordListSource,
}

/// One word/clue pair as the LLM returns it.
#[derive(Debug, Deserialize)]
struct WordEntry {
    word: String,
    #[serde(default)]
    clue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordListPayload {
    words: Vec<WordEntry>,
}

/// Produces the word list for a topic. Never fails: every error path lands
/// on the offline sets.
pub async fn word_list_for_topic(llm: Option<&LlmClient>, topic: &str) -> TopicWordList {
    let Some(llm) = llm else {
        warn!("no LLM configured; serving offline word list for topic '{topic}'");
        return offline_list(topic);
    };

    let prompt = build_word_list_prompt(topic, TARGET_WORD_COUNT);
    match llm.call_json::<WordListPayload>(&prompt, WORD_LIST_SYSTEM).await {
        Ok(payload) => match sanitize_entries(payload.words) {
            Some((words, clues)) => TopicWordList {
                words,
                clues,
                source: WordListSource::Llm,
            },
            None => {
                warn!("LLM returned too few usable words for topic '{topic}'; falling back");
                offline_list(topic)
            }
        },
        Err(e) => {
            warn!("LLM word generation failed for topic '{topic}': {e}; falling back");
            offline_list(topic)
        }
    }
}

fn offline_list(topic: &str) -> TopicWordList {
    TopicWordList {
        words: fallback::offline_word_list(topic),
        clues: HashMap::new(),
        source: WordListSource::Offline,
    }
}

/// Filters LLM entries down to usable crossword words: uppercase, alphabetic,
/// length-bounded, de-duplicated preserving order, capped at the target
/// count. Returns `None` when fewer than the minimum survive.
fn sanitize_entries(entries: Vec<WordEntry>) -> Option<(Vec<String>, HashMap<String, String>)> {
    let mut words = Vec::new();
    let mut clues = HashMap::new();

    for entry in entries {
        let word = entry.word.trim().to_ascii_uppercase();
        let valid_len = (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len());
        let alphabetic = !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic());
        if !valid_len || !alphabetic || words.contains(&word) {
            continue;
        }
        if let Some(clue) = entry.clue.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            clues.insert(word.clone(), clue.to_string());
        }
        words.push(word);
        if words.len() == TARGET_WORD_COUNT {
            break;
        }
    }

    if words.len() < MIN_USABLE_WORDS {
        return None;
    }
    Some((words, clues))
}
