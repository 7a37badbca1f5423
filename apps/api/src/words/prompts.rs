// Prompts for topic-to-word-list generation.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt that enforces JSON-only output.
pub const WORD_LIST_SYSTEM: &str = "You are a crossword puzzle assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// User prompt template. `{topic}` and `{count}` are substituted at call time.
pub const WORD_LIST_PROMPT_TEMPLATE: &str = r#"Generate exactly {count} words related to the topic "{topic}" for a crossword puzzle.

Requirements:
- Words must be 3-15 letters long, letters only (no spaces, hyphens, or digits)
- Use common English words that most people would know
- Choose words with good crossword potential (mix of vowels and consonants)
- Avoid acronyms and very technical terms
- Give each word a one-line clue that does not contain the word itself

Return a JSON object of this exact shape:
{"words": [{"word": "BASKETBALL", "clue": "Sport played with a hoop"}, ...]}"#;

/// Builds the word-list prompt for a topic.
pub fn build_word_list_prompt(topic: &str, count: usize) -> String {
    WORD_LIST_PROMPT_TEMPLATE
        .replace("{topic}", topic)
        .replace("{count}", &count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_topic_and_count() {
        let prompt = build_word_list_prompt("basketball", 30);
        assert!(prompt.contains("basketball"));
        assert!(prompt.contains("exactly 30 words"));
    }

    #[test]
    fn test_prompt_demands_json_shape() {
        let prompt = build_word_list_prompt("space", 30);
        assert!(prompt.contains(r#"{"words":"#));
    }
}
