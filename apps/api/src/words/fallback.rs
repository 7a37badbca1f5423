//! Offline word sets used when no LLM is configured or the remote call
//! fails or returns unusable content. Deterministic by construction: same
//! topic in, same words out.

/// Curated topic sets. Matching is fuzzy (case-insensitive substring either
/// way), so "pixar characters" and "nba basketball teams" both land on the
/// right set.
const TOPIC_SETS: &[(&str, &[&str])] = &[
    (
        "pixar",
        &[
            "WOODY", "BUZZ", "TOY", "STORY", "MONSTER", "SULLIVAN", "MIKE", "INCREDIBLES",
            "DASH", "VIOLET", "ELASTIGIRL", "FROZONE", "CARS", "LIGHTNING", "MATER", "NEMO",
            "DORY", "MARLIN", "RATATOUILLE", "REMY", "LINGUINI", "WALL", "EVE", "AUTO", "UP",
            "CARL", "RUSSELL", "DUG", "ELLIE", "BRAVE",
        ],
    ),
    (
        "the office",
        &[
            "DWIGHT", "JIM", "PAM", "MICHAEL", "ANGELA", "KEVIN", "OSCAR", "STANLEY",
            "PHYLLIS", "CREED", "MEREDITH", "KELLY", "RYAN", "TOBY", "ERIN", "HOLLY",
            "SCRANTON", "DUNDIES", "BEARS", "BEETS", "BATTLESTAR", "PAPER", "SALES",
            "MANAGER", "RECEPTIONIST", "ACCOUNTING", "WAREHOUSE", "ANNEX", "CONFERENCE",
            "PARTY",
        ],
    ),
    (
        "basketball",
        &[
            "BASKETBALL", "PLAYER", "COURT", "HOOP", "DUNK", "SCORE", "TEAM", "COACH",
            "REFEREE", "FOUL", "TIMEOUT", "QUARTER", "POINT", "GUARD", "FORWARD", "CENTER",
            "REBOUND", "ASSIST", "STEAL", "BLOCK", "SHOT", "LAYUP", "JERSEY", "ARENA",
            "PLAYOFFS", "CHAMPIONSHIP", "LEAGUE", "DRAFT", "ROOKIE", "VETERAN",
        ],
    ),
    (
        "space",
        &[
            "SPACE", "ROCKET", "PLANET", "STAR", "GALAXY", "UNIVERSE", "ASTRONAUT", "ORBIT",
            "MOON", "EARTH", "MARS", "VENUS", "JUPITER", "SATURN", "NEPTUNE", "URANUS",
            "TELESCOPE", "SATELLITE", "COMET", "ASTEROID", "METEOR", "SOLAR", "SYSTEM",
            "MISSION", "LAUNCH", "LANDING", "SPACECRAFT", "STATION", "GRAVITY", "VACUUM",
        ],
    ),
    (
        "cooking",
        &[
            "COOKING", "RECIPE", "KITCHEN", "CHEF", "INGREDIENTS", "FLAVOR", "TASTE",
            "SPICE", "HERB", "SALT", "PEPPER", "GARLIC", "ONION", "TOMATO", "CARROT",
            "POTATO", "MEAT", "CHICKEN", "BEEF", "FISH", "VEGETABLE", "FRUIT", "BREAD",
            "PASTA", "SAUCE", "SOUP", "SALAD", "DESSERT", "BAKING", "ROASTING",
        ],
    ),
    (
        "harry potter",
        &[
            "HARRY", "HERMIONE", "RON", "HOGWARTS", "WIZARD", "MAGIC", "WAND", "SPELL",
            "QUIDDITCH", "GRYFFINDOR", "SLYTHERIN", "HUFFLEPUFF", "RAVENCLAW", "DUMBLEDORE",
            "SNAPE", "VOLDEMORT", "MUGGLE", "POTION", "CHARM", "CURSE", "DRAGON", "PHOENIX",
            "UNICORN", "CENTAUR", "BROOM", "CLOAK", "MIRROR", "STONE", "CHAMBER", "SECRETS",
        ],
    ),
    (
        "world war ii",
        &[
            "ALLIES", "AXIS", "NORMANDY", "PACIFIC", "EUROPE", "BATTLE", "VICTORY", "DEFEAT",
            "TROOPS", "NAVY", "ARMY", "AIRFORCE", "BOMBER", "FIGHTER", "TANK", "SUBMARINE",
            "RADAR", "BLITZ", "LIBERATION", "SURRENDER", "ATOMIC", "BOMB", "HARBOR",
            "INVASION", "FRONT", "CONVOY", "CODE", "RESISTANCE", "RATION", "TREATY",
        ],
    ),
];

/// Generic fallback when no topic set matches.
const GENERAL_WORDS: &[&str] = &[
    "WORD", "LETTER", "PUZZLE", "GAME", "PLAY", "FUN", "BRAIN", "THINK", "SOLVE", "CROSS",
    "DOWN", "ACROSS", "CLUE", "ANSWER", "GRID", "BOX", "LINE", "SQUARE", "BLACK", "WHITE",
    "NUMBER", "COUNT", "TOTAL", "SUM", "ADD", "MAKE", "CREATE", "BUILD", "FORM", "SHAPE",
];

/// Words for a topic from the static sets: exact match first, then substring
/// match either way, then the generic list.
pub fn offline_word_list(topic: &str) -> Vec<String> {
    let topic = topic.trim().to_lowercase();

    for (key, set) in TOPIC_SETS {
        if *key == topic {
            return set.iter().map(|w| w.to_string()).collect();
        }
    }

    for (key, set) in TOPIC_SETS {
        if topic.contains(key) || key.contains(&topic) {
            return set.iter().map(|w| w.to_string()).collect();
        }
    }

    GENERAL_WORDS.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_topic_match() {
        let words = offline_word_list("basketball");
        assert_eq!(words[0], "BASKETBALL");
        assert_eq!(words.len(), 30);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(offline_word_list("Basketball"), offline_word_list("basketball"));
    }

    #[test]
    fn test_partial_match_topic_contains_key() {
        let words = offline_word_list("pixar characters");
        assert!(words.contains(&"WOODY".to_string()));
    }

    #[test]
    fn test_partial_match_key_contains_topic() {
        let words = offline_word_list("harry");
        assert!(words.contains(&"HOGWARTS".to_string()));
    }

    #[test]
    fn test_unknown_topic_gets_generic_list() {
        let words = offline_word_list("quantum chromodynamics");
        assert!(words.contains(&"PUZZLE".to_string()));
        assert_eq!(words.len(), 30);
    }

    #[test]
    fn test_offline_lists_are_deterministic() {
        assert_eq!(offline_word_list("space"), offline_word_list("space"));
    }
}
