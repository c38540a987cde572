
use wortschatz_types::{
    AdjectiveWord, Article, GrammarTopic, LevelData, NounWord, VerbWord, WordEntry,
};

pub(crate) fn noun(word: &str, category: Option<&str>) -> WordEntry {
    WordEntry::Noun(NounWord {
        word: word.to_string(),
        article: Article::Der,
        plural: format!("{word}e"),
        meaning: format!("{word} (en)"),
        example_sentence: format!("Der {word} ist hier."),
        translation: format!("The {word} is here."),
        category: category.map(str::to_string),
    })
}

pub(crate) fn verb(word: &str, category: Option<&str>) -> WordEntry {
    WordEntry::Verb(VerbWord {
        word: word.to_string(),
        meaning: format!("to {word}"),
        prasens_ich: format!("ich {word}e"),
        prateritum: format!("{word}te"),
        partizip_ii: format!("ge{word}t"),
        example_sentence: format!("Ich {word}e gern."),
        translation: format!("I like to {word}."),
        category: category.map(str::to_string),
    })
}

pub(crate) fn adjective(word: &str) -> WordEntry {
    WordEntry::Adjective(AdjectiveWord {
        word: word.to_string(),
        meaning: format!("{word} (en)"),
        comparative: format!("{word}er"),
        superlative: format!("am {word}sten"),
        example_sentence: format!("Es ist {word}."),
        translation: format!("It is {word}."),
    })
}

pub(crate) fn topic(title: &str, category: Option<&str>) -> GrammarTopic {
    GrammarTopic {
        title: title.to_string(),
        explanation: format!("About {title}."),
        structure: None,
        examples: Vec::new(),
        notes: Vec::new(),
        category: category.map(str::to_string),
    }
}

/// Level fixture matching the worked example: "Food & Drink" holds 3 nouns,
/// "Travel" holds 5, plus verbs, adjectives and colliding grammar titles.
pub(crate) fn sample_level() -> LevelData {
    LevelData {
        level: "a1".to_string(),
        words: vec![
            noun("Apfel", Some("Food & Drink")),
            noun("Brot", Some("Food & Drink")),
            noun("Zug", Some("Travel")),
            noun("Milch", Some("Food & Drink")),
            noun("Ticket", Some("Travel")),
            noun("Koffer", Some("Travel")),
            noun("Bahnhof", Some("Travel")),
            noun("Flugzeug", Some("Travel")),
            verb("geh", Some("Daily Routine")),
            verb("ess", Some("Daily Routine")),
            verb("sei", None),
            adjective("klein"),
            adjective("schnell"),
        ],
        grammar: vec![
            topic("Present Tense (Präsens)", Some("Tenses")),
            topic("Present Tense: overview", Some("Tenses")),
            topic("Perfect Tense (Perfekt)", Some("Tenses")),
            topic("Word Order", Some("Sentence Structure")),
            topic("Numbers", None),
        ],
    }
}

pub(crate) fn sample_catalog() -> crate::catalog::Catalog {
    crate::catalog::Catalog::new(vec![sample_level()])
}
