use serde::{Deserialize, Serialize};

/// Grammatical gender article of a German noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NounWord {
    pub word: String,
    pub article: Article,
    pub plural: String,
    pub meaning: String,
    pub example_sentence: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbWord {
    pub word: String,
    pub meaning: String,
    pub prasens_ich: String,
    pub prateritum: String,
    pub partizip_ii: String,
    pub example_sentence: String,
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Adjectives have no category dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjectiveWord {
    pub word: String,
    pub meaning: String,
    pub comparative: String,
    pub superlative: String,
    pub example_sentence: String,
    pub translation: String,
}

/// A vocabulary entry, tagged by word type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WordEntry {
    Noun(NounWord),
    Verb(VerbWord),
    Adjective(AdjectiveWord),
}

impl WordEntry {
    pub fn kind(&self) -> WordKind {
        match self {
            WordEntry::Noun(_) => WordKind::Noun,
            WordEntry::Verb(_) => WordKind::Verb,
            WordEntry::Adjective(_) => WordKind::Adjective,
        }
    }

    pub fn word(&self) -> &str {
        match self {
            WordEntry::Noun(w) => &w.word,
            WordEntry::Verb(w) => &w.word,
            WordEntry::Adjective(w) => &w.word,
        }
    }

    pub fn meaning(&self) -> &str {
        match self {
            WordEntry::Noun(w) => &w.meaning,
            WordEntry::Verb(w) => &w.meaning,
            WordEntry::Adjective(w) => &w.meaning,
        }
    }

    pub fn example_sentence(&self) -> &str {
        match self {
            WordEntry::Noun(w) => &w.example_sentence,
            WordEntry::Verb(w) => &w.example_sentence,
            WordEntry::Adjective(w) => &w.example_sentence,
        }
    }

    pub fn translation(&self) -> &str {
        match self {
            WordEntry::Noun(w) => &w.translation,
            WordEntry::Verb(w) => &w.translation,
            WordEntry::Adjective(w) => &w.translation,
        }
    }

    /// Raw category label, if the entry carries one
    pub fn category(&self) -> Option<&str> {
        match self {
            WordEntry::Noun(w) => w.category.as_deref(),
            WordEntry::Verb(w) => w.category.as_deref(),
            WordEntry::Adjective(_) => None,
        }
    }
}

/// Word type tag, also the route token used in URLs ("nouns", "verbs", "adjectives")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    Noun,
    Verb,
    Adjective,
}

impl WordKind {
    pub const ALL: [WordKind; 3] = [WordKind::Noun, WordKind::Verb, WordKind::Adjective];

    /// Parse a route token; unknown tokens resolve to nothing
    pub fn from_route(token: &str) -> Option<Self> {
        match token {
            "nouns" => Some(WordKind::Noun),
            "verbs" => Some(WordKind::Verb),
            "adjectives" => Some(WordKind::Adjective),
            _ => None,
        }
    }

    pub fn route_token(&self) -> &'static str {
        match self {
            WordKind::Noun => "nouns",
            WordKind::Verb => "verbs",
            WordKind::Adjective => "adjectives",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WordKind::Noun => "Nouns",
            WordKind::Verb => "Verbs",
            WordKind::Adjective => "Adjectives",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarExample {
    pub sentence: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarTopic {
    pub title: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(default)]
    pub examples: Vec<GrammarExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// One proficiency level's full content, loaded once and read-only afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub level: String,
    #[serde(default)]
    pub words: Vec<WordEntry>,
    #[serde(default)]
    pub grammar: Vec<GrammarTopic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_entry_tag_selects_variant() {
        let json = r#"{
            "type": "noun",
            "word": "Apfel",
            "article": "der",
            "plural": "Äpfel",
            "meaning": "apple",
            "example_sentence": "Der Apfel ist rot.",
            "translation": "The apple is red.",
            "category": "Food & Drink"
        }"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind(), WordKind::Noun);
        assert_eq!(entry.word(), "Apfel");
        assert_eq!(entry.category(), Some("Food & Drink"));
        match entry {
            WordEntry::Noun(n) => assert_eq!(n.article, Article::Der),
            _ => panic!("expected noun variant"),
        }
    }

    #[test]
    fn adjective_has_no_category() {
        let json = r#"{
            "type": "adjective",
            "word": "groß",
            "meaning": "big",
            "comparative": "größer",
            "superlative": "am größten",
            "example_sentence": "Das Haus ist groß.",
            "translation": "The house is big."
        }"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind(), WordKind::Adjective);
        assert_eq!(entry.category(), None);
    }

    #[test]
    fn grammar_topic_optional_fields_default() {
        let json = r#"{"title": "Word Order", "explanation": "Verb second."}"#;
        let topic: GrammarTopic = serde_json::from_str(json).unwrap();
        assert!(topic.structure.is_none());
        assert!(topic.examples.is_empty());
        assert!(topic.notes.is_empty());
        assert!(topic.category.is_none());
    }

    #[test]
    fn word_kind_route_tokens_round_trip() {
        for kind in WordKind::ALL {
            assert_eq!(WordKind::from_route(kind.route_token()), Some(kind));
        }
        assert_eq!(WordKind::from_route("pronouns"), None);
        // route tokens are exact; casing is part of the URL contract
        assert_eq!(WordKind::from_route("Nouns"), None);
    }
}
