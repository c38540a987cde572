use unicode_normalization::UnicodeNormalization;

use wortschatz_types::{LevelData, WordEntry};

/// NFC-normalize and trim every free-text field of a level in place.
///
/// Slug derivation strips characters outside `[a-z0-9-]`: a decomposed
/// umlaut (base letter plus combining mark) keeps its base letter while the
/// composed form loses the whole character, so slugs and search must not
/// depend on the source document's Unicode composition.
pub fn normalize_level(data: &mut LevelData) {
    clean(&mut data.level);
    for word in &mut data.words {
        match word {
            WordEntry::Noun(n) => {
                clean(&mut n.word);
                clean(&mut n.plural);
                clean(&mut n.meaning);
                clean(&mut n.example_sentence);
                clean(&mut n.translation);
                if let Some(category) = &mut n.category {
                    clean(category);
                }
            }
            WordEntry::Verb(v) => {
                clean(&mut v.word);
                clean(&mut v.meaning);
                clean(&mut v.prasens_ich);
                clean(&mut v.prateritum);
                clean(&mut v.partizip_ii);
                clean(&mut v.example_sentence);
                clean(&mut v.translation);
                if let Some(category) = &mut v.category {
                    clean(category);
                }
            }
            WordEntry::Adjective(a) => {
                clean(&mut a.word);
                clean(&mut a.meaning);
                clean(&mut a.comparative);
                clean(&mut a.superlative);
                clean(&mut a.example_sentence);
                clean(&mut a.translation);
            }
        }
    }
    for topic in &mut data.grammar {
        clean(&mut topic.title);
        clean(&mut topic.explanation);
        if let Some(structure) = &mut topic.structure {
            clean(structure);
        }
        for example in &mut topic.examples {
            clean(&mut example.sentence);
            clean(&mut example.translation);
        }
        for note in &mut topic.notes {
            clean(note);
        }
        if let Some(category) = &mut topic.category {
            clean(category);
        }
    }
}

fn clean(text: &mut String) {
    let normalized: String = text.nfc().collect();
    *text = normalized.trim().to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wortschatz_types::{GrammarTopic, LevelData};

    #[test]
    fn recomposes_decomposed_umlauts() {
        // "Präsens" with U+0061 U+0308 instead of U+00E4
        let decomposed = "Pra\u{0308}sens";
        let mut data = LevelData {
            level: "a1".to_string(),
            words: vec![],
            grammar: vec![GrammarTopic {
                title: format!("Present Tense ({decomposed})"),
                explanation: decomposed.to_string(),
                structure: None,
                examples: vec![],
                notes: vec![],
                category: None,
            }],
        };
        normalize_level(&mut data);
        assert_eq!(data.grammar[0].explanation, "Präsens");
        assert!(data.grammar[0].title.contains('\u{00E4}'));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut data = LevelData {
            level: "  a1  ".to_string(),
            words: vec![],
            grammar: vec![],
        };
        normalize_level(&mut data);
        assert_eq!(data.level, "a1");
    }
}
