use std::collections::{BTreeMap, HashSet};

use wortschatz_types::{LevelData, WordEntry, WordKind};

/// Counts from one supplement merge, for logging
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeReport {
    /// Base entries replaced by a supplement entry
    pub updated: usize,
    /// Supplement entries new to the base
    pub added: usize,
    /// Base entries without a supplement counterpart
    pub kept: usize,
}

fn entry_key(entry: &WordEntry) -> (WordKind, String) {
    (entry.kind(), entry.word().trim().to_string())
}

/// Merge a generated supplement into a level's word list.
///
/// Entries are keyed by `(kind, trimmed word)`. A supplement entry replaces
/// its base counterpart (the base category survives when the supplement
/// carries none); merged entries come first in supplement order, base-only
/// entries follow in base order. The grammar list is not touched.
pub fn merge_supplement(base: &mut LevelData, supplement: LevelData) -> MergeReport {
    let mut report = MergeReport::default();
    let base_words = std::mem::take(&mut base.words);
    let mut merged = Vec::with_capacity(base_words.len() + supplement.words.len());
    let mut seen: HashSet<(WordKind, String)> = HashSet::new();

    for supp in supplement.words {
        let key = entry_key(&supp);
        match base_words.iter().find(|w| entry_key(w) == key) {
            Some(existing) => {
                merged.push(merged_entry(existing, supp));
                report.updated += 1;
            }
            None => {
                merged.push(supp);
                report.added += 1;
            }
        }
        seen.insert(key);
    }

    for entry in base_words {
        if seen.insert(entry_key(&entry)) {
            merged.push(entry);
            report.kept += 1;
        }
    }

    base.words = merged;
    report
}

fn merged_entry(base: &WordEntry, supplement: WordEntry) -> WordEntry {
    match (base, supplement) {
        (WordEntry::Noun(b), WordEntry::Noun(mut s)) => {
            if s.category.is_none() {
                s.category = b.category.clone();
            }
            WordEntry::Noun(s)
        }
        (WordEntry::Verb(b), WordEntry::Verb(mut s)) => {
            if s.category.is_none() {
                s.category = b.category.clone();
            }
            WordEntry::Verb(s)
        }
        (_, supplement) => supplement,
    }
}

/// `word -> meaning` index over a level's word list, for translation tooling.
/// Blank words and meanings are skipped; later entries win on duplicates.
pub fn meanings_index(data: &LevelData) -> BTreeMap<String, String> {
    let mut meanings = BTreeMap::new();
    for entry in &data.words {
        let word = entry.word().trim();
        if word.is_empty() {
            continue;
        }
        let meaning = entry.meaning().trim();
        if meaning.is_empty() {
            continue;
        }
        meanings.insert(word.to_string(), meaning.to_string());
    }
    meanings
}

#[cfg(test)]
mod tests {
    use super::*;
    use wortschatz_types::{Article, NounWord, VerbWord};

    fn noun(word: &str, meaning: &str, category: Option<&str>) -> WordEntry {
        WordEntry::Noun(NounWord {
            word: word.to_string(),
            article: Article::Der,
            plural: format!("{word}e"),
            meaning: meaning.to_string(),
            example_sentence: String::new(),
            translation: String::new(),
            category: category.map(str::to_string),
        })
    }

    fn verb(word: &str, meaning: &str) -> WordEntry {
        WordEntry::Verb(VerbWord {
            word: word.to_string(),
            meaning: meaning.to_string(),
            prasens_ich: String::new(),
            prateritum: String::new(),
            partizip_ii: String::new(),
            example_sentence: String::new(),
            translation: String::new(),
            category: None,
        })
    }

    fn level(words: Vec<WordEntry>) -> LevelData {
        LevelData {
            level: "a1".to_string(),
            words,
            grammar: vec![],
        }
    }

    #[test]
    fn supplement_updates_adds_and_keeps() {
        let mut base = level(vec![
            noun("Apfel", "apple (old)", Some("Food & Drink")),
            noun("Zug", "train", Some("Travel")),
        ]);
        let supplement = level(vec![
            noun("Apfel", "apple", None),
            noun("Brot", "bread", Some("Food & Drink")),
        ]);

        let report = merge_supplement(&mut base, supplement);
        assert_eq!(report, MergeReport { updated: 1, added: 1, kept: 1 });

        let words: Vec<&str> = base.words.iter().map(|w| w.word()).collect();
        // supplement order first, then base-only entries
        assert_eq!(words, ["Apfel", "Brot", "Zug"]);
        assert_eq!(base.words[0].meaning(), "apple");
        // base category survives a supplement without one
        assert_eq!(base.words[0].category(), Some("Food & Drink"));
    }

    #[test]
    fn same_word_different_kind_does_not_collide() {
        let mut base = level(vec![noun("Essen", "food", None)]);
        let supplement = level(vec![verb("Essen", "to eat")]);

        let report = merge_supplement(&mut base, supplement);
        assert_eq!(report, MergeReport { updated: 0, added: 1, kept: 1 });
        assert_eq!(base.words.len(), 2);
    }

    #[test]
    fn supplement_category_wins_when_present() {
        let mut base = level(vec![noun("Apfel", "apple", Some("Other"))]);
        let supplement = level(vec![noun("Apfel", "apple", Some("Food & Drink"))]);
        merge_supplement(&mut base, supplement);
        assert_eq!(base.words[0].category(), Some("Food & Drink"));
    }

    #[test]
    fn meanings_index_skips_blanks_and_dedups() {
        let data = level(vec![
            noun("Apfel", "apple", None),
            noun("  ", "ghost", None),
            noun("Zug", "  ", None),
            verb("Apfel", "apple (verb?)"),
        ]);
        let meanings = meanings_index(&data);
        assert_eq!(meanings.len(), 1);
        // later entries overwrite earlier ones
        assert_eq!(meanings["Apfel"], "apple (verb?)");
    }
}
