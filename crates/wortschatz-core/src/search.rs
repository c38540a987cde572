//! Case-insensitive substring filtering over word lists.
//!
//! Cheap enough at catalog sizes (hundreds of entries) to recompute in full
//! on every query; no index structure, no ranking.

use wortschatz_types::WordEntry;

/// All searchable text of an entry, space-joined and lowercased: the common
/// fields plus every variant-specific textual field.
pub fn searchable_text(entry: &WordEntry) -> String {
    let mut parts: Vec<&str> = vec![
        entry.word(),
        entry.meaning(),
        entry.example_sentence(),
        entry.translation(),
    ];
    match entry {
        WordEntry::Noun(n) => parts.extend([n.article.as_str(), n.plural.as_str()]),
        WordEntry::Verb(v) => parts.extend([
            v.prasens_ich.as_str(),
            v.prateritum.as_str(),
            v.partizip_ii.as_str(),
        ]),
        WordEntry::Adjective(a) => {
            parts.extend([a.comparative.as_str(), a.superlative.as_str()])
        }
    }
    parts.join(" ").to_lowercase()
}

/// Keep the entries whose searchable text contains the trimmed, lowercased
/// query, in original order. A blank query keeps everything.
pub fn filter_words<'a, I>(words: I, query: &str) -> Vec<&'a WordEntry>
where
    I: IntoIterator<Item = &'a WordEntry>,
{
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return words.into_iter().collect();
    }
    words
        .into_iter()
        .filter(|entry| searchable_text(entry).contains(&q))
        .collect()
}
