//! Partitioning of flat word/topic lists into named category groups.

use wortschatz_types::{GrammarTopic, WordEntry};

/// Group used for entries without a usable category label
pub const FALLBACK_CATEGORY: &str = "Other";

/// Anything that may carry a category label
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

impl Categorized for WordEntry {
    fn category(&self) -> Option<&str> {
        WordEntry::category(self)
    }
}

impl Categorized for GrammarTopic {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// The category an entry is grouped under: its own label trimmed, or the
/// fallback when absent or blank.
pub fn effective_category(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(c) if !c.is_empty() => c,
        _ => FALLBACK_CATEGORY,
    }
}

/// Partition entries into `(group name, members)` pairs.
///
/// Members keep their relative input order within each group; groups come
/// out sorted ascending by name (case-insensitive, original name as the
/// tie-break). Every entry lands in exactly one group.
pub fn group_by_category<'a, T, I>(items: I) -> Vec<(String, Vec<&'a T>)>
where
    T: Categorized,
    I: IntoIterator<Item = &'a T>,
{
    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();
    for item in items {
        let name = effective_category(item.category());
        match groups.iter_mut().find(|(existing, _)| existing.as_str() == name) {
            Some((_, members)) => members.push(item),
            None => groups.push((name.to_string(), vec![item])),
        }
    }
    groups.sort_by(|(a, _), (b, _)| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    groups
}
