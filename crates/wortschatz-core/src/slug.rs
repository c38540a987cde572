//! URL slug derivation for category names and grammar topic titles.
//!
//! Slugs are lowercase `[a-z0-9-]` identifiers derived deterministically from
//! display text. Derivation is pure and idempotent; resolution back to a name
//! is a linear scan over candidate names, first match wins.

fn keep_slug_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}

/// Collapse whitespace runs to a single hyphen.
fn hyphenate_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Category name to slug: `"Food & Drink"` -> `"food-drink"`.
///
/// Each ampersand, together with the whitespace around it, becomes one
/// hyphen; remaining whitespace runs become one hyphen each; everything
/// outside `[a-z0-9-]` is stripped.
pub fn category_slug(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut hyphenated = String::with_capacity(lower.len());
    let mut chars = lower.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&' {
            hyphenated.push('-');
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        } else if c.is_whitespace() {
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
            // a run directly before '&' belongs to the ampersand's hyphen
            if chars.peek() != Some(&'&') {
                hyphenated.push('-');
            }
        } else {
            hyphenated.push(c);
        }
    }
    keep_slug_chars(&hyphenated)
}

/// Grammar topic title to slug: `"Present Tense (Präsens)"` -> `"present-tense"`.
///
/// Parenthesized qualifiers and everything from the first colon on are
/// dropped before hyphenation; titles carry translations and qualifying
/// clauses that must not end up in the URL.
pub fn topic_slug(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    let mut stripped = String::with_capacity(title.len());
    let mut i = 0;
    while i < chars.len() {
        let mut j = i;
        while j < chars.len() && chars[j].is_whitespace() {
            j += 1;
        }
        if j < chars.len() && chars[j] == '(' {
            // an unmatched '(' is left for the character filter
            if let Some(close) = (j + 1..chars.len()).find(|&k| chars[k] == ')') {
                let mut k = close + 1;
                while k < chars.len() && chars[k].is_whitespace() {
                    k += 1;
                }
                stripped.push(' ');
                i = k;
                continue;
            }
        }
        stripped.push(chars[i]);
        i += 1;
    }

    let stripped = match stripped.find(':') {
        Some(colon) => &stripped[..colon],
        None => stripped.as_str(),
    };

    let lower = stripped.trim().to_lowercase();
    keep_slug_chars(&hyphenate_whitespace(&lower))
}

/// Resolve a slug back to a display name from a candidate list.
///
/// Returns the first candidate whose `category_slug` equals the input slug,
/// or `None` when nothing matches. Two names sharing a slug resolve to
/// whichever comes first in the candidate order.
pub fn resolve_category<'a, I>(slug: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let lower = slug.to_lowercase();
    candidates
        .into_iter()
        .find(|name| category_slug(name) == lower)
}
