use wortschatz_types::{GrammarTopic, WordEntry};

/// Plain-text card for one word entry
pub fn word_card(entry: &WordEntry) -> String {
    match entry {
        WordEntry::Noun(n) => format!(
            "{} {}  (Plural: {})\n  {}\n  {}\n  {}",
            n.article.as_str(),
            n.word,
            n.plural,
            n.meaning,
            n.example_sentence,
            n.translation
        ),
        WordEntry::Verb(v) => format!(
            "{}  (ich {}, Prät. {}, Part. II {})\n  {}\n  {}\n  {}",
            v.word,
            v.prasens_ich,
            v.prateritum,
            v.partizip_ii,
            v.meaning,
            v.example_sentence,
            v.translation
        ),
        WordEntry::Adjective(a) => format!(
            "{}  ({}, {})\n  {}\n  {}\n  {}",
            a.word,
            a.comparative,
            a.superlative,
            a.meaning,
            a.example_sentence,
            a.translation
        ),
    }
}

/// Plain-text page for one grammar topic
pub fn topic_text(topic: &GrammarTopic, category_name: &str) -> String {
    let mut out = format!(
        "{}\n[{}]\n\n{}",
        topic.title, category_name, topic.explanation
    );
    if let Some(structure) = &topic.structure {
        out.push_str("\n\nStruktur: ");
        out.push_str(structure);
    }
    if !topic.examples.is_empty() {
        out.push('\n');
        for example in &topic.examples {
            out.push_str(&format!("\n  {}\n    {}", example.sentence, example.translation));
        }
    }
    if !topic.notes.is_empty() {
        out.push('\n');
        for note in &topic.notes {
            out.push_str(&format!("\n  * {note}"));
        }
    }
    out
}
