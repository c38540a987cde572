//! The catalog index: level lookup, category listings, slug resolution and
//! route-parameter enumeration over immutable level content.
//!
//! Every resolution operation returns `None` for anything that does not
//! match (unknown level id, unresolvable slug). That is the only failure
//! mode; nothing in here panics on malformed input.

use std::collections::HashMap;

use serde::Serialize;

use wortschatz_types::{GrammarTopic, LevelData, WordEntry, WordKind};

use crate::group::{effective_category, group_by_category};
use crate::slug;

/// Slug of the synthetic listing holding all adjectives
pub const ADJECTIVE_CATEGORY_SLUG: &str = "all";

const ADJECTIVE_GROUP_NAME: &str = "All adjectives";
const ADJECTIVE_CATEGORY_NAME: &str = "Adjectives";

/// One category of a listing page: display name, slug, member count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

/// One grammar topic as linked from its category page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicLink {
    pub title: String,
    pub slug: String,
}

/// Words of one resolved category, in original list order
#[derive(Debug)]
pub struct CategoryWords<'a> {
    pub category_name: String,
    pub words: Vec<&'a WordEntry>,
}

/// Topic links of one resolved grammar category
#[derive(Debug, Clone)]
pub struct CategoryTopics {
    pub category_name: String,
    pub topics: Vec<TopicLink>,
}

/// A single resolved grammar topic
#[derive(Debug)]
pub struct TopicInCategory<'a> {
    pub category_name: String,
    pub topic: &'a GrammarTopic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCategoryRoute {
    pub kind: &'static str,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrammarTopicRoute {
    pub category: String,
    pub topic: String,
}

/// Every valid route parameter combination of one level.
///
/// This is the static-path surface: exactly the slugs reachable through the
/// catalog's lookup operations, no orphans and no gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteParams {
    pub word_kinds: Vec<&'static str>,
    pub word_categories: Vec<WordCategoryRoute>,
    pub grammar_categories: Vec<String>,
    pub grammar_topics: Vec<GrammarTopicRoute>,
}

/// Read-only index over the loaded level contents.
///
/// Constructed once at startup from explicit level data and never mutated;
/// all derived structures are recomputed from the source lists on demand.
pub struct Catalog {
    levels: Vec<LevelData>,
}

impl Catalog {
    pub fn new(levels: Vec<LevelData>) -> Self {
        Self { levels }
    }

    /// Level ids in configured order
    pub fn level_ids(&self) -> Vec<&str> {
        self.levels.iter().map(|data| data.level.as_str()).collect()
    }

    /// Case-insensitive level lookup
    pub fn level(&self, id: &str) -> Option<&LevelData> {
        self.levels
            .iter()
            .find(|data| data.level.eq_ignore_ascii_case(id))
    }

    /// Word categories of a level and word type, sorted by name.
    ///
    /// Adjectives carry no category dimension and come back as one synthetic
    /// group under the `all` slug. Unknown levels yield an empty listing.
    pub fn word_categories(&self, level: &str, kind: WordKind) -> Vec<CategorySummary> {
        let Some(data) = self.level(level) else {
            return Vec::new();
        };
        let words: Vec<&WordEntry> = data.words.iter().filter(|w| w.kind() == kind).collect();
        match kind {
            WordKind::Adjective => vec![CategorySummary {
                name: ADJECTIVE_GROUP_NAME.to_string(),
                slug: ADJECTIVE_CATEGORY_SLUG.to_string(),
                count: words.len(),
            }],
            _ => group_by_category(words)
                .into_iter()
                .map(|(name, members)| CategorySummary {
                    slug: slug::category_slug(&name),
                    count: members.len(),
                    name,
                })
                .collect(),
        }
    }

    /// Resolve a category slug and return its words in original list order
    pub fn words_in_category(
        &self,
        level: &str,
        kind: WordKind,
        category_slug: &str,
    ) -> Option<CategoryWords<'_>> {
        let data = self.level(level)?;
        let words: Vec<&WordEntry> = data.words.iter().filter(|w| w.kind() == kind).collect();

        if kind == WordKind::Adjective {
            if category_slug != ADJECTIVE_CATEGORY_SLUG {
                return None;
            }
            return Some(CategoryWords {
                category_name: ADJECTIVE_CATEGORY_NAME.to_string(),
                words,
            });
        }

        let categories = self.word_categories(level, kind);
        let name = slug::resolve_category(
            category_slug,
            categories.iter().map(|c| c.name.as_str()),
        )?
        .to_string();
        let words = words
            .into_iter()
            .filter(|w| effective_category(w.category()) == name)
            .collect();
        Some(CategoryWords {
            category_name: name,
            words,
        })
    }

    /// Grammar categories of a level, sorted by name
    pub fn grammar_categories(&self, level: &str) -> Vec<CategorySummary> {
        let Some(data) = self.level(level) else {
            return Vec::new();
        };
        group_by_category(data.grammar.iter())
            .into_iter()
            .map(|(name, members)| CategorySummary {
                slug: slug::category_slug(&name),
                count: members.len(),
                name,
            })
            .collect()
    }

    /// Resolve a grammar category slug to its topic links
    pub fn grammar_topics_in_category(
        &self,
        level: &str,
        category_slug: &str,
    ) -> Option<CategoryTopics> {
        let data = self.level(level)?;
        let name = self.resolve_grammar_category(level, category_slug)?;
        let topics = assign_topic_slugs(&data.grammar, &name)
            .into_iter()
            .map(|(topic, slug)| TopicLink {
                title: topic.title.clone(),
                slug,
            })
            .collect();
        Some(CategoryTopics {
            category_name: name,
            topics,
        })
    }

    /// Resolve a `(category, topic)` slug pair to a single grammar topic
    pub fn grammar_topic(
        &self,
        level: &str,
        category_slug: &str,
        topic_slug: &str,
    ) -> Option<TopicInCategory<'_>> {
        let data = self.level(level)?;
        let name = self.resolve_grammar_category(level, category_slug)?;
        let topic = assign_topic_slugs(&data.grammar, &name)
            .into_iter()
            .find(|(_, slug)| slug.as_str() == topic_slug)
            .map(|(topic, _)| topic)?;
        Some(TopicInCategory {
            category_name: name,
            topic,
        })
    }

    /// Every valid route parameter combination for one level
    pub fn route_params(&self, level: &str) -> Option<RouteParams> {
        let data = self.level(level)?;

        let word_kinds = WordKind::ALL.iter().map(|k| k.route_token()).collect();

        let mut word_categories = Vec::new();
        for kind in WordKind::ALL {
            for cat in self.word_categories(level, kind) {
                word_categories.push(WordCategoryRoute {
                    kind: kind.route_token(),
                    category: cat.slug,
                });
            }
        }

        let grammar = self.grammar_categories(level);
        let grammar_categories = grammar.iter().map(|c| c.slug.clone()).collect();

        let mut grammar_topics = Vec::new();
        for cat in &grammar {
            for (_, topic_slug) in assign_topic_slugs(&data.grammar, &cat.name) {
                grammar_topics.push(GrammarTopicRoute {
                    category: cat.slug.clone(),
                    topic: topic_slug,
                });
            }
        }

        Some(RouteParams {
            word_kinds,
            word_categories,
            grammar_categories,
            grammar_topics,
        })
    }

    fn resolve_grammar_category(&self, level: &str, category_slug: &str) -> Option<String> {
        let categories = self.grammar_categories(level);
        slug::resolve_category(category_slug, categories.iter().map(|c| c.name.as_str()))
            .map(str::to_string)
    }
}

/// Topics of one category with collision-free slugs.
///
/// Base slugs are tracked per category in list order; the first occurrence
/// keeps the base, the Nth (N >= 2) gets an `-N` suffix, so two topics whose
/// titles slugify identically still get distinct URLs.
fn assign_topic_slugs<'a>(
    grammar: &'a [GrammarTopic],
    category_name: &str,
) -> Vec<(&'a GrammarTopic, String)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    grammar
        .iter()
        .filter(|t| effective_category(t.category.as_deref()) == category_name)
        .map(|topic| {
            let base = slug::topic_slug(&topic.title);
            let n = seen
                .entry(base.clone())
                .and_modify(|n| *n += 1)
                .or_insert(1);
            let slug = if *n == 1 {
                base
            } else {
                format!("{base}-{n}")
            };
            (topic, slug)
        })
        .collect()
}
