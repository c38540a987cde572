pub mod catalog;
pub mod group;
pub mod search;
pub mod slug;

pub use catalog::{Catalog, CategorySummary, RouteParams, TopicLink};
pub use group::{Categorized, FALLBACK_CATEGORY, effective_category, group_by_category};
pub use search::{filter_words, searchable_text};

#[cfg(test)]
mod tests;
