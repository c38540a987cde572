pub mod types;

pub use types::{
    AdjectiveWord, Article, GrammarExample, GrammarTopic, LevelData, NounWord, VerbWord, WordEntry,
    WordKind,
};
