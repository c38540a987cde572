use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};

use wortschatz_core::catalog::Catalog;
use wortschatz_core::search;
use wortschatz_lang_german::{CefrLevel, ContentLoader, meanings_index, merge_supplement};
use wortschatz_types::WordKind;

use crate::render;

#[derive(Parser)]
#[command(
    name = "wortschatz",
    version,
    about = "German vocabulary and grammar catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the enabled levels
    Levels,
    /// List the word categories of a level for one word type
    Categories { level: String, kind: String },
    /// Show the words of one category
    Words {
        level: String,
        kind: String,
        category: String,
        /// Case-insensitive substring filter over the word cards
        #[arg(long)]
        query: Option<String>,
    },
    /// List the grammar categories of a level
    Grammar { level: String },
    /// List the grammar topics of one category
    Topics { level: String, category: String },
    /// Show one grammar topic
    Topic {
        level: String,
        category: String,
        topic: String,
    },
    /// Print every valid route parameter combination of a level
    Routes {
        level: String,
        #[arg(long)]
        json: bool,
    },
    /// Merge a generated supplement document into a level's word list
    Merge {
        level: String,
        supplement: PathBuf,
        /// Write the merged level document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Also write the word -> meaning index to this file
        #[arg(long)]
        meanings: Option<PathBuf>,
    },
}

pub fn run(cli: Cli, catalog: &Catalog) -> anyhow::Result<()> {
    match cli.command {
        Command::Levels => {
            for id in catalog.level_ids() {
                match CefrLevel::from_str(id) {
                    Some(level) => println!("{id}  {}", level.description()),
                    None => println!("{id}"),
                }
            }
        }
        Command::Categories { level, kind } => {
            let kind = parse_kind(&kind)?;
            ensure_level(catalog, &level)?;
            for cat in catalog.word_categories(&level, kind) {
                println!("{:<28} {:<24} {:>4}", cat.name, cat.slug, cat.count);
            }
        }
        Command::Words {
            level,
            kind,
            category,
            query,
        } => {
            let kind = parse_kind(&kind)?;
            let found = catalog
                .words_in_category(&level, kind, &category)
                .with_context(|| {
                    format!("not found: {level}/words/{}/{category}", kind.route_token())
                })?;
            let words = search::filter_words(found.words, query.as_deref().unwrap_or(""));
            println!("{} ({} words)\n", found.category_name, words.len());
            for word in words {
                println!("{}\n", render::word_card(word));
            }
        }
        Command::Grammar { level } => {
            ensure_level(catalog, &level)?;
            for cat in catalog.grammar_categories(&level) {
                println!("{:<28} {:<24} {:>4}", cat.name, cat.slug, cat.count);
            }
        }
        Command::Topics { level, category } => {
            let found = catalog
                .grammar_topics_in_category(&level, &category)
                .with_context(|| format!("not found: {level}/grammar/{category}"))?;
            println!("{} ({} topics)", found.category_name, found.topics.len());
            for topic in &found.topics {
                println!("  {:<32} {}", topic.slug, topic.title);
            }
        }
        Command::Topic {
            level,
            category,
            topic,
        } => {
            let hit = catalog
                .grammar_topic(&level, &category, &topic)
                .with_context(|| format!("not found: {level}/grammar/{category}/{topic}"))?;
            println!("{}", render::topic_text(hit.topic, &hit.category_name));
        }
        Command::Routes { level, json } => {
            let routes = catalog
                .route_params(&level)
                .with_context(|| format!("not found: level '{level}'"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&routes)?);
            } else {
                println!("/{level}/words");
                for kind in &routes.word_kinds {
                    println!("/{level}/words/{kind}");
                }
                for route in &routes.word_categories {
                    println!("/{level}/words/{}/{}", route.kind, route.category);
                }
                println!("/{level}/grammar");
                for slug in &routes.grammar_categories {
                    println!("/{level}/grammar/{slug}");
                }
                for route in &routes.grammar_topics {
                    println!("/{level}/grammar/{}/{}", route.category, route.topic);
                }
            }
        }
        Command::Merge {
            level,
            supplement,
            out,
            meanings,
        } => {
            let mut base = catalog
                .level(&level)
                .cloned()
                .with_context(|| format!("not found: level '{level}'"))?;
            let supp = ContentLoader::load_from_file(&supplement)?;
            if !supp.level.eq_ignore_ascii_case(&base.level) {
                bail!(
                    "supplement targets level '{}', expected '{}'",
                    supp.level,
                    base.level
                );
            }

            let report = merge_supplement(&mut base, supp);
            tracing::info!(
                "Merged: {} updated, {} added, {} kept",
                report.updated,
                report.added,
                report.kept
            );

            let merged = serde_json::to_string_pretty(&base)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, merged)?;
                    tracing::info!("Wrote merged level to {}", path.display());
                }
                None => println!("{merged}"),
            }

            if let Some(path) = meanings {
                let index = meanings_index(&base);
                std::fs::write(&path, serde_json::to_string_pretty(&index)?)?;
                tracing::info!("Wrote {} meanings to {}", index.len(), path.display());
            }
        }
    }
    Ok(())
}

fn parse_kind(token: &str) -> anyhow::Result<WordKind> {
    WordKind::from_route(token)
        .with_context(|| format!("not found: unknown word type '{token}'"))
}

fn ensure_level(catalog: &Catalog, level: &str) -> anyhow::Result<()> {
    if catalog.level(level).is_none() {
        bail!("not found: level '{level}'");
    }
    Ok(())
}
