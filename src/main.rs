// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pressmark::{
    build_blocks, build_cards, extract_snippet, extract_terms, filter_by_category, highlight,
    highlight_with_terms, load_documents, locate_match_target, match_terms, normalize_title,
    select_best_match, BlockKind, CategoryMatcher, EngineConfig, MatchTarget,
};

mod cli;
use cli::display::{field, note, paint, section};
use cli::{Cli, Commands, TextSource};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "pressmark=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Terms { query } => {
            field("display", &format!("{:?}", extract_terms(&query)));
            field("match", &format!("{:?}", match_terms(&query)));
        }
        Commands::Highlight { query, source } => {
            let text = read_text(&source)?;
            println!("{}", paint(highlight(&text, &query)));
        }
        Commands::Snippet {
            query,
            source,
            max_length,
        } => {
            let text = read_text(&source)?;
            let max_length = budget(max_length, &config)?;
            let snippet = extract_snippet(&text, &query, max_length);
            println!("{}", paint(highlight(&snippet, &query)));
        }
        Commands::Cards {
            documents,
            query,
            max_length,
            category,
            json,
        } => {
            let docs = load_documents(&documents)
                .with_context(|| format!("failed to load {}", documents.display()))?;
            let max_length = budget(max_length, &config)?;

            let filtered = filter_by_category(&docs, &config.categories, category.as_deref());
            let page: Vec<_> = filtered.documents.iter().map(|d| (*d).clone()).collect();
            let cards = build_cards(&page, &query, max_length);

            if json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
                return Ok(());
            }

            if filtered.fell_back {
                note("no documents in that category, showing all results");
            }
            for card in &cards {
                section(&format!("#{}", card.document.id));
                println!("{}", paint(card.title.segments()));
                if !card.document.company.is_empty() {
                    field("company", &card.document.company);
                }
                if !card.document.published_date.is_empty() {
                    field("published", &card.document.published_date);
                }
                if !card.excerpt.as_str().is_empty() {
                    println!("{}", paint(card.excerpt.segments()));
                }
            }
            field("results", &cards.len().to_string());
        }
        Commands::Classify { documents } => {
            let docs = load_documents(&documents)
                .with_context(|| format!("failed to load {}", documents.display()))?;
            for category in &config.categories {
                let matcher = CategoryMatcher::compile(category)?;
                let ids: Vec<String> = docs
                    .iter()
                    .filter(|d| matcher.matches(d))
                    .map(|d| d.id.to_string())
                    .collect();
                section(&format!("{} ({})", category.title, category.id));
                field("matches", &ids.len().to_string());
                if !ids.is_empty() {
                    field("ids", &ids.join(", "));
                }
            }
        }
        Commands::Blocks {
            documents,
            id,
            query,
        } => {
            let docs = load_documents(&documents)
                .with_context(|| format!("failed to load {}", documents.display()))?;
            let Some(doc) = docs.iter().find(|d| d.id == id) else {
                bail!("no document with id {} in {}", id, documents.display());
            };

            let blocks = build_blocks(&doc.full_text);
            let terms = match_terms(&query);
            section(&normalize_title(&doc.title));

            let best = select_best_match(&doc.field_matches, &query);
            let target = doc
                .field_matches
                .iter()
                .find(|m| m.plain_text.trim() == best && !best.is_empty())
                .map_or(MatchTarget::Nothing, |m| locate_match_target(&blocks, m));
            tracing::debug!(?target, blocks = blocks.len(), "structured document");

            for (index, block) in blocks.iter().enumerate() {
                let marker = if target == MatchTarget::Block(index) { "▶ " } else { "" };
                let body = paint(highlight_with_terms(&block.text, &terms));
                match block.kind {
                    BlockKind::Heading => println!("\n{}{}", marker, body),
                    BlockKind::Paragraph => println!("{}{}\n", marker, body),
                }
            }
        }
    }

    Ok(())
}

fn budget(max_length: Option<usize>, config: &EngineConfig) -> Result<usize> {
    match max_length.unwrap_or(config.snippet_length) {
        0 => bail!("--max-length must be positive"),
        n => Ok(n),
    }
}

fn read_text(source: &TextSource) -> Result<String> {
    if let Some(text) = &source.text {
        return Ok(text.clone());
    }
    if let Some(path) = &source.file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text)
}
