// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pressmark command-line interface.
//!
//! Each subcommand exposes one piece of the engine over plain text or a JSON
//! page of documents, mostly for eyeballing what a query will highlight before
//! it reaches the UI.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pressmark",
    about = "Query matching, excerpts and highlighting for press-release search results",
    version
)]
pub struct Cli {
    /// Engine configuration (JSON); built-in defaults when omitted
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the text to process comes from.
#[derive(Args)]
pub struct TextSource {
    /// Inline text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read text from a file (stdin when neither --text nor --file is given)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the display and match terms for a query
    Terms {
        /// Search query
        query: String,
    },

    /// Print text with query matches highlighted
    Highlight {
        /// Search query
        query: String,

        #[command(flatten)]
        source: TextSource,
    },

    /// Print a bounded excerpt around the first match
    Snippet {
        /// Search query
        query: String,

        #[command(flatten)]
        source: TextSource,

        /// Character budget (defaults to the configured snippet length)
        #[arg(short, long)]
        max_length: Option<usize>,
    },

    /// Render result cards for a page of documents
    Cards {
        /// JSON file: an array of documents or {"data": [...]}
        documents: PathBuf,

        /// Search query
        query: String,

        /// Character budget for excerpts
        #[arg(short, long)]
        max_length: Option<usize>,

        /// Restrict to one configured category (falls back to all on no hits)
        #[arg(long)]
        category: Option<String>,

        /// Emit JSON instead of terminal output
        #[arg(long)]
        json: bool,
    },

    /// List which documents fall in each configured category
    Classify {
        /// JSON file: an array of documents or {"data": [...]}
        documents: PathBuf,
    },

    /// Show the structured full text of one document
    Blocks {
        /// JSON file: an array of documents or {"data": [...]}
        documents: PathBuf,

        /// Document id
        #[arg(long)]
        id: i64,

        /// Highlight this query in the blocks
        #[arg(short, long, default_value = "")]
        query: String,
    },
}
