// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the fallible edges of the crate.
//!
//! The matching engine itself is total. Only loading configuration or
//! documents from disk, and compiling category keywords, can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading inputs or compiling categories.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON did not match the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A category keyword could not be compiled into a pattern
    #[error("invalid keyword {keyword:?} in category {category:?}: {source}")]
    Keyword {
        category: String,
        keyword: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration parsed but failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
