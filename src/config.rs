// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration and document loading.
//!
//! Configuration is a small JSON file. Every field is optional; anything left
//! out takes the built-in default.
//!
//! ```json
//! {
//!   "snippet_length": 180,
//!   "categories": [
//!     { "id": "ai", "title": "AI", "keywords": ["ai", "machine learning"] }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::snippet::DEFAULT_SNIPPET_LENGTH;
use crate::types::{Category, Document};

/// Settings shared by every matching call in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Character budget for result-card excerpts.
    pub snippet_length: usize,
    /// Featured categories offered as filters.
    pub categories: Vec<Category>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            snippet_length: DEFAULT_SNIPPET_LENGTH,
            categories: default_categories(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = read(path)?;
        let config: EngineConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            categories = config.categories.len(),
            snippet_length = config.snippet_length,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Load `path` if given, the defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn validate(&self) -> Result<()> {
        if self.snippet_length == 0 {
            return Err(Error::InvalidConfig("snippet_length must be positive".into()));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(Error::InvalidConfig("category id must not be empty".into()));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate category id {:?}",
                    category.id
                )));
            }
            if category.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(Error::InvalidConfig(format!(
                    "category {:?} has no keywords",
                    category.id
                )));
            }
        }
        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// Featured categories used when no configuration is given.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(
            "ai",
            "AI & Digital Health",
            &["ai", "artificial intelligence", "machine learning", "digital health"],
        ),
        Category::new(
            "approvals",
            "Regulatory Approvals",
            &["fda", "ema", "approval", "approved", "marketing authorization"],
        ),
        Category::new(
            "oncology",
            "Oncology",
            &["cancer", "oncology", "tumor", "tumour", "leukemia", "lymphoma"],
        ),
        Category::new(
            "vaccines",
            "Vaccines",
            &["vaccine", "vaccines", "immunization"],
        ),
        Category::new(
            "deals",
            "Deals & Partnerships",
            &[
                "acquisition",
                "acquire",
                "merger",
                "partnership",
                "collaboration",
                "licensing agreement",
            ],
        ),
    ]
}

/// Payload shapes accepted for a page of documents.
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentsPayload {
    Bare(Vec<Document>),
    Envelope { data: Vec<Document> },
}

/// Parse a page of documents: a JSON array or `{ "data": [...] }`.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>> {
    let documents = match serde_json::from_str(raw)? {
        DocumentsPayload::Bare(documents) => documents,
        DocumentsPayload::Envelope { data } => data,
    };
    Ok(documents)
}

/// Read and parse a page of documents from disk.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let documents = parse_documents(&read(path)?)?;
    tracing::debug!(path = %path.display(), count = documents.len(), "loaded documents");
    Ok(documents)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
