//! In-memory URL reputation store, rebuilt from the dataset files per run.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::DATASET_FILES;
use crate::url_model::{sanitize_url, Category, RiskLevel, UrlModel};

/// Labels held for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMeta {
    pub risk: RiskLevel,
    pub category: Category,
}

/// Map from sanitized URL to its labels. Read-only after loading, so it can
/// be shared across lookup handlers without locking.
#[derive(Debug, Default)]
pub struct UrlStore {
    entries: HashMap<String, UrlMeta>,
}

impl UrlStore {
    /// Loads the store from a dataset directory.
    ///
    /// Lines go through the same sanitizer as seed-script generation, so the
    /// store and the generated script agree on keys. Blank lines are skipped;
    /// on duplicate URLs the first file in table order wins.
    pub fn load_from_dataset(dir: &Path) -> Result<Self> {
        let mut entries = HashMap::new();
        for spec in &DATASET_FILES {
            let path = spec.path_in(dir);
            let file = File::open(&path)
                .with_context(|| format!("failed to open dataset file {}", path.display()))?;
            for line in BufReader::new(file).lines() {
                let line = line
                    .with_context(|| format!("failed to read dataset file {}", path.display()))?;
                let url = sanitize_url(&line);
                if url.is_empty() {
                    continue;
                }
                entries.entry(url).or_insert(UrlMeta {
                    risk: spec.risk,
                    category: spec.category,
                });
            }
        }
        tracing::info!(urls = entries.len(), "url store loaded");
        Ok(Self { entries })
    }

    /// Builds a store directly from URL/label pairs. First entry wins on
    /// duplicates, as with dataset loading.
    pub fn from_entries<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, UrlMeta)>,
    {
        let mut entries = HashMap::new();
        for (url, meta) in pairs {
            entries.entry(url).or_insert(meta);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels for an exact URL, if present.
    pub fn lookup(&self, url: &str) -> Option<&UrlMeta> {
        self.entries.get(url)
    }

    /// Reputation record for a URL, falling back to `Unknown`/`Unknown` when
    /// the dataset has no entry for it.
    pub fn get_info(&self, url: &str) -> UrlModel {
        match self.entries.get(url) {
            Some(meta) => UrlModel::known(url, meta.risk, meta.category),
            None => {
                tracing::debug!(url, "no entry in url store");
                UrlModel::unknown(url)
            }
        }
    }
}
