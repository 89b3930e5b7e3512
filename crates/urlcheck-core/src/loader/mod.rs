//! Seed-script loader: converts the URL dataset into database insertion
//! statements.
//!
//! Walks the fixed dataset table in order, sanitizes each line, and appends
//! one templated `db.urlModel.insert(...)` statement per line to the output
//! script. The script is executed later by an external database tool; this
//! module only produces text.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::dataset::DATASET_FILES;
use crate::url_model::{sanitize_url, Category, RiskLevel};

/// Fatal loader failure. Nothing is retried and statements already appended
/// are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dataset file {}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write seed script {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub files: usize,
    pub statements: usize,
}

/// Dataset-to-seed-script converter.
pub struct Loader {
    dataset_dir: PathBuf,
    output_path: PathBuf,
}

impl Loader {
    pub fn new(dataset_dir: &Path, output_path: &Path) -> Self {
        Self {
            dataset_dir: dataset_dir.to_path_buf(),
            output_path: output_path.to_path_buf(),
        }
    }

    /// Converts every dataset file into insertion statements.
    ///
    /// The output script is opened once in append mode (pre-existing content
    /// is preserved) and held for the whole run; each input file is opened
    /// and closed in turn. Every line, blank lines included, produces exactly
    /// one statement, in file order. Any I/O failure aborts the run.
    pub fn run(&self) -> Result<LoadSummary, LoadError> {
        let mut out = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)
            .map_err(|source| LoadError::OutputWrite {
                path: self.output_path.clone(),
                source,
            })?;

        let mut statements = 0usize;
        for spec in &DATASET_FILES {
            let path = spec.path_in(&self.dataset_dir);
            // Progress trace on stdout, one line per dataset file.
            println!("{}", path.display());
            tracing::info!(
                file = %path.display(),
                risk = spec.risk.as_str(),
                category = spec.category.as_str(),
                "loading dataset file"
            );

            let file = File::open(&path).map_err(|source| LoadError::DatasetRead {
                path: path.clone(),
                source,
            })?;
            for line in BufReader::new(file).lines() {
                let line = line.map_err(|source| LoadError::DatasetRead {
                    path: path.clone(),
                    source,
                })?;
                let url = sanitize_url(&line);
                let statement = render_insert(&url, spec.risk, spec.category);
                out.write_all(statement.as_bytes())
                    .map_err(|source| LoadError::OutputWrite {
                        path: self.output_path.clone(),
                        source,
                    })?;
                statements += 1;
            }
        }

        tracing::info!(statements, "seed script updated");
        Ok(LoadSummary {
            files: DATASET_FILES.len(),
            statements,
        })
    }
}

/// Renders one insertion statement.
///
/// The template bytes are a leading newline, the statement body, and a
/// trailing newline plus four spaces; consumers of the script rely on the
/// exact shape, so it must not change.
pub fn render_insert(url: &str, risk: RiskLevel, category: Category) -> String {
    format!(
        concat!(
            "\ndb.urlModel.insert({{\n",
            "    \"url\": \"{url}\",\n",
            "    \"risk\": \"{risk}\",\n",
            "    \"category\": \"{category}\"\n",
            "}});\n",
            "    ",
        ),
        url = url,
        risk = risk.as_str(),
        category = category.as_str(),
    )
}
