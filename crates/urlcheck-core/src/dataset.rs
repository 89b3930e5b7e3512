//! The categorized URL dataset: five files, each carrying fixed labels.

use std::path::{Path, PathBuf};

use crate::url_model::{Category, RiskLevel};

/// One dataset file and the labels applied to every URL it contains.
///
/// Despite the `.csv` extension the files are plain line-delimited text,
/// one URL per line; no delimiter parsing happens anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetFile {
    pub file_name: &'static str,
    pub risk: RiskLevel,
    pub category: Category,
}

impl DatasetFile {
    /// Full path of this file inside a dataset directory.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name)
    }
}

/// The fixed file-to-label table. Files are always processed in this order,
/// so generated output is reproducible across runs and platforms.
pub const DATASET_FILES: [DatasetFile; 5] = [
    DatasetFile {
        file_name: "benign.csv",
        risk: RiskLevel::Nil,
        category: Category::Benign,
    },
    DatasetFile {
        file_name: "defaced.csv",
        risk: RiskLevel::Medium,
        category: Category::Defaced,
    },
    DatasetFile {
        file_name: "malware.csv",
        risk: RiskLevel::High,
        category: Category::Malware,
    },
    DatasetFile {
        file_name: "phishing.csv",
        risk: RiskLevel::Medium,
        category: Category::Phishing,
    },
    DatasetFile {
        file_name: "spam.csv",
        risk: RiskLevel::Low,
        category: Category::Spam,
    },
];
