//! Catalog model: the static download table and its grouping/filtering.
//!
//! The record table is supplied by the hosting layer (the CLI loads it from
//! JSON); everything here takes the records as an explicit read-only slice.

mod group;
mod link;

pub use group::{filter, group, Category, GroupedCatalog};
pub use link::{download_link, DownloadLink};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One entry in the static download table.
///
/// Wire names follow the legacy catalog JSON (`liens`, `versionweb`); only
/// `filename` and `title` are required. Records are never written back.
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadRecord {
    /// Relative path segment under the assets directory.
    pub filename: String,
    /// Human-readable display name; primary lookup key.
    pub title: String,
    /// Free-text category, normalized at grouping time.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    /// Embedded source blob shown verbatim in the viewer.
    #[serde(default)]
    pub code_py: Option<String>,
    /// Embedded config blob shown verbatim in the viewer.
    #[serde(default)]
    pub code_yaml: Option<String>,
    /// External source path, used when `code_py` is absent.
    #[serde(default)]
    pub code_path: Option<String>,
    /// External config path, used when `code_yaml` is absent.
    #[serde(default)]
    pub yaml_path: Option<String>,
    /// External "web version" URL shown as an action.
    #[serde(default, rename = "versionweb")]
    pub web_version_url: Option<String>,
    /// External link; a non-empty value makes the viewer redirect instead of
    /// rendering panes.
    #[serde(default, rename = "liens")]
    pub external_link: Option<String>,
}

/// Load the catalog table from a JSON file.
///
/// Only the hosting layer calls this; core logic receives the resulting
/// slice as a parameter.
pub fn load_from_path(path: &Path) -> Result<Vec<DownloadRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let records: Vec<DownloadRecord> = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    tracing::debug!("loaded {} catalog records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
pub(crate) fn record(title: &str, filename: &str) -> DownloadRecord {
    DownloadRecord {
        filename: filename.to_string(),
        title: title.to_string(),
        category: String::new(),
        version: String::new(),
        date: String::new(),
        description: String::new(),
        size_bytes: None,
        code_py: None,
        code_yaml: None,
        code_path: None,
        yaml_path: None,
        web_version_url: None,
        external_link: None,
    }
}
