//! Counting the product data files inside a child directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Extensions that mark a product data file. Matching is case-sensitive.
pub const DATA_FILE_EXTENSIONS: &[&str] = &["yaml", "yml"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Sorted file names of the data files found in one directory.
pub struct ProductFiles {
    files: Vec<String>,
}

impl ProductFiles {
    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// List the data files directly inside `dir`.
///
/// A missing path (or one that is not a directory) yields an empty result.
/// Subdirectories are not descended into. Names are sorted by byte order so
/// the output does not depend on how the filesystem enumerates entries.
pub fn count_product_files(dir: &Path) -> Result<ProductFiles> {
    if !dir.is_dir() {
        return Ok(ProductFiles::default());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() || !is_data_file(&path) {
            continue;
        }
        let name = entry.file_name();
        match name.to_str() {
            Some(name) => files.push(name.to_string()),
            None => {
                warn!(path = %path.display(), "data file name is not valid UTF-8");
                files.push(name.to_string_lossy().into_owned());
            }
        }
    }

    files.sort();
    Ok(ProductFiles { files })
}

fn is_data_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DATA_FILE_EXTENSIONS.contains(&ext))
}
