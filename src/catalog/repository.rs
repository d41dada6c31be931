//! Reads and rewrites `categories.yaml`.
//!
//! The document is loaded whole and written back whole. Writes go through a
//! temporary file in the same directory that is then renamed over the
//! original, so an interrupted run leaves the previous catalog in place.

use crate::CATALOG_FILE_NAME;
use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Clone, Debug)]
/// Location of a catalog document on disk.
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file inside a catalog root directory.
    pub fn in_root(root: &Path) -> Self {
        Self::new(root.join(CATALOG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory that category data directories are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Parse the catalog into a YAML value tree.
    pub fn load(&self) -> Result<Value> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        serde_yaml::from_str(&data).with_context(|| format!("parsing {}", self.path.display()))
    }

    /// Serialize `document` and atomically replace the catalog file.
    ///
    /// Key order is preserved as held in the value tree; nested structures are
    /// written in block style. The original file's permissions carry over.
    pub fn save(&self, document: &Value) -> Result<()> {
        let rendered = serde_yaml::to_string(document).context("serializing catalog")?;

        let mut staged = NamedTempFile::new_in(self.base_dir())
            .with_context(|| format!("staging write next to {}", self.path.display()))?;
        staged
            .write_all(rendered.as_bytes())
            .context("writing staged catalog")?;
        staged.as_file().sync_all().context("flushing staged catalog")?;

        if let Ok(meta) = fs::metadata(&self.path) {
            fs::set_permissions(staged.path(), meta.permissions())
                .context("copying catalog permissions")?;
        }

        staged
            .persist(&self.path)
            .map_err(|err| err.error)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}
