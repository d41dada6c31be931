//! Shared library for the category-sync maintenance tool.
//!
//! The crate keeps `categories.yaml` in step with the product data on disk:
//! every child category gets a `productCount` (and, when non-zero, a sorted
//! `productFiles` list) taken from `<root>/<category>/<child>/*.{yaml,yml}`.
//! The `update-categories` binary is a thin wrapper over `find_catalog_root`,
//! `CatalogFile` and `update_catalog`.

use anyhow::{Context, Result, bail};
use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod counter;
pub mod resolver;
pub mod updater;

pub use catalog::{
    CatalogFile, CategoryId, ChildId, ChildRecord, RawChild, display_name,
};
pub use counter::{ProductFiles, count_product_files};
pub use resolver::{candidate_names, category_base_dir, resolve_child_dir};
pub use updater::{CatalogUpdate, SyncSummary, update_catalog};

/// File name of the catalog inside the catalog root.
pub const CATALOG_FILE_NAME: &str = "categories.yaml";

/// Environment variable naming the catalog root explicitly.
pub const ROOT_HINT_ENV: &str = "CATEGORY_SYNC_ROOT";

/// Returns true when `candidate` holds a catalog file.
fn is_catalog_root(candidate: &Path) -> bool {
    candidate.join(CATALOG_FILE_NAME).is_file()
}

/// Resolve an explicit `CATEGORY_SYNC_ROOT` hint.
///
/// A hint that is set must name a catalog root; it never falls through to
/// another location.
fn catalog_root_from_hint(hint: &OsStr) -> Result<PathBuf> {
    if hint.is_empty() {
        bail!("{ROOT_HINT_ENV} is set but empty");
    }
    let hint_path = PathBuf::from(hint);
    if !is_catalog_root(&hint_path) {
        bail!(
            "{ROOT_HINT_ENV}={} does not contain {CATALOG_FILE_NAME}",
            hint_path.display()
        );
    }
    fs::canonicalize(&hint_path)
        .with_context(|| format!("Unable to canonicalize {}", hint_path.display()))
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_catalog_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding `categories.yaml`.
///
/// The catalog sits next to the tool: climb up from the current executable
/// until a directory holds the catalog file. `CATEGORY_SYNC_ROOT`, when set,
/// replaces that search entirely.
pub fn find_catalog_root() -> Result<PathBuf> {
    if let Some(hint) = env::var_os(ROOT_HINT_ENV) {
        return catalog_root_from_hint(&hint);
    }

    let exe_path = env::current_exe().context("Unable to determine the executable path")?;
    if let Some(root) = exe_path.parent().and_then(search_upwards) {
        return Ok(root);
    }

    bail!(
        "Unable to locate {CATALOG_FILE_NAME} next to {}. Place the tool beside the catalog or set {ROOT_HINT_ENV}.",
        exe_path.display()
    );
}
