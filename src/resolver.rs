//! Maps a category/child pair onto its directory of product files.
//!
//! Directory names on disk do not follow one casing convention, so each child
//! is probed under a handful of spellings. Only the spellings listed in
//! `candidate_names` are tried; hyphenated or underscored variants are not.

use crate::catalog::identity::{CategoryId, ChildId, capitalize_word};
use std::path::{Path, PathBuf};
use tracing::debug;

// Categories whose data lives in a directory of the same name.
const KNOWN_CATEGORY_DIRS: &[&str] = &["control", "detection", "comms", "software", "cctv"];

/// Base directory holding the child directories of a category.
pub fn category_base_dir(base_path: &Path, category: &CategoryId) -> PathBuf {
    match KNOWN_CATEGORY_DIRS
        .iter()
        .find(|known| **known == category.as_str())
    {
        Some(known) => base_path.join(known),
        None => base_path.join(category.as_str()),
    }
}

/// Directory names tried for a child, in priority order, without repeats.
pub fn candidate_names(child: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(4);
    for name in [
        child.to_string(),
        child.to_lowercase(),
        capitalize_word(child),
        child.to_uppercase(),
    ] {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Locate the directory for `child` under `category`.
///
/// Returns the first candidate that exists as a directory. When none does, the
/// lower-case path is returned anyway; callers read that as "no files".
pub fn resolve_child_dir(base_path: &Path, category: &CategoryId, child: &ChildId) -> PathBuf {
    let base_dir = category_base_dir(base_path, category);
    for name in candidate_names(child.as_str()) {
        let candidate = base_dir.join(&name);
        if candidate.is_dir() {
            debug!(category = %category, child = %child, dir = %candidate.display(), "resolved child directory");
            return candidate;
        }
    }
    let fallback = base_dir.join(child.as_str().to_lowercase());
    debug!(category = %category, child = %child, dir = %fallback.display(), "no child directory on disk");
    fallback
}
