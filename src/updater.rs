//! Rebuilds the catalog document with fresh product counts.
//!
//! Each category is copied field by field. Only a non-empty `children`
//! sequence is rebuilt: every child is normalized, its directory resolved
//! under the parent category, and `productCount`/`productFiles` attached.
//! Category and child order is preserved exactly.

use crate::catalog::model::{
    CATEGORIES_KEY, CHILDREN_KEY, RawChild, category_children, category_id,
};
use crate::counter::count_product_files;
use crate::resolver::resolve_child_dir;
use anyhow::{Context, Result, anyhow};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{debug, info};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// What one update pass touched.
pub struct SyncSummary {
    pub categories: usize,
    pub children: usize,
    pub products: usize,
    pub missing_dirs: usize,
}

#[derive(Clone, Debug)]
/// Rewritten document plus the summary of the pass that produced it.
pub struct CatalogUpdate {
    pub document: Value,
    pub summary: SyncSummary,
}

/// Produce the updated catalog for `document`, reading data files under `base_path`.
///
/// Fails when the root has no `categories` key; nothing is written in that
/// case because the caller never receives a document. The output root holds
/// only `categories`.
pub fn update_catalog(document: &Value, base_path: &Path) -> Result<CatalogUpdate> {
    let categories = document
        .get(CATEGORIES_KEY)
        .ok_or_else(|| anyhow!("'{CATEGORIES_KEY}' key not found in catalog document"))?
        .as_sequence()
        .ok_or_else(|| anyhow!("'{CATEGORIES_KEY}' must be a sequence of categories"))?;

    let mut summary = SyncSummary::default();
    let mut updated = Vec::with_capacity(categories.len());
    for (index, category) in categories.iter().enumerate() {
        let category = update_category(category, base_path, &mut summary)
            .with_context(|| format!("updating category #{}", index + 1))?;
        updated.push(category);
    }
    summary.categories = updated.len();

    info!(
        categories = summary.categories,
        children = summary.children,
        products = summary.products,
        missing_dirs = summary.missing_dirs,
        "catalog counts refreshed"
    );

    let mut root = Mapping::with_capacity(1);
    root.insert(Value::from(CATEGORIES_KEY), Value::Sequence(updated));
    Ok(CatalogUpdate {
        document: Value::Mapping(root),
        summary,
    })
}

fn update_category(category: &Value, base_path: &Path, summary: &mut SyncSummary) -> Result<Value> {
    let Some(fields) = category.as_mapping() else {
        return Ok(category.clone());
    };
    let Some(children) = category_children(fields) else {
        return Ok(category.clone());
    };

    let category_id = category_id(fields);
    let mut rebuilt = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let mut record = RawChild::from_value(child)
            .and_then(RawChild::normalize)
            .with_context(|| format!("child #{} of category '{category_id}'", index + 1))?;

        let dir = resolve_child_dir(base_path, &category_id, record.id());
        if !dir.is_dir() {
            summary.missing_dirs += 1;
        }
        let products = count_product_files(&dir)?;
        debug!(
            category = %category_id,
            child = %record.id(),
            count = products.count(),
            "counted product files"
        );

        summary.children += 1;
        summary.products += products.count();
        record.set_products(&products);
        rebuilt.push(record.into_value());
    }

    let mut updated = fields.clone();
    updated.insert(Value::from(CHILDREN_KEY), Value::Sequence(rebuilt));
    Ok(Value::Mapping(updated))
}
