//! Category catalog wiring.
//!
//! This module wraps `categories.yaml`: identifiers and display names for
//! categories and children, the YAML entry shapes with child normalization,
//! and the file access used to load and atomically rewrite the catalog.

pub mod identity;
pub mod model;
pub mod repository;

pub use identity::{CategoryId, ChildId, capitalize_first, capitalize_word, display_name};
pub use model::{
    CATEGORIES_KEY, CHILDREN_KEY, ChildRecord, ID_KEY, NAME_KEY, PRODUCT_COUNT_KEY,
    PRODUCT_FILES_KEY, RawChild,
};
pub use repository::CatalogFile;
