//! Shapes of the entries inside `categories.yaml`.
//!
//! Categories and child records carry arbitrary descriptive fields that must
//! survive a rewrite in their original order, so both stay backed by
//! `serde_yaml::Mapping` rather than fixed structs. `RawChild` covers the two
//! spellings a child may take before normalization.

use crate::catalog::identity::{CategoryId, ChildId, capitalize_first, display_name};
use crate::counter::ProductFiles;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_yaml::{Mapping, Number, Value};

pub const CATEGORIES_KEY: &str = "categories";
pub const CHILDREN_KEY: &str = "children";
pub const ID_KEY: &str = "id";
pub const NAME_KEY: &str = "name";
pub const PRODUCT_COUNT_KEY: &str = "productCount";
pub const PRODUCT_FILES_KEY: &str = "productFiles";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
/// A child entry as written in the catalog, before normalization.
pub enum RawChild {
    /// `- radar`
    Name(String),
    /// `- 2070` left unquoted in the YAML source.
    Number(Number),
    /// `- {id: radar, name: Radar, ...}`
    Record(Mapping),
}

#[derive(Clone, Debug, PartialEq)]
/// Normalized child: resolved `id`/`name` plus every field of the record.
pub struct ChildRecord {
    id: ChildId,
    name: String,
    fields: Mapping,
}

impl RawChild {
    /// Interpret one element of a category's `children` sequence.
    pub fn from_value(value: &Value) -> Result<Self> {
        serde_yaml::from_value(value.clone())
            .context("child must be a name or a mapping with `id`/`name`")
    }

    /// Produce the normalized record for this entry.
    pub fn normalize(self) -> Result<ChildRecord> {
        match self {
            RawChild::Name(name) => ChildRecord::from_name(&name),
            RawChild::Number(number) => ChildRecord::from_name(&number.to_string()),
            RawChild::Record(fields) => ChildRecord::from_fields(fields),
        }
    }
}

impl ChildRecord {
    fn from_name(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            bail!("child name must not be empty");
        }
        let id = ChildId::from_name(raw);
        let name = display_name(raw);
        let mut fields = Mapping::with_capacity(4);
        fields.insert(Value::from(ID_KEY), Value::from(id.as_str()));
        fields.insert(Value::from(NAME_KEY), Value::from(name.as_str()));
        Ok(Self { id, name, fields })
    }

    fn from_fields(fields: Mapping) -> Result<Self> {
        let existing_id = fields.get(ID_KEY).and_then(scalar_text);
        let existing_name = fields.get(NAME_KEY).and_then(scalar_text);

        let id = match (&existing_id, &existing_name) {
            (Some(id), _) => id.clone(),
            (None, Some(name)) => name.to_lowercase(),
            (None, None) => bail!("child record has neither an `id` nor a `name`"),
        };
        if id.trim().is_empty() {
            bail!("child record resolves to an empty id");
        }
        let name = existing_name.unwrap_or_else(|| capitalize_first(&id));

        if fields.contains_key(ID_KEY) && fields.contains_key(NAME_KEY) {
            return Ok(Self {
                id: ChildId(id),
                name,
                fields,
            });
        }

        // Missing keys go first so every record reads `id`, `name`, ...
        let mut rebuilt = Mapping::with_capacity(fields.len() + 2);
        let id_value = fields
            .get(ID_KEY)
            .cloned()
            .unwrap_or_else(|| Value::from(id.as_str()));
        let name_value = fields
            .get(NAME_KEY)
            .cloned()
            .unwrap_or_else(|| Value::from(name.as_str()));
        rebuilt.insert(Value::from(ID_KEY), id_value);
        rebuilt.insert(Value::from(NAME_KEY), name_value);
        for (key, value) in fields {
            if matches!(key.as_str(), Some(ID_KEY) | Some(NAME_KEY)) {
                continue;
            }
            rebuilt.insert(key, value);
        }

        Ok(Self {
            id: ChildId(id),
            name,
            fields: rebuilt,
        })
    }

    pub fn id(&self) -> &ChildId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &Mapping {
        &self.fields
    }

    /// Record the data files found for this child.
    ///
    /// `productFiles` only exists while the count is non-zero; a list left by a
    /// previous run is dropped once the directory empties out.
    pub fn set_products(&mut self, products: &ProductFiles) {
        self.fields.insert(
            Value::from(PRODUCT_COUNT_KEY),
            Value::Number(Number::from(products.count() as u64)),
        );
        if products.is_empty() {
            self.fields.shift_remove(PRODUCT_FILES_KEY);
        } else {
            let files = products
                .files()
                .iter()
                .map(|file| Value::from(file.as_str()))
                .collect();
            self.fields
                .insert(Value::from(PRODUCT_FILES_KEY), Value::Sequence(files));
        }
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.fields)
    }
}

/// Category id as declared in the catalog; empty when the field is absent.
pub fn category_id(category: &Mapping) -> CategoryId {
    CategoryId(
        category
            .get(ID_KEY)
            .and_then(scalar_text)
            .unwrap_or_default(),
    )
}

/// Children that need rebuilding, or `None` when the category passes through.
pub fn category_children(category: &Mapping) -> Option<&[Value]> {
    category
        .get(CHILDREN_KEY)
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
        .filter(|children| !children.is_empty())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
