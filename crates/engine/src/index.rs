//! Secondary index specifications
//!
//! The catalog accepts index declarations and records them, but no query
//! planner consults them: every query is a scan. The registry exists so the
//! declared surface matches what callers expect of a document store, and so
//! declarations are observable and duplicate names are caught.

use serde::{Deserialize, Serialize};
use std::fmt;

use shelf_core::{Error, FieldPath, Result};

/// Sort order of an indexed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One field of an index declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexField {
    /// Indexed field path
    pub path: FieldPath,
    /// Sort order
    pub order: SortOrder,
}

/// A declared index over one or more fields
///
/// The name defaults to the dotted field paths with their orders, joined
/// with `__` (for example `category_asc` or `price_desc__variants.stock_asc`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSpec {
    /// Explicit name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Indexed fields, in declaration order
    fields: Vec<IndexField>,
}

impl IndexSpec {
    /// Declare a single-field ascending index
    pub fn ascending(path: FieldPath) -> Self {
        IndexSpec {
            name: None,
            fields: vec![IndexField {
                path,
                order: SortOrder::Asc,
            }],
        }
    }

    /// Declare a single-field descending index
    pub fn descending(path: FieldPath) -> Self {
        IndexSpec {
            name: None,
            fields: vec![IndexField {
                path,
                order: SortOrder::Desc,
            }],
        }
    }

    /// Append another field to the declaration
    pub fn and(mut self, path: FieldPath, order: SortOrder) -> Self {
        self.fields.push(IndexField { path, order });
        self
    }

    /// Override the derived name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The indexed fields, in declaration order
    pub fn fields(&self) -> &[IndexField] {
        &self.fields
    }

    /// The index name (explicit override, or derived from the fields)
    pub fn name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self
                .fields
                .iter()
                .map(|f| format!("{}_{}", f.path, f.order))
                .collect::<Vec<_>>()
                .join("__"),
        }
    }

    /// Validate the declaration
    ///
    /// Rejects an empty field list and an empty explicit name.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::invalid_value("index must cover at least one field"));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::invalid_value("index name cannot be empty"));
            }
        }
        Ok(())
    }
}
