//! Field projection for query results
//!
//! A projection selects a subset of top-level product fields and,
//! optionally, a subset of fields within each variant sub-document.
//! Projected documents omit identity unless it is explicitly requested.
//!
//! Rules:
//! - An empty top-level field set projects every top-level field.
//! - Requesting any variant field implies the variants array is emitted,
//!   restricted to the requested fields; without a variant subset, variant
//!   sub-documents are emitted whole (identity included).
//! - Absent fields serialize away entirely.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Product, Variant};
use crate::types::{ProductId, VariantId};

// =============================================================================
// Field selectors
// =============================================================================

/// Top-level projectable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopField {
    /// Product name
    Name,
    /// Product price
    Price,
    /// Product category
    Category,
    /// Product description
    Description,
    /// The variants array
    Variants,
}

/// Projectable fields within a variant sub-document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantField {
    /// Variant color
    Color,
    /// Variant size
    Size,
    /// Variant stock
    Stock,
}

// =============================================================================
// Projection
// =============================================================================

/// A field-subset specification for query results
///
/// # Example
///
/// ```
/// use shelf_core::projection::{Projection, TopField, VariantField};
///
/// // name + variant colors only, no identity
/// let p = Projection::new()
///     .field(TopField::Name)
///     .variant_field(VariantField::Color);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Emit product identity (off by default)
    #[serde(default)]
    include_id: bool,
    /// Selected top-level fields; empty selects all
    #[serde(default)]
    fields: Vec<TopField>,
    /// Selected variant fields; None emits whole variant sub-documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant_fields: Option<Vec<VariantField>>,
}

impl Projection {
    /// Create a projection of every top-level field, identity omitted
    pub fn new() -> Self {
        Projection::default()
    }

    /// Request product identity in the output
    pub fn with_id(mut self) -> Self {
        self.include_id = true;
        self
    }

    /// Restrict output to the given top-level field (additive)
    pub fn field(mut self, field: TopField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    /// Restrict variant sub-documents to the given field (additive)
    ///
    /// Implies the variants array is emitted.
    pub fn variant_field(mut self, field: VariantField) -> Self {
        let fields = self.variant_fields.get_or_insert_with(Vec::new);
        if !fields.contains(&field) {
            fields.push(field);
        }
        self
    }

    fn projects_top(&self, field: TopField) -> bool {
        self.fields.is_empty() || self.fields.contains(&field)
    }

    fn projects_variants(&self) -> bool {
        self.projects_top(TopField::Variants) || self.variant_fields.is_some()
    }

    fn projects_variant_field(&self, field: VariantField) -> bool {
        match &self.variant_fields {
            None => true,
            Some(fields) => fields.contains(&field),
        }
    }

    /// Apply the projection to a product, producing a projected document
    pub fn apply(&self, product: &Product) -> ProjectedProduct {
        let variants = if self.projects_variants() {
            Some(
                product
                    .variants()
                    .iter()
                    .map(|v| self.apply_variant(v))
                    .collect(),
            )
        } else {
            None
        };

        ProjectedProduct {
            id: self.include_id.then(|| product.id()),
            name: self
                .projects_top(TopField::Name)
                .then(|| product.name().to_string()),
            price: self.projects_top(TopField::Price).then(|| product.price()),
            category: self
                .projects_top(TopField::Category)
                .then(|| product.category()),
            description: if self.projects_top(TopField::Description) {
                product.description().map(String::from)
            } else {
                None
            },
            variants,
        }
    }

    fn apply_variant(&self, variant: &Variant) -> ProjectedVariant {
        ProjectedVariant {
            // Variant identity rides along only with whole sub-documents.
            id: self.variant_fields.is_none().then_some(variant.id),
            color: self
                .projects_variant_field(VariantField::Color)
                .then(|| variant.color.clone()),
            size: self
                .projects_variant_field(VariantField::Size)
                .then(|| variant.size.clone()),
            stock: self
                .projects_variant_field(VariantField::Stock)
                .then(|| variant.stock()),
        }
    }
}

// =============================================================================
// Projected documents
// =============================================================================

/// A variant sub-document restricted to projected fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedVariant {
    /// Variant identity (whole sub-documents only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VariantId>,
    /// Color, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Size, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Stock, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
}

/// A product document restricted to projected fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedProduct {
    /// Product identity, only when explicitly requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Name, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Price, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Category, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Description, if projected and present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Variant sub-documents, if projected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProjectedVariant>>,
}
