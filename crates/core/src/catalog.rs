//! Product and variant data model
//!
//! This module defines:
//! - Category: the closed set of recognized product categories
//! - Variant / Product: stored records with document metadata
//! - VariantInput / ProductInput: insertion payloads with explicit validation
//!
//! ## Invariants
//!
//! - Product identity is immutable once created and unique across the store.
//! - Variant identity is unique within its owning product only.
//! - `stock` and `price` are never negative; inputs below zero are rejected
//!   with `Error::InvalidValue` before any state changes.
//! - `variants` keeps insertion order; order is preserved across updates
//!   except explicit removals.
//!
//! All mutation goes through methods on `Product` so the invariants cannot
//! be bypassed from outside this module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::types::{ProductId, VariantId};

// =============================================================================
// Category
// =============================================================================

/// Recognized product categories
///
/// The category set is closed: values outside this enum cannot enter the
/// store. Free-form text at API boundaries goes through [`Category::parse`],
/// which is the explicit-validation replacement for a declarative schema enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Consumer electronics
    Electronics,
    /// Clothing and outerwear
    Apparel,
    /// Shoes
    Footwear,
    /// Sports and training equipment
    Fitness,
    /// Small add-on goods
    Accessories,
}

impl Category {
    /// All recognized categories, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Apparel,
        Category::Footwear,
        Category::Fitness,
        Category::Accessories,
    ];

    /// Canonical name for display
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Apparel => "Apparel",
            Category::Footwear => "Footwear",
            Category::Fitness => "Fitness",
            Category::Accessories => "Accessories",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "electronics" => Some(Category::Electronics),
            "apparel" => Some(Category::Apparel),
            "footwear" => Some(Category::Footwear),
            "fitness" => Some(Category::Fitness),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::parse(s)
            .ok_or_else(|| Error::invalid_value(format!("unrecognized category: {s}")))
    }
}

// =============================================================================
// Stored records
// =============================================================================

/// A color/size combination of a product and its stock count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Identity, unique within the owning product
    pub id: VariantId,
    /// Color label
    pub color: String,
    /// Size label
    pub size: String,
    /// Units on hand, never negative
    stock: i64,
}

impl Variant {
    /// Current stock count
    pub fn stock(&self) -> i64 {
        self.stock
    }
}

/// A stored catalog entry
///
/// Fields are private: every mutation goes through a method that enforces
/// the model invariants and bumps the document metadata.
///
/// # Document metadata
///
/// - `version` starts at 1 and increments on any change
/// - `created_at` / `updated_at` track creation and last modification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    category: Category,
    description: Option<String>,
    variants: Vec<Variant>,
    version: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a stored product from a validated input
    ///
    /// Assigns fresh identities where the input carries none and initializes
    /// document metadata (version 1, both timestamps set to now).
    pub fn new(input: ProductInput) -> Result<Self> {
        input.validate()?;

        let now = Utc::now();
        let variants = input
            .variants
            .into_iter()
            .map(|v| Variant {
                id: v.id.unwrap_or_default(),
                color: v.color,
                size: v.size,
                stock: v.stock,
            })
            .collect();

        Ok(Product {
            id: input.id.unwrap_or_default(),
            name: input.name,
            price: input.price,
            category: input.category,
            description: input.description,
            variants,
            version: 1,
            created_at: now,
            updated_at: now,
        })
    }

    /// Increment version and update the modification timestamp
    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Product identity
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Product category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Optional free-text description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Variants in insertion order
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Document version (increments on any change)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether a variant with the given identity exists
    pub fn has_variant(&self, id: &VariantId) -> bool {
        self.variants.iter().any(|v| &v.id == id)
    }

    /// Sum of stock across all variants (0 if none)
    pub fn total_stock(&self) -> i64 {
        self.variants.iter().map(|v| v.stock).sum()
    }

    /// Number of variants
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Set the price
    ///
    /// Rejects negative or non-finite values with `InvalidValue`.
    pub fn set_price(&mut self, price: f64) -> Result<()> {
        validate_price(price)?;
        self.price = price;
        self.touch();
        Ok(())
    }

    /// Append a variant to the end of the sequence
    ///
    /// Assigns a fresh identity when the input carries none. An explicit
    /// identity that already exists on this product is rejected.
    ///
    /// Returns the identity of the appended variant.
    pub fn append_variant(&mut self, input: VariantInput) -> Result<VariantId> {
        input.validate()?;

        let id = input.id.unwrap_or_default();
        if self.has_variant(&id) {
            return Err(Error::invalid_value(format!(
                "variant {id} already exists on product {}",
                self.id
            )));
        }

        self.variants.push(Variant {
            id,
            color: input.color,
            size: input.size,
            stock: input.stock,
        });
        self.touch();
        Ok(id)
    }

    /// Set the stock of exactly one variant, matched by identity
    ///
    /// Only the matched array element changes; siblings are untouched.
    ///
    /// Returns `Ok(true)` if the variant was found and updated, `Ok(false)`
    /// if no variant has the given identity (the product is left unchanged,
    /// metadata included).
    pub fn set_variant_stock(&mut self, id: &VariantId, stock: i64) -> Result<bool> {
        validate_stock(stock)?;

        match self.variants.iter_mut().find(|v| &v.id == id) {
            Some(variant) => {
                variant.stock = stock;
                self.touch();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the variant with the given identity
    ///
    /// Relative order of the remaining variants is preserved. Returns
    /// whether a variant was removed; absence is a no-op, not an error.
    pub fn remove_variant(&mut self, id: &VariantId) -> bool {
        match self.variants.iter().position(|v| &v.id == id) {
            Some(pos) => {
                self.variants.remove(pos);
                self.touch();
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Insertion inputs
// =============================================================================

/// Payload for creating a variant
///
/// Identity is optional: a fresh one is assigned when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantInput {
    /// Explicit identity, or None for a fresh one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VariantId>,
    /// Color label
    pub color: String,
    /// Size label
    pub size: String,
    /// Initial stock, must be non-negative
    pub stock: i64,
}

impl VariantInput {
    /// Create an input with a fresh identity to be assigned at insert time
    pub fn new(color: impl Into<String>, size: impl Into<String>, stock: i64) -> Self {
        VariantInput {
            id: None,
            color: color.into(),
            size: size.into(),
            stock,
        }
    }

    /// Pin an explicit identity
    pub fn with_id(mut self, id: VariantId) -> Self {
        self.id = Some(id);
        self
    }

    /// Validate the input
    ///
    /// Rejects negative stock.
    pub fn validate(&self) -> Result<()> {
        validate_stock(self.stock)
    }
}

/// Payload for creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Explicit identity, or None for a fresh one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Product name, must be non-empty
    pub name: String,
    /// Price, must be non-negative
    pub price: f64,
    /// Category from the recognized set
    pub category: Category,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial variants, in order
    #[serde(default)]
    pub variants: Vec<VariantInput>,
}

impl ProductInput {
    /// Create an input with no description and no variants
    pub fn new(name: impl Into<String>, price: f64, category: Category) -> Self {
        ProductInput {
            id: None,
            name: name.into(),
            price,
            category,
            description: None,
            variants: Vec::new(),
        }
    }

    /// Pin an explicit identity
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an initial variant
    pub fn with_variant(mut self, variant: VariantInput) -> Self {
        self.variants.push(variant);
        self
    }

    /// Validate the input
    ///
    /// Rejects an empty name, a negative or non-finite price, any invalid
    /// variant, and duplicate explicit variant identities.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_value("product name cannot be empty"));
        }
        validate_price(self.price)?;

        for variant in &self.variants {
            variant.validate()?;
        }

        // Explicit identities must not collide within the same product.
        for (i, variant) in self.variants.iter().enumerate() {
            if let Some(id) = variant.id {
                if self.variants[..i].iter().any(|other| other.id == Some(id)) {
                    return Err(Error::invalid_value(format!(
                        "duplicate variant identity {id} in input"
                    )));
                }
            }
        }

        Ok(())
    }
}

fn validate_stock(stock: i64) -> Result<()> {
    if stock < 0 {
        return Err(Error::invalid_value(format!(
            "stock cannot be negative: {stock}"
        )));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::invalid_value(format!(
            "price must be a non-negative number: {price}"
        )));
    }
    Ok(())
}
