//! Predicate expression type for catalog queries
//!
//! A predicate is a conjunction of clauses (AND semantics): every clause
//! must match for a product to match. An empty predicate matches everything.
//!
//! Clauses are tagged variants of (field, comparator, value) validated at
//! construction time via [`Clause::new`]; invalid combinations (a
//! less-than over a text field, a value of the wrong type) never become
//! values. Predicates arriving over the wire are re-checked with
//! [`Predicate::validate`] before execution.
//!
//! Clauses over variant fields use any-element-matches semantics: the
//! product matches if at least one of its variants satisfies the clause.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{Category, Product};
use crate::error::{Error, Result};

// =============================================================================
// Field paths and comparators
// =============================================================================

/// Addressable fields for predicate clauses
///
/// Top-level fields compare against the product record; `Variant*` fields
/// compare against each element of the variants array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldPath {
    /// Top-level `category`
    Category,
    /// Top-level `price`
    Price,
    /// Nested `variants.color`
    VariantColor,
    /// Nested `variants.size`
    VariantSize,
    /// Nested `variants.stock`
    VariantStock,
}

impl FieldPath {
    /// Dotted path notation for display
    pub fn name(&self) -> &'static str {
        match self {
            FieldPath::Category => "category",
            FieldPath::Price => "price",
            FieldPath::VariantColor => "variants.color",
            FieldPath::VariantSize => "variants.size",
            FieldPath::VariantStock => "variants.stock",
        }
    }

    /// Parse from dotted path notation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "category" => Some(FieldPath::Category),
            "price" => Some(FieldPath::Price),
            "variants.color" => Some(FieldPath::VariantColor),
            "variants.size" => Some(FieldPath::VariantSize),
            "variants.stock" => Some(FieldPath::VariantStock),
            _ => None,
        }
    }

    /// Whether ordering comparators are defined for this field
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldPath::Price | FieldPath::VariantStock)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Supported comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    /// Field equals value
    Eq,
    /// Field is strictly less than value (numeric fields only)
    Lt,
}

impl Comparator {
    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            Comparator::Eq => "eq",
            Comparator::Lt => "lt",
        }
    }
}

/// A literal value on the right-hand side of a clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClauseValue {
    /// Text value (variant color/size)
    Text(String),
    /// Floating-point value (price)
    Number(f64),
    /// Integer value (variant stock)
    Int(i64),
    /// Category value
    Category(Category),
}

impl ClauseValue {
    /// Type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ClauseValue::Text(_) => "Text",
            ClauseValue::Number(_) => "Number",
            ClauseValue::Int(_) => "Int",
            ClauseValue::Category(_) => "Category",
        }
    }
}

// =============================================================================
// Clause
// =============================================================================

/// One (field, comparator, value) condition
///
/// Construct via [`Clause::new`], which rejects comparator/field and
/// value/field mismatches with `Error::InvalidQuery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    field: FieldPath,
    comparator: Comparator,
    value: ClauseValue,
}

impl Clause {
    /// Build a validated clause
    pub fn new(field: FieldPath, comparator: Comparator, value: ClauseValue) -> Result<Self> {
        let clause = Clause {
            field,
            comparator,
            value,
        };
        clause.validate()?;
        Ok(clause)
    }

    // Used by the fluent Predicate builders, which only produce valid
    // combinations.
    fn new_unchecked(field: FieldPath, comparator: Comparator, value: ClauseValue) -> Self {
        Clause {
            field,
            comparator,
            value,
        }
    }

    /// The addressed field
    pub fn field(&self) -> FieldPath {
        self.field
    }

    /// The comparison operator
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }

    /// The right-hand side value
    pub fn value(&self) -> &ClauseValue {
        &self.value
    }

    /// Check field/comparator/value compatibility
    ///
    /// Deserialized clauses bypass [`Clause::new`]; callers executing
    /// untrusted predicates re-check them here.
    pub fn validate(&self) -> Result<()> {
        if self.comparator == Comparator::Lt && !self.field.is_numeric() {
            return Err(Error::invalid_query(format!(
                "less-than is not defined for {}",
                self.field
            )));
        }

        let compatible = matches!(
            (self.field, &self.value),
            (FieldPath::Category, ClauseValue::Category(_))
                | (FieldPath::Price, ClauseValue::Number(_))
                | (FieldPath::VariantColor, ClauseValue::Text(_))
                | (FieldPath::VariantSize, ClauseValue::Text(_))
                | (FieldPath::VariantStock, ClauseValue::Int(_))
        );
        if !compatible {
            return Err(Error::invalid_query(format!(
                "{} value is not valid for {}",
                self.value.type_name(),
                self.field
            )));
        }

        Ok(())
    }

    /// Check whether a product satisfies this clause
    ///
    /// Variant-field clauses match if ANY variant element satisfies the
    /// comparison.
    pub fn matches(&self, product: &Product) -> bool {
        match (self.field, &self.value) {
            (FieldPath::Category, ClauseValue::Category(cat)) => {
                self.comparator == Comparator::Eq && product.category() == *cat
            }
            (FieldPath::Price, ClauseValue::Number(n)) => match self.comparator {
                Comparator::Eq => product.price() == *n,
                Comparator::Lt => product.price() < *n,
            },
            (FieldPath::VariantColor, ClauseValue::Text(t)) => {
                self.comparator == Comparator::Eq
                    && product.variants().iter().any(|v| v.color == *t)
            }
            (FieldPath::VariantSize, ClauseValue::Text(t)) => {
                self.comparator == Comparator::Eq
                    && product.variants().iter().any(|v| v.size == *t)
            }
            (FieldPath::VariantStock, ClauseValue::Int(n)) => {
                product.variants().iter().any(|v| match self.comparator {
                    Comparator::Eq => v.stock() == *n,
                    Comparator::Lt => v.stock() < *n,
                })
            }
            // Type-mismatched clauses (possible only via deserialization)
            // match nothing.
            _ => false,
        }
    }
}

// =============================================================================
// Predicate
// =============================================================================

/// A conjunction of clauses
///
/// All clauses must match (AND semantics). An empty predicate matches all
/// products.
///
/// # Example
///
/// ```
/// use shelf_core::catalog::Category;
/// use shelf_core::query::Predicate;
///
/// let p = Predicate::new()
///     .category(Category::Footwear)
///     .price_lt(150.0);
/// assert_eq!(p.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Create an empty predicate (matches all)
    pub fn new() -> Self {
        Predicate::default()
    }

    /// The clauses, in the order they were added
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Add an already-built clause
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Add a category equality condition
    pub fn category(self, category: Category) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::Category,
            Comparator::Eq,
            ClauseValue::Category(category),
        ))
    }

    /// Add a price equality condition
    pub fn price_eq(self, price: f64) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::Price,
            Comparator::Eq,
            ClauseValue::Number(price),
        ))
    }

    /// Add a price less-than condition
    pub fn price_lt(self, price: f64) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::Price,
            Comparator::Lt,
            ClauseValue::Number(price),
        ))
    }

    /// Add an any-variant color equality condition
    pub fn variant_color(self, color: impl Into<String>) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::VariantColor,
            Comparator::Eq,
            ClauseValue::Text(color.into()),
        ))
    }

    /// Add an any-variant size equality condition
    pub fn variant_size(self, size: impl Into<String>) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::VariantSize,
            Comparator::Eq,
            ClauseValue::Text(size.into()),
        ))
    }

    /// Add an any-variant stock equality condition
    pub fn variant_stock_eq(self, stock: i64) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::VariantStock,
            Comparator::Eq,
            ClauseValue::Int(stock),
        ))
    }

    /// Add an any-variant stock less-than condition
    pub fn variant_stock_lt(self, stock: i64) -> Self {
        self.with_clause(Clause::new_unchecked(
            FieldPath::VariantStock,
            Comparator::Lt,
            ClauseValue::Int(stock),
        ))
    }

    /// Check whether a product satisfies every clause
    pub fn matches(&self, product: &Product) -> bool {
        self.clauses.iter().all(|c| c.matches(product))
    }

    /// Re-validate every clause (for predicates built via deserialization)
    pub fn validate(&self) -> Result<()> {
        for clause in &self.clauses {
            clause.validate()?;
        }
        Ok(())
    }

    /// Check if the predicate is empty (matches all)
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Get the number of clauses
    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}
