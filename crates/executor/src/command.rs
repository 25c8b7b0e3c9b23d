//! Command enum defining all catalog operations.
//!
//! Commands are the "instruction set" of the store. Every operation that can
//! be performed against the catalog is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Typed**: No generic fallback, every operation has explicit types
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};

use shelf_core::{Predicate, ProductInput, Projection, VariantId, VariantInput};
use shelf_engine::IndexSpec;

/// A command is a self-contained, serializable operation.
///
/// # Command categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Insert | 1 | Bulk insertion |
/// | Read | 1 | Predicate find with optional projection |
/// | Update | 4 | Set-field, push-to-array, positional element update, pull-from-array |
/// | Aggregate | 2 | Category counts, per-product stock totals |
/// | Index | 2 | Declaration and listing |
///
/// # Example
///
/// ```
/// use shelf_core::{Category, Predicate};
/// use shelf_executor::Command;
///
/// let cmd = Command::Find {
///     predicate: Predicate::new().category(Category::Electronics),
///     projection: None,
/// };
/// assert_eq!(cmd.name(), "Find");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Insert a batch of products.
    /// Returns: `Output::Products` (the stored records)
    InsertMany {
        /// Insertion payloads, in order
        products: Vec<ProductInput>,
    },

    /// Find products matching a predicate.
    /// Returns: `Output::Products`, or `Output::Projected` when a
    /// projection is given.
    Find {
        /// Conjunction of clauses; empty matches all
        predicate: Predicate,
        /// Optional field projection
        #[serde(default, skip_serializing_if = "Option::is_none")]
        projection: Option<Projection>,
    },

    /// Set the price of the first product matching the predicate.
    /// Returns: `Output::Bool` (true if a product was updated)
    UpdateOnePrice {
        /// Product selector
        predicate: Predicate,
        /// New price, must be non-negative
        price: f64,
    },

    /// Append a variant to the first product matching the predicate.
    /// Returns: `Output::Bool` (true if a product was updated)
    AppendVariant {
        /// Product selector
        predicate: Predicate,
        /// Variant payload
        variant: VariantInput,
    },

    /// Set the stock of one specific variant element on the first product
    /// matching the predicate AND containing that variant.
    /// Returns: `Output::Bool` (true if the element was updated)
    SetVariantStock {
        /// Product selector
        predicate: Predicate,
        /// Identity of the variant element to update
        variant: VariantId,
        /// New stock, must be non-negative
        stock: i64,
    },

    /// Remove a variant from the first product matching the predicate.
    /// Returns: `Output::Bool` (true if a variant was removed)
    RemoveVariant {
        /// Product selector
        predicate: Predicate,
        /// Identity of the variant to remove
        variant: VariantId,
    },

    /// Group all products by category and count them.
    /// Returns: `Output::CategoryCounts`
    CountByCategory,

    /// Roll up stock totals per product.
    /// Returns: `Output::StockSummaries`
    TotalStockPerProduct,

    /// Declare a secondary index (recorded, never consulted).
    /// Returns: `Output::IndexName`
    CreateIndex {
        /// The index declaration
        index: IndexSpec,
    },

    /// List declared indexes.
    /// Returns: `Output::Indexes`
    ListIndexes,
}

impl Command {
    /// The command name, for logging and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Command::InsertMany { .. } => "InsertMany",
            Command::Find { .. } => "Find",
            Command::UpdateOnePrice { .. } => "UpdateOnePrice",
            Command::AppendVariant { .. } => "AppendVariant",
            Command::SetVariantStock { .. } => "SetVariantStock",
            Command::RemoveVariant { .. } => "RemoveVariant",
            Command::CountByCategory => "CountByCategory",
            Command::TotalStockPerProduct => "TotalStockPerProduct",
            Command::CreateIndex { .. } => "CreateIndex",
            Command::ListIndexes => "ListIndexes",
        }
    }
}
