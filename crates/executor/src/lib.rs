//! # Shelf Executor
//!
//! The public API for ShelfDB - an embedded in-memory product catalog store.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - the command dispatcher owning one catalog instance
//! - [`Command`]/[`Output`] - the serializable command interface
//! - [`seed`] - the canned five-product sample set
//!
//! ## Quick Start
//!
//! ```
//! use shelf_executor::{Command, Executor};
//! use shelf_core::{Category, Predicate};
//!
//! let mut db = Executor::seeded().unwrap();
//!
//! let out = db
//!     .execute(Command::Find {
//!         predicate: Predicate::new().category(Category::Electronics),
//!         projection: None,
//!     })
//!     .unwrap();
//! ```
//!
//! ## Command surface
//!
//! | Command | Use case |
//! |---------|----------|
//! | **InsertMany** | Bulk insertion |
//! | **Find** | Predicate filter with optional projection |
//! | **UpdateOnePrice** | Set-field update, first match |
//! | **AppendVariant** | Push to the variants array |
//! | **SetVariantStock** | Positional update of one array element |
//! | **RemoveVariant** | Pull from the variants array |
//! | **CountByCategory** | Grouping aggregation |
//! | **TotalStockPerProduct** | Per-product rollup |
//! | **CreateIndex** / **ListIndexes** | Index declarations (inert) |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod command;
mod executor;
mod output;
pub mod seed;

pub use command::Command;
pub use executor::Executor;
pub use output::Output;

// Re-export the types that appear in commands and outputs so callers only
// need this crate.
pub use shelf_core::{
    Category, Clause, ClauseValue, Comparator, Error, FieldPath, Predicate, Product, ProductId,
    ProductInput, ProjectedProduct, ProjectedVariant, Projection, Result, TopField, Variant,
    VariantField, VariantId, VariantInput,
};
pub use shelf_engine::{Catalog, CategoryCount, IndexField, IndexSpec, SortOrder, StockSummary};
