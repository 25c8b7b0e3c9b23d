//! Catalog engine
//!
//! This crate implements the in-memory product catalog store:
//! - [`Catalog`]: insertion, predicate scans, positional variant updates,
//!   removal, and grouping aggregation
//! - [`CategoryCount`] / [`StockSummary`]: aggregation outputs
//! - [`IndexSpec`]: accepted-but-inert secondary index declarations
//!
//! The store is an explicitly owned value; there is no global state.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod aggregate;
mod index;
mod store;

pub use aggregate::{CategoryCount, StockSummary};
pub use index::{IndexField, IndexSpec, SortOrder};
pub use store::Catalog;
