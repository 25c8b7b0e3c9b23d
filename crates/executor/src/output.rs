//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is
//! deterministic: the same command always produces the same output variant
//! (though the values may differ based on store state).

use serde::{Deserialize, Serialize};

use shelf_core::{ProjectedProduct, Product};
use shelf_engine::{CategoryCount, IndexSpec, StockSummary};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output`
/// variant; the mapping is documented on the command definitions.
///
/// # Example
///
/// ```text
/// let result = executor.execute(Command::CountByCategory)?;
///
/// match result {
///     Output::CategoryCounts(counts) => println!("{} categories", counts.len()),
///     _ => unreachable!("CountByCategory always returns CategoryCounts"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Full product records (insert, unprojected find)
    Products(Vec<Product>),

    /// Projected documents (find with a projection)
    Projected(Vec<ProjectedProduct>),

    /// Boolean result (update operations: true if something changed)
    Bool(bool),

    /// Category grouping result
    CategoryCounts(Vec<CategoryCount>),

    /// Per-product stock rollups
    StockSummaries(Vec<StockSummary>),

    /// Name of a newly declared index
    IndexName(String),

    /// Declared indexes, in declaration order
    Indexes(Vec<IndexSpec>),
}
