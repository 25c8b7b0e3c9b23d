//! Grouping aggregations over the catalog
//!
//! Two canned pipelines: category counts and per-product stock totals.
//! Both are single scans; no planner, no intermediate stages.

use serde::{Deserialize, Serialize};

use shelf_core::{Category, Product};

/// Number of products in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The category
    pub category: Category,
    /// How many products carry it
    pub count: u64,
}

/// Per-product stock rollup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
    /// Product category
    pub category: Category,
    /// Sum of stock across all variants (0 if none)
    pub total_stock: i64,
    /// Number of variants
    pub variant_count: u64,
}

/// Group products by category and count them
///
/// Sorted by count descending; ties keep the order in which each category
/// first appeared in the input.
pub(crate) fn count_by_category(products: &[Product]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for product in products {
        match counts.iter_mut().find(|c| c.category == product.category()) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: product.category(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-appearance order within equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Roll up stock totals per product, in input order
pub(crate) fn total_stock_per_product(products: &[Product]) -> Vec<StockSummary> {
    products
        .iter()
        .map(|p| StockSummary {
            name: p.name().to_string(),
            price: p.price(),
            category: p.category(),
            total_stock: p.total_stock(),
            variant_count: p.variant_count() as u64,
        })
        .collect()
}
