//! Catalog: the in-memory product store
//!
//! ## Design
//!
//! The catalog is a plain owned value. There is no process-wide singleton;
//! callers hold the instance and pass it by reference. All operations are
//! synchronous and single-threaded; mutation takes `&mut self`.
//!
//! Insertion order is authoritative: `products` is the record sequence,
//! scans run over it front to back, and every "first match" below means
//! first in insertion order. The id map exists only for direct lookup.
//!
//! ## Failure semantics
//!
//! Zero-match updates are silent no-ops reported as `Ok(false)`. The only
//! errors are rejected values (`InvalidValue`) and malformed queries
//! (`InvalidQuery`); nothing is fatal and nothing retries.

use rustc_hash::FxHashMap;
use tracing::debug;

use shelf_core::{
    Error, Predicate, Product, ProductId, ProductInput, ProjectedProduct, Projection, Result,
    VariantId, VariantInput,
};

use crate::aggregate::{self, CategoryCount, StockSummary};
use crate::index::IndexSpec;

/// In-memory product catalog store
///
/// # Example
///
/// ```
/// use shelf_core::{Category, Predicate, ProductInput};
/// use shelf_engine::Catalog;
///
/// let mut catalog = Catalog::new();
/// catalog
///     .insert_one(ProductInput::new("Yoga Mat", 45.0, Category::Fitness))
///     .unwrap();
///
/// let cheap = Predicate::new().price_lt(100.0);
/// assert_eq!(catalog.find(&cheap).count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: FxHashMap<ProductId, usize>,
    indexes: Vec<IndexSpec>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Number of products in the store
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a batch of products
    ///
    /// Each input is validated up front; if any input is rejected, nothing
    /// is inserted. Fresh identities are assigned where inputs carry none,
    /// and pinned identities must not collide with stored products (or with
    /// each other). Returns the stored records in insertion order.
    ///
    /// Re-inserting equal literals produces independent records with
    /// distinct identities; there is no deduplication.
    pub fn insert_many(&mut self, inputs: Vec<ProductInput>) -> Result<Vec<Product>> {
        for input in &inputs {
            input.validate()?;
            if let Some(id) = input.id {
                if self.by_id.contains_key(&id) {
                    return Err(Error::invalid_value(format!(
                        "product {id} already exists"
                    )));
                }
                let pinned_twice = inputs
                    .iter()
                    .filter(|other| other.id == Some(id))
                    .count()
                    > 1;
                if pinned_twice {
                    return Err(Error::invalid_value(format!(
                        "duplicate product identity {id} in batch"
                    )));
                }
            }
        }

        let mut stored = Vec::with_capacity(inputs.len());
        for input in inputs {
            let product = Product::new(input)?;
            self.by_id.insert(product.id(), self.products.len());
            self.products.push(product.clone());
            stored.push(product);
        }

        debug!(
            target: "shelf::catalog",
            inserted = stored.len(),
            total = self.products.len(),
            "Products inserted"
        );
        Ok(stored)
    }

    /// Insert a single product
    pub fn insert_one(&mut self, input: ProductInput) -> Result<Product> {
        let mut stored = self.insert_many(vec![input])?;
        Ok(stored.remove(0))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Find products matching a predicate
    ///
    /// Lazy and restartable: the returned iterator borrows the store and
    /// yields matches in insertion order; calling `find` again restarts the
    /// scan. An empty predicate yields every product.
    pub fn find<'a>(
        &'a self,
        predicate: &'a Predicate,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| predicate.matches(p))
    }

    /// Find products matching a predicate, applying a field projection
    pub fn find_projected(
        &self,
        predicate: &Predicate,
        projection: &Projection,
    ) -> Vec<ProjectedProduct> {
        self.find(predicate).map(|p| projection.apply(p)).collect()
    }

    /// Look up a product by identity
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&slot| &self.products[slot])
    }

    // ========================================================================
    // Updates
    // ========================================================================

    /// Set the price of the first product matching the predicate
    ///
    /// First match in insertion order. Rejects a negative price before
    /// scanning. Returns whether a product was updated; zero matches is a
    /// silent no-op.
    pub fn update_one_price(&mut self, predicate: &Predicate, price: f64) -> Result<bool> {
        if !price.is_finite() || price < 0.0 {
            return Err(Error::invalid_value(format!(
                "price must be a non-negative number: {price}"
            )));
        }

        let Some(product) = self.first_match_mut(predicate) else {
            return Ok(false);
        };
        product.set_price(price)?;

        debug!(
            target: "shelf::catalog",
            product = %product.id(),
            price,
            "Price updated"
        );
        Ok(true)
    }

    /// Append a variant to the first product matching the predicate
    ///
    /// Rejects negative stock (and a duplicate pinned variant identity)
    /// before mutating. Returns whether a product was updated.
    pub fn append_variant(&mut self, predicate: &Predicate, input: VariantInput) -> Result<bool> {
        // Validate before the scan so a bad input is rejected even when
        // nothing matches.
        input.validate()?;

        let Some(product) = self.first_match_mut(predicate) else {
            return Ok(false);
        };
        let variant_id = product.append_variant(input)?;

        debug!(
            target: "shelf::catalog",
            product = %product.id(),
            variant = %variant_id,
            "Variant appended"
        );
        Ok(true)
    }

    /// Set the stock of one specific variant element
    ///
    /// Targets the first product (insertion order) that matches the
    /// predicate AND contains the identified variant; only that array
    /// element is mutated, never its siblings. Rejects negative stock.
    /// Returns `Ok(false)` when no product satisfies both conditions.
    pub fn set_variant_stock(
        &mut self,
        predicate: &Predicate,
        variant_id: &VariantId,
        stock: i64,
    ) -> Result<bool> {
        if stock < 0 {
            return Err(Error::invalid_value(format!(
                "stock cannot be negative: {stock}"
            )));
        }

        let target = self
            .products
            .iter_mut()
            .find(|p| predicate.matches(p) && p.has_variant(variant_id));
        let Some(product) = target else {
            return Ok(false);
        };
        product.set_variant_stock(variant_id, stock)?;

        debug!(
            target: "shelf::catalog",
            product = %product.id(),
            variant = %variant_id,
            stock,
            "Variant stock set"
        );
        Ok(true)
    }

    /// Remove a variant from the first product matching the predicate
    ///
    /// The target product is selected by the predicate alone; if it does
    /// not contain the identified variant, nothing changes. Sibling order
    /// is preserved. Returns whether a variant was removed.
    pub fn remove_variant(&mut self, predicate: &Predicate, variant_id: &VariantId) -> bool {
        let Some(product) = self.first_match_mut(predicate) else {
            return false;
        };
        let removed = product.remove_variant(variant_id);

        if removed {
            debug!(
                target: "shelf::catalog",
                product = %product.id(),
                variant = %variant_id,
                "Variant removed"
            );
        }
        removed
    }

    fn first_match_mut(&mut self, predicate: &Predicate) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| predicate.matches(p))
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Group all products by category and count them
    ///
    /// Sorted by count descending, ties broken by the order in which each
    /// category first appeared in the store.
    pub fn count_by_category(&self) -> Vec<CategoryCount> {
        aggregate::count_by_category(&self.products)
    }

    /// Roll up stock totals per product, in insertion order
    pub fn total_stock_per_product(&self) -> Vec<StockSummary> {
        aggregate::total_stock_per_product(&self.products)
    }

    // ========================================================================
    // Indexes
    // ========================================================================

    /// Record an index declaration
    ///
    /// The declaration is validated and registered, and its name returned.
    /// No query planner consults the registry; queries remain scans.
    /// Duplicate names are rejected.
    pub fn create_index(&mut self, spec: IndexSpec) -> Result<String> {
        spec.validate()?;

        let name = spec.name();
        if self.indexes.iter().any(|i| i.name() == name) {
            return Err(Error::invalid_value(format!(
                "index {name} already exists"
            )));
        }
        self.indexes.push(spec);

        debug!(target: "shelf::catalog", index = %name, "Index declared");
        Ok(name)
    }

    /// Declared indexes, in declaration order
    pub fn list_indexes(&self) -> &[IndexSpec] {
        &self.indexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{Category, FieldPath};

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .insert_many(vec![
                ProductInput::new("Winter Jacket", 200.0, Category::Apparel)
                    .with_variant(VariantInput::new("Navy", "M", 12)),
                ProductInput::new("Smartphone", 699.0, Category::Electronics)
                    .with_variant(VariantInput::new("Black", "128GB", 25)),
                ProductInput::new("Running Shoes", 120.0, Category::Footwear)
                    .with_variant(VariantInput::new("White", "9", 10))
                    .with_variant(VariantInput::new("Black", "10", 4)),
                ProductInput::new("Laptop", 1299.0, Category::Electronics)
                    .with_variant(VariantInput::new("Silver", "15-inch", 15))
                    .with_variant(VariantInput::new("Space Gray", "14-inch", 6)),
                ProductInput::new("Yoga Mat", 45.0, Category::Fitness),
            ])
            .unwrap();
        catalog
    }

    fn names<'a>(products: impl Iterator<Item = &'a Product>) -> Vec<String> {
        products.map(|p| p.name().to_string()).collect()
    }

    // ========================================
    // Insertion
    // ========================================

    #[test]
    fn test_insert_many_returns_stored_records() {
        let mut catalog = Catalog::new();
        let stored = catalog
            .insert_many(vec![
                ProductInput::new("Yoga Mat", 45.0, Category::Fitness),
                ProductInput::new("Laptop", 1299.0, Category::Electronics),
            ])
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(stored[0].name(), "Yoga Mat");
        assert_eq!(stored[0].version(), 1);
    }

    #[test]
    fn test_insert_many_rejects_bad_input_atomically() {
        let mut catalog = Catalog::new();
        let result = catalog.insert_many(vec![
            ProductInput::new("Yoga Mat", 45.0, Category::Fitness),
            ProductInput::new("", 10.0, Category::Fitness),
        ]);
        assert!(result.is_err());
        // First input must not have been inserted.
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insert_many_rejects_pinned_id_collision() {
        let mut catalog = Catalog::new();
        let id = ProductId::new();
        catalog
            .insert_one(ProductInput::new("Yoga Mat", 45.0, Category::Fitness).with_id(id))
            .unwrap();

        let result =
            catalog.insert_one(ProductInput::new("Other Mat", 50.0, Category::Fitness).with_id(id));
        assert!(result.is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_insert_many_rejects_duplicate_pin_within_batch() {
        let mut catalog = Catalog::new();
        let id = ProductId::new();
        let result = catalog.insert_many(vec![
            ProductInput::new("A", 1.0, Category::Fitness).with_id(id),
            ProductInput::new("B", 2.0, Category::Fitness).with_id(id),
        ]);
        assert!(result.is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_reinserting_same_literals_creates_independent_records() {
        let mut catalog = Catalog::new();
        let input = ProductInput::new("Yoga Mat", 45.0, Category::Fitness);
        let first = catalog.insert_many(vec![input.clone()]).unwrap();
        let second = catalog.insert_many(vec![input]).unwrap();

        // Documented behavior: no deduplication, distinct identities.
        assert_eq!(catalog.len(), 2);
        assert_ne!(first[0].id(), second[0].id());
    }

    // ========================================
    // Find
    // ========================================

    #[test]
    fn test_find_empty_predicate_returns_all_in_insertion_order() {
        let catalog = seeded();
        let all = names(catalog.find(&Predicate::new()));
        assert_eq!(
            all,
            vec![
                "Winter Jacket",
                "Smartphone",
                "Running Shoes",
                "Laptop",
                "Yoga Mat"
            ]
        );
    }

    #[test]
    fn test_find_by_category() {
        let catalog = seeded();
        let electronics = names(catalog.find(&Predicate::new().category(Category::Electronics)));
        assert_eq!(electronics, vec!["Smartphone", "Laptop"]);
    }

    #[test]
    fn test_find_by_price_less_than() {
        let catalog = seeded();
        let cheap = names(catalog.find(&Predicate::new().price_lt(150.0)));
        assert_eq!(cheap, vec!["Running Shoes", "Yoga Mat"]);
    }

    #[test]
    fn test_find_by_variant_field() {
        let catalog = seeded();
        let black = names(catalog.find(&Predicate::new().variant_color("Black")));
        assert_eq!(black, vec!["Smartphone", "Running Shoes"]);
    }

    #[test]
    fn test_find_is_restartable() {
        let catalog = seeded();
        let predicate = Predicate::new().category(Category::Electronics);
        assert_eq!(catalog.find(&predicate).count(), 2);
        // Second scan over the same predicate starts fresh.
        assert_eq!(catalog.find(&predicate).count(), 2);
    }

    #[test]
    fn test_find_projected() {
        use shelf_core::TopField;

        let catalog = seeded();
        let docs = catalog.find_projected(
            &Predicate::new().category(Category::Electronics),
            &Projection::new().field(TopField::Name).field(TopField::Price),
        );
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name.as_deref(), Some("Smartphone"));
        assert_eq!(docs[0].price, Some(699.0));
        assert!(docs[0].id.is_none());
        assert!(docs[0].variants.is_none());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = seeded();
        let price_1299 = Predicate::new().price_eq(1299.0);
        let laptop = catalog.find(&price_1299).next().unwrap();
        let id = laptop.id();
        assert_eq!(catalog.get(&id).unwrap().name(), "Laptop");
        assert!(catalog.get(&ProductId::new()).is_none());
    }

    // ========================================
    // update_one_price
    // ========================================

    #[test]
    fn test_update_one_price_first_match_only() {
        let mut catalog = seeded();
        let updated = catalog
            .update_one_price(&Predicate::new().category(Category::Electronics), 649.0)
            .unwrap();
        assert!(updated);

        // First electronics product in insertion order is the Smartphone.
        let all: Vec<f64> = catalog.find(&Predicate::new()).map(|p| p.price()).collect();
        assert_eq!(all, vec![200.0, 649.0, 120.0, 1299.0, 45.0]);
    }

    #[test]
    fn test_update_one_price_zero_matches_is_noop() {
        let mut catalog = seeded();
        let updated = catalog
            .update_one_price(&Predicate::new().category(Category::Accessories), 10.0)
            .unwrap();
        assert!(!updated);
    }

    #[test]
    fn test_update_one_price_rejects_negative() {
        let mut catalog = seeded();
        let result = catalog.update_one_price(&Predicate::new(), -5.0);
        assert!(result.is_err());
        assert_eq!(catalog.find(&Predicate::new()).next().unwrap().price(), 200.0);
    }

    #[test]
    fn test_update_one_price_bumps_version() {
        let mut catalog = seeded();
        catalog
            .update_one_price(&Predicate::new().price_eq(45.0), 50.0)
            .unwrap();
        let price_50 = Predicate::new().price_eq(50.0);
        let mat = catalog.find(&price_50).next().unwrap();
        assert_eq!(mat.version(), 2);
    }

    // ========================================
    // append_variant
    // ========================================

    #[test]
    fn test_append_variant_first_match() {
        let mut catalog = seeded();
        let appended = catalog
            .append_variant(
                &Predicate::new().category(Category::Fitness),
                VariantInput::new("Purple", "standard", 30),
            )
            .unwrap();
        assert!(appended);

        let fitness = Predicate::new().category(Category::Fitness);
        let mat = catalog.find(&fitness).next().unwrap();
        assert_eq!(mat.variant_count(), 1);
        assert_eq!(mat.variants()[0].color, "Purple");
    }

    #[test]
    fn test_append_variant_rejects_negative_stock_without_matching() {
        let mut catalog = seeded();
        // Invalid input is rejected even though the predicate matches nothing.
        let result = catalog.append_variant(
            &Predicate::new().category(Category::Accessories),
            VariantInput::new("Purple", "standard", -1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_append_variant_zero_matches_is_noop() {
        let mut catalog = seeded();
        let appended = catalog
            .append_variant(
                &Predicate::new().category(Category::Accessories),
                VariantInput::new("Purple", "standard", 3),
            )
            .unwrap();
        assert!(!appended);
    }

    // ========================================
    // set_variant_stock (positional contract)
    // ========================================

    #[test]
    fn test_set_variant_stock_updates_only_matched_element() {
        let mut catalog = seeded();
        let shoes_predicate = Predicate::new().category(Category::Footwear);
        let target = catalog.find(&shoes_predicate).next().unwrap().variants()[1].id;

        let updated = catalog
            .set_variant_stock(&shoes_predicate, &target, 8)
            .unwrap();
        assert!(updated);

        let shoes = catalog.find(&shoes_predicate).next().unwrap();
        assert_eq!(shoes.variants()[1].stock(), 8);
        // The sibling element is untouched.
        assert_eq!(shoes.variants()[0].stock(), 10);
        assert_eq!(shoes.variants()[0].color, "White");
    }

    #[test]
    fn test_set_variant_stock_requires_predicate_and_variant_on_same_product() {
        let mut catalog = seeded();
        // The Laptop's variant id under a Footwear predicate: no product
        // satisfies both conditions.
        let laptop_variant = catalog
            .find(&Predicate::new().price_eq(1299.0))
            .next()
            .unwrap()
            .variants()[0]
            .id;

        let updated = catalog
            .set_variant_stock(
                &Predicate::new().category(Category::Footwear),
                &laptop_variant,
                99,
            )
            .unwrap();
        assert!(!updated);
    }

    #[test]
    fn test_set_variant_stock_skips_matching_product_without_variant() {
        let mut catalog = seeded();
        // Both electronics products match the predicate; only the Laptop
        // (second in insertion order) holds the variant. The scan must skip
        // the Smartphone rather than stop at it.
        let laptop_variant = catalog
            .find(&Predicate::new().price_eq(1299.0))
            .next()
            .unwrap()
            .variants()[1]
            .id;

        let updated = catalog
            .set_variant_stock(
                &Predicate::new().category(Category::Electronics),
                &laptop_variant,
                2,
            )
            .unwrap();
        assert!(updated);

        let price_1299 = Predicate::new().price_eq(1299.0);
        let laptop = catalog.find(&price_1299).next().unwrap();
        assert_eq!(laptop.variants()[1].stock(), 2);
        assert_eq!(laptop.variants()[0].stock(), 15);
    }

    #[test]
    fn test_set_variant_stock_rejects_negative() {
        let mut catalog = seeded();
        let shoes_predicate = Predicate::new().category(Category::Footwear);
        let target = catalog.find(&shoes_predicate).next().unwrap().variants()[0].id;

        let result = catalog.set_variant_stock(&shoes_predicate, &target, -3);
        assert!(result.is_err());
        let shoes = catalog.find(&shoes_predicate).next().unwrap();
        assert_eq!(shoes.variants()[0].stock(), 10);
    }

    // ========================================
    // remove_variant
    // ========================================

    #[test]
    fn test_remove_variant_preserves_sibling_order() {
        let mut catalog = seeded();
        let laptop_predicate = Predicate::new().price_eq(1299.0);
        let second = catalog.find(&laptop_predicate).next().unwrap().variants()[1].id;

        assert!(catalog.remove_variant(&laptop_predicate, &second));

        let laptop = catalog.find(&laptop_predicate).next().unwrap();
        assert_eq!(laptop.variant_count(), 1);
        assert_eq!(laptop.variants()[0].color, "Silver");
        assert_eq!(laptop.variants()[0].size, "15-inch");
    }

    #[test]
    fn test_remove_variant_absent_on_selected_product_is_noop() {
        let mut catalog = seeded();
        // The predicate selects the Smartphone; the variant belongs to the
        // Laptop. Selection is by predicate alone, so nothing is removed.
        let laptop_variant = catalog
            .find(&Predicate::new().price_eq(1299.0))
            .next()
            .unwrap()
            .variants()[0]
            .id;

        let removed = catalog.remove_variant(
            &Predicate::new().price_eq(699.0),
            &laptop_variant,
        );
        assert!(!removed);
        assert_eq!(
            catalog
                .find(&Predicate::new().price_eq(1299.0))
                .next()
                .unwrap()
                .variant_count(),
            2
        );
    }

    #[test]
    fn test_remove_variant_zero_matches_is_noop() {
        let mut catalog = seeded();
        let removed = catalog.remove_variant(
            &Predicate::new().category(Category::Accessories),
            &VariantId::new(),
        );
        assert!(!removed);
    }

    // ========================================
    // Aggregation
    // ========================================

    #[test]
    fn test_count_by_category_on_sample_set() {
        let catalog = seeded();
        let counts = catalog.count_by_category();
        let pairs: Vec<(Category, u64)> = counts.iter().map(|c| (c.category, c.count)).collect();
        assert_eq!(
            pairs,
            vec![
                (Category::Electronics, 2),
                (Category::Apparel, 1),
                (Category::Footwear, 1),
                (Category::Fitness, 1),
            ]
        );
    }

    #[test]
    fn test_total_stock_per_product_on_sample_set() {
        let catalog = seeded();
        let summaries = catalog.total_stock_per_product();
        assert_eq!(summaries.len(), 5);
        assert_eq!(summaries[2].name, "Running Shoes");
        assert_eq!(summaries[2].total_stock, 14);
        assert_eq!(summaries[2].variant_count, 2);
        assert_eq!(summaries[4].name, "Yoga Mat");
        assert_eq!(summaries[4].total_stock, 0);
    }

    // ========================================
    // Indexes
    // ========================================

    #[test]
    fn test_create_index_records_declaration() {
        let mut catalog = seeded();
        let name = catalog
            .create_index(IndexSpec::ascending(FieldPath::Category))
            .unwrap();
        assert_eq!(name, "category_asc");
        assert_eq!(catalog.list_indexes().len(), 1);
    }

    #[test]
    fn test_create_index_rejects_duplicate_name() {
        let mut catalog = seeded();
        catalog
            .create_index(IndexSpec::ascending(FieldPath::Category))
            .unwrap();
        let result = catalog.create_index(IndexSpec::ascending(FieldPath::Category));
        assert!(result.is_err());
        assert_eq!(catalog.list_indexes().len(), 1);
    }

    #[test]
    fn test_create_index_does_not_change_query_results() {
        let mut catalog = seeded();
        let before = names(catalog.find(&Predicate::new().price_lt(150.0)));
        catalog
            .create_index(IndexSpec::ascending(FieldPath::Price))
            .unwrap();
        let after = names(catalog.find(&Predicate::new().price_lt(150.0)));
        assert_eq!(before, after);
    }

    // ========================================
    // Properties
    // ========================================

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            prop::sample::select(Category::ALL.to_vec())
        }

        fn arb_input() -> impl Strategy<Value = ProductInput> {
            (
                "[A-Za-z][A-Za-z0-9 ]{0,20}",
                0.0f64..2000.0,
                arb_category(),
                prop::collection::vec(("[A-Za-z]{1,8}", "[A-Za-z0-9-]{1,8}", 0i64..100), 0..4),
            )
                .prop_map(|(name, price, category, variants)| {
                    let mut input = ProductInput::new(name, price, category);
                    for (color, size, stock) in variants {
                        input = input.with_variant(VariantInput::new(color, size, stock));
                    }
                    input
                })
        }

        proptest! {
            /// Empty-predicate find returns exactly the inserted set in
            /// insertion order.
            #[test]
            fn find_all_preserves_insertion_order(inputs in prop::collection::vec(arb_input(), 0..10)) {
                let mut catalog = Catalog::new();
                let expected: Vec<String> = inputs.iter().map(|i| i.name.clone()).collect();
                catalog.insert_many(inputs).unwrap();

                let found: Vec<String> = catalog
                    .find(&Predicate::new())
                    .map(|p| p.name().to_string())
                    .collect();
                prop_assert_eq!(found, expected);
            }

            /// Every predicate find yields a subsequence of the full scan.
            #[test]
            fn find_yields_subsequence_of_insertion_order(
                inputs in prop::collection::vec(arb_input(), 0..10),
                category in arb_category(),
            ) {
                let mut catalog = Catalog::new();
                catalog.insert_many(inputs).unwrap();

                let matched: Vec<ProductId> = catalog
                    .find(&Predicate::new().category(category))
                    .map(|p| p.id())
                    .collect();
                let all: Vec<ProductId> =
                    catalog.find(&Predicate::new()).map(|p| p.id()).collect();

                let mut cursor = all.iter();
                for id in &matched {
                    prop_assert!(cursor.any(|x| x == id));
                }
            }

            /// Positional stock update touches exactly one element of one
            /// product; every other value in the store is unchanged.
            #[test]
            fn set_variant_stock_touches_exactly_one_element(
                inputs in prop::collection::vec(arb_input(), 1..8),
                product_pick in 0usize..8,
                variant_pick in 0usize..4,
                new_stock in 0i64..500,
            ) {
                let mut catalog = Catalog::new();
                catalog.insert_many(inputs).unwrap();

                let snapshot: Vec<Vec<i64>> = catalog
                    .find(&Predicate::new())
                    .map(|p| p.variants().iter().map(|v| v.stock()).collect())
                    .collect();

                let target = catalog
                    .find(&Predicate::new())
                    .nth(product_pick % catalog.len())
                    .and_then(|p| p.variants().get(variant_pick % p.variant_count().max(1)).map(|v| (p.id(), v.id)));

                let Some((product_id, variant_id)) = target else {
                    return Ok(()); // picked product has no variants
                };

                catalog.set_variant_stock(&Predicate::new(), &variant_id, new_stock).unwrap();

                // set_variant_stock scans with an empty predicate, so it hits
                // the FIRST product containing this variant id; variant ids
                // are random v4, collisions across products are not expected.
                let after: Vec<Vec<i64>> = catalog
                    .find(&Predicate::new())
                    .map(|p| p.variants().iter().map(|v| v.stock()).collect())
                    .collect();

                let mut diffs = 0;
                for (before_row, after_row) in snapshot.iter().zip(after.iter()) {
                    for (b, a) in before_row.iter().zip(after_row.iter()) {
                        if b != a {
                            diffs += 1;
                        }
                    }
                }
                prop_assert!(diffs <= 1);

                let product = catalog.get(&product_id).unwrap();
                let variant = product.variants().iter().find(|v| v.id == variant_id).unwrap();
                prop_assert_eq!(variant.stock(), new_stock);
            }

            /// Removal preserves the relative order of surviving variants.
            #[test]
            fn remove_variant_preserves_relative_order(
                input in arb_input(),
                pick in 0usize..4,
            ) {
                let mut catalog = Catalog::new();
                let stored = catalog.insert_many(vec![input]).unwrap();
                let product = &stored[0];
                if product.variant_count() == 0 {
                    return Ok(());
                }

                let victim = product.variants()[pick % product.variant_count()].id;
                let expected: Vec<VariantId> = product
                    .variants()
                    .iter()
                    .map(|v| v.id)
                    .filter(|id| *id != victim)
                    .collect();

                prop_assert!(catalog.remove_variant(&Predicate::new(), &victim));

                let survivors: Vec<VariantId> = catalog
                    .get(&product.id())
                    .unwrap()
                    .variants()
                    .iter()
                    .map(|v| v.id)
                    .collect();
                prop_assert_eq!(survivors, expected);
            }

            /// Category counts always sum to the store size and are sorted
            /// by descending count.
            #[test]
            fn count_by_category_is_complete_and_sorted(
                inputs in prop::collection::vec(arb_input(), 0..12),
            ) {
                let mut catalog = Catalog::new();
                let total = inputs.len() as u64;
                catalog.insert_many(inputs).unwrap();

                let counts = catalog.count_by_category();
                let sum: u64 = counts.iter().map(|c| c.count).sum();
                prop_assert_eq!(sum, total);

                for pair in counts.windows(2) {
                    prop_assert!(pair[0].count >= pair[1].count);
                }
            }
        }
    }
}
