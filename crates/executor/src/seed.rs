//! Sample catalog records
//!
//! The canned five-product set used by the worked exercises. Variant
//! identities are pinned so positional updates and removals are
//! reproducible; product identities are assigned fresh at every insert,
//! which keeps repeated seeding legal (and demonstrably non-deduplicating).

use uuid::{uuid, Uuid};

use shelf_core::{Category, Product, ProductInput, Result, VariantId, VariantInput};
use shelf_engine::Catalog;

const JACKET_NAVY_M: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000a1");
const JACKET_NAVY_L: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000a2");
const PHONE_BLACK_128: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000e1");
const PHONE_WHITE_256: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000e2");
const SHOES_WHITE_9: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000af");
const SHOES_BLACK_10: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000b1");
const LAPTOP_SILVER_15: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000c1");
const LAPTOP_GRAY_14: Uuid = uuid!("9b2cf0aa-6c1d-4e7b-9b61-0000000000c2");

fn vid(raw: Uuid) -> VariantId {
    VariantId::from_bytes(*raw.as_bytes())
}

/// Identity of the Running Shoes White/9 variant (ends `…af`)
pub fn shoes_white_variant() -> VariantId {
    vid(SHOES_WHITE_9)
}

/// Identity of the Running Shoes Black/10 variant (ends `…b1`)
pub fn shoes_black_variant() -> VariantId {
    vid(SHOES_BLACK_10)
}

/// Identity of the Laptop Silver/15-inch variant (ends `…c1`)
pub fn laptop_silver_variant() -> VariantId {
    vid(LAPTOP_SILVER_15)
}

/// Identity of the Laptop Space Gray/14-inch variant (ends `…c2`)
pub fn laptop_space_gray_variant() -> VariantId {
    vid(LAPTOP_GRAY_14)
}

/// The five-product sample set, in canonical insertion order
pub fn sample_products() -> Vec<ProductInput> {
    vec![
        ProductInput::new("Winter Jacket", 200.0, Category::Apparel)
            .with_description("Insulated jacket for cold weather")
            .with_variant(VariantInput::new("Navy", "M", 12).with_id(vid(JACKET_NAVY_M)))
            .with_variant(VariantInput::new("Navy", "L", 7).with_id(vid(JACKET_NAVY_L))),
        ProductInput::new("Smartphone", 699.0, Category::Electronics)
            .with_description("Mid-range handset")
            .with_variant(VariantInput::new("Black", "128GB", 25).with_id(vid(PHONE_BLACK_128)))
            .with_variant(VariantInput::new("White", "256GB", 14).with_id(vid(PHONE_WHITE_256))),
        ProductInput::new("Running Shoes", 120.0, Category::Footwear)
            .with_description("Lightweight daily trainer")
            .with_variant(VariantInput::new("White", "9", 10).with_id(vid(SHOES_WHITE_9)))
            .with_variant(VariantInput::new("Black", "10", 4).with_id(vid(SHOES_BLACK_10))),
        ProductInput::new("Laptop", 1299.0, Category::Electronics)
            .with_description("14- and 15-inch configurations")
            .with_variant(VariantInput::new("Silver", "15-inch", 15).with_id(vid(LAPTOP_SILVER_15)))
            .with_variant(VariantInput::new("Space Gray", "14-inch", 6).with_id(vid(LAPTOP_GRAY_14))),
        ProductInput::new("Yoga Mat", 45.0, Category::Fitness),
    ]
}

/// Insert the sample set into a catalog, returning the stored records
pub fn seed(catalog: &mut Catalog) -> Result<Vec<Product>> {
    catalog.insert_many(sample_products())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::Predicate;

    #[test]
    fn test_seed_inserts_five_products() {
        let mut catalog = Catalog::new();
        let stored = seed(&mut catalog).unwrap();
        assert_eq!(stored.len(), 5);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_sample_prices_in_canonical_order() {
        let prices: Vec<f64> = sample_products().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![200.0, 699.0, 120.0, 1299.0, 45.0]);
    }

    #[test]
    fn test_pinned_variant_identities() {
        let mut catalog = Catalog::new();
        seed(&mut catalog).unwrap();

        let footwear = Predicate::new().category(Category::Footwear);
        let shoes = catalog
            .find(&footwear)
            .next()
            .unwrap();
        assert_eq!(shoes.variants()[0].id, shoes_white_variant());
        assert_eq!(shoes.variants()[1].id, shoes_black_variant());
        assert!(shoes_black_variant().to_string().ends_with("b1"));
        assert!(shoes_white_variant().to_string().ends_with("af"));
    }

    #[test]
    fn test_reseeding_creates_independent_records() {
        let mut catalog = Catalog::new();
        let first = seed(&mut catalog).unwrap();
        let second = seed(&mut catalog).unwrap();

        assert_eq!(catalog.len(), 10);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.name(), b.name());
            assert_ne!(a.id(), b.id());
        }
    }
}
