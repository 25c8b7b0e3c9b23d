//! Core types for the catalog store
//!
//! This crate defines the foundational types used throughout the system:
//! - ProductId / VariantId: identity newtypes
//! - Category: the closed set of recognized categories
//! - Product / Variant: stored records with document metadata
//! - ProductInput / VariantInput: validated insertion payloads
//! - Predicate / Clause: tagged-variant query expressions
//! - Projection: field-subset specification for query results
//! - Error: error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod projection;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use catalog::{Category, Product, ProductInput, Variant, VariantInput};
pub use error::{Error, Result};
pub use projection::{ProjectedProduct, ProjectedVariant, Projection, TopField, VariantField};
pub use query::{Clause, ClauseValue, Comparator, FieldPath, Predicate};
pub use types::{ProductId, VariantId};
