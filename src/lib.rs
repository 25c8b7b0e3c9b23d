//! ShelfDB - embedded in-memory product catalog store
//!
//! ShelfDB holds typed product documents with embedded variant sub-documents
//! and serves predicate filtering, field projection, positional nested-array
//! updates, and grouping aggregation over them.
//!
//! # Quick Start
//!
//! ```
//! use shelfdb::{Command, Executor, Predicate};
//!
//! // A store pre-populated with the sample set
//! let mut db = Executor::seeded().unwrap();
//!
//! // Everything under 150
//! let out = db
//!     .execute(Command::Find {
//!         predicate: Predicate::new().price_lt(150.0),
//!         projection: None,
//!     })
//!     .unwrap();
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which owns one [`Catalog`]
//! and provides a command-based API. Internal layering (core types, engine)
//! is re-exported through the executor crate.

// Re-export the public API from shelf-executor
pub use shelf_executor::*;
