//! The Executor - single entry point to the catalog engine.
//!
//! The Executor owns one [`Catalog`] instance and routes commands to the
//! appropriate store operations, converting results to outputs. There is no
//! process-wide store; callers hold the executor (and thereby the catalog)
//! as an ordinary owned value.
//!
//! Predicates arriving inside commands may have been built by
//! deserialization, so they are re-validated before dispatch.

use tracing::debug;

use shelf_engine::Catalog;

use crate::seed;
use crate::{Command, Output};
use shelf_core::Result;

/// The command executor - single entry point to the catalog engine.
///
/// # Example
///
/// ```
/// use shelf_core::{Category, Predicate};
/// use shelf_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::seeded().unwrap();
///
/// let result = executor
///     .execute(Command::Find {
///         predicate: Predicate::new().category(Category::Electronics),
///         projection: None,
///     })
///     .unwrap();
///
/// match result {
///     Output::Products(products) => assert_eq!(products.len(), 2),
///     _ => unreachable!("unprojected Find always returns Products"),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Executor {
    catalog: Catalog,
}

impl Executor {
    /// Create an executor over an empty catalog
    pub fn new() -> Self {
        Executor::default()
    }

    /// Create an executor over an existing catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Executor { catalog }
    }

    /// Create an executor over a catalog pre-populated with the sample set
    pub fn seeded() -> Result<Self> {
        let mut executor = Executor::new();
        seed::seed(&mut executor.catalog)?;
        Ok(executor)
    }

    /// Read access to the underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consume the executor, returning the catalog
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. Zero-match updates are not
    /// errors; they surface as `Output::Bool(false)`.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(target: "shelf::executor", command = cmd.name(), "Executing command");

        match cmd {
            Command::InsertMany { products } => {
                Ok(Output::Products(self.catalog.insert_many(products)?))
            }

            Command::Find {
                predicate,
                projection,
            } => {
                predicate.validate()?;
                match projection {
                    Some(projection) => Ok(Output::Projected(
                        self.catalog.find_projected(&predicate, &projection),
                    )),
                    None => Ok(Output::Products(
                        self.catalog.find(&predicate).cloned().collect(),
                    )),
                }
            }

            Command::UpdateOnePrice { predicate, price } => {
                predicate.validate()?;
                Ok(Output::Bool(
                    self.catalog.update_one_price(&predicate, price)?,
                ))
            }

            Command::AppendVariant { predicate, variant } => {
                predicate.validate()?;
                Ok(Output::Bool(
                    self.catalog.append_variant(&predicate, variant)?,
                ))
            }

            Command::SetVariantStock {
                predicate,
                variant,
                stock,
            } => {
                predicate.validate()?;
                Ok(Output::Bool(self.catalog.set_variant_stock(
                    &predicate, &variant, stock,
                )?))
            }

            Command::RemoveVariant { predicate, variant } => {
                predicate.validate()?;
                Ok(Output::Bool(
                    self.catalog.remove_variant(&predicate, &variant),
                ))
            }

            Command::CountByCategory => {
                Ok(Output::CategoryCounts(self.catalog.count_by_category()))
            }

            Command::TotalStockPerProduct => Ok(Output::StockSummaries(
                self.catalog.total_stock_per_product(),
            )),

            Command::CreateIndex { index } => {
                Ok(Output::IndexName(self.catalog.create_index(index)?))
            }

            Command::ListIndexes => Ok(Output::Indexes(self.catalog.list_indexes().to_vec())),
        }
    }

    /// Execute a batch of commands, collecting per-command results.
    ///
    /// Commands run in order; a failed command does not stop the batch.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }
}
