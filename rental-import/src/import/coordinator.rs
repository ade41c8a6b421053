//! Import coordination across the three entity kinds.
//!
//! The Importer drives the pipeline one file at a time:
//! 1. Read the product file, map rows, bulk insert
//! 2. Same for the customer file
//! 3. Same for the rental file
//!
//! Insert failures are isolated per kind; every other failure ends the run.

use crate::error::ImportError;
use crate::import::loader;
use crate::import::mapper::{self, FromRow};
use crate::import::reader::CsvTable;
use crate::import::stats::ImportOutcome;
use crate::models::{Customer, EntityKind, Product, Rental};
use crate::store::DocumentStore;
use log::{Level, Log};
use std::path::Path;

/// Loads CSV files into a document store.
///
/// The logger is injected so callers decide where pipeline messages go;
/// pass `log::logger()` to use the process-wide logger.
pub struct Importer<'a> {
    store: &'a dyn DocumentStore,
    logger: &'a dyn Log,
}

impl<'a> Importer<'a> {
    pub fn new(store: &'a dyn DocumentStore, logger: &'a dyn Log) -> Self {
        Self { store, logger }
    }

    /// Import the product, customer and rental files found in `directory`.
    ///
    /// # Returns
    /// ImportOutcome with counts for the kinds that loaded and one error per
    /// kind whose bulk insert failed
    ///
    /// # Errors
    /// Missing or unreadable files, invalid CSV and rows missing a declared
    /// field stop the run. Kinds loaded before the failure stay in the store.
    pub fn import_data(
        &self,
        directory: &Path,
        product_file: &str,
        customer_file: &str,
        rentals_file: &str,
    ) -> Result<ImportOutcome, ImportError> {
        emit!(self.logger, Level::Info, "importing data files in {}", directory.display());
        for kind in EntityKind::ALL {
            emit!(self.logger, Level::Info, "using collection: {}", kind.collection());
        }

        let mut outcome = ImportOutcome::default();
        self.load_kind::<Product>(&directory.join(product_file), &mut outcome)?;
        self.load_kind::<Customer>(&directory.join(customer_file), &mut outcome)?;
        self.load_kind::<Rental>(&directory.join(rentals_file), &mut outcome)?;

        emit!(
            self.logger,
            Level::Info,
            "import finished: counts {} errors {}",
            outcome.counts_tuple(),
            outcome.errors_tuple()
        );
        Ok(outcome)
    }

    fn load_kind<T: FromRow>(
        &self,
        path: &Path,
        outcome: &mut ImportOutcome,
    ) -> Result<(), ImportError> {
        let records = self.read_records::<T>(path)?;

        match loader::insert_records_batch(self.store, &records) {
            Ok(count) => {
                emit!(
                    self.logger,
                    Level::Info,
                    "loaded {} {} records into {}",
                    count,
                    T::KIND,
                    T::KIND.collection()
                );
                outcome.record_success(T::KIND, count);
            }
            Err(err) => {
                emit!(self.logger, Level::Error, "failed to load {} records: {}", T::KIND, err);
                outcome.record_failure(T::KIND, err);
            }
        }
        Ok(())
    }

    fn read_records<T: FromRow>(&self, path: &Path) -> Result<Vec<T>, ImportError> {
        emit!(self.logger, Level::Info, "opening {}", path.display());
        let table = CsvTable::read(path)?;
        emit!(
            self.logger,
            Level::Debug,
            "read {} rows from {}",
            table.len(),
            path.display()
        );

        let row_shape = |source| ImportError::RowShape {
            path: path.to_path_buf(),
            source,
        };

        mapper::check_headers::<T>(&table).map_err(row_shape)?;

        let mut records = Vec::with_capacity(table.len());
        for row in table.rows() {
            let record = T::from_row(&row).map_err(row_shape)?;
            emit!(
                self.logger,
                Level::Debug,
                "adding {} {} from line {}",
                T::KIND,
                record.id(),
                row.line()
            );
            records.push(record);
        }
        Ok(records)
    }
}

/// Import using the process-wide logger.
pub fn import_data(
    store: &dyn DocumentStore,
    directory: &Path,
    product_file: &str,
    customer_file: &str,
    rentals_file: &str,
) -> Result<ImportOutcome, ImportError> {
    Importer::new(store, log::logger()).import_data(
        directory,
        product_file,
        customer_file,
        rentals_file,
    )
}
