//! CSV import pipeline.
//!
//! An import run moves three CSV files into three collections:
//!
//! 1. **Reading** (`reader`) - Parses a file into header-driven rows
//! 2. **Mapping** (`mapper`) - Projects rows into typed records, rejecting malformed rows
//! 3. **Loading** (`loader`) - Bulk inserts one kind's records with a single store call
//! 4. **Coordination** (`coordinator`) - Runs the three kinds in order and collects results
//! 5. **Statistics** (`stats`) - Per-kind counts and insert failures
//!
//! # Failure handling
//!
//! A bulk insert failure is recorded against its kind and the run moves on to
//! the next file. Anything else (unreadable file, invalid CSV, a row missing a
//! declared field) aborts the run.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use rental_import::import::Importer;
//! use rental_import::store::MemoryStore;
//!
//! let store = MemoryStore::new();
//! let outcome = Importer::new(&store, log::logger()).import_data(
//!     "data_files".as_ref(),
//!     "product_data.csv",
//!     "customer_data.csv",
//!     "rental_data.csv",
//! )?;
//!
//! println!("{}", outcome.counts_tuple());
//! ```

/// Log through an explicit `log::Log` instead of the global logger.
macro_rules! emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            &::log::Record::builder()
                .level($level)
                .target(module_path!())
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .args(format_args!($($arg)+))
                .build(),
        )
    };
}

pub mod coordinator;
pub mod loader;
pub mod mapper;
pub mod reader;
pub mod stats;

pub use coordinator::{Importer, import_data};
pub use stats::{ImportOutcome, InsertFailure};
