//! HP Norton rental data loader.
//!
//! Imports product, customer and rental CSV files into a document store and
//! answers the two questions the business asks of that data: which products
//! are available, and who is renting a given product.

pub mod config;
pub mod error;
pub mod generator;
pub mod import;
pub mod logging;
pub mod models;
pub mod queries;
pub mod store;

pub use config::{ImportConfig, StoreConfig};
pub use error::{ImportError, QueryError, RowShapeError};
pub use import::{ImportOutcome, Importer, import_data};
pub use models::{Customer, EntityKind, Product, Rental};
pub use queries::{show_available_products, show_rentals};
pub use store::{DocumentStore, MemoryStore, MongoStore, StoreError};
