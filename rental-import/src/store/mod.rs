//! Document store access.
//!
//! The import pipeline and the query functions only talk to a
//! [`DocumentStore`]; the backend is picked by the caller:
//!
//! 1. **MongoDB** (`mongo`) - the production store, one scoped connection per run
//! 2. **In-memory** (`memory`) - a process-local store used by tests
//!
//! Documents are BSON maps whose fields mirror the source CSV columns.

pub mod error;
pub mod memory;
pub mod mongo;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::models::EntityKind;
use mongodb::bson::Document;

/// Minimal collection-oriented storage interface.
pub trait DocumentStore {
    /// Insert all documents in one bulk call.
    fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<(), StoreError>;

    /// Return every document matching `filter`.
    ///
    /// Filters use MongoDB syntax; backends are only required to support
    /// field equality and `{"$in": [...]}`.
    fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// Remove a collection and all of its documents. Missing collections are not an error.
    fn drop_collection(&self, collection: &str) -> Result<(), StoreError>;
}

/// Drop the product, customer and rental collections.
pub fn reset_collections(store: &dyn DocumentStore) -> Result<(), StoreError> {
    for kind in EntityKind::ALL {
        store.drop_collection(kind.collection())?;
        log::info!("dropped collection {}", kind.collection());
    }
    Ok(())
}
