use mongodb::bson;
use thiserror::Error;

/// Errors raised by a document store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to mongodb at {address}: {source}")]
    Connection {
        address: String,
        source: mongodb::error::Error,
    },
    #[error("bulk insert into {collection} failed: {reason}")]
    Insert { collection: String, reason: String },
    #[error("query on {collection} failed: {reason}")]
    Query { collection: String, reason: String },
    #[error("document encoding error: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl StoreError {
    pub fn insert(collection: &str, reason: impl Into<String>) -> Self {
        StoreError::Insert {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }

    pub fn query(collection: &str, reason: impl Into<String>) -> Self {
        StoreError::Query {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }
}
