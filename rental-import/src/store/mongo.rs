use super::{DocumentStore, StoreError};
use crate::config::StoreConfig;
use mongodb::bson::{Document, doc};
use mongodb::sync::{Client, Database};

/// Scoped connection to one MongoDB database.
///
/// The connection is opened and verified by [`MongoStore::connect`] and
/// released when the value is dropped, on success and error paths alike.
pub struct MongoStore {
    address: String,
    database: Database,
    client: Client,
}

impl MongoStore {
    /// Open a connection and ping the server so an unreachable store fails here
    /// rather than at the first insert.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let address = config.address();
        log::info!("opening connection to mongodb at {}", address);

        let client = Client::with_uri_str(config.uri()).map_err(|source| {
            StoreError::Connection {
                address: address.clone(),
                source,
            }
        })?;

        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(|source| StoreError::Connection {
                address: address.clone(),
                source,
            })?;

        log::info!("connected to database {}", config.database);
        Ok(Self {
            address,
            database,
            client,
        })
    }

    /// Handle sharing this store's connection pool. It stops working once the
    /// store is dropped.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl DocumentStore for MongoStore {
    fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<(), StoreError> {
        self.database
            .collection::<Document>(collection)
            .insert_many(documents)
            .run()
            .map_err(|err| StoreError::insert(collection, err.to_string()))?;
        Ok(())
    }

    fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter)
            .run()
            .map_err(|err| StoreError::query(collection, err.to_string()))?;

        cursor
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| StoreError::query(collection, err.to_string()))
    }

    fn drop_collection(&self, collection: &str) -> Result<(), StoreError> {
        self.database
            .collection::<Document>(collection)
            .drop()
            .run()?;
        Ok(())
    }
}

impl Drop for MongoStore {
    fn drop(&mut self) {
        log::info!("closing connection to mongodb at {}", self.address);
        // Cursors never outlive a store call, so nothing is left to wait on.
        self.client.clone().shutdown().immediate(true).run();
    }
}
