//! Bulk insert of mapped records.

use crate::models::Record;
use crate::store::{DocumentStore, StoreError};
use mongodb::bson;

/// Insert a batch of records into their kind's collection with one store call.
///
/// An empty batch makes no call, since MongoDB rejects an empty `insertMany`.
///
/// # Returns
/// Number of records submitted, once the store has accepted the call
pub fn insert_records_batch<T: Record>(
    store: &dyn DocumentStore,
    records: &[T],
) -> Result<usize, StoreError> {
    if records.is_empty() {
        return Ok(0);
    }

    let documents = records
        .iter()
        .map(bson::to_document)
        .collect::<Result<Vec<_>, _>>()?;
    let count = documents.len();

    store.insert_many(T::KIND.collection(), documents)?;

    log::trace!("bulk inserted {} {} records", count, T::KIND);
    Ok(count)
}
