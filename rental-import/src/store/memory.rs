use super::{DocumentStore, StoreError};
use mongodb::bson::{Bson, Document};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

/// Process-local document store.
///
/// Collections are created on first insert. Inserts into a collection marked
/// with [`MemoryStore::fail_inserts_into`] are rejected without storing anything.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    failing: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later bulk insert into `collection` fail.
    pub fn fail_inserts_into(&self, collection: &str) {
        self.failing.lock().insert(collection.to_string());
    }

    /// Snapshot of a collection's documents in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl DocumentStore for MemoryStore {
    fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<(), StoreError> {
        if self.failing.lock().contains(collection) {
            return Err(StoreError::insert(collection, "inserts rejected by store"));
        }

        self.collections
            .lock()
            .entry(collection.to_string())
            .or_default()
            .extend(documents);
        Ok(())
    }

    fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.lock();
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        for document in documents {
            if matches_filter(collection, document, &filter)? {
                found.push(document.clone());
            }
        }
        Ok(found)
    }

    fn drop_collection(&self, collection: &str) -> Result<(), StoreError> {
        self.collections.lock().remove(collection);
        Ok(())
    }
}

fn matches_filter(
    collection: &str,
    document: &Document,
    filter: &Document,
) -> Result<bool, StoreError> {
    for (field, expected) in filter {
        let actual = document.get(field);
        let matched = match expected {
            Bson::Document(operator) => match operator.get("$in") {
                Some(Bson::Array(candidates)) if operator.len() == 1 => {
                    actual.is_some_and(|value| candidates.contains(value))
                }
                _ => {
                    return Err(StoreError::query(
                        collection,
                        format!("unsupported filter on field {field}: {operator}"),
                    ));
                }
            },
            _ => actual == Some(expected),
        };

        if !matched {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_many(
                "rental_data",
                vec![
                    doc! { "rental_id": "R1", "customer_id": "C1", "product_id": "P1" },
                    doc! { "rental_id": "R2", "customer_id": "C2", "product_id": "P2" },
                    doc! { "rental_id": "R3", "customer_id": "C3", "product_id": "P1" },
                ],
            )
            .expect("insert succeeds");
        store
    }

    #[test]
    fn equality_filter_selects_matching_documents() {
        let store = seeded();
        let found = store
            .find("rental_data", doc! { "product_id": "P1" })
            .expect("find succeeds");
        let ids: Vec<_> = found
            .iter()
            .map(|d| d.get_str("rental_id").expect("rental_id"))
            .collect();
        assert_eq!(ids, ["R1", "R3"]);
    }

    #[test]
    fn in_filter_selects_any_candidate() {
        let store = seeded();
        let found = store
            .find("rental_data", doc! { "customer_id": { "$in": ["C2", "C3"] } })
            .expect("find succeeds");
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn unsupported_operator_is_rejected() {
        let store = seeded();
        let err = store
            .find("rental_data", doc! { "customer_id": { "$gt": "C1" } })
            .expect_err("operator unsupported");
        assert!(matches!(err, StoreError::Query { .. }));
    }

    #[test]
    fn failing_collection_stores_nothing() {
        let store = MemoryStore::new();
        store.fail_inserts_into("product_data");

        let err = store
            .insert_many("product_data", vec![doc! { "product_id": "P1" }])
            .expect_err("insert rejected");
        assert!(matches!(err, StoreError::Insert { .. }));
        assert!(store.is_empty("product_data"));
    }

    #[test]
    fn drop_collection_removes_documents() {
        let store = seeded();
        store.drop_collection("rental_data").expect("drop succeeds");
        assert!(store.is_empty("rental_data"));
        store
            .drop_collection("rental_data")
            .expect("dropping twice is fine");
    }
}
