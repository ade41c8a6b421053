//! Read-side queries over imported data.

use crate::error::QueryError;
use crate::models::{Customer, EntityKind, Product, Record, Rental};
use crate::store::DocumentStore;
use mongodb::bson::{self, Bson, Document, doc};
use std::collections::{BTreeSet, HashMap};

fn fetch<T: Record>(store: &dyn DocumentStore, filter: Document) -> Result<Vec<T>, QueryError> {
    let collection = T::KIND.collection();
    store
        .find(collection, filter)?
        .into_iter()
        .map(|document| {
            bson::from_document(document)
                .map_err(|source| QueryError::Decode { collection, source })
        })
        .collect()
}

/// Products with a positive quantity available, ordered by product ID.
///
/// Quantities are stored as text; a product whose quantity does not parse as
/// an integer is treated as unavailable.
pub fn show_available_products(store: &dyn DocumentStore) -> Result<Vec<Product>, QueryError> {
    let mut products: Vec<Product> = fetch(store, doc! {})?;

    products.retain(|product| match product.quantity() {
        Some(quantity) => quantity > 0,
        None => {
            log::warn!(
                "product {} has non-numeric quantity {:?}; treating as unavailable",
                product.product_id,
                product.quantity_available
            );
            false
        }
    });
    products.sort_by(|a, b| a.product_id.cmp(&b.product_id));

    log::debug!("{} products available", products.len());
    Ok(products)
}

/// Customers renting `product_id`, ordered by customer ID.
///
/// Rentals for the product are fetched first, then only the customers they
/// reference. A customer with several rentals of the product appears once;
/// rentals pointing at an unknown customer are skipped.
pub fn show_rentals(
    store: &dyn DocumentStore,
    product_id: &str,
) -> Result<Vec<Customer>, QueryError> {
    let rentals: Vec<Rental> = fetch(store, doc! { "product_id": product_id })?;
    if rentals.is_empty() {
        log::debug!("no rentals found for product {}", product_id);
        return Ok(Vec::new());
    }

    let renter_ids: BTreeSet<&str> = rentals.iter().map(|r| r.customer_id.as_str()).collect();
    let candidates: Vec<Bson> = renter_ids.iter().map(|id| Bson::from(*id)).collect();

    let mut customers: HashMap<String, Customer> =
        fetch::<Customer>(store, doc! { "customer_id": { "$in": candidates } })?
            .into_iter()
            .map(|customer| (customer.customer_id.clone(), customer))
            .collect();

    let mut renters = Vec::with_capacity(renter_ids.len());
    for customer_id in renter_ids {
        match customers.remove(customer_id) {
            Some(customer) => renters.push(customer),
            None => log::warn!(
                "rental of {} references unknown {} {}",
                product_id,
                EntityKind::Customer,
                customer_id
            ),
        }
    }

    log::debug!("{} customers renting {}", renters.len(), product_id);
    Ok(renters)
}
