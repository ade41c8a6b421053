use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Database every collection lives in unless overridden by configuration.
pub const DEFAULT_DATABASE: &str = "HPNortonDatabase";

/// The three record shapes loaded by an import run, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Product,
    Customer,
    Rental,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Product,
        EntityKind::Customer,
        EntityKind::Rental,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Customer => "customer",
            EntityKind::Rental => "rental",
        }
    }

    /// Collection the kind is stored in.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Product => "product_data",
            EntityKind::Customer => "customer_data",
            EntityKind::Rental => "rental_data",
        }
    }

    /// Header fields a CSV file must carry for this kind. Other columns are ignored.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Product => &[
                "product_id",
                "description",
                "product_type",
                "quantity_available",
            ],
            EntityKind::Customer => &["customer_id", "name", "address", "phone_number", "email"],
            EntityKind::Rental => &["rental_id", "customer_id", "product_id"],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flat record that maps one-to-one onto a stored document.
pub trait Record: Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn id(&self) -> &str;
}

// ===== Entity Records =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub description: String,
    pub product_type: String,
    /// Kept as the raw CSV text; parsed only when availability is queried.
    pub quantity_available: String,
}

impl Product {
    /// Parsed quantity, or `None` when the stored text is not an integer.
    pub fn quantity(&self) -> Option<i64> {
        self.quantity_available.trim().parse().ok()
    }
}

impl Record for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> &str {
        &self.product_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
}

impl Record for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> &str {
        &self.customer_id
    }
}

/// Links a customer to a product. References are not checked at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: String,
    pub customer_id: String,
    pub product_id: String,
}

impl Record for Rental {
    const KIND: EntityKind = EntityKind::Rental;

    fn id(&self) -> &str {
        &self.rental_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_listed_in_processing_order() {
        let collections: Vec<_> = EntityKind::ALL.iter().map(|k| k.collection()).collect();
        assert_eq!(collections, ["product_data", "customer_data", "rental_data"]);
    }

    #[test]
    fn quantity_parses_integer_text_only() {
        let mut product = Product {
            product_id: "P1".into(),
            description: "Desk".into(),
            product_type: "Furniture".into(),
            quantity_available: " 3 ".into(),
        };
        assert_eq!(product.quantity(), Some(3));

        product.quantity_available = "three".into();
        assert_eq!(product.quantity(), None);
    }
}
