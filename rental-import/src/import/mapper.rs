//! Row to record projection.
//!
//! Each entity kind copies exactly its declared fields out of a header-driven
//! row. Values are passed through as strings; columns the kind does not
//! declare are dropped.

use crate::error::RowShapeError;
use crate::import::reader::{CsvTable, Row};
use crate::models::{Customer, Product, Record, Rental};

pub trait FromRow: Record + Sized {
    fn from_row(row: &Row<'_>) -> Result<Self, RowShapeError>;
}

fn field<T: Record>(row: &Row<'_>, name: &'static str) -> Result<String, RowShapeError> {
    row.get(name)
        .map(str::to_string)
        .ok_or_else(|| RowShapeError {
            kind: T::KIND,
            field: name,
            line: row.line(),
        })
}

impl FromRow for Product {
    fn from_row(row: &Row<'_>) -> Result<Self, RowShapeError> {
        Ok(Product {
            product_id: field::<Self>(row, "product_id")?,
            description: field::<Self>(row, "description")?,
            product_type: field::<Self>(row, "product_type")?,
            quantity_available: field::<Self>(row, "quantity_available")?,
        })
    }
}

impl FromRow for Customer {
    fn from_row(row: &Row<'_>) -> Result<Self, RowShapeError> {
        Ok(Customer {
            customer_id: field::<Self>(row, "customer_id")?,
            name: field::<Self>(row, "name")?,
            address: field::<Self>(row, "address")?,
            phone_number: field::<Self>(row, "phone_number")?,
            email: field::<Self>(row, "email")?,
        })
    }
}

impl FromRow for Rental {
    fn from_row(row: &Row<'_>) -> Result<Self, RowShapeError> {
        Ok(Rental {
            rental_id: field::<Self>(row, "rental_id")?,
            customer_id: field::<Self>(row, "customer_id")?,
            product_id: field::<Self>(row, "product_id")?,
        })
    }
}

/// Check the header for every field of `T` before any row is mapped.
pub fn check_headers<T: FromRow>(table: &CsvTable) -> Result<(), RowShapeError> {
    match table.missing_field(T::KIND.fields()) {
        Some(field) => Err(RowShapeError {
            kind: T::KIND,
            field,
            line: 1,
        }),
        None => Ok(()),
    }
}
