#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const PRODUCT_HEADER: &str = "product_id,description,product_type,quantity_available";
pub const CUSTOMER_HEADER: &str = "customer_id,name,address,phone_number,email";
pub const RENTAL_HEADER: &str = "rental_id,customer_id,product_id";

/// Write a CSV file made of `header` followed by `rows`, one per line.
pub fn write_csv(dir: &Path, name: &str, header: &str, rows: &[&str]) {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(dir.join(name), contents).expect("write csv fixture");
}

/// The two-product, one-customer, one-rental data set used across tests.
pub fn write_sample_data(dir: &Path) {
    write_csv(
        dir,
        "products.csv",
        PRODUCT_HEADER,
        &["P1,Desk,Furniture,3", "P2,Fan,Electric,0"],
    );
    write_csv(
        dir,
        "customers.csv",
        CUSTOMER_HEADER,
        &["C1,Jo,1 Main St,555-0100,jo@example.com"],
    );
    write_csv(dir, "rentals.csv", RENTAL_HEADER, &["R1,C1,P1"]);
}
