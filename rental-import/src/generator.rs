//! Synthetic sample data for the importer.
//!
//! Writes product, customer and rental CSV files using the importer's column
//! names. Products and customers carry extra columns the importer ignores.
//! Rentals only reference IDs generated in the same run.

use csv::{Writer, WriterBuilder};
use rand::Rng;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Largest per-kind row count; IDs are six digits per prefix.
pub const MAX_ROWS: usize = 500_000;

const PRODUCT_HEADER: [&str; 10] = [
    "product_id",
    "description",
    "market_price",
    "rental_price",
    "product_type",
    "brand",
    "voltage",
    "material",
    "size",
    "quantity_available",
];
const CUSTOMER_HEADER: [&str; 8] = [
    "customer_id",
    "name",
    "last_name",
    "address",
    "phone_number",
    "email",
    "status",
    "credit_limit",
];
const RENTAL_HEADER: [&str; 3] = ["rental_id", "customer_id", "product_id"];

const ADJECTIVES: &[&str] = &[
    "Classic", "Compact", "Deluxe", "Modern", "Rustic", "Sturdy", "Vintage", "Portable",
];
const FURNITURE: &[&str] = &["Table", "Chair", "Stool", "Mirror", "Fixture", "Desk"];
const ELECTRIC: &[&str] = &[
    "Fan",
    "Coffee Maker",
    "Washing Machine",
    "Microwave",
    "Kettle",
    "Toothbrush",
];
const MATERIALS: &[&str] = &["Maple", "Oak", "Walnut", "Tile", "Granite", "Formica"];
const SIZES: &[&str] = &["x-small", "small", "medium", "large", "extra-large"];
const VOLTAGES: &[&str] = &["110VAC", "220VAC", "440VAC", "12VDC"];
const BRANDS: &[&str] = &["Acme", "Freebird", "Northwind", "Volta", "Brightline"];
const FIRST_NAMES: &[&str] = &[
    "Ana", "Ben", "Carla", "Dev", "Elena", "Femi", "Grace", "Hiro", "Ines", "Jon",
];
const LAST_NAMES: &[&str] = &[
    "Adams", "Baker", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Hughes", "Ito", "Jones",
];
const STREETS: &[&str] = &["Main St", "Elm St", "Oak Ave", "Pine Rd", "Lake Dr", "Hill Ct"];
const MAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org", "mail.test"];

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("cannot generate {requested} rows; at most {max} are supported", max = MAX_ROWS)]
    TooManyRows { requested: usize },
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv: {0}")]
    Io(#[from] std::io::Error),
}

/// Paths and row counts of a generated data set.
#[derive(Debug, Clone)]
pub struct SampleFiles {
    pub product_file: PathBuf,
    pub customer_file: PathBuf,
    pub rental_file: PathBuf,
    pub products: usize,
    pub customers: usize,
    pub rentals: usize,
}

fn pick<R: Rng>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

fn unique_id<R: Rng>(rng: &mut R, prefix: char, used: &mut HashSet<String>) -> String {
    loop {
        let id = format!("{prefix}{:06}", rng.gen_range(0..1_000_000u32));
        if used.insert(id.clone()) {
            return id;
        }
    }
}

fn csv_writer<W: Write>(writer: W, header: &[&str]) -> Result<Writer<W>, GeneratorError> {
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(writer);
    // Written by hand so an empty data set still has a header.
    csv.write_record(header)?;
    Ok(csv)
}

/// Write `count` products, returning their IDs in file order.
pub fn generate_products<W: Write, R: Rng>(
    writer: W,
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, GeneratorError> {
    if count > MAX_ROWS {
        return Err(GeneratorError::TooManyRows { requested: count });
    }

    let mut csv = csv_writer(writer, &PRODUCT_HEADER)?;
    let mut used = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);

    for _ in 0..count {
        let furniture = rng.gen_bool(0.5);
        let market_price: f64 = rng.gen_range(0.01..2500.0);
        let rental_price = market_price * rng.gen_range(0.0..1.0) / 365.0;
        let quantity = rng.gen_range(0..=99u32);

        let (id, description, product_type, brand, voltage, material, size) = if furniture {
            (
                unique_id(rng, 'F', &mut used),
                format!("{} {}", pick(rng, ADJECTIVES), pick(rng, FURNITURE)),
                "Furniture",
                "",
                "",
                pick(rng, MATERIALS),
                pick(rng, SIZES),
            )
        } else {
            (
                unique_id(rng, 'E', &mut used),
                format!("{} {}", pick(rng, ADJECTIVES), pick(rng, ELECTRIC)),
                "Electric",
                pick(rng, BRANDS),
                pick(rng, VOLTAGES),
                "",
                "",
            )
        };

        csv.write_record([
            id.as_str(),
            description.as_str(),
            format!("{market_price:.2}").as_str(),
            format!("{rental_price:.2}").as_str(),
            product_type,
            brand,
            voltage,
            material,
            size,
            quantity.to_string().as_str(),
        ])?;
        ids.push(id);
    }

    csv.flush()?;
    Ok(ids)
}

/// Write `count` customers, returning their IDs in file order.
pub fn generate_customers<W: Write, R: Rng>(
    writer: W,
    rng: &mut R,
    count: usize,
) -> Result<Vec<String>, GeneratorError> {
    if count > MAX_ROWS {
        return Err(GeneratorError::TooManyRows { requested: count });
    }

    let mut csv = csv_writer(writer, &CUSTOMER_HEADER)?;
    let mut used = HashSet::with_capacity(count);
    let mut ids = Vec::with_capacity(count);

    for _ in 0..count {
        let id = unique_id(rng, 'C', &mut used);
        let name = pick(rng, FIRST_NAMES);
        let last_name = pick(rng, LAST_NAMES);
        let address = format!("{} {}", rng.gen_range(1..10_000u32), pick(rng, STREETS));
        let phone = format!(
            "{:03}-{:03}-{:04}",
            rng.gen_range(0..1000u32),
            rng.gen_range(0..1000u32),
            rng.gen_range(0..10_000u32)
        );
        let email = format!(
            "{}.{}@{}",
            name.to_lowercase(),
            last_name.to_lowercase(),
            pick(rng, MAIL_DOMAINS)
        );
        let status = if rng.gen_bool(0.5) { "active" } else { "inactive" };
        let credit_limit: f64 = rng.gen_range(0.0..100_000.0);

        csv.write_record([
            id.as_str(),
            name,
            last_name,
            address.as_str(),
            phone.as_str(),
            email.as_str(),
            status,
            format!("{credit_limit:.2}").as_str(),
        ])?;
        ids.push(id);
    }

    csv.flush()?;
    Ok(ids)
}

/// Write `count` rentals pairing random generated customers and products.
///
/// Writes only the header when either ID list is empty.
pub fn generate_rentals<W: Write, R: Rng>(
    writer: W,
    rng: &mut R,
    count: usize,
    customer_ids: &[String],
    product_ids: &[String],
) -> Result<usize, GeneratorError> {
    let mut csv = csv_writer(writer, &RENTAL_HEADER)?;
    if customer_ids.is_empty() || product_ids.is_empty() {
        csv.flush()?;
        return Ok(0);
    }

    for index in 0..count {
        let customer_id = &customer_ids[rng.gen_range(0..customer_ids.len())];
        let product_id = &product_ids[rng.gen_range(0..product_ids.len())];
        csv.write_record([
            format!("R{:06}", index + 1).as_str(),
            customer_id.as_str(),
            product_id.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(count)
}

fn create(path: &Path) -> Result<File, GeneratorError> {
    File::create(path).map_err(|source| GeneratorError::Create {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate all three files in `directory` with `count` rows each.
pub fn generate_sample_files<R: Rng>(
    directory: &Path,
    count: usize,
    rng: &mut R,
) -> Result<SampleFiles, GeneratorError> {
    let product_file = directory.join("product_data.csv");
    let customer_file = directory.join("customer_data.csv");
    let rental_file = directory.join("rental_data.csv");

    log::info!("generating {} products", count);
    let product_ids = generate_products(create(&product_file)?, rng, count)?;
    log::info!("generating {} customers", count);
    let customer_ids = generate_customers(create(&customer_file)?, rng, count)?;
    log::info!("generating {} rentals", count);
    let rentals = generate_rentals(
        create(&rental_file)?,
        rng,
        count,
        &customer_ids,
        &product_ids,
    )?;

    Ok(SampleFiles {
        product_file,
        customer_file,
        rental_file,
        products: product_ids.len(),
        customers: customer_ids.len(),
        rentals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lines(bytes: &[u8]) -> Vec<String> {
        String::from_utf8(bytes.to_vec())
            .expect("utf-8 output")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn product_ids_are_unique_and_prefixed_by_type() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();
        let ids = generate_products(&mut out, &mut rng, 200).expect("generate");

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 200);

        for line in lines(&out).iter().skip(1) {
            let cells: Vec<_> = line.split(',').collect();
            let expected = if cells[4] == "Furniture" { 'F' } else { 'E' };
            assert!(cells[0].starts_with(expected), "{line}");
            let quantity: u32 = cells[9].parse().expect("numeric quantity");
            assert!(quantity <= 99);
        }
    }

    #[test]
    fn empty_data_set_still_has_headers() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();
        generate_customers(&mut out, &mut rng, 0).expect("generate");
        assert_eq!(
            lines(&out),
            ["customer_id,name,last_name,address,phone_number,email,status,credit_limit"]
        );
    }

    #[test]
    fn rentals_reference_known_ids() {
        let mut rng = StdRng::seed_from_u64(3);
        let customers = vec!["C000001".to_string(), "C000002".to_string()];
        let products = vec!["F000001".to_string()];
        let mut out = Vec::new();

        let written = generate_rentals(&mut out, &mut rng, 5, &customers, &products)
            .expect("generate");
        assert_eq!(written, 5);

        let rows = lines(&out);
        assert_eq!(rows[0], "rental_id,customer_id,product_id");
        assert_eq!(rows[1].split(',').next(), Some("R000001"));
        for row in &rows[1..] {
            let cells: Vec<_> = row.split(',').collect();
            assert!(customers.iter().any(|c| c == cells[1]));
            assert_eq!(cells[2], "F000001");
        }
    }

    #[test]
    fn same_seed_gives_same_output() {
        let render = || {
            let mut rng = StdRng::seed_from_u64(42);
            let mut out = Vec::new();
            generate_customers(&mut out, &mut rng, 10).expect("generate");
            out
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn oversized_request_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_products(Vec::new(), &mut rng, MAX_ROWS + 1).expect_err("too many");
        assert!(matches!(err, GeneratorError::TooManyRows { .. }));
    }
}
