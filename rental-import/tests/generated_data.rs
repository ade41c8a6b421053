use rand::SeedableRng;
use rand::rngs::StdRng;
use rental_import::generator::generate_sample_files;
use rental_import::{MemoryStore, import_data, show_available_products};

#[test]
fn generated_files_import_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rng = StdRng::seed_from_u64(2024);

    let files = generate_sample_files(dir.path(), 250, &mut rng).expect("generate");
    assert_eq!((files.products, files.customers, files.rentals), (250, 250, 250));

    let store = MemoryStore::new();
    let outcome = import_data(
        &store,
        dir.path(),
        "product_data.csv",
        "customer_data.csv",
        "rental_data.csv",
    )
    .expect("generated data is well formed");

    assert_eq!(outcome.counts(), [250, 250, 250]);
    assert!(outcome.is_clean());

    let available = show_available_products(&store).expect("query succeeds");
    assert!(available.iter().all(|p| p.quantity().is_some_and(|q| q > 0)));
}

#[test]
fn empty_generated_set_imports_as_zero_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut rng = StdRng::seed_from_u64(5);
    generate_sample_files(dir.path(), 0, &mut rng).expect("generate");

    let store = MemoryStore::new();
    let outcome = import_data(
        &store,
        dir.path(),
        "product_data.csv",
        "customer_data.csv",
        "rental_data.csv",
    )
    .expect("header-only files import");

    assert_eq!(outcome.counts(), [0, 0, 0]);
}
