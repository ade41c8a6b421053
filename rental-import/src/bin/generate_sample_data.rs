use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rental_import::generator::generate_sample_files;

#[derive(Parser, Debug)]
#[command(
    name = "generate_sample_data",
    about = "Write random product, customer and rental CSV files for the importer"
)]
struct Args {
    /// Directory to write the CSV files into (created if missing).
    #[arg(long, default_value = "data_files")]
    out: PathBuf,

    /// Rows to generate per file.
    #[arg(long, default_value_t = 1000)]
    count: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    std::fs::create_dir_all(&args.out)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let files = generate_sample_files(&args.out, args.count, &mut rng)?;

    println!(
        "Wrote {} products, {} customers and {} rentals to {}",
        files.products,
        files.customers,
        files.rentals,
        args.out.display()
    );
    Ok(())
}
