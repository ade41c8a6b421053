use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use rental_import::config::{ImportConfig, StoreConfig};
use rental_import::store::{DocumentStore, MongoStore, reset_collections};
use rental_import::{Importer, logging, show_available_products, show_rentals};
use std::error::Error;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rental-import",
    about = "Load HP Norton CSV data into MongoDB and query it"
)]
struct Args {
    /// Directory holding the CSV files.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Product file name inside the data directory.
    #[arg(long)]
    products: Option<String>,

    /// Customer file name inside the data directory.
    #[arg(long)]
    customers: Option<String>,

    /// Rental file name inside the data directory.
    #[arg(long)]
    rentals: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    database: Option<String>,

    /// Log file, truncated on every run.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Drop the three collections before importing. Not valid with queries.
    #[arg(long)]
    reset: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import the three CSV files (the default).
    Import,
    /// List products with stock available.
    Available,
    /// List customers renting a product.
    Rentals { product_id: String },
}

/// Parse the command line, rejecting `--reset` for the query commands.
fn parse_args<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    if args.reset
        && matches!(
            args.command,
            Some(Command::Available | Command::Rentals { .. })
        )
    {
        return Err(Args::command().error(
            ErrorKind::ArgumentConflict,
            "--reset only applies to the import command",
        ));
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());

    let mut import_config = ImportConfig::from_env();
    if let Some(dir) = args.dir {
        import_config.directory = dir;
    }
    if let Some(file) = args.products {
        import_config.product_file = file;
    }
    if let Some(file) = args.customers {
        import_config.customer_file = file;
    }
    if let Some(file) = args.rentals {
        import_config.rental_file = file;
    }
    if let Some(file) = args.log_file {
        import_config.log_file = file;
    }

    let mut store_config = StoreConfig::from_env();
    if let Some(host) = args.host {
        store_config.host = host;
    }
    if let Some(port) = args.port {
        store_config.port = port;
    }
    if let Some(database) = args.database {
        store_config.database = database;
    }

    logging::init(Some(&import_config.log_file))?;

    let command = args.command.unwrap_or(Command::Import);
    let result = connect_and_run(command, args.reset, &import_config, &store_config);
    if let Err(err) = &result {
        log::error!("{}", err);
    }
    log::logger().flush();
    result
}

fn connect_and_run(
    command: Command,
    reset: bool,
    import_config: &ImportConfig,
    store_config: &StoreConfig,
) -> Result<(), Box<dyn Error>> {
    let mongo = MongoStore::connect(store_config)?;
    let mut stdout = io::stdout().lock();
    run(command, reset, &mongo, import_config, &mut stdout)
}

fn run(
    command: Command,
    reset: bool,
    store: &dyn DocumentStore,
    import_config: &ImportConfig,
    out: &mut dyn Write,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Import => {
            if reset {
                reset_collections(store)?;
            }
            let outcome = Importer::new(store, log::logger()).import_data(
                &import_config.directory,
                &import_config.product_file,
                &import_config.customer_file,
                &import_config.rental_file,
            )?;
            writeln!(out, "{}", outcome.counts_tuple())?;
            writeln!(out, "{}", outcome.errors_tuple())?;
        }
        Command::Available => {
            for product in show_available_products(store)? {
                writeln!(out, "{}", serde_json::to_string(&product)?)?;
            }
        }
        Command::Rentals { product_id } => {
            for customer in show_rentals(store, &product_id)? {
                writeln!(out, "{}", serde_json::to_string(&customer)?)?;
            }
        }
    }
    Ok(())
}
