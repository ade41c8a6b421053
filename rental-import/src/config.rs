//! Run settings read from the environment.
//!
//! Unset or unparsable variables fall back to the documented defaults; flags
//! given on the command line are applied on top by the binary.

use crate::models::DEFAULT_DATABASE;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parsed_var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Where the MongoDB server lives and which database to use.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    /// Bound on server selection and connection establishment.
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            host: var_or("MONGO_HOST", "127.0.0.1"),
            port: parsed_var_or("MONGO_PORT", 27017),
            database: var_or("MONGO_DATABASE", DEFAULT_DATABASE),
            timeout: Duration::from_millis(parsed_var_or("MONGO_TIMEOUT_MS", 5_000)),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection string for a single, directly addressed server.
    pub fn uri(&self) -> String {
        let millis = self.timeout.as_millis();
        format!(
            "mongodb://{address}/?directConnection=true\
             &serverSelectionTimeoutMS={millis}&connectTimeoutMS={millis}",
            address = self.address()
        )
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Input locations for an import run plus the log file it writes.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub directory: PathBuf,
    pub product_file: String,
    pub customer_file: String,
    pub rental_file: String,
    pub log_file: PathBuf,
}

impl ImportConfig {
    pub fn from_env() -> Self {
        Self {
            directory: PathBuf::from(var_or("IMPORT_DATA_DIR", "data_files")),
            product_file: var_or("IMPORT_PRODUCT_FILE", "product_data.csv"),
            customer_file: var_or("IMPORT_CUSTOMER_FILE", "customer_data.csv"),
            rental_file: var_or("IMPORT_RENTAL_FILE", "rental_data.csv"),
            log_file: PathBuf::from(var_or("IMPORT_LOG_FILE", "rental_import.log")),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_targets_single_server_with_timeouts() {
        let config = StoreConfig {
            host: "127.0.0.1".into(),
            port: 27017,
            database: DEFAULT_DATABASE.into(),
            timeout: Duration::from_millis(2_500),
        };

        assert_eq!(config.address(), "127.0.0.1:27017");
        assert_eq!(
            config.uri(),
            "mongodb://127.0.0.1:27017/?directConnection=true\
             &serverSelectionTimeoutMS=2500&connectTimeoutMS=2500"
        );
    }

    #[test]
    fn unparsable_port_falls_back_to_default() {
        // Keys are unique to each test so parallel tests never observe them.
        unsafe { env::set_var("RENTAL_IMPORT_TEST_BAD_PORT", "not-a-port") };
        assert_eq!(parsed_var_or("RENTAL_IMPORT_TEST_BAD_PORT", 27017u16), 27017);
        unsafe { env::remove_var("RENTAL_IMPORT_TEST_BAD_PORT") };
    }

    #[test]
    fn padded_number_is_parsed() {
        unsafe { env::set_var("RENTAL_IMPORT_TEST_TIMEOUT", " 750 ") };
        assert_eq!(parsed_var_or("RENTAL_IMPORT_TEST_TIMEOUT", 5_000u64), 750);
        unsafe { env::remove_var("RENTAL_IMPORT_TEST_TIMEOUT") };
    }

    #[test]
    fn empty_value_uses_default() {
        unsafe { env::set_var("RENTAL_IMPORT_TEST_EMPTY_HOST", "") };
        assert_eq!(var_or("RENTAL_IMPORT_TEST_EMPTY_HOST", "127.0.0.1"), "127.0.0.1");
        unsafe { env::remove_var("RENTAL_IMPORT_TEST_EMPTY_HOST") };
    }
}
