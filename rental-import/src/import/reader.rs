//! Header-driven CSV reading.

use crate::error::ImportError;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A fully read CSV file: its header plus every data row in file order.
#[derive(Debug)]
pub struct CsvTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

/// One data row viewed through the table header.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl CsvTable {
    /// Read a comma-delimited, UTF-8 file whose first line is the header.
    pub fn read(path: &Path) -> Result<Self, ImportError> {
        let file = File::open(path).map_err(|err| ImportError::io(path, err))?;
        Self::from_reader(path, BufReader::new(file))
    }

    /// Read CSV text from any reader; `path` is only used in error messages.
    pub fn from_reader<R: Read>(path: &Path, reader: R) -> Result<Self, ImportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            // Short rows surface as row shape errors instead of parse errors.
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|err| ImportError::csv(path, err))?
            .clone();

        let mut records = Vec::new();
        for result in reader.records() {
            records.push(result.map_err(|err| ImportError::csv(path, err))?);
        }

        Ok(Self { headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First of `expected` that the header does not contain.
    pub fn missing_field(&self, expected: &[&'static str]) -> Option<&'static str> {
        expected
            .iter()
            .copied()
            .find(|field| !self.headers.iter().any(|header| header == *field))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.records.iter().map(|record| Row {
            headers: &self.headers,
            record,
        })
    }
}

impl<'a> Row<'a> {
    /// Cell under the named header column, if the header and this row both have it.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        let index = self.headers.iter().position(|header| header == field)?;
        self.record.get(index)
    }

    /// 1-based line number of the row in its file.
    pub fn line(&self) -> u64 {
        self.record.position().map(|pos| pos.line()).unwrap_or(0)
    }
}
