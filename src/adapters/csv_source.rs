use crate::domain::model::{Record, REQUIRED_FIELDS};
use crate::domain::ports::RecordSource;
use crate::utils::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Reads records from a delimited text file whose first row names the fields.
///
/// Decoding is permissive about row width: a short row yields a record with
/// only the leading fields it has, and cells past the header are dropped.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
    required_fields: Vec<String>,
}

impl CsvSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
            required_fields: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_required_fields(mut self, fields: Vec<String>) -> Self {
        self.required_fields = fields;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::SourceNotFound {
                path: self.path.display().to_string(),
            },
            _ => CatalogError::IoError(e),
        })
    }

    /// Decodes records from any reader using this source's dialect.
    pub fn read_from<R: Read>(&self, input: R) -> Result<Vec<Record>> {
        self.read_table_from(input).map(|(_, records)| records)
    }

    /// Like `read_from`, also returning the header row as column names.
    pub fn read_table_from<R: Read>(&self, input: R) -> Result<(Vec<String>, Vec<Record>)> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(input);

        let headers = reader.headers()?.clone();
        for required in &self.required_fields {
            if !headers.iter().any(|h| h == required) {
                return Err(CatalogError::MissingColumnError {
                    column: required.clone(),
                    path: self.path.display().to_string(),
                });
            }
        }

        let mut records: Vec<Record> = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.len() != headers.len() {
                tracing::debug!(
                    "Row {} has {} cells, header has {}",
                    records.len() + 1,
                    row.len(),
                    headers.len()
                );
            }
            records.push(headers.iter().zip(row.iter()).collect());
        }

        let columns = headers.iter().map(|h| h.to_string()).collect();
        Ok((columns, records))
    }
}

impl RecordSource for CsvSource {
    fn load(&self) -> Result<Vec<Record>> {
        self.load_with_columns().map(|(_, records)| records)
    }

    fn load_with_columns(&self) -> Result<(Vec<String>, Vec<Record>)> {
        let file = self.open()?;
        let (columns, records) = self.read_table_from(BufReader::new(file))?;
        tracing::info!("Loaded {} records from {}", records.len(), self.describe());
        Ok((columns, records))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
