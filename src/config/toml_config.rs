use crate::adapters::csv_source::CsvSource;
use crate::core::catalog::ItemCatalog;
use crate::domain::model::{EmptyScopePolicy, NameMatch, REQUIRED_FIELDS};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub source: SourceConfig,
    pub query: QueryConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub path: String,
    pub delimiter: String,
    pub required_fields: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: "items.csv".to_string(),
            delimiter: ",".to_string(),
            required_fields: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub name_match: NameMatch,
    pub empty_scope: EmptyScopePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub page_size: usize,
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            format: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl CatalogConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::ConfigError {
                message: format!("config file not found: {}", path.as_ref().display()),
            },
            _ => CatalogError::IoError(e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_delimiter("source.delimiter", &self.source.delimiter)?;
        validation::validate_non_empty_strings(
            "source.required_fields",
            &self.source.required_fields,
        )?;
        validation::validate_positive_number("display.page_size", self.display.page_size, 1)?;
        Ok(())
    }

    pub fn csv_source(&self) -> Result<CsvSource> {
        let delimiter = validation::validate_delimiter("source.delimiter", &self.source.delimiter)?;
        Ok(CsvSource::new(&self.source.path)
            .with_delimiter(delimiter)
            .with_required_fields(self.source.required_fields.clone()))
    }

    /// Load the configured source and apply the configured query policies.
    pub fn load_catalog(&self) -> Result<ItemCatalog> {
        let catalog = ItemCatalog::load(&self.csv_source()?)?;
        Ok(catalog
            .with_name_match(self.query.name_match)
            .with_empty_scope_policy(self.query.empty_scope))
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
