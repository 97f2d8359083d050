pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::csv_source::CsvSource;
pub use config::{CatalogConfig, OutputFormat};
pub use crate::core::{catalog::ItemCatalog, pagination::Page};
pub use domain::model::{Condition, ConditionPercentages, EmptyScopePolicy, NameMatch, Record, Scope};
pub use domain::ports::RecordSource;
pub use utils::error::{CatalogError, Result};
