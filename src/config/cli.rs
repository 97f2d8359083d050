use crate::config::toml_config::{CatalogConfig, OutputFormat};
use crate::domain::model::{EmptyScopePolicy, NameMatch};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "survivor-items")]
#[command(about = "Look up, search, page through and summarize inventory items from a CSV file")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Item source file (overrides source.path)
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Field delimiter, a single character (overrides source.delimiter)
    #[arg(long, global = true)]
    pub delimiter: Option<String>,

    /// Name matching mode for search and condition filtering
    #[arg(long = "match", value_enum, global = true)]
    pub name_match: Option<NameMatch>,

    /// What `conditions` does over an empty source
    #[arg(long, value_enum, global = true)]
    pub empty_scope: Option<EmptyScopePolicy>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the item with the given ID.
    Get {
        id: String,
        /// Show every item carrying this ID instead of the first one
        #[arg(long)]
        all: bool,
    },
    /// Find items by name, ignoring case.
    Search { name: String },
    /// Show one page of items in source order.
    Page {
        /// Items per page (overrides display.page_size)
        #[arg(long)]
        size: Option<usize>,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        number: usize,
    },
    /// Show items whose FIELD equals VALUE, ignoring case.
    Filter { field: String, value: String },
    /// Show the share of items in each condition.
    Conditions {
        /// Only count items matching this name
        #[arg(long)]
        name: Option<String>,
    },
}

impl CliConfig {
    /// Defaults, then the TOML file if given, then flags.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                CatalogConfig::from_file(path)?
            }
            None => CatalogConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source.path = source.clone();
        }
        if let Some(delimiter) = &self.delimiter {
            config.source.delimiter = delimiter.clone();
        }
        if let Some(name_match) = self.name_match {
            config.query.name_match = name_match;
        }
        if let Some(empty_scope) = self.empty_scope {
            config.query.empty_scope = empty_scope;
        }
        if let Some(format) = self.format {
            config.display.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = CliConfig::try_parse_from(["survivor-items", "get", "7", "--all"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Get {
                id: "7".to_string(),
                all: true
            }
        );

        let cli = CliConfig::try_parse_from(["survivor-items", "page", "--size", "2", "--number", "3"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Page {
                size: Some(2),
                number: 3
            }
        );

        let cli = CliConfig::try_parse_from(["survivor-items", "conditions"]).unwrap();
        assert_eq!(cli.command, Command::Conditions { name: None });
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::try_parse_from([
            "survivor-items",
            "search",
            "nails",
            "--source",
            "stock.tsv",
            "--delimiter",
            "\t",
            "--match",
            "substring",
            "--format",
            "json",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.source.path, "stock.tsv");
        assert_eq!(config.source.delimiter, "\t");
        assert_eq!(config.query.name_match, NameMatch::Substring);
        assert_eq!(config.query.empty_scope, EmptyScopePolicy::Fail);
        assert_eq!(config.display.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_rejects_invalid_delimiter() {
        let cli =
            CliConfig::try_parse_from(["survivor-items", "conditions", "--delimiter", ";;"]).unwrap();
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_unknown_match_mode_is_rejected() {
        assert!(CliConfig::try_parse_from(["survivor-items", "search", "x", "--match", "fuzzy"]).is_err());
    }
}
