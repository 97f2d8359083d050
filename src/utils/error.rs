use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Source not found: {path}")]
    SourceNotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV format error{}: {message}", at_line(.line))]
    FormatError { line: Option<u64>, message: String },

    #[error("Missing required column '{column}' in {path}")]
    MissingColumnError { column: String, path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid page request: size {size}, page {number} (both must be at least 1)")]
    InvalidPageRequest { size: usize, number: usize },

    #[error("Cannot compute condition percentages over an empty catalog")]
    EmptyScopeError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Format,
    Config,
    Query,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line());
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CatalogError::IoError(io),
            _ => CatalogError::FormatError { line, message },
        }
    }
}

fn at_line(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::SourceNotFound { .. } | CatalogError::IoError(_) => ErrorCategory::Source,
            CatalogError::FormatError { .. } | CatalogError::MissingColumnError { .. } => {
                ErrorCategory::Format
            }
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            CatalogError::InvalidPageRequest { .. } | CatalogError::EmptyScopeError => {
                ErrorCategory::Query
            }
            CatalogError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::EmptyScopeError | CatalogError::InvalidPageRequest { .. } => {
                ErrorSeverity::Medium
            }
            CatalogError::SourceNotFound { .. }
            | CatalogError::FormatError { .. }
            | CatalogError::MissingColumnError { .. }
            | CatalogError::ConfigError { .. }
            | CatalogError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CatalogError::IoError(_) | CatalogError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CatalogError::SourceNotFound { path } => {
                format!("Check that '{}' exists or pass --source <file>", path)
            }
            CatalogError::IoError(_) => "Check file permissions and disk health".to_string(),
            CatalogError::FormatError { .. } => {
                "Make sure the file is UTF-8 delimited text and the --delimiter matches".to_string()
            }
            CatalogError::MissingColumnError { column, .. } => {
                format!("Add a '{}' column to the header row", column)
            }
            CatalogError::SerializationError(_) => "Try --format table instead".to_string(),
            CatalogError::ConfigError { .. } | CatalogError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            CatalogError::InvalidPageRequest { .. } => {
                "Use --size and --number values of 1 or more".to_string()
            }
            CatalogError::EmptyScopeError => {
                "Load a source with at least one item, or set query.empty_scope = \"empty\""
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Source => format!("Could not read the item source: {}", self),
            ErrorCategory::Format => format!("The item source is malformed: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Query => self.to_string(),
            ErrorCategory::Output => format!("Could not render output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
