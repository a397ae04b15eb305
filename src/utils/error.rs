use std::fmt;
use thiserror::Error;

/// 觸發越界錯誤的容器操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    Update,
    Get,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Update => "update",
            Operation::Get => "get",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{operation}: index {index} out of range for length {len}")]
    OutOfRange {
        operation: Operation,
        index: usize,
        len: usize,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::OutOfRange { .. } => ErrorSeverity::Medium,
            CatalogError::ConfigParseError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::ValidationError { .. } => ErrorSeverity::High,
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                ErrorSeverity::High
            }
            CatalogError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::OutOfRange { index, len, .. } if *len == 0 => {
                format!("Position {} does not exist: the collection is empty", index)
            }
            CatalogError::OutOfRange { index, len, .. } => {
                format!(
                    "Position {} does not exist: valid positions are 0..{}",
                    index,
                    len - 1
                )
            }
            CatalogError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::OutOfRange { .. } => "Run the `list` command to see the valid positions",
            CatalogError::IoError(_) => "Check that the catalog file exists and is readable",
            CatalogError::ConfigParseError { .. } => "Make sure the catalog file is valid TOML",
            CatalogError::InvalidConfigValueError { .. } | CatalogError::ValidationError { .. } => {
                "Fix the reported field in the catalog file"
            }
            CatalogError::SerializationError(_) | CatalogError::CsvError(_) => {
                "Try a different --format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
