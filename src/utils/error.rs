use crate::domain::model::ModuleCandidate;
use thiserror::Error;

/// 模組標頭的標準寫法，作為錯誤提示的範例
pub const EXPECTED_MODULE_SHAPE: &str = "module serialTX #
    (
    parameter INCR = 26'd25770
    )
    (
    input clk,
    input reset,
    input [7:0] data,
    input send,
    output reg txOut,
    output busy
    );";

#[derive(Error, Debug)]
pub enum IoListError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("The module file '{path}' could not be located")]
    NoSuchFile { path: String },

    #[error("The module file '{path}' could not be read: {reason}")]
    FileReadError { path: String, reason: String },

    #[error("The module name could not be identified ({} candidate(s) found)", .candidates.len())]
    ModuleNameNotIdentified { candidates: Vec<ModuleCandidate> },

    #[error("Module '{module}' has an incomplete interface: {missing}")]
    IncompleteInterface { module: String, missing: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Extraction,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IoListError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IoListError::NoSuchFile { .. } | IoListError::FileReadError { .. } => {
                ErrorCategory::Input
            }
            IoListError::ModuleNameNotIdentified { .. }
            | IoListError::IncompleteInterface { .. } => ErrorCategory::Extraction,
            IoListError::IoError(_)
            | IoListError::CsvError(_)
            | IoListError::SerializationError(_) => ErrorCategory::Output,
            IoListError::ConfigValidationError { .. }
            | IoListError::InvalidConfigValueError { .. }
            | IoListError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IoListError::IncompleteInterface { .. } => ErrorSeverity::Medium,
            IoListError::NoSuchFile { .. }
            | IoListError::FileReadError { .. }
            | IoListError::ModuleNameNotIdentified { .. }
            | IoListError::ConfigValidationError { .. }
            | IoListError::InvalidConfigValueError { .. }
            | IoListError::MissingConfigError { .. } => ErrorSeverity::High,
            IoListError::IoError(_)
            | IoListError::CsvError(_)
            | IoListError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            IoListError::NoSuchFile { path } => format!(
                "The module file '{}' could not be located - double-check the name or file path.",
                path
            ),
            IoListError::FileReadError { path, .. } => {
                format!("The module file '{}' could not be read in successfully.", path)
            }
            IoListError::ModuleNameNotIdentified { candidates } if candidates.is_empty() => {
                "The module name could not be identified: no module header was found.".to_string()
            }
            IoListError::ModuleNameNotIdentified { candidates } => {
                let names: Vec<String> = candidates
                    .iter()
                    .map(|c| format!("'{}' at byte {}", c.name, c.span.0))
                    .collect();
                format!(
                    "The module name could not be identified: found {} module headers ({}).",
                    candidates.len(),
                    names.join(", ")
                )
            }
            IoListError::IncompleteInterface { module, missing } => {
                format!("No module {} were identified for '{}'.", missing, module)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IoListError::NoSuchFile { .. } => {
                "Check the path given to --filename".to_string()
            }
            IoListError::FileReadError { .. } => {
                "Make sure the file is readable and UTF-8 encoded".to_string()
            }
            IoListError::ModuleNameNotIdentified { .. } => format!(
                "Use exactly one conventional module header per file, for example:\n{}",
                EXPECTED_MODULE_SHAPE
            ),
            IoListError::IncompleteInterface { .. } => {
                "Check the port declarations, or run without --strict to accept one-sided interfaces"
                    .to_string()
            }
            IoListError::ConfigValidationError { .. }
            | IoListError::InvalidConfigValueError { .. }
            | IoListError::MissingConfigError { .. } => {
                "Review the command-line flags and the configuration file".to_string()
            }
            IoListError::IoError(_) | IoListError::CsvError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            IoListError::SerializationError(_) => "Retry with --format csv".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IoListError>;
