use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No data to process.")]
    NoData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl ValidateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidateError::IoError(_) | ValidateError::NoData => ErrorCategory::Input,
            ValidateError::CsvError(_) | ValidateError::SerializationError(_) => {
                ErrorCategory::Output
            }
            ValidateError::ConfigError { .. } | ValidateError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ValidateError::NoData => ErrorSeverity::High,
            ValidateError::ConfigError { .. } | ValidateError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            ValidateError::IoError(_)
            | ValidateError::CsvError(_)
            | ValidateError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ValidateError::NoData => {
                "Pipe or redirect at least one line of input, e.g. `amount_input < amount_input_infile`"
            }
            ValidateError::IoError(_) => "Check that the input stream is readable and stdout is not closed",
            ValidateError::CsvError(_) | ValidateError::SerializationError(_) => {
                "Retry with `--format text` to rule out a report encoding problem"
            }
            ValidateError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            ValidateError::InvalidConfigValueError { .. } => {
                "Fix the offending range in the config file; every range needs min <= max"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ValidateError::NoData => "No data to process.".to_string(),
            ValidateError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config value '{}' is not usable: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// 依嚴重程度決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_data_is_input_error_with_failure_exit() {
        let err = ValidateError::NoData;
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.user_friendly_message(), "No data to process.");
    }

    #[test]
    fn test_config_errors_map_to_medium_severity() {
        let err = ValidateError::InvalidConfigValueError {
            field: "main_menu.options".to_string(),
            value: "5..1".to_string(),
            reason: "min must not exceed max".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().contains("main_menu.options"));
    }

    #[test]
    fn test_io_error_converts_and_is_critical() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ValidateError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
