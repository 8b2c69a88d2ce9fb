use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid price: '{input}' is not a valid non-negative number")]
    InvalidPrice { input: String },

    #[error("Index {index} is out of range (menu has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown course: '{label}' (expected Starters, Mains or Desserts)")]
    UnknownCourse { label: String },

    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::InvalidPrice { .. }
            | MenuError::IndexOutOfRange { .. }
            | MenuError::UnknownCourse { .. }
            | MenuError::InvalidCommand { .. } => ErrorCategory::Input,
            MenuError::InvalidConfigValueError { .. }
            | MenuError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            MenuError::IoError(_) | MenuError::SerializationError(_) | MenuError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// 使用者輸入錯誤永遠可恢復，不會中斷工作階段
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => match self {
                MenuError::IoError(_) => ErrorSeverity::Critical,
                _ => ErrorSeverity::Medium,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MenuError::InvalidPrice { .. } => {
                "Enter the price as a plain number, for example 12.50".to_string()
            }
            MenuError::IndexOutOfRange { len, .. } => {
                if *len == 0 {
                    "The menu is empty, add a dish first".to_string()
                } else {
                    format!("Use an index between 0 and {}", len - 1)
                }
            }
            MenuError::UnknownCourse { .. } => {
                "Choose one of: Starters, Mains, Desserts".to_string()
            }
            MenuError::InvalidCommand { .. } => "Type 'help' to list commands".to_string(),
            MenuError::InvalidConfigValueError { field, .. }
            | MenuError::ConfigValidationError { field, .. } => {
                format!("Check the '{}' setting in your config file or flags", field)
            }
            MenuError::IoError(_) => "Check that the file exists and is readable".to_string(),
            MenuError::SerializationError(_) | MenuError::CsvError(_) => {
                "Retry the export; if it keeps failing report the dish that breaks it".to_string()
            }
        }
    }

    /// 給畫面顯示用的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            MenuError::InvalidPrice { .. } => "Please enter a valid price.".to_string(),
            MenuError::IndexOutOfRange { index, .. } => {
                format!("There is no dish at position {}.", index)
            }
            MenuError::UnknownCourse { label } => format!("'{}' is not a course.", label),
            MenuError::InvalidCommand { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = MenuError::InvalidPrice {
            input: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.user_friendly_message(), "Please enter a valid price.");
    }

    #[test]
    fn test_index_suggestion_mentions_bounds() {
        let err = MenuError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.recovery_suggestion(), "Use an index between 0 and 2");

        let empty = MenuError::IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(empty.recovery_suggestion(), "The menu is empty, add a dish first");
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = MenuError::ConfigValidationError {
            field: "display.price_decimals".to_string(),
            message: "too large".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
