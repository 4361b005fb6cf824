use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON catalog error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV catalog error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error in {field}: {message}")]
    TomlError { field: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported catalog format: {path}")]
    UnsupportedFormatError { path: String },

    #[error("Unknown course: {id}")]
    UnknownCourseError { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Catalog,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::JsonError(_) | Self::CsvError(_) | Self::UnsupportedFormatError { .. } => {
                ErrorCategory::Catalog
            }
            Self::TomlError { .. } | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::UnknownCourseError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI; low severity still exits successfully.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read a required file: {}", e),
            Self::JsonError(_) | Self::CsvError(_) => {
                "The course catalog could not be parsed".to_string()
            }
            Self::TomlError { .. } => "The directory config file is not valid TOML".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::UnsupportedFormatError { path } => {
                format!("Don't know how to read catalog '{}'", path)
            }
            Self::UnknownCourseError { id } => format!("No course with id '{}'", id),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable",
            Self::JsonError(_) => "Check the catalog is a JSON array of {id, name, department, whatsappLink}",
            Self::CsvError(_) => "Check the CSV header is id,name,department,whatsappLink",
            Self::TomlError { .. } => "Fix the TOML syntax reported above",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the [[departments]] and [directory] sections of the config"
            }
            Self::UnsupportedFormatError { .. } => "Use a .json, .csv or .toml catalog file",
            Self::UnknownCourseError { .. } => "List the visible courses and use one of their ids",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_course_is_low_severity() {
        let err = DirectoryError::UnknownCourseError {
            id: "CS999".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.exit_code(), 0);
        assert!(err.user_friendly_message().contains("CS999"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: DirectoryError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }
}
