use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Render target not found: #{id}")]
    TargetNotFound { id: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Delayed task failed: {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),

    #[error("Invalid state: expected {expected}, found {actual}")]
    InvalidState { expected: String, actual: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Render,
    Runtime,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::TargetNotFound { .. } | PageError::RenderError { .. } => {
                ErrorCategory::Render
            }
            PageError::TaskJoinError(_) | PageError::InvalidState { .. } => ErrorCategory::Runtime,
            PageError::IoError(_) | PageError::SerializationError(_) => ErrorCategory::Io,
            PageError::ConfigError { .. }
            | PageError::ConfigValidationError { .. }
            | PageError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PageError::InvalidState { .. } => ErrorSeverity::Medium,
            PageError::TargetNotFound { .. }
            | PageError::RenderError { .. }
            | PageError::ConfigError { .. }
            | PageError::ConfigValidationError { .. }
            | PageError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            PageError::TaskJoinError(_)
            | PageError::IoError(_)
            | PageError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PageError::TargetNotFound { id } => {
                format!("Make sure the document declares a container with id '{}'", id)
            }
            PageError::RenderError { .. } => {
                "A previous render panicked while holding a container; restart the page".to_string()
            }
            PageError::TaskJoinError(_) => {
                "A delayed label task panicked or was cancelled; check the logs above".to_string()
            }
            PageError::InvalidState { .. } => {
                "The page-ready signal fires once per process; create a new bootstrap".to_string()
            }
            PageError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            PageError::SerializationError(_) => {
                "The snapshot could not be serialized; report this as a bug".to_string()
            }
            PageError::ConfigError { .. } | PageError::ConfigValidationError { .. } => {
                "Check the configuration file syntax and values".to_string()
            }
            PageError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PageError::TargetNotFound { id } => format!("Container '#{}' does not exist", id),
            PageError::InvalidState { .. } => "The page has already been loaded".to_string(),
            PageError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            PageError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration ({}): {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    /// Process exit code for a failed run, by severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_not_found_is_a_render_error() {
        let err = PageError::TargetNotFound {
            id: "container".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Render);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "Render target not found: #container");
        assert!(err.recovery_suggestion().contains("'container'"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let invalid = PageError::InvalidConfigValueError {
            field: "generator.ids".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        let unparsable = PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "expected `=`".to_string(),
        };

        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(unparsable.category(), ErrorCategory::Configuration);
        assert_eq!(
            invalid.user_friendly_message(),
            "Invalid configuration (generator.ids): Value must be at least 1"
        );
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = PageError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.severity() > ErrorSeverity::High);
    }

    #[test]
    fn test_exit_code_follows_severity() {
        let missing_file = PageError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        ));
        let bad_toml = PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: "TOML parsing error".to_string(),
        };
        let reloaded = PageError::InvalidState {
            expected: "idle".to_string(),
            actual: "done".to_string(),
        };

        assert_eq!(missing_file.exit_code(), 3);
        assert_eq!(bad_toml.exit_code(), 1);
        assert_eq!(reloaded.exit_code(), 2);
    }
}
