use thiserror::Error;

pub const NO_BIKES_AVAILABLE: &str = "Sorry. There are no bikes available.";

#[derive(Error, Debug)]
pub enum StationError {
    #[error("Sorry. There are no bikes available.")]
    Unavailable,

    #[error("Unknown command '{input}'")]
    InvalidCommand { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Availability,
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

impl StationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StationError::Unavailable => ErrorCategory::Availability,
            StationError::InvalidCommand { .. } => ErrorCategory::Input,
            StationError::ConfigValidationError { .. }
            | StationError::InvalidConfigValueError { .. }
            | StationError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StationError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Availability => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StationError::Unavailable => "Dock a bike or try another station",
            StationError::InvalidCommand { .. } => {
                "Use one of: release, dock, dock:broken, see, check, break"
            }
            StationError::IoError(_) => "Check that the file exists and is readable",
            StationError::ConfigValidationError { .. } => "Make sure the file is valid TOML",
            StationError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the configuration"
            }
            StationError::MissingConfigError { .. } => "Add the missing field to the configuration",
        }
    }

    /// Process exit code for an error that ends the CLI run. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
            ErrorSeverity::Low => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StationError::Unavailable => NO_BIKES_AVAILABLE.to_string(),
            StationError::IoError(e) => format!("Could not read a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StationError>;
