use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing input: {message}")]
    MissingInputError { message: String },

    #[error("Failed to decode '{source_name}': {message}")]
    DecodeError { source_name: String, message: String },

    #[error("Unsupported format '{format}': {reason}")]
    UnsupportedFormatError { format: String, reason: String },

    #[error("Rendering error ({format}): {message}")]
    RenderError { format: String, message: String },

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
    Input,
    Configuration,
    Decoding,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TimetableError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TimetableError::MissingInputError { .. } => ErrorCategory::Input,
            TimetableError::DecodeError { .. } | TimetableError::UnsupportedFormatError { .. } => {
                ErrorCategory::Decoding
            }
            TimetableError::RenderError { .. }
            | TimetableError::ZipError(_)
            | TimetableError::CsvError(_)
            | TimetableError::SerializationError(_) => ErrorCategory::Rendering,
            TimetableError::ConfigError { .. }
            | TimetableError::ConfigValidationError { .. }
            | TimetableError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TimetableError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Decoding => ErrorSeverity::Medium,
            ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TimetableError::MissingInputError { .. } => {
                "Pass the timetable file with --input and make sure it exists"
            }
            TimetableError::DecodeError { .. } => {
                "Check that the input is a UTF-8 text file or a text-based PDF"
            }
            TimetableError::UnsupportedFormatError { .. } => {
                "Use one of the supported formats, or rebuild with the `pdf` feature for PDF files"
            }
            TimetableError::RenderError { .. }
            | TimetableError::CsvError(_)
            | TimetableError::SerializationError(_)
            | TimetableError::ZipError(_) => "Retry with a different output format",
            TimetableError::ConfigError { .. }
            | TimetableError::ConfigValidationError { .. }
            | TimetableError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or the TOML configuration file"
            }
            TimetableError::IoError(_) => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TimetableError::MissingInputError { message } => {
                format!("No timetable document to process: {}", message)
            }
            TimetableError::DecodeError { source_name, .. } => {
                format!("Could not read text from '{}'", source_name)
            }
            TimetableError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;
