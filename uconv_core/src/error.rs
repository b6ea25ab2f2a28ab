//! Error types for the uconv_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown for failures that are not conversion errors
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message shown when the caller picked a category/conversion the catalog lacks
pub const INVALID_SELECTION_MESSAGE: &str = "Please select a valid conversion.";

/// Core error type for uconv_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry validation error
    #[error("Registry validation error: {0}")]
    RegistryValidation(String),

    /// A single conversion call failed
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl Error {
    /// Text suitable for showing to a user.
    ///
    /// Conversion errors carry their own message; anything else is reported
    /// generically and its details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            Error::Convert(e) => e.user_message(),
            other => {
                tracing::error!("Unexpected failure: {}", other);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// How loudly a front end should report this error
    pub fn severity(&self) -> Severity {
        match self {
            Error::Convert(e) => e.severity(),
            _ => Severity::Error,
        }
    }
}

/// Errors from one `convert`/lookup call. Always recoverable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Value field was blank
    #[error("Empty input.")]
    EmptyInput,

    /// Value field was not a number
    #[error("Could not convert '{0}' to a number.")]
    Parse(String),

    /// Value failed a category-specific sanity rule
    #[error("{0}")]
    Domain(String),

    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    #[error("Unknown conversion '{label}' in category '{category}'")]
    UnknownConversion { category: String, label: String },
}

/// Presentation hint for an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Bad user input; show the message and let the user retry
    Warning,
    /// Bad selection or internal failure
    Error,
}

impl ConvertError {
    pub fn severity(&self) -> Severity {
        match self {
            ConvertError::EmptyInput | ConvertError::Parse(_) | ConvertError::Domain(_) => {
                Severity::Warning
            }
            ConvertError::UnknownCategory(_) | ConvertError::UnknownConversion { .. } => {
                Severity::Error
            }
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ConvertError::UnknownCategory(_) | ConvertError::UnknownConversion { .. } => {
                INVALID_SELECTION_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_warnings() {
        assert_eq!(ConvertError::EmptyInput.severity(), Severity::Warning);
        assert_eq!(
            ConvertError::Parse("abc".into()).severity(),
            Severity::Warning
        );
        assert_eq!(
            ConvertError::Domain("Kelvin cannot be negative.".into()).severity(),
            Severity::Warning
        );
    }

    #[test]
    fn test_selection_errors_use_generic_text() {
        let err = ConvertError::UnknownConversion {
            category: "Weight".into(),
            label: "stone → kg".into(),
        };
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.user_message(), INVALID_SELECTION_MESSAGE);
        assert_eq!(
            ConvertError::UnknownCategory("Volume".into()).user_message(),
            INVALID_SELECTION_MESSAGE
        );
    }

    #[test]
    fn test_domain_message_passes_through() {
        let err: Error = ConvertError::Domain("Time values cannot be negative.".into()).into();
        assert_eq!(err.user_message(), "Time values cannot be negative.");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_non_conversion_errors_hide_details() {
        let err = Error::Config("bad key".into());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(err.severity(), Severity::Error);
    }
}
