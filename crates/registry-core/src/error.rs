//! Error types for the component registry

use std::{error::Error as StdError, fmt};

/// Main error type for the component registry
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Manifest validation error
    InvalidManifest {
        /// Item or field that failed validation
        item: String,
        /// Validation error message
        message: String,
    },

    /// Component lookup miss
    ComponentNotFound {
        /// Requested component name
        name: String,
    },

    /// File read failure during resolution
    FileRead {
        /// Logical file name from the manifest
        file: String,
        /// Underlying failure
        message: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::InvalidManifest { item, message } => {
                write!(f, "Invalid manifest: {item} - {message}")
            }
            Self::ComponentNotFound { name } => write!(f, "Component not found: {name}"),
            Self::FileRead { file, message } => {
                write!(f, "Failed to read file {file}: {message}")
            }
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{app_error}").contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Missing manifest path".to_string(),
        };

        assert_eq!(
            format!("{error}"),
            "Configuration error: Missing manifest path"
        );
    }

    #[test]
    fn test_invalid_manifest_error() {
        let error = Error::InvalidManifest {
            item: "button".to_string(),
            message: "no files listed".to_string(),
        };

        assert_eq!(format!("{error}"), "Invalid manifest: button - no files listed");
    }

    #[test]
    fn test_component_not_found_error() {
        let error = Error::ComponentNotFound {
            name: "sidebar".to_string(),
        };

        assert_eq!(format!("{error}"), "Component not found: sidebar");
    }

    #[test]
    fn test_file_read_error() {
        let error = Error::FileRead {
            file: "button.tsx".to_string(),
            message: "No such file or directory".to_string(),
        };

        let msg = format!("{error}");
        assert!(msg.contains("button.tsx"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_error_chain_for_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let app_error = Error::from(io_error);

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_error_source_for_plain_variants() {
        let error = Error::ComponentNotFound {
            name: "card".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Other("unexpected".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<&'static str> {
            Ok("success")
        }

        fn returns_error() -> Result<&'static str> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
