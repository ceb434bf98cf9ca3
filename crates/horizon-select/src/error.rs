//! Error types for the selection widget.
//!
//! Interactive input never fails: gestures that make no sense in the current
//! state are ignored. Errors only arise at the edges where a host hands the
//! widget data: setting a value of the wrong shape, addressing an unmounted
//! instance, or loading a configuration.

use std::path::PathBuf;

use crate::option::OptionKey;
use crate::selection::SelectionMode;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Errors that can occur when driving a selection widget from a host.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// A value's shape does not match the widget's mode.
    #[error("Value shape mismatch: widget is {expected:?}, value is {found:?}")]
    ModeMismatch {
        expected: SelectionMode,
        found: SelectionMode,
    },

    /// The instance id does not refer to a mounted widget.
    #[error("No widget is mounted under this id")]
    UnknownInstance,

    /// A configured value key is not one of the configured options.
    #[error("Unknown option key {0}")]
    UnknownOptionKey(OptionKey),

    /// Configuration parsing error.
    #[error("Failed to parse {format} configuration: {message}")]
    ConfigParse {
        format: &'static str,
        message: String,
    },

    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file extension is not recognized.
    #[error("Unsupported configuration format for '{0}' (expected .toml or .json)")]
    UnsupportedConfigFormat(PathBuf),
}

impl SelectError {
    /// Create a mode mismatch error.
    pub fn mode_mismatch(expected: SelectionMode, found: SelectionMode) -> Self {
        Self::ModeMismatch { expected, found }
    }

    /// Create a configuration parse error.
    pub fn config_parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            format,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        let err = SelectError::mode_mismatch(SelectionMode::Single, SelectionMode::Multiple);
        assert_eq!(
            err.to_string(),
            "Value shape mismatch: widget is Single, value is Multiple"
        );

        let err = SelectError::UnknownOptionKey(OptionKey::from(9));
        assert_eq!(err.to_string(), "Unknown option key 9");
    }

    #[test]
    fn test_io_error_has_source() {
        let err = SelectError::io(
            "missing.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.toml"));
    }
}
