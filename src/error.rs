//! Error types for the slidedeck library
//!
//! Parsing never fails; errors come only from lookups, storage access,
//! configuration loading and the JSON projection.

use thiserror::Error;

/// Lookup errors against an in-memory deck
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum DeckError {
    /// No slide with the requested id
    #[error("Slide not found: {0}")]
    SlideNotFound(String),

    /// No section with the requested id
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// A string that names no value of an enumerated type
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: String, value: String },
}

impl DeckError {
    pub fn slide_not_found(id: impl Into<String>) -> Self {
        Self::SlideNotFound(id.into())
    }

    pub fn section_not_found(id: impl Into<String>) -> Self {
        Self::SectionNotFound(id.into())
    }

    pub fn unknown_value(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Result type for deck lookups
pub type DeckResult<T> = Result<T, DeckError>;

/// Failures of the caller-supplied storage
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum StorageError {
    /// The provider had nothing readable at the path
    #[error("Failed to read {path}")]
    ReadFailed { path: String },

    /// The provider refused the write
    #[error("Failed to write {path}")]
    WriteFailed { path: String },
}

impl StorageError {
    pub fn read_failed(path: impl Into<String>) -> Self {
        Self::ReadFailed { path: path.into() }
    }

    pub fn write_failed(path: impl Into<String>) -> Self {
        Self::WriteFailed { path: path.into() }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Rendering errors for the structured output formats
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum SerializationError {
    /// JSON encoding failed
    #[error("JSON serialization failed: {0}")]
    JsonFailed(String),

    /// Unknown output format name
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl SerializationError {
    pub fn json_failed(reason: impl Into<String>) -> Self {
        Self::JsonFailed(reason.into())
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_failed(err.to_string())
    }
}

/// Result type for serialization operations
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Codec configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum ConfigError {
    /// The TOML source could not be parsed
    #[error("Failed to parse config: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::ParseFailed(err.to_string())
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Main unified error type that can represent any slidedeck error
#[derive(Debug, Clone, PartialEq, Eq, Error, uniffi::Error)]
pub enum SlidedeckError {
    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for slidedeck operations
pub type SlidedeckResult<T> = Result<T, SlidedeckError>;
