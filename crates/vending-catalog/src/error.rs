//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / shape problem                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← adds the path or the offending entry     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StartupError (in kiosk) ← startup stops, nothing is defaulted         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Anything that stops a catalog from becoming an inventory.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but does not describe a valid inventory.
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] MalformedCatalog),
}

/// Shape and content problems in an otherwise well-formed document.
///
/// `entry` is the selection key (mapping form), the entry's name, or
/// `#<index>` when a sequence entry has no usable name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedCatalog {
    /// Top level is neither a sequence nor a mapping.
    #[error("expected a sequence or mapping of items, found {found}")]
    NotACollection { found: &'static str },

    /// An entry is not a key/value mapping.
    #[error("entry {entry}: expected a mapping, found {found}")]
    EntryNotAMapping { entry: String, found: &'static str },

    /// A required field is absent.
    #[error("entry {entry}: missing required field '{field}'")]
    MissingField { entry: String, field: &'static str },

    /// A field holds the wrong kind of value.
    #[error("entry {entry}: field '{field}' must be {expected}, found {found}")]
    WrongType {
        entry: String,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// The same selection identifier appears twice.
    #[error("duplicate selection '{0}'")]
    DuplicateSelection(String),

    /// Two selections carry the same item name.
    #[error("duplicate item name '{0}'")]
    DuplicateName(String),

    /// A value has the right type but breaks a field rule.
    #[error("entry {entry}: {reason}")]
    InvalidValue { entry: String, reason: String },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
