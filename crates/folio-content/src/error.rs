use folio_types::{DocumentId, DocumentKind};
use std::fmt;
use std::path::PathBuf;

/// Result type for folio-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading or validating content
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON content pack could not be parsed
    Json(serde_json::Error),

    /// TOML content pack could not be parsed
    Toml(String),

    /// Content pack file extension is neither .json nor .toml
    UnsupportedFormat(PathBuf),

    /// The registry has no documents at all
    EmptyRegistry,

    /// Two registry entries share an identifier
    DuplicateId(DocumentId),

    /// The declared home document is not in the registry
    MissingHome(DocumentId),

    /// No registry entry renders the given kind
    MissingKind(DocumentKind),

    /// More than one registry entry renders the given kind
    DuplicateKind(DocumentKind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Toml(msg) => write!(f, "TOML error: {}", msg),
            Error::UnsupportedFormat(path) => write!(
                f,
                "Unsupported content pack format: {} (expected .json or .toml)",
                path.display()
            ),
            Error::EmptyRegistry => write!(f, "Content pack has no documents"),
            Error::DuplicateId(id) => write!(f, "Duplicate document id: {}", id),
            Error::MissingHome(id) => write!(f, "Home document '{}' is not registered", id),
            Error::MissingKind(kind) => write!(f, "No document renders kind '{}'", kind),
            Error::DuplicateKind(kind) => {
                write!(f, "More than one document renders kind '{}'", kind)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Toml(_)
            | Error::UnsupportedFormat(_)
            | Error::EmptyRegistry
            | Error::DuplicateId(_)
            | Error::MissingHome(_)
            | Error::MissingKind(_)
            | Error::DuplicateKind(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err.to_string())
    }
}
