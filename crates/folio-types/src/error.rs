use std::fmt;

/// Result type for folio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A skin name that is not one of the known skins
    UnknownSkin(String),

    /// A document kind name that is not one of the known kinds
    UnknownKind(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSkin(name) => {
                write!(f, "Unknown skin '{}' (expected: classic, sidebar)", name)
            }
            Error::UnknownKind(name) => write!(
                f,
                "Unknown document kind '{}' (expected: readme, projects, research, intern)",
                name
            ),
        }
    }
}

impl std::error::Error for Error {}
