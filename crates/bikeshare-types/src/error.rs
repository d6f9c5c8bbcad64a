use std::fmt;

/// Result type for bikeshare-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A name that is not part of the closed option set it was looked up in
    UnknownOption { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownOption { kind, value } => {
                write!(f, "Unknown {}: '{}'", kind, value)
            }
        }
    }
}

impl std::error::Error for Error {}
