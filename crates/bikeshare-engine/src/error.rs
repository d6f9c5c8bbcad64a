use std::fmt;
use std::path::PathBuf;

/// Result type for bikeshare-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading trip tables
#[derive(Debug)]
pub enum Error {
    /// Source file could not be opened
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV content
    Csv(csv::Error),

    /// A required column is absent from the source header
    MissingColumn {
        source_name: String,
        column: &'static str,
    },

    /// A timestamp cell did not parse
    InvalidTimestamp {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, source } => {
                write!(f, "Failed to open {}: {}", path.display(), source)
            }
            Error::Csv(err) => write!(f, "CSV error: {}", err),
            Error::MissingColumn {
                source_name,
                column,
            } => {
                write!(f, "Missing required column '{}' in {}", column, source_name)
            }
            Error::InvalidTimestamp { row, column, value } => write!(
                f,
                "Invalid timestamp '{}' in column '{}' (row {})",
                value, column, row
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Csv(err) => Some(err),
            Error::MissingColumn { .. } | Error::InvalidTimestamp { .. } => None,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
