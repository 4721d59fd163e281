//! Error types for mimetect-core.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MimeError>;

/// Errors raised while building type descriptors.
///
/// Both variants are local to a single descriptor or pattern; the dataset
/// loader recovers from them and continues with the rest of the dataset.
/// Query operations never return these - "not found" is an `Option`, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MimeError {
    /// A content-type name could not be parsed into its `primary/sub`
    /// halves. `detail` names the half that failed.
    #[error("malformed content type `{name}`: {detail}")]
    MalformedType { name: String, detail: String },

    /// A byte-mode magic literal was not a well-formed hex digit string.
    #[error("invalid magic literal `{literal}`: {detail}")]
    InvalidMagicLiteral { literal: String, detail: String },
}

/// Errors produced while loading a mime-type dataset.
///
/// Unlike [`MimeError`], these are fatal for the whole load: a dataset
/// that cannot be read or parsed yields no types at all.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] toml::de::Error),
}
