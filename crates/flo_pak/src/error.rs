//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// file is an invalid pak archive
    #[error("file is an invalid pak archive")]
    InvalidArchive,

    /// entry data lies outside the archive
    #[error("entry {name} extends past the end of the archive")]
    EntryOutOfBounds {
        /// Name of the offending entry
        name: String,
    },

    /// unable to find requested entry
    #[error("unable to find requested entry")]
    EntryNotFound(#[from] EntryNotFoundError),
}

/// Error type to provide further information when an entry has not been found
#[derive(Error, Diagnostic, Debug)]
pub enum EntryNotFoundError {
    /// at index {0}
    #[error("at index {0}")]
    Index(usize),

    /// by name {0}
    #[error("by name {0}")]
    Name(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
