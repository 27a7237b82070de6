//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// table header declares counts that cannot be satisfied
    #[error("table header declares a negative row or column count")]
    InvalidTable,

    /// stream ended before the declared counts were read
    #[error("table data ended before the declared row and column counts were satisfied")]
    UnexpectedEof,

    /// a column name could not be decoded
    #[error("column {0} has an undecodable name")]
    InvalidColumnHeader(usize),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
