//! This library handles reading from **PAK** archive files used by *Florensia*.
//!
//! # PAK Archive Format Documentation
//!
//! This crate provides utilities to read and extract data from the **PAK** archive format used by
//! the game *Florensia*. The PAK format is a custom binary format that stores various game assets
//! within a single file. PAK files are typically identified with the `.pak` extension.
//!
//! ## File Structure
//!
//! A PAK file consists of an entry count, followed by the entry table, followed by the data for
//! each entry.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Entry Count            | 4 bytes: Number of entries in the archive                  |
//! | 0x0004         | Entry Table            | Entry Count × 296 bytes: One record per stored file        |
//!
//! ### Entry Table
//!
//! Each record in the entry table has the following structure:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Name                   | 260 bytes: UTF-8 entry name, NUL padded                 |
//! | 0x0104         | Data Offset            | 4 bytes: Offset of the entry data from start of file    |
//! | 0x0108         | Data Length            | 4 bytes: Length of the entry data in bytes              |
//! | 0x010C         | Reserved               | 28 bytes: Unused                                        |
//!
//! - **Name**: The file name of the entry, padded to 260 bytes with NUL bytes.
//! - **Data Offset**: A 4-byte integer specifying the offset from the start of the archive to
//!   this entry's data.
//! - **Data Length**: A 4-byte integer specifying the size of this entry's data.
//! - **Reserved**: 28 bytes with no known purpose, skipped on read.
//!
//! ### Data
//!
//! Entry data is stored uncompressed at the offset recorded in the entry table. The entry table
//! does not guarantee that entries appear in offset order, and the format itself never checks
//! that an entry's data lies within the file; this crate validates offsets against the file size
//! when the archive is opened.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.pak`
//! - **Endianness**: Little-endian for all multi-byte integers
//!

pub mod error;
pub mod read;
pub mod types;

pub use read::PakArchive;
