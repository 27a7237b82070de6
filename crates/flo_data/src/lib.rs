//! This library handles reading the **BIN** and **DAT** data table formats used by *Florensia*.
//!
//! # BIN Table Format Documentation
//!
//! The BIN format is a custom binary format that stores one table of fixed-width rows. BIN
//! files are typically identified with the `.bin` extension.
//!
//! ## File Structure
//!
//! A BIN file consists of a header, a list of column descriptors, and the row data.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Row Count              | 4 bytes: Number of rows in the table                       |
//! | 0x0004         | Dataset Length         | 4 bytes: Declared data size, informational only            |
//! | 0x0008         | Column Count           | 4 bytes: Number of columns in the table                    |
//!
//! ### Column Descriptors
//!
//! The header is followed by one descriptor per column:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Name                   | 32 bytes: EUC-KR column name, NUL padded                |
//! | 0x0020         | Type Code              | 4 bytes: Selects the column's field width               |
//!
//! The type code maps to a field width in bytes: codes `0`, `1` and `2` give a 4-byte numeric
//! field, `3` gives 12 bytes of text, `4` gives 32 bytes and `5` gives 128 bytes. Any other
//! code gives a zero-width text field whose value is always empty; the authoring tool emits
//! such codes in the wild, so they are not treated as an error.
//!
//! ### Rows
//!
//! Each row starts with a 4-byte marker that carries no known meaning, followed by one
//! fixed-width field per column in declaration order. 4-byte fields hold an unsigned
//! little-endian integer; every other width holds NUL-padded EUC-KR text.
//!
//! Text fields are frequently malformed by the authoring tool, so string decoding runs
//! through a recovery ladder (see [`encoding`]) and never fails.
//!
//! # DAT Table Format Documentation
//!
//! The DAT format is plain tab-separated text: the first line names the columns and each
//! following line is one row. Rows may carry fewer or more fields than the header declares,
//! and any field equal to the sentinel `__END` is dropped before the row is aligned to the
//! header. DAT files are stored in a mix of UTF-8 and UTF-16 on disk; resolve them to text
//! with [`encoding::decode_text`] before decoding.
//!
//! ## Additional Information
//!
//! - **File Extensions**: `.bin`, `.dat`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Text Encoding**: EUC-KR inside BIN tables, UTF-8 or UTF-16 for whole DAT files
//!

pub mod bin;
pub mod dat;
pub mod encoding;
pub mod error;
pub mod types;

pub use bin::{decode_bin_table, read_bin_table};
pub use dat::decode_dat_table;
pub use encoding::decode_text;
pub use types::{Column, ColumnKind, Row, Schema, Table, Value};
