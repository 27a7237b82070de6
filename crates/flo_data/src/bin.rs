//! Types for reading BIN tables
//!

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{self, Cursor, Read};
use tracing::debug;

use crate::{
    encoding::{decode_legacy, decode_text_field, nul_truncate},
    error::{Error, Result},
    types::{Column, ColumnKind, Row, Schema, Table, Value},
};

/// Column name byte patterns the authoring tool is known to emit broken, paired with
/// the name they stand for.
///
/// These are matched byte-for-byte before any decoding is attempted; extend the list if
/// further broken headers turn up in shipped data.
const NAME_FIXUPS: &[(&[u8; 32], &str)] = &[(
    &[
        0xBA, 0xB8, 0xBB, 0xF3, 0xBC, 0xF6, 0xB7, 0xAE, 0x35, 0x35, 0x00, 0x00, 0x01, 0x00, 0x00,
        0x00, 0x28, 0x42, 0x0A, 0x08, 0x0F, 0x1B, 0x00, 0x80, 0x20, 0xFF, 0xA9, 0x0B, 0xC8, 0xFF,
        0xA9, 0x0B,
    ],
    "보상수량55",
)];

/// Field width in bytes selected by a column type code.
///
/// Unknown codes yield a zero-width field that always decodes to an empty string; shipped
/// tables contain such codes, so they are not an error.
fn width_for_type_code(code: i32) -> u32 {
    match code {
        0..=2 => 4,
        3 => 12,
        4 => 32,
        5 => 128,
        _ => 0,
    }
}

fn column_name(index: usize, raw: &[u8; 32]) -> Result<String> {
    if let Some((_, fixed)) = NAME_FIXUPS.iter().find(|(pattern, _)| *pattern == raw) {
        return Ok((*fixed).to_string());
    }

    decode_legacy(nul_truncate(raw))
        .map(|name| name.trim().to_string())
        .ok_or(Error::InvalidColumnHeader(index))
}

/// Read a BIN table from a stream.
///
/// Text fields run through the recovery ladder in [`crate::encoding`], so malformed
/// strings degrade to best-effort output instead of failing the decode. Structural
/// problems (negative counts, a stream shorter than the declared counts require) do fail.
pub fn read_bin_table<R: Read>(mut reader: R) -> Result<Table> {
    let row_count = reader
        .read_i32::<LittleEndian>()
        .map_err(eof_as_truncation)?;
    let _dataset_length = reader
        .read_i32::<LittleEndian>()
        .map_err(eof_as_truncation)?;
    let column_count = reader
        .read_i32::<LittleEndian>()
        .map_err(eof_as_truncation)?;

    if row_count < 0 || column_count < 0 {
        return Err(Error::InvalidTable);
    }
    debug!(rows = row_count, columns = column_count, "reading bin table");

    let mut columns = Vec::with_capacity(column_count as usize);
    for index in 0..column_count as usize {
        let mut raw_name = [0u8; 32];
        reader.read_exact(&mut raw_name).map_err(eof_as_truncation)?;
        let code = reader
            .read_i32::<LittleEndian>()
            .map_err(eof_as_truncation)?;

        columns.push(Column::new(
            column_name(index, &raw_name)?,
            width_for_type_code(code),
        ));
    }
    let schema = Schema::new(columns);

    // Scratch buffer sized for the widest text field in this table.
    let widest = schema
        .iter()
        .filter(|column| column.kind == ColumnKind::Text)
        .map(|column| column.width as usize)
        .max()
        .unwrap_or(0);
    let mut field = vec![0u8; widest];

    let mut rows = Vec::with_capacity(row_count as usize);
    for _ in 0..row_count {
        // Row marker, no known meaning.
        let mut marker = [0u8; 4];
        reader.read_exact(&mut marker).map_err(eof_as_truncation)?;

        let mut values = Vec::with_capacity(schema.len());
        for column in schema.iter() {
            let value = match column.kind {
                ColumnKind::Numeric => Value::UInt32(
                    reader
                        .read_u32::<LittleEndian>()
                        .map_err(eof_as_truncation)?,
                ),
                ColumnKind::Text => {
                    let buffer = &mut field[..column.width as usize];
                    reader.read_exact(buffer).map_err(eof_as_truncation)?;
                    Value::Text(decode_text_field(buffer))
                }
            };
            values.push(value);
        }

        rows.push(Row::new(values));
    }

    Ok(Table { schema, rows })
}

/// Decode a BIN table from an in-memory buffer.
pub fn decode_bin_table(bytes: &[u8]) -> Result<Table> {
    read_bin_table(Cursor::new(bytes))
}

fn eof_as_truncation(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::UnexpectedEof
    } else {
        Error::IOError(err)
    }
}
