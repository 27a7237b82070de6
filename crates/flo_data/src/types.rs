//! The decoded table model shared by the BIN and DAT readers.

use derive_more::derive::{Constructor, Deref, Display, IntoIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a column's bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColumnKind {
    /// 4-byte little-endian unsigned integer
    Numeric,
    /// Fixed-width NUL-padded text
    Text,
}

/// A single column of a table.
///
/// The kind is derived from the field width: exactly 4 bytes is numeric, everything else
/// (including the degenerate zero width) is text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    /// Column name as declared in the source
    pub name: String,
    /// Field width in bytes; zero for text columns of unknown type code and for DAT columns
    pub width: u32,
    /// How fields of this column are interpreted
    pub kind: ColumnKind,
}

impl Column {
    /// Create a column, deriving its kind from the field width.
    pub fn new(name: impl Into<String>, width: u32) -> Self {
        let kind = if width == 4 {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        };

        Column {
            name: name.into(),
            width,
            kind,
        }
    }
}

/// Ordered column list of a table, in declaration order.
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schema(Vec<Column>);

impl Schema {
    /// Position of the named column.
    ///
    /// Column names are not required to be unique; when a name repeats, the LAST column
    /// wins, matching how the originating tool overwrote repeated names row by row.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().rposition(|column| column.name == name)
    }
}

/// One decoded cell.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Unsigned 32-bit integer field
    #[display("{_0}")]
    UInt32(u32),
    /// Text field
    #[display("{_0}")]
    Text(String),
}

impl Value {
    /// The integer behind a numeric cell.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::UInt32(value) => Some(*value),
            Value::Text(_) => None,
        }
    }

    /// The text behind a text cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::UInt32(_) => None,
            Value::Text(value) => Some(value),
        }
    }
}

/// One row of cells, positionally aligned to the table's [`Schema`].
#[derive(Constructor, Clone, Debug, PartialEq, Eq, Deref, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row(Vec<Value>);

/// A fully decoded table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Column layout, in declaration order
    pub schema: Schema,
    /// Rows in file order
    pub rows: Vec<Row>,
}

impl Table {
    /// Look up a cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.schema.index_of(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table contains no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Column, ColumnKind, Row, Schema, Table, Value};

    #[test]
    fn column_kind_follows_width() {
        assert_eq!(Column::new("id", 4).kind, ColumnKind::Numeric);
        assert_eq!(Column::new("name", 12).kind, ColumnKind::Text);
        assert_eq!(Column::new("unknown", 0).kind, ColumnKind::Text);
    }

    #[test]
    fn duplicate_name_resolves_to_last_column() {
        let schema = Schema::new(vec![
            Column::new("id", 4),
            Column::new("name", 12),
            Column::new("name", 32),
        ]);

        assert_eq!(schema.index_of("name"), Some(2));
        assert_eq!(schema.index_of("id"), Some(0));
        assert_eq!(schema.index_of("missing"), None);
    }

    #[test]
    fn cell_lookup_by_name() {
        let table = Table {
            schema: Schema::new(vec![Column::new("id", 4), Column::new("name", 12)]),
            rows: vec![Row::new(vec![
                Value::UInt32(7),
                Value::Text("sword".to_string()),
            ])],
        };

        assert_eq!(table.get(0, "id"), Some(&Value::UInt32(7)));
        assert_eq!(table.get(0, "name").and_then(Value::as_str), Some("sword"));
        assert_eq!(table.get(1, "id"), None);
        assert_eq!(table.get(0, "missing"), None);
    }
}
