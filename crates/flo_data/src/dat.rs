//! Types for reading DAT tables
//!

use tracing::debug;

use crate::types::{Column, Row, Schema, Table, Value};

/// Fields carrying this literal are dropped from a row before it is aligned to the header.
const END_SENTINEL: &str = "__END";

/// Decode a DAT document that has already been resolved to text
/// (see [`crate::encoding::decode_text`]).
///
/// The first line names the columns; every later line is one row. Rows are ragged in
/// shipped data: short rows are right-padded with empty fields, overlong rows are cut at
/// the header width, and a row left with no fields after sentinel removal is skipped.
/// This never fails; an empty document decodes to an empty table.
pub fn decode_dat_table(text: &str) -> Table {
    let mut lines = text.lines();

    let Some(header_line) = lines.next() else {
        return Table::default();
    };

    let columns = header_line
        .split('\t')
        .map(|name| Column::new(name.trim(), 0))
        .collect();
    let schema = Schema::new(columns);

    let mut rows = Vec::new();
    for line in lines {
        let mut fields: Vec<&str> = line
            .trim()
            .split('\t')
            .map(str::trim)
            .filter(|field| *field != END_SENTINEL)
            .collect();

        if fields.is_empty() {
            continue;
        }

        fields.truncate(schema.len());
        let mut values: Vec<Value> = fields
            .into_iter()
            .map(|field| Value::Text(field.to_string()))
            .collect();
        values.resize(schema.len(), Value::Text(String::new()));

        rows.push(Row::new(values));
    }
    debug!(columns = schema.len(), rows = rows.len(), "read dat table");

    Table { schema, rows }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::decode_dat_table;
    use crate::types::Value;

    fn text(value: &str) -> Value {
        Value::Text(value.to_string())
    }

    #[test]
    fn decode_simple_table() {
        let table = decode_dat_table("a\tb\n1\t2\n3\t4\n");

        assert_eq!(table.schema.len(), 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, "a"), Some(&text("1")));
        assert_eq!(table.get(1, "b"), Some(&text("4")));
    }

    #[test]
    fn short_rows_are_padded() {
        let table = decode_dat_table("a\tb\tc\n1\t2\n");

        assert_eq!(table.get(0, "a"), Some(&text("1")));
        assert_eq!(table.get(0, "b"), Some(&text("2")));
        assert_eq!(table.get(0, "c"), Some(&text("")));
    }

    #[test]
    fn overlong_rows_are_cut_at_header_width() {
        let table = decode_dat_table("a\tb\n1\t2\t3\t4\n");

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.get(0, "b"), Some(&text("2")));
    }

    #[test]
    fn sentinel_fields_are_removed_before_alignment() {
        let table = decode_dat_table("a\tb\n1\t__END\t2\n");

        assert_eq!(table.get(0, "a"), Some(&text("1")));
        assert_eq!(table.get(0, "b"), Some(&text("2")));
    }

    #[test]
    fn all_sentinel_row_is_skipped() {
        let table = decode_dat_table("a\tb\n__END\t__END\n1\t2\n");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "a"), Some(&text("1")));
    }

    #[test]
    fn headers_and_fields_are_trimmed() {
        let table = decode_dat_table(" a \t b \r\n 1 \t 2 \r\n");

        assert_eq!(table.schema[0].name, "a");
        assert_eq!(table.get(0, "b"), Some(&text("2")));
    }

    #[test]
    fn empty_document_decodes_to_empty_table() {
        let table = decode_dat_table("");

        assert!(table.is_empty());
        assert_eq!(table.schema.len(), 0);
    }

    #[test]
    fn decoding_is_idempotent() {
        let input = "a\tb\n1\t__END\n\t2\n";

        assert_eq!(decode_dat_table(input), decode_dat_table(input));
    }
}
