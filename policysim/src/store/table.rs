use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// an in-memory delimited table: a header row plus text-valued data rows.
///
/// values are kept as text so that a resolved table can be written back
/// without loss. typing happens where a table is consumed, see
/// [`crate::coefficient::CoefficientRow`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// builds a table, padding short rows with empty values so every row
    /// spans the header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Table { headers, rows }
    }

    /// a valid table with neither columns nor rows.
    pub fn empty() -> Table {
        Table::default()
    }

    /// true when the table holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    /// value at `row` in the named column, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
    }

    /// parses decoded text with a header row using the given field delimiter.
    pub fn from_text(text: &str, delimiter: u8) -> Result<Table, csv::Error> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()?
            .iter()
            .map(String::from)
            .collect::<Vec<_>>();
        let rows = reader
            .records()
            .map(|r| r.map(|record| record.iter().map(String::from).collect::<Vec<_>>()))
            .collect::<Result<Vec<_>, csv::Error>>()?;
        Ok(Table::new(headers, rows))
    }

    /// writes the header and all rows with the given field delimiter.
    /// a table without columns writes nothing.
    pub fn write_to<W: Write>(&self, out: W, delimiter: u8) -> Result<(), csv::Error> {
        let mut writer = WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_writer(out);
        if !self.headers.is_empty() {
            writer.write_record(&self.headers)?;
        }
        for row in self.rows.iter() {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn to_bytes(&self, delimiter: u8) -> Result<Vec<u8>, csv::Error> {
        let mut buffer = vec![];
        self.write_to(&mut buffer, delimiter)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn test_tab_separated_with_blank_optional_values() {
        let text = "rail_type\tkpi\tparam1_name\tparam1_value\tparam2_name\tparam2_value\n\
                    고속철도\tPAI\tw_도보\t5.0\t\t\n";
        let table = Table::from_text(text, b'\t').expect("should parse");
        assert_eq!(table.headers().len(), 6);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0, "rail_type"), Some("고속철도"));
        assert_eq!(table.get(0, "param2_value"), Some(""));
        assert_eq!(table.get(0, "model_type"), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = Table::from_text("a,b,c\n1,2\n", b',').expect("should parse");
        assert_eq!(table.rows()[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_written_table_reads_back_equal() {
        let text = "name,duration_months,note\n\"GTX, phase 2\",18,\"quoted \"\"note\"\"\"\n";
        let table = Table::from_text(text, b',').expect("should parse");
        let bytes = table.to_bytes(b',').expect("should write");
        let written = String::from_utf8(bytes).expect("utf-8 output");
        let reread = Table::from_text(&written, b',').expect("should parse");
        assert_eq!(table, reread);
        assert_eq!(reread.get(0, "name"), Some("GTX, phase 2"));
    }

    #[test]
    fn test_empty_text_is_empty_table() {
        let table = Table::from_text("", b',').expect("should parse");
        assert!(table.is_empty());
        assert!(table.headers().is_empty());
        assert_eq!(table.to_bytes(b',').expect("should write"), Vec::<u8>::new());
    }
}
