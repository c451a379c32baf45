//! Table types.

use serde::{Deserialize, Serialize};

/// A table structure.
///
/// The first row is always rendered as the header, whatever the source says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,

    /// Column count declared by the table grid
    pub column_count: usize,
}

impl Table {
    /// Create a new empty table with a declared column count.
    pub fn new(column_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            column_count,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the declared number of columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row.
    pub fn header(&self) -> Option<&TableRow> {
        self.rows.first()
    }

    /// Get body rows (everything after the header).
    pub fn body(&self) -> &[TableRow] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding possibly multi-line text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell paragraphs joined with `\n`
    pub text: String,
}

impl TableCell {
    /// Create a cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_body() {
        let mut table = Table::new(2);
        table.add_row(TableRow::from_strings(["A", "B"]));
        table.add_row(TableRow::from_strings(["1", "2"]));

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.header().map(|r| r.cells.len()), Some(2));
        assert_eq!(table.body().len(), 1);
    }

    #[test]
    fn test_empty_table_body() {
        let table = Table::new(3);
        assert!(table.is_empty());
        assert!(table.header().is_none());
        assert!(table.body().is_empty());
    }

    #[test]
    fn test_plain_text() {
        let mut table = Table::new(2);
        table.add_row(TableRow::from_strings(["A", "B"]));
        table.add_row(TableRow::from_strings(["1", "2\n3"]));
        assert_eq!(table.plain_text(), "A\tB\n1\t2\n3");
    }
}
