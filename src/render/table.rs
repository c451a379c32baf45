//! Table flattening into pipe-delimited rows.

use crate::model::Table;

use super::with_break;

/// Render a table as Markdown lines, framed by blank spacer lines.
///
/// Row 0 is the header. The separator has one `---` per declared column;
/// rows with a different cell count are emitted as they are.
pub fn table_lines(table: &Table) -> Vec<String> {
    let Some(header) = table.header() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(table.row_count() + 3);
    lines.push(String::new());

    let header_cells: Vec<&str> = header.cells.iter().map(|c| c.text.trim()).collect();
    lines.push(with_break(&pipe_row(&header_cells)));

    lines.push(with_break(&format!(
        "|{}|",
        vec!["---"; table.column_count()].join("|")
    )));

    for row in table.body() {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|c| c.text.trim().replace('\n', "<br>"))
            .collect();
        lines.push(with_break(&pipe_row(&cells)));
    }

    lines.push(String::new());
    lines
}

fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined = cells
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {} |", joined)
}
