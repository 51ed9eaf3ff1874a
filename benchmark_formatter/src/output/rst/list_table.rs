//!
//! The reStructuredText `list-table` directive.
//!

use std::fmt::Write;

/// Indentation of the rows of a nested table relative to its parent's rows.
const NESTED_INDENT: usize = 5;

///
/// A cell of a list table.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Inline text.
    Text(String),
    /// A table nested into the cell.
    Table(ListTable),
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<ListTable> for Cell {
    fn from(table: ListTable) -> Self {
        Self::Table(table)
    }
}

///
/// The reStructuredText `list-table` directive.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListTable {
    /// The directive options, for example `("widths", "auto")`.
    pub options: Vec<(&'static str, String)>,
    /// The rows, the header ones included.
    pub rows: Vec<Vec<Cell>>,
}

impl ListTable {
    /// Indentation of the options and rows of a top-level table.
    pub const INDENT: usize = 3;

    ///
    /// Creates a table with automatic column widths and `header_rows` header rows.
    ///
    pub fn with_header_rows(header_rows: usize) -> Self {
        Self {
            options: vec![
                ("widths", "auto".to_owned()),
                ("header-rows", header_rows.to_string()),
            ],
            rows: Vec::with_capacity(header_rows),
        }
    }

    ///
    /// Appends a row.
    ///
    pub fn push_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    ///
    /// Renders the table as a top-level directive.
    ///
    pub fn render(&self) -> String {
        let mut buffer = String::with_capacity(64 * (self.rows.len() + 1));
        self.write_directive(&mut buffer, "", Self::INDENT);
        buffer
    }

    ///
    /// Writes the directive after `marker`, with the options and rows indented by `indent`.
    ///
    fn write_directive(&self, buffer: &mut String, marker: &str, indent: usize) {
        writeln!(buffer, "{marker}.. list-table::").expect("Always valid");
        for (name, value) in self.options.iter() {
            writeln!(buffer, "{:indent$}:{name}: {value}", "").expect("Always valid");
        }
        buffer.push('\n');

        for row in self.rows.iter() {
            for (position, cell) in row.iter().enumerate() {
                let marker = if position == 0 { "* - " } else { "  - " };
                match cell {
                    Cell::Text(text) => {
                        writeln!(buffer, "{:indent$}{marker}{text}", "").expect("Always valid");
                    }
                    Cell::Table(table) => {
                        buffer.push('\n');
                        let marker = format!("{:indent$}{marker}", "");
                        table.write_directive(buffer, marker.as_str(), indent + NESTED_INDENT);
                    }
                }
            }
        }
    }
}
