//! Table types.

use serde::{Deserialize, Serialize};

use super::Node;

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
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
}

/// A table cell with spans precomputed for the whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    #[serde(default)]
    pub children: Vec<Node>,

    /// Column span
    #[serde(default = "one")]
    pub colspan: u32,

    /// Row span counted from the cell that starts a vertical merge
    #[serde(default = "one")]
    pub rowspan: u32,

    /// Cell continues a vertical merge started above and gets no cell tag
    #[serde(default)]
    pub continues_vertical_merge: bool,
}

fn one() -> u32 {
    1
}

impl TableCell {
    /// Create a cell with content.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            children,
            colspan: 1,
            rowspan: 1,
            continues_vertical_merge: false,
        }
    }

    /// Set the column span.
    pub fn with_colspan(mut self, colspan: u32) -> Self {
        self.colspan = colspan;
        self
    }

    /// Set the row span.
    pub fn with_rowspan(mut self, rowspan: u32) -> Self {
        self.rowspan = rowspan;
        self
    }

    /// Create a cell swallowed by a vertical merge from above.
    pub fn merged_continuation() -> Self {
        Self {
            continues_vertical_merge: true,
            ..Self::new(Vec::new())
        }
    }
}
