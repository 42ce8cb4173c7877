//! Table engine: the column/row model, mutation operations, and rendering.

use serde::{Deserialize, Serialize};

use crate::align::{pad_center, pad_left, pad_right, Align};
use crate::column::Column;
use crate::error::TableError;
use crate::row::Row;
use crate::wrap::wrap;

/// Identifies one of the three configurable border characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// The character used for horizontal rules.
    Horizontal,
    /// The character used for cell borders.
    Vertical,
    /// The character used where rules and borders meet.
    Crossing,
}

/// The border characters used when rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Horizontal rule character.
    pub horizontal: char,
    /// Cell border character.
    pub vertical: char,
    /// Crossing character.
    pub crossing: char,
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            horizontal: '-',
            vertical: '|',
            crossing: '+',
        }
    }
}

/// A fixed-width ASCII table.
///
/// Columns are appended first; rows of any kind are appended afterwards,
/// and [`render`](Table::render) serializes the whole model to text. The
/// engine is single-threaded: one instance per writer, no internal locking.
///
/// # Example
///
/// ```rust
/// use textgrid::{Align, Column, Table};
///
/// let mut table = Table::new();
/// table.add_column(Column::auto("Name"));
/// table.add_column(Column::fixed("Age", 3).align(Align::Right));
/// table.add_divider();
/// table.add_column_headers();
/// table.add_divider();
/// table.add_row(["Jhon", "12"])?;
/// table.add_divider();
///
/// assert_eq!(
///     table.render(),
///     "+--------+\n\
///      |Name|Age|\n\
///      +----+---+\n\
///      |Jhon| 12|\n\
///      +--------+\n"
/// );
/// # Ok::<(), textgrid::TableError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
    margin: usize,
    symbols: Symbols,
}

impl Table {
    /// Creates an empty table with default symbols and no margin.
    pub fn new() -> Self {
        Table::default()
    }

    /// Sets the number of spaces padded inside each cell border.
    pub fn set_margin_size(&mut self, margin: usize) {
        self.margin = margin;
    }

    /// Replaces one border character.
    pub fn set_symbol(&mut self, kind: SymbolKind, symbol: char) {
        match kind {
            SymbolKind::Horizontal => self.symbols.horizontal = symbol,
            SymbolKind::Vertical => self.symbols.vertical = symbol,
            SymbolKind::Crossing => self.symbols.crossing = symbol,
        }
    }

    /// Restores the default `-`, `|`, `+` border characters.
    pub fn set_default_symbols(&mut self) {
        self.symbols = Symbols::default();
    }

    /// Appends a column. Columns define the shape that every subsequent
    /// data row must match; appending columns after rows exist is caller
    /// error and is not validated.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Appends an ordinary row, one cell per column.
    ///
    /// Auto-adjusting columns grow to fit their cell. A cell wider than its
    /// fixed-width column is word-wrapped, and the row expands into as many
    /// physical rows as the widest wrap requires, with the other columns'
    /// slots padded with empty cells.
    ///
    /// A row whose cell count does not match the column count is rejected:
    /// nothing is appended and no column width changes. Callers that want
    /// legacy drop-and-continue behavior can ignore the returned error.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.columns.len() {
            return Err(TableError::ShapeMismatch {
                expected: self.columns.len(),
                got: cells.len(),
            });
        }

        let slots = cells.len();
        let mut physical: Vec<Vec<String>> = vec![cells];
        for (index, column) in self.columns.iter_mut().enumerate() {
            let cell = physical[0][index].clone();
            if column.auto_adjust {
                column.observe(&cell);
            } else if cell.len() > column.width {
                let lines = wrap(&cell, column.width);
                if lines.len() > physical.len() {
                    physical.resize(lines.len(), vec![String::new(); slots]);
                }
                for (slot, line) in lines.into_iter().enumerate() {
                    physical[slot][index] = line;
                }
            }
        }

        self.rows.extend(physical.into_iter().map(Row::Data));
        Ok(())
    }

    /// Appends an ordinary row holding the column titles.
    ///
    /// The row goes through the standard [`add_row`](Table::add_row) path,
    /// so a title wider than its fixed-width column wraps like any other
    /// cell. Call this after the column set is final.
    pub fn add_column_headers(&mut self) {
        let titles: Vec<String> = self.columns.iter().map(|c| c.title.clone()).collect();
        // One title per column, so the shape always matches.
        let _ = self.add_row(titles);
    }

    /// Appends a divider row.
    pub fn add_divider(&mut self) {
        self.rows.push(Row::Divider);
    }

    /// Appends a section header: a single text centered across the full
    /// table width, ignoring column boundaries.
    pub fn add_header(&mut self, text: impl Into<String>) {
        self.rows.push(Row::SectionHeader(text.into()));
    }

    /// Removes and returns the last physical row, or `None` on an empty
    /// table.
    ///
    /// This operates on physical rows: when a wrapped insertion produced
    /// several rows, each call removes one of them, last first. Callers
    /// that need logical-row removal must track the expansion themselves.
    pub fn pop_row(&mut self) -> Option<Row> {
        self.rows.pop()
    }

    /// The columns, in rendering order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of physical rows, dividers and section headers included.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Combined width of all columns, without margins or borders. Computed
    /// fresh on every use: auto-adjusting columns may have grown since any
    /// divider or header row was inserted.
    fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width).sum()
    }

    /// Renders the table to text, one newline-terminated line per physical
    /// row. Pure and idempotent; the model is not mutated.
    pub fn render(&self) -> String {
        let margin = " ".repeat(self.margin);
        let Symbols {
            horizontal: hdiv,
            vertical: vdiv,
            crossing: cross,
        } = self.symbols;

        let last = self.rows.len().saturating_sub(1);
        let mut out = String::new();
        for (position, row) in self.rows.iter().enumerate() {
            match row {
                Row::Divider => {
                    out.push(cross);
                    if position == 0 || position == last {
                        // Outer edge: one unbroken bar across the interior.
                        let span = self.total_width()
                            + self.columns.len().saturating_sub(1)
                            + self.columns.len() * self.margin * 2;
                        out.extend(std::iter::repeat_n(hdiv, span));
                        out.push(cross);
                    } else {
                        // Interior: per-column segments aligned with the grid.
                        for column in &self.columns {
                            let span = column.width + self.margin * 2;
                            out.extend(std::iter::repeat_n(hdiv, span));
                            out.push(cross);
                        }
                    }
                    out.push('\n');
                }
                Row::SectionHeader(text) => {
                    // Span as if all columns were one field.
                    let span = self.total_width()
                        + (self.margin * 2 + 1) * self.columns.len().saturating_sub(1);
                    out.push(vdiv);
                    out.push_str(&margin);
                    out.push_str(&pad_center(text, span));
                    out.push_str(&margin);
                    out.push(vdiv);
                    out.push('\n');
                }
                Row::Data(cells) => {
                    out.push(vdiv);
                    for (column, cell) in self.columns.iter().zip(cells) {
                        out.push_str(&margin);
                        let field = match column.align {
                            Align::Left => pad_right(cell, column.width),
                            Align::Center => pad_center(cell, column.width),
                            Align::Right => pad_left(cell, column.width),
                        };
                        out.push_str(&field);
                        out.push_str(&margin);
                        out.push(vdiv);
                    }
                    out.push('\n');
                }
            }
        }
        out
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn auto_width_covers_everything_observed(
            title in "[a-zA-Z]{0,12}",
            cells in proptest::collection::vec("[a-z ]{0,30}", 0..8),
        ) {
            let mut table = Table::new();
            table.add_column(Column::auto(title.clone()));
            for cell in &cells {
                table.add_row([cell.clone()]).unwrap();
            }

            let width = table.columns()[0].width;
            let widest_cell = cells.iter().map(String::len).max().unwrap_or(0);
            prop_assert!(width >= title.len().max(widest_cell));
        }

        #[test]
        fn fixed_width_never_moves(
            width in 0usize..12,
            cells in proptest::collection::vec("[a-z ]{0,30}", 0..8),
        ) {
            let mut table = Table::new();
            table.add_column(Column::fixed("C", width));
            for cell in &cells {
                table.add_row([cell.clone()]).unwrap();
            }
            prop_assert_eq!(table.columns()[0].width, width);
        }

        #[test]
        fn rejected_rows_leave_the_row_list_unchanged(
            cells in proptest::collection::vec("[a-z]{0,5}", 0..5),
        ) {
            let mut table = Table::new();
            table.add_column(Column::fixed("A", 3));
            table.add_column(Column::fixed("B", 3));
            let before = table.num_rows();

            if cells.len() != 2 {
                prop_assert!(table.add_row(cells).is_err());
                prop_assert_eq!(table.num_rows(), before);
            }
        }
    }
}
