//! Column model: title, alignment, and width-growth policy.

use serde::{Deserialize, Serialize};

use crate::align::Align;

/// A named, aligned, width-governed vertical slot in a table.
///
/// A column is either *auto-adjusting* — its width grows to fit the longest
/// content it has seen, starting with its own title, and never shrinks — or
/// *fixed-width*, in which case the width set at construction is final and
/// oversized cells are wrapped onto extra physical rows instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column title, shown by [`Table::add_column_headers`](crate::Table::add_column_headers).
    pub title: String,
    /// How cell text is aligned within the column width.
    pub align: Align,
    /// Current width in characters. Grows monotonically when `auto_adjust`
    /// is set; immutable otherwise.
    pub width: usize,
    /// Whether the column grows to fit content rather than wrapping it.
    pub auto_adjust: bool,
}

impl Column {
    /// Creates a column. An auto-adjusting column immediately grows to fit
    /// its own title.
    pub fn new(title: impl Into<String>, align: Align, width: usize, auto_adjust: bool) -> Self {
        let mut column = Column {
            title: title.into(),
            align,
            width,
            auto_adjust,
        };
        let title = column.title.clone();
        column.observe(&title);
        column
    }

    /// Shorthand for an auto-adjusting column of initial width 0.
    pub fn auto(title: impl Into<String>) -> Self {
        Column::new(title, Align::default(), 0, true)
    }

    /// Shorthand for a fixed-width column.
    pub fn fixed(title: impl Into<String>, width: usize) -> Self {
        Column::new(title, Align::default(), width, false)
    }

    /// Sets the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Left-aligns the column.
    pub fn left(self) -> Self {
        self.align(Align::Left)
    }

    /// Centers the column.
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Right-aligns the column.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Records a cell value placed in this column, growing the width to fit
    /// it. No-op on fixed-width columns; the width never decreases.
    pub fn observe(&mut self, content: &str) {
        if self.auto_adjust && content.len() > self.width {
            self.width = content.len();
        }
    }
}
