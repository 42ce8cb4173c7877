//! # textgrid — fixed-width ASCII tables
//!
//! `textgrid` renders tabular data as bordered, aligned, word-wrapped text
//! for terminals and log files. Callers describe columns (title, alignment,
//! width, auto-sizing policy), append rows, and render the whole model to a
//! single string; writing that string anywhere is the caller's concern.
//!
//! ## Core concepts
//!
//! - [`Column`]: a named, aligned, width-governed vertical slot. An
//!   auto-adjusting column grows to fit the longest content seen and never
//!   wraps; a fixed-width column never grows and wraps oversized cells
//!   onto extra physical rows instead.
//! - [`Row`]: one horizontal record — ordinary data, a divider rule, or a
//!   full-width section header.
//! - [`Table`]: owns the ordered columns and rows, exposes the mutation
//!   operations, and serializes the model with [`Table::render`].
//! - [`Symbols`]: the three border characters, defaulting to `-`, `|`, `+`.
//!
//! ## Quick start
//!
//! ```rust
//! use textgrid::{Column, Table};
//!
//! let mut table = Table::new();
//! table.add_column(Column::auto("Name").center());
//! table.add_column(Column::fixed("Notes", 12));
//! table.add_divider();
//! table.add_column_headers();
//! table.add_divider();
//! table.add_row(["Tabita", "prefers window seats on trains"])?;
//! table.add_divider();
//!
//! print!("{}", table.render());
//! # Ok::<(), textgrid::TableError>(())
//! ```
//!
//! Long cells in the fixed-width column wrap at word boundaries, expanding
//! one logical row into several physical rows; the auto column simply grows.
//!
//! ## What this crate does not do
//!
//! Widths are measured in string length, so output is only grid-aligned for
//! ASCII content; there is no Unicode display-width handling, no parsing of
//! CSV or JSON input, no nested tables, and no incremental output.

mod align;
mod column;
mod error;
mod row;
mod table;
mod wrap;

pub use align::{pad_center, pad_left, pad_right, Align};
pub use column::Column;
pub use error::TableError;
pub use row::Row;
pub use table::{SymbolKind, Symbols, Table};
pub use wrap::wrap;
