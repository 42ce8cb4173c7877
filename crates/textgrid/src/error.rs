//! Error type for table mutation.

use thiserror::Error;

/// Error type for [`Table`](crate::Table) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row was offered with a cell count different from the table's
    /// column count. The table is left unchanged.
    #[error("row has {got} cells but the table defines {expected} columns")]
    ShapeMismatch {
        /// The table's column count.
        expected: usize,
        /// The offered row's cell count.
        got: usize,
    },
}
