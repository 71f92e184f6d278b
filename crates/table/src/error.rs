//! Error types for table operations.
//!
//! This module defines the errors that can occur while resolving the grid
//! layout of a table or assembling a table from domain data.

use craftwiki_protocol::ProtocolError;

/// Errors that can occur during table operations.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A row index outside the table was requested.
    #[error("invalid TableData row: {row} (table has {rows} rows)")]
    RowOutOfRange {
        /// The requested row index.
        row: usize,
        /// The number of rows in the table.
        rows: usize,
    },

    /// A column index outside the row was requested.
    #[error("invalid TableData column: {column} in row {row} (row has {columns} columns)")]
    ColumnOutOfRange {
        /// The row index.
        row: usize,
        /// The requested column index.
        column: usize,
        /// The number of columns in the row.
        columns: usize,
    },

    /// A span was requested for a column folded into a neighbour.
    #[error("column {column} in row {row} is a merge marker and is not rendered")]
    MergedCell {
        /// The row index.
        row: usize,
        /// The column index.
        column: usize,
    },

    /// Domain data could not be resolved.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// A specialized Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_row_out_of_range() {
        let err = TableError::RowOutOfRange { row: 5, rows: 3 };
        assert_eq!(err.to_string(), "invalid TableData row: 5 (table has 3 rows)");
    }

    #[test]
    fn error_display_protocol_is_transparent() {
        let err = TableError::from(ProtocolError::UnknownBuilding("Hover_Pack".to_string()));
        assert_eq!(err.to_string(), "Hover_Pack is unknown building");
    }
}
