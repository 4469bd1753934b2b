//! Errors raised while building a grid from outside input.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("expected the number of rows and columns before the cells")]
    MissingDimensions,

    #[error("invalid dimension {0:?}: expected a positive integer")]
    InvalidDimension(String),

    #[error("grid must have at least one row and one column")]
    EmptyDimension,

    #[error("a {rows}x{columns} grid has more cells than fit in memory")]
    TooLarge { rows: usize, columns: usize },

    #[error("expected {expected} cells, found {found}")]
    MissingCells { expected: usize, found: usize },

    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}: use 'X' or '.'")]
    UnknownSymbol { symbol: char, row: usize, column: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("{found} cells do not fill a {rows}x{columns} grid")]
    CellCount { rows: usize, columns: usize, found: usize },
}
