//! Map-subsystem error type.

use thiserror::Error;

use cp_core::Point;
use cp_graph::GraphError;

/// Errors produced by `cp-map`.
#[derive(Debug, Error)]
pub enum MapError {
    /// A short name that is not a listed building.  Also raised for the
    /// empty string.
    #[error("unknown building {0:?}")]
    UnknownName(String),

    /// A record that cannot be placed on the map.  `row` is the 1-based
    /// position of the record in its input (data rows, header excluded).
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("TSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError<Point>),
}

pub type MapResult<T> = Result<T, MapError>;
