//! Script-harness error type.

use thiserror::Error;

use cp_graph::GraphError;

/// Errors produced by `cp-script`.
///
/// Every variant except [`Io`](ScriptError::Io) is a problem with a single
/// script line: the driver prints it and moves on to the next line.  I/O
/// failures on the input or output stream abort the run.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Unrecognized command: {0}")]
    Unrecognized(String),

    #[error("Bad arguments to {command}: [{}]", .args.join(", "))]
    BadArguments { command: String, args: Vec<String> },

    #[error("unknown graph {0}")]
    UnknownGraph(String),

    #[error("unknown node {0}")]
    UnknownNode(String),

    #[error("invalid edge weight {0}")]
    InvalidWeight(String),

    #[error("{0}")]
    Graph(#[from] GraphError<String>),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
