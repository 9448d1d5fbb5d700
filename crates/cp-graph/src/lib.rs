//! `cp-graph` — directed labeled graph, paths, and shortest-path search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `Graph<N, E>` (node arena + label index), `Node`, `Edge`   |
//! | [`path`]     | `Path<N, W>`, `Segment<N, W>`                              |
//! | [`search`]   | `dijkstra`                                                 |
//! | [`validate`] | `validate`, the full structural invariant check           |
//! | [`error`]    | `GraphError<N>`, `GraphResult<T, N>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Edge`, `Path`, `Segment`.|

pub mod error;
pub mod graph;
pub mod path;
pub mod search;
pub mod validate;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, Node};
pub use path::{Path, Segment};
pub use search::dijkstra;
pub use validate::validate;
