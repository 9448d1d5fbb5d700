//! `cp-script` — text-script harness over named string-labeled graphs.
//!
//! A script builds graphs with `CreateGraph`/`AddNode`/`AddEdge`, inspects
//! them with `ListNodes`/`ListChildren`, and runs shortest-path queries with
//! `FindPath`.  Output is canonical (sorted listings, three-decimal weights)
//! so a run can be compared line for line against an expected transcript.
//!
//! # Crate layout
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`command`] | `Command` and its line parser                |
//! | [`driver`]  | `ScriptDriver`, `run_script`                 |
//! | [`error`]   | `ScriptError`, `ScriptResult<T>`             |

pub mod command;
pub mod driver;
pub mod error;


pub use command::Command;
pub use driver::{run_script, ScriptDriver, ScriptGraph};
pub use error::{ScriptError, ScriptResult};
