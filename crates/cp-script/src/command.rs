//! Script command parsing.

use cp_core::Weight;

use crate::{ScriptError, ScriptResult};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateGraph { graph: String },
    AddNode { graph: String, node: String },
    AddEdge { graph: String, parent: String, child: String, weight: f64 },
    ListNodes { graph: String },
    ListChildren { graph: String, parent: String },
    /// Underscores in `start` and `end` have already been turned into spaces.
    FindPath { graph: String, start: String, end: String },
}

impl Command {
    /// Parse a whitespace-tokenized line.  `tokens` must be non-empty.
    pub fn parse(tokens: &[&str]) -> ScriptResult<Self> {
        let (&name, args) = tokens
            .split_first()
            .ok_or_else(|| ScriptError::Unrecognized(String::new()))?;

        let arity = match name {
            "CreateGraph" | "ListNodes" => 1,
            "AddNode" | "ListChildren" => 2,
            "FindPath" => 3,
            "AddEdge" => 4,
            other => return Err(ScriptError::Unrecognized(other.to_string())),
        };
        if args.len() != arity {
            return Err(ScriptError::BadArguments {
                command: name.to_string(),
                args:    args.iter().map(|a| a.to_string()).collect(),
            });
        }

        let arg = |i: usize| args[i].to_string();
        Ok(match name {
            "CreateGraph" => Command::CreateGraph { graph: arg(0) },
            "AddNode" => Command::AddNode { graph: arg(0), node: arg(1) },
            "AddEdge" => Command::AddEdge {
                graph:  arg(0),
                parent: arg(1),
                child:  arg(2),
                weight: parse_weight(args[3])?,
            },
            "ListNodes" => Command::ListNodes { graph: arg(0) },
            "ListChildren" => Command::ListChildren { graph: arg(0), parent: arg(1) },
            _ => Command::FindPath {
                graph: arg(0),
                start: args[1].replace('_', " "),
                end:   args[2].replace('_', " "),
            },
        })
    }

    pub fn graph(&self) -> &str {
        match self {
            Command::CreateGraph { graph }
            | Command::AddNode { graph, .. }
            | Command::AddEdge { graph, .. }
            | Command::ListNodes { graph }
            | Command::ListChildren { graph, .. }
            | Command::FindPath { graph, .. } => graph,
        }
    }
}

/// Edge weights must be numbers the search engine accepts (non-negative,
/// not NaN).
fn parse_weight(token: &str) -> ScriptResult<f64> {
    match token.parse::<f64>() {
        Ok(w) if w.is_valid_cost() => Ok(w),
        _ => Err(ScriptError::InvalidWeight(token.to_string())),
    }
}
