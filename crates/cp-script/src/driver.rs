//! Script driver: reads commands, mutates named graphs, writes results.
//!
//! # Script format
//!
//! One command per line, tokens separated by whitespace.  Blank lines and
//! lines starting with `#` are copied to the output unchanged.
//!
//! ```text
//! CreateGraph g                 created graph g
//! AddNode g n                   added node n to g
//! AddEdge g p c w               added edge w from p to c in g
//! ListNodes g                   g contains: a b c
//! ListChildren g p              the children of p in  g are: c(w) ...
//! FindPath g a b                path from a to b: ... total cost: w
//! ```
//!
//! All weights print with three decimals, rounded half up from their
//! shortest decimal form (`0.0625` prints as `0.063`).  A line that cannot be executed
//! prints `Exception: <message>` and the run continues with the next line.

use std::io::{BufRead, Write};

use rustc_hash::FxHashMap;
use tracing::debug;

use cp_graph::{dijkstra, Graph};

use crate::command::Command;
use crate::{ScriptError, ScriptResult};

/// Graphs built by a script.  Node labels are strings, edge labels are
/// distances.
pub type ScriptGraph = Graph<String, f64>;

/// Executes script lines against a set of named graphs.
#[derive(Debug)]
pub struct ScriptDriver<W> {
    graphs: FxHashMap<String, ScriptGraph>,
    output: W,
}

impl<W: Write> ScriptDriver<W> {
    pub fn new(output: W) -> Self {
        Self { graphs: FxHashMap::default(), output }
    }

    /// Execute every line of `input` in order.
    ///
    /// Only I/O errors end the run early; per-line errors are printed.
    pub fn run<R: BufRead>(&mut self, input: R) -> ScriptResult<()> {
        for line in input.lines() {
            self.execute_line(&line?)?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Execute a single script line.
    pub fn execute_line(&mut self, line: &str) -> ScriptResult<()> {
        if line.trim().is_empty() || line.starts_with('#') {
            writeln!(self.output, "{line}")?;
            return Ok(());
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        debug!(command = tokens[0], args = tokens.len() - 1, "script command");

        match Command::parse(&tokens).and_then(|cmd| self.execute(cmd)) {
            Ok(()) => Ok(()),
            Err(e @ ScriptError::Io(_)) => Err(e),
            Err(e @ ScriptError::Unrecognized(_)) => {
                writeln!(self.output, "{e}")?;
                Ok(())
            }
            Err(e) => {
                writeln!(self.output, "Exception: {e}")?;
                Ok(())
            }
        }
    }

    /// The graph a script created under `name`.
    pub fn graph(&self, name: &str) -> Option<&ScriptGraph> {
        self.graphs.get(name)
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    // ── Commands ──────────────────────────────────────────────────────────

    fn execute(&mut self, cmd: Command) -> ScriptResult<()> {
        match cmd {
            Command::CreateGraph { graph } => {
                // Re-creating a graph replaces it with an empty one.
                self.graphs.insert(graph.clone(), Graph::new());
                writeln!(self.output, "created graph {graph}")?;
            }

            Command::AddNode { graph: name, node } => {
                let g = lookup(&mut self.graphs, &name)?;
                g.add_node(node.clone());
                writeln!(self.output, "added node {node} to {name}")?;
            }

            Command::AddEdge { graph: name, parent, child, weight } => {
                let g = lookup(&mut self.graphs, &name)?;
                for label in [&parent, &child] {
                    if !g.contains_node(label.as_str()) {
                        return Err(ScriptError::UnknownNode(label.clone()));
                    }
                }
                g.add_edge(parent.as_str(), child.as_str(), weight);
                writeln!(
                    self.output,
                    "added edge {} from {parent} to {child} in {name}",
                    three_decimals(weight)
                )?;
            }

            Command::ListNodes { graph: name } => {
                let g = lookup(&mut self.graphs, &name)?;
                let mut labels: Vec<&str> = g.nodes().map(|n| n.label().as_str()).collect();
                labels.sort_unstable();
                let mut line = format!("{name} contains:");
                for label in labels {
                    line.push(' ');
                    line.push_str(label);
                }
                writeln!(self.output, "{line}")?;
            }

            Command::ListChildren { graph: name, parent } => {
                let g = lookup(&mut self.graphs, &name)?;
                let mut children: Vec<(&String, f64)> = g
                    .children(parent.as_str())
                    .ok_or_else(|| ScriptError::UnknownNode(parent.clone()))?
                    .map(|(dest, &w)| (dest, w))
                    .collect();
                children.sort_by(|a, b| a.0.cmp(b.0).then(a.1.total_cmp(&b.1)));
                let mut line = format!("the children of {parent} in  {name} are:");
                for (dest, w) in children {
                    line.push_str(&format!(" {dest}({})", three_decimals(w)));
                }
                writeln!(self.output, "{line}")?;
            }

            Command::FindPath { graph: name, start, end } => {
                let g = lookup(&mut self.graphs, &name)?;
                let mut missing = false;
                for label in [&start, &end] {
                    if !g.contains_node(label.as_str()) {
                        writeln!(self.output, "unknown node {label}")?;
                        missing = true;
                    }
                }
                if missing {
                    return Ok(());
                }

                writeln!(self.output, "path from {start} to {end}:")?;
                match dijkstra(g, &start, &end)? {
                    Some(path) => {
                        for seg in &path {
                            writeln!(
                                self.output,
                                "{} to {} with weight {}",
                                seg.start,
                                seg.end,
                                three_decimals(seg.weight)
                            )?;
                        }
                        writeln!(self.output, "total cost: {}", three_decimals(path.cost()))?;
                    }
                    None => writeln!(self.output, "path not found")?,
                }
            }
        }
        Ok(())
    }
}

fn lookup<'a>(
    graphs: &'a mut FxHashMap<String, ScriptGraph>,
    name: &str,
) -> ScriptResult<&'a mut ScriptGraph> {
    graphs
        .get_mut(name)
        .ok_or_else(|| ScriptError::UnknownGraph(name.to_string()))
}

/// `w` with exactly three decimals.
///
/// Rounding works on the shortest decimal form of `w` (what `{}` prints) and
/// goes half up, so `0.0625` becomes `0.063` and `1.0005` becomes `1.001`.
pub(crate) fn three_decimals(w: f64) -> String {
    if w.is_nan() {
        return "NaN".to_string();
    }
    if w.is_infinite() {
        return if w > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let shortest = w.to_string();
    let (sign, unsigned) = match shortest.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", shortest.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if frac_part.len() <= 3 {
        return format!("{sign}{int_part}.{frac_part:0<3}");
    }

    // Digits of the value scaled by 1000, then rounded on the fourth decimal.
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(3)).collect();
    if frac_part.as_bytes()[3] >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 3;
    let (int_digits, frac_digits) = digits.split_at(split);
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(int_digits),
        String::from_utf8_lossy(frac_digits)
    )
}

/// Run a whole script held in memory and return everything it printed.
pub fn run_script(script: &str) -> ScriptResult<String> {
    let mut driver = ScriptDriver::new(Vec::new());
    driver.run(script.as_bytes())?;
    Ok(String::from_utf8_lossy(&driver.into_inner()).into_owned())
}
