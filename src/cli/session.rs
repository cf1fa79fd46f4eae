use std::io::{self, BufRead, Write};

use crate::graph::{Graph, Reachability};
use crate::model::VertexId;

/// Counters from one interactive session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Queries answered by the engine.
    pub answered: usize,
    /// Inputs rejected at the boundary, before the engine was consulted.
    pub rejected: usize,
}

enum Entry {
    Eof,
    Invalid,
    Value(VertexId),
}

/// Run the prompt loop against `graph`.
///
/// Start and end vertices are validated against `[0, vertex_count)`
/// before the engine runs; invalid input is reported and the loop
/// continues. The session ends when the user answers anything but `y`/`Y`
/// to the continue prompt, or when `input` reaches end of file. A graph
/// with no vertices admits no queries and ends immediately.
pub fn run(
    graph: &Graph,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<SessionStats> {
    let mut stats = SessionStats::default();
    if graph.vertex_count() == 0 {
        writeln!(output, "Graph has no vertices; nothing to query.")?;
        return Ok(stats);
    }

    let mut engine = Reachability::new();
    let max = graph.vertex_count() - 1;

    loop {
        let start = prompt_vertex(input, output, &format!("Enter start vertex (0-{max}): "))?;
        if matches!(start, Entry::Eof) {
            break;
        }
        let end = prompt_vertex(input, output, &format!("Enter end vertex (0-{max}): "))?;
        if matches!(end, Entry::Eof) {
            break;
        }

        match (start, end) {
            (Entry::Value(start), Entry::Value(end))
                if graph.contains(start) && graph.contains(end) =>
            {
                let verdict = if engine.path_exists(graph, start, end) {
                    "exists"
                } else {
                    "does not exist"
                };
                writeln!(output, "Path from {start} to {end}: {verdict}")?;
                stats.answered += 1;
            }
            _ => {
                writeln!(output, "Error: vertices must be between 0 and {max}")?;
                stats.rejected += 1;
            }
        }

        writeln!(output)?;
        write!(output, "Check another path? (y/n): ")?;
        output.flush()?;
        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            break;
        }
        writeln!(output)?;
        if !matches!(answer.trim(), "y" | "Y") {
            break;
        }
    }

    Ok(stats)
}

fn prompt_vertex(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> io::Result<Entry> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Entry::Eof);
    }
    Ok(match line.trim().parse::<VertexId>() {
        Ok(value) => Entry::Value(value),
        Err(_) => Entry::Invalid,
    })
}
