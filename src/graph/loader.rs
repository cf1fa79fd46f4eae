use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::graph::Graph;
use crate::model::VertexId;

/// Load a graph description from a file.
///
/// One synchronous read of the whole source; see [`load_str`] for the
/// accepted grammar.
pub fn load_path(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = load_str(&text)?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parse a graph description.
///
/// The first line carries the vertex count N as a leading digit run; the
/// rest of that line is ignored. Each following line (at most N of them)
/// is `<vertex-id>:<neighbor-list>` with neighbors separated by commas
/// and/or whitespace. Lines without a `:` are skipped, as are any missing
/// trailing lines: un-described vertices simply keep empty neighbor lists.
///
/// The id before the `:` is read with an atoi-style leading-number scan,
/// so a non-numeric prefix names vertex 0, long-standing behavior of the
/// format that existing files rely on. Ids outside `[0, N)` skip their
/// whole line. Neighbor tokens that do not parse or fall outside `[0, N)`
/// are dropped and logged, never fatal; the returned graph never stores
/// an out-of-range neighbor.
pub fn load_str(text: &str) -> Result<Graph, LoadError> {
    let mut lines = text.lines();
    let header = lines.next().unwrap_or("");
    let vertex_count = parse_header(header)?;
    let mut graph = Graph::new(vertex_count);

    for line in lines.take(vertex_count) {
        let Some((id_part, rest)) = line.split_once(':') else {
            continue;
        };
        let owner = leading_number(id_part);
        if owner < 0 || owner as usize >= vertex_count {
            debug!(line, "owning vertex out of range, line skipped");
            continue;
        }
        let src = owner as VertexId;
        let tokens = rest
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            match token.parse::<VertexId>() {
                Ok(dest) if dest < vertex_count => graph.add_edge(src, dest),
                _ => debug!(token, "neighbor token dropped"),
            }
        }
    }

    Ok(graph)
}

fn parse_header(line: &str) -> Result<usize, LoadError> {
    let trimmed = line.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end]
        .parse()
        .map_err(|_| LoadError::MalformedHeader {
            found: line.trim().to_string(),
        })
}

/// atoi semantics: optional leading whitespace and sign, then a digit run;
/// no digits reads as zero.
fn leading_number(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return 0;
    }
    let magnitude: i64 = rest[..digits_end].parse().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
