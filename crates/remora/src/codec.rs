//! Persistence codec for the two text layouts.
//!
//! A clean graph (one that still matches its last canonical load) saves with
//! a `"<vertex_count> <edge_count>"` header followed by one edge line per
//! edge. A dirty graph saves its edge lines without a header and gathers the
//! isolated vertices on a final line. Decoding dispatches on token count per
//! line, so an isolated list of exactly 2 or 3 entries is padded to 4 with
//! `-1` sentinels before writing; otherwise it would read back as a header
//! or edge line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};

/// Sentinel padding value; never decoded as a real vertex.
const FILLER: VertexId = -1;

/// Reads the graph stored at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = decode(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

/// Writes `graph` to `path` in the layout selected by its dirty flag.
pub fn save(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode(graph, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), dirty = graph.is_dirty(), "saved graph");
    Ok(())
}

/// Decodes lines of whitespace-separated integers into a graph.
///
/// Dispatch is by token count: 2 tokens declare the vertex count and mark the
/// canonical layout (the declared edge count is not validated), 3 tokens
/// upsert an edge `(from, to, cost)` creating missing endpoints, and any
/// other count lists isolated vertices with `-1` entries ignored. The three
/// shapes may appear mixed in any order; without a 2-token line the decoded
/// graph stays dirty.
pub fn decode(reader: impl BufRead) -> Result<Graph> {
    let mut graph = Graph::new();
    graph.set_dirty(true);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens = parse_tokens(&line, idx + 1)?;
        match tokens.as_slice() {
            &[vertex_count, _declared_edges] => {
                for v in 0..vertex_count {
                    graph.ensure_vertex(v);
                }
                graph.set_dirty(false);
            }
            &[from, to, cost] => graph.upsert_edge(from, to, cost),
            isolated => {
                for &v in isolated {
                    if v != FILLER {
                        graph.ensure_vertex(v);
                    }
                }
            }
        }
    }

    Ok(graph)
}

/// Encodes `graph` in the layout selected by its dirty flag.
pub fn encode(graph: &Graph, mut writer: impl Write) -> Result<()> {
    if !graph.is_dirty() {
        writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
        for (edge, cost) in graph.edges() {
            writeln!(writer, "{} {} {}", edge.from, edge.to, cost)?;
        }
        return Ok(());
    }

    for (edge, cost) in graph.edges() {
        writeln!(writer, "{} {} {}", edge.from, edge.to, cost)?;
    }

    let mut isolated = graph.isolated_vertices();
    if isolated.len() == 2 || isolated.len() == 3 {
        isolated.resize(4, FILLER);
    }
    if !isolated.is_empty() {
        let line = isolated
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        // Final line, deliberately without a trailing newline.
        write!(writer, "{line}")?;
    }
    Ok(())
}

fn parse_tokens(line: &str, line_no: usize) -> Result<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| Error::MalformedFile {
                line: line_no,
                source,
            })
        })
        .collect()
}
