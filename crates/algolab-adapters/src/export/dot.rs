//! Graphviz DOT export with an optional highlighted path.
//!
//! Output is a `digraph`: one line per vertex and one line per adjacency
//! entry labelled with its weight. Hops of the highlighted path are drawn
//! red and thicker.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use algolab_common::utils::error::Result;
use algolab_common::VertexId;
use algolab_core::Graph;
use hashbrown::HashSet;

/// Writes `graph` as DOT to `out`, highlighting consecutive hops of `path`.
pub fn write_dot<W: Write>(out: &mut W, graph: &Graph, path: &[VertexId]) -> Result<()> {
    let hops: HashSet<(VertexId, VertexId)> =
        path.windows(2).map(|hop| (hop[0], hop[1])).collect();

    writeln!(out, "digraph G {{")?;
    writeln!(out, "  rankdir=LR;")?;
    writeln!(out, "  node [shape=circle, style=filled, fillcolor=white];")?;

    for v in 0..graph.vertex_count() {
        writeln!(out, "  {v} [label=\"{v}\"];")?;
    }

    for (u, edge) in graph.edges() {
        if hops.contains(&(u, edge.to)) {
            writeln!(
                out,
                "  {u} -> {} [label=\"{:.2}\", color=red, penwidth=2.5];",
                edge.to, edge.weight
            )?;
        } else {
            writeln!(out, "  {u} -> {} [label=\"{:.2}\"];", edge.to, edge.weight)?;
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}

/// Renders `graph` as a DOT string.
pub fn to_dot_string(graph: &Graph, path: &[VertexId]) -> Result<String> {
    let mut buf = Vec::new();
    write_dot(&mut buf, graph, path)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes `graph` as DOT to the file at `file`, replacing it if present.
pub fn export_dot(file: impl AsRef<Path>, graph: &Graph, path: &[VertexId]) -> Result<()> {
    let mut out = BufWriter::new(File::create(file.as_ref())?);
    write_dot(&mut out, graph, path)?;
    out.flush()?;
    tracing::debug!(file = %file.as_ref().display(), "dot file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    fn triangle() -> Graph {
        let mut g = Graph::new(3);
        g.add_edge(v(0), v(1), 4.0).unwrap();
        g.add_edge(v(1), v(2), 1.5).unwrap();
        g.add_edge(v(0), v(2), 10.0).unwrap();
        g
    }

    #[test]
    fn test_dot_layout() {
        let dot = to_dot_string(&triangle(), &[v(0), v(1), v(2)]).unwrap();
        let expected = "\
digraph G {
  rankdir=LR;
  node [shape=circle, style=filled, fillcolor=white];
  0 [label=\"0\"];
  1 [label=\"1\"];
  2 [label=\"2\"];
  0 -> 1 [label=\"4.00\", color=red, penwidth=2.5];
  0 -> 2 [label=\"10.00\"];
  1 -> 2 [label=\"1.50\", color=red, penwidth=2.5];
}
";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_no_path_no_highlight() {
        let dot = to_dot_string(&triangle(), &[]).unwrap();
        assert!(!dot.contains("color=red"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("graph.dot");
        export_dot(&file, &triangle(), &[v(0), v(2)]).unwrap();

        let written = std::fs::read_to_string(&file).unwrap();
        assert!(written.contains("0 -> 2 [label=\"10.00\", color=red, penwidth=2.5];"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let err = write_dot(&mut BrokenPipe, &triangle(), &[]).unwrap_err();
        assert!(matches!(err, algolab_common::Error::Io(_)));
    }
}
