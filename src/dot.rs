// Copyright (c) 2016-2021 Fabian Schuiki

//! Emission of a module hierarchy as a Graphviz DOT graph.
//!
//! Every module name becomes one box, defined or not, and every instantiation
//! relation becomes one edge. Layout is left to Graphviz.

use crate::errors::{DiagBuilder, DiagResult};
use crate::svlog::Hierarchy;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// The weight of an edge in the hierarchy graph. Edges carry no label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instantiates;

impl fmt::Display for Instantiates {
    fn fmt(&self, _: &mut fmt::Formatter) -> fmt::Result {
        Ok(())
    }
}

/// Build the instantiation graph of `hierarchy`.
///
/// Nodes are added in `Hierarchy::nodes()` order, i.e. sorted by name, so the
/// node indices are stable across runs.
pub fn hierarchy_graph(hierarchy: &Hierarchy) -> DiGraph<&str, Instantiates> {
    let mut graph = DiGraph::new();
    let indices: BTreeMap<&str, NodeIndex> = hierarchy
        .nodes()
        .into_iter()
        .map(|name| (name, graph.add_node(name)))
        .collect();
    for (parent, child) in hierarchy.edges() {
        if let (Some(&parent), Some(&child)) = (indices.get(parent), indices.get(child)) {
            graph.add_edge(parent, child, Instantiates);
        }
    }
    graph
}

/// Write `hierarchy` as a DOT graph to `out`.
pub fn write_dot<W: Write>(hierarchy: &Hierarchy, out: &mut W) -> io::Result<()> {
    let graph = hierarchy_graph(hierarchy);
    writeln!(out, "// SystemVerilog Module Hierarchy")?;
    writeln!(out, "digraph {{")?;
    writeln!(out, "    node [fontname=Helvetica shape=box style=rounded]")?;
    writeln!(out, "    edge [fontname=Helvetica]")?;
    writeln!(out, "    rankdir=TB splines=ortho")?;
    write!(
        out,
        "{}",
        Dot::with_config(&graph, &[Config::EdgeNoLabel, Config::GraphContentOnly])
    )?;
    writeln!(out, "}}")
}

/// Write `hierarchy` to the file `<output>.dot`.
///
/// Returns the path of the written file.
pub fn render(hierarchy: &Hierarchy, output: &str) -> DiagResult<PathBuf> {
    let path = PathBuf::from(format!("{}.dot", output));
    let result = File::create(&path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_dot(hierarchy, &mut writer)?;
        writer.flush()
    });
    match result {
        Ok(()) => {
            debug!(
                "wrote {} nodes and {} edges to `{}`",
                hierarchy.nodes().len(),
                hierarchy.edge_count(),
                path.display()
            );
            Ok(path)
        }
        Err(err) => Err(DiagBuilder::error(format!(
            "unable to write `{}`: {}",
            path.display(),
            err
        ))
        .add_note("make sure the output directory exists and is writable")
        .add_note("use `--output` to choose a different location")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn dot(hierarchy: &Hierarchy) -> String {
        let mut buf = Vec::new();
        write_dot(hierarchy, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// The graph with all spaces removed.
    fn compact(hierarchy: &Hierarchy) -> String {
        dot(hierarchy).chars().filter(|&c| c != ' ').collect()
    }

    #[test]
    fn empty() {
        let text = dot(&Hierarchy::new());
        assert!(text.starts_with("// SystemVerilog Module Hierarchy\ndigraph {\n"));
        assert!(text.contains("rankdir=TB splines=ortho"));
        assert!(text.contains("node [fontname=Helvetica shape=box style=rounded]"));
        assert!(text.ends_with("}\n"));
        assert!(!text.contains("->"));
        assert_eq!(text.matches("digraph").count(), 1);
    }

    #[test]
    fn graph_follows_hierarchy() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.define("top");
        hierarchy.define("mid");
        hierarchy.add_child("top", "mid");
        hierarchy.add_child("top", "leaf");
        hierarchy.add_child("mid", "leaf");
        let graph = hierarchy_graph(&hierarchy);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let names: Vec<_> = graph.node_indices().map(|i| graph[i]).collect();
        assert_eq!(names, vec!["leaf", "mid", "top"]);
        assert!(graph.contains_edge(NodeIndex::new(2), NodeIndex::new(1)));
        assert!(graph.contains_edge(NodeIndex::new(2), NodeIndex::new(0)));
        assert!(graph.contains_edge(NodeIndex::new(1), NodeIndex::new(0)));
        assert!(!graph.contains_edge(NodeIndex::new(0), NodeIndex::new(2)));
    }

    #[test]
    fn nodes_and_edges() {
        let source = Source::new(
            "top.sv",
            "module leaf; endmodule\nmodule top; leaf a (); leaf b (); ip u_ip (); endmodule\n",
        );
        let diags = RefCell::new(Vec::new());
        let hierarchy = crate::svlog::extract_hierarchy(&source, &diags);
        let text = compact(&hierarchy);
        // Nodes are numbered in name order: `leaf` is 0, `top` is 1.
        assert!(text.contains("0[label=\"leaf\"]"));
        assert!(text.contains("1[label=\"top\"]"));
        assert!(text.contains("1->0"));
        assert_eq!(text.matches("->").count(), 1);
        assert_eq!(text.matches("label=").count(), 2);
    }

    #[test]
    fn undefined_children_become_nodes() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.define("top");
        hierarchy.add_child("top", "vendor_ram");
        let text = compact(&hierarchy);
        assert!(text.contains("0[label=\"top\"]"));
        assert!(text.contains("1[label=\"vendor_ram\"]"));
        assert!(text.contains("0->1"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.define("n$657");
        hierarchy.define("a\"b\\c");
        let text = compact(&hierarchy);
        assert!(text.contains("label=\"n$657\""));
        assert!(text.contains("label=\"a\\\"b\\\\c\""));
    }

    #[test]
    fn render_to_file() {
        let mut hierarchy = Hierarchy::new();
        hierarchy.define("top");
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("graph");
        let path = render(&hierarchy, base.to_str().unwrap()).unwrap();
        assert_eq!(path, dir.path().join("graph.dot"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"top\""));
    }

    #[test]
    fn render_failure() {
        let hierarchy = Hierarchy::new();
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("missing").join("graph");
        let diag = render(&hierarchy, base.to_str().unwrap()).unwrap_err();
        assert_eq!(diag.get_severity(), crate::errors::Severity::Error);
        assert!(diag.get_message().contains("unable to write"));
        assert_eq!(diag.get_segments().len(), 2);
    }
}
