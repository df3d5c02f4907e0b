//! Local concept-graph construction.
//!
//! A naive lexical stand-in for entity/relation extraction: "entities" are
//! capitalized tokens, and edges link tokens that are adjacent in a text's
//! first-occurrence sequence (a chain, not all-pairs).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-zA-Z0-9_\-]+\b").unwrap());

/// A node keyed by its surface string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
}

/// An undirected edge between two surface strings. Weight is fixed at 1;
/// repeated co-occurrence does not accumulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

/// Concept graph over all input texts. Node order is first appearance;
/// edge identity is the unordered string pair (first-inserted orientation
/// is the one kept).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ConceptGraph {
    /// Add a node; adding an existing node is a no-op.
    fn add_node(&mut self, seen: &mut HashSet<String>, id: &str) {
        if seen.insert(id.to_string()) {
            self.nodes.push(GraphNode { id: id.to_string() });
        }
    }

    /// Add an undirected edge; self-loops and duplicate pairs are skipped.
    fn add_edge(&mut self, seen: &mut HashSet<(String, String)>, source: &str, target: &str) {
        if source == target {
            return;
        }
        let key = if source < target {
            (source.to_string(), target.to_string())
        } else {
            (target.to_string(), source.to_string())
        };
        if seen.insert(key) {
            self.edges.push(GraphEdge {
                source: source.to_string(),
                target: target.to_string(),
                weight: 1,
            });
        }
    }
}

/// Build a concept graph from the input texts. Each text contributes its
/// deduplicated capitalized-token sequence as a chain of adjacency edges;
/// graphs from all texts merge into one global node/edge set.
pub fn build_graph<S: AsRef<str>>(texts: &[S]) -> ConceptGraph {
    let mut graph = ConceptGraph::default();
    let mut seen_nodes = HashSet::new();
    let mut seen_edges = HashSet::new();

    for text in texts {
        let mut unique: Vec<&str> = Vec::new();
        let mut seen_in_text = HashSet::new();
        for token in ENTITY.find_iter(text.as_ref()) {
            if seen_in_text.insert(token.as_str()) {
                unique.push(token.as_str());
            }
        }

        for token in &unique {
            graph.add_node(&mut seen_nodes, token);
        }
        for pair in unique.windows(2) {
            graph.add_edge(&mut seen_edges, pair[0], pair[1]);
        }
    }

    graph
}
