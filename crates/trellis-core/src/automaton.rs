//! The shared graph of a pattern set.

use crate::graph::Graph;
use crate::node::{Links, LoopId, Node, NodeId, PatternId};

/// Compiled graph for a set of patterns, with two entry gates.
///
/// The anchored gate starts the partial match at input position 0 and is the
/// only way into `^`-prefixed alternatives. The floating gate starts every
/// later partial match.
#[derive(Clone, Debug)]
pub struct Automaton {
    graph: Graph,
    anchored: NodeId,
    floating: NodeId,
    patterns: u32,
    loops: u32,
}

/// Allocation state to roll back to when a pattern fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    nodes: usize,
    patterns: u32,
    loops: u32,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Automaton {
    pub fn new(merge_maps: bool) -> Self {
        let mut graph = Graph::new(merge_maps);
        let anchored = graph.add_node(Node::Gate(Links::new()));
        let floating = graph.add_node(Node::Gate(Links::new()));
        Self {
            graph,
            anchored,
            floating,
            patterns: 0,
            loops: 0,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn anchored_gate(&self) -> NodeId {
        self.anchored
    }

    pub fn floating_gate(&self) -> NodeId {
        self.floating
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns as usize
    }

    /// Reserves the id of the next pattern. Ids follow declaration order.
    pub fn next_pattern(&mut self) -> PatternId {
        let id = PatternId(self.patterns);
        self.patterns += 1;
        id
    }

    pub fn next_loop(&mut self) -> LoopId {
        let id = LoopId(self.loops);
        self.loops += 1;
        id
    }

    pub fn loop_count(&self) -> usize {
        self.loops as usize
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            nodes: self.graph.len(),
            patterns: self.patterns,
            loops: self.loops,
        }
    }

    /// Forgets everything allocated since `checkpoint`.
    ///
    /// The gates must not have been touched since; `splice` is the last step
    /// of adding a pattern and cannot fail.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.graph.truncate(checkpoint.nodes);
        self.patterns = checkpoint.patterns;
        self.loops = checkpoint.loops;
    }

    /// Connects the entry nodes of a freshly compiled pattern to the gates.
    ///
    /// A `^` entry only continues from the anchored gate; everything else is
    /// reachable from both.
    pub fn splice(&mut self, entries: &[NodeId]) {
        for &entry in entries {
            if matches!(self.graph.node(entry), Node::StartAnchor(_)) {
                let links = self.graph.share_links(entry);
                self.graph.link_from(self.anchored, links.as_slice());
            } else {
                self.graph.link_from(self.floating, &[entry]);
                self.graph.link_from(self.anchored, &[entry]);
            }
        }
    }
}
