//! Node arena and link-list construction.
//!
//! Links are always added through [`Graph::add_link`], which keeps character
//! maps in front of every other node of a list. With merging on there is at
//! most one map per list: maps arriving later are merged into the front map,
//! so a run of alternatives starting with literal characters is dispatched
//! with a single table lookup. With merging off the maps stay separate, in
//! arrival order, and branches are still explored in the same order.

use indexmap::IndexMap;

use crate::node::{CharMap, Links, Node, NodeId};

#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    merge_maps: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Graph {
    /// With `merge_maps` off, `add_link` places character maps but never
    /// merges them.
    pub fn new(merge_maps: bool) -> Self {
        Self {
            nodes: Vec::new(),
            merge_maps,
        }
    }

    pub fn merges_maps(&self) -> bool {
        self.merge_maps
    }

    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(id, node)| (id as NodeId, node))
    }

    /// Drops every node allocated after the arena had `len` nodes.
    ///
    /// Only valid when nothing below `len` links to the dropped nodes.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    pub fn add_links(&mut self, links: &mut Links, ids: &[NodeId]) {
        for &id in ids {
            self.add_link(links, id);
        }
    }

    pub fn add_link(&mut self, links: &mut Links, id: NodeId) {
        if links.is_empty() || !self.node(id).is_char_map() {
            links.push(id);
            return;
        }

        let head = links.as_slice()[0];
        if !self.node(head).is_char_map() {
            links.insert_front(id);
            return;
        }
        if !self.merge_maps {
            let maps = links
                .iter()
                .take_while(|&link| self.node(link).is_char_map())
                .count();
            links.insert(maps, id);
            return;
        }

        let head = if links.owns_head() {
            head
        } else {
            let promoted = self.promote(head);
            links.replace_head(promoted);
            promoted
        };
        self.merge_into(head, id);
    }

    /// Appends `ids` to the primary outgoing list of `from`.
    ///
    /// Panics if `from` has no single outgoing list.
    pub fn link_from(&mut self, from: NodeId, ids: &[NodeId]) {
        let mut links = std::mem::take(self.outgoing_mut(from));
        self.add_links(&mut links, ids);
        *self.outgoing_mut(from) = links;
    }

    /// Shared copy of the primary outgoing list of `from`.
    pub fn share_links(&mut self, from: NodeId) -> Links {
        self.outgoing_mut(from).share()
    }

    fn outgoing_mut(&mut self, id: NodeId) -> &mut Links {
        match self.nodes[id as usize].links_mut() {
            Some(links) => links,
            None => panic!("N{id} has no primary link list"),
        }
    }

    /// Allocates a private copy of the map at `id`.
    fn promote(&mut self, id: NodeId) -> NodeId {
        let copy = match &mut self.nodes[id as usize] {
            Node::CharMap(map) => share_map(map),
            other => panic!("N{id} is not a character map: {other:?}"),
        };
        self.add_node(Node::CharMap(copy))
    }

    /// Merges the map at `src` into the privately owned map at `dst`.
    ///
    /// A character present in only one of the two maps picks up the other
    /// map's default, so the merged map accepts exactly what either did.
    fn merge_into(&mut self, dst: NodeId, src: NodeId) {
        let (src_entries, src_default) = match self.node(src) {
            Node::CharMap(map) => (
                map.entries
                    .iter()
                    .map(|(&ch, links)| (ch, links.as_slice().to_vec()))
                    .collect::<IndexMap<_, _>>(),
                map.default.as_slice().to_vec(),
            ),
            other => panic!("N{src} is not a character map: {other:?}"),
        };

        let mut map = match &mut self.nodes[dst as usize] {
            Node::CharMap(map) => std::mem::take(map),
            other => panic!("N{dst} is not a character map: {other:?}"),
        };

        for (ch, links) in map.entries.iter_mut() {
            let extra = src_entries.get(ch).unwrap_or(&src_default);
            self.add_links(links, extra);
        }
        for (ch, ids) in &src_entries {
            if map.entries.contains_key(ch) {
                continue;
            }
            let mut links = map.default.share();
            self.add_links(&mut links, ids);
            map.entries.insert(*ch, links);
        }
        let mut default = std::mem::take(&mut map.default);
        self.add_links(&mut default, &src_default);
        map.default = default;

        self.nodes[dst as usize] = Node::CharMap(map);
    }
}

/// Copies `map` so that no nested list of either copy owns its head.
fn share_map(map: &mut CharMap) -> CharMap {
    CharMap {
        entries: map
            .entries
            .iter_mut()
            .map(|(&ch, links)| (ch, links.share()))
            .collect(),
        default: map.default.share(),
    }
}
