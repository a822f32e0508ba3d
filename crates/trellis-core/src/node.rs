//! Node types of the compiled graph.
//!
//! Every node belongs to one of four kinds, which decide how the matcher
//! treats it while expanding a partial match:
//! - Match: records a candidate result
//! - Control: epsilon node, replaced by its successors immediately
//! - Transition: zero-width node that needs the current character
//! - Character: consumes one input character

use indexmap::{IndexMap, IndexSet};

use crate::class::CharClass;

/// Index into the graph's node arena.
pub type NodeId = u32;

/// Declaration index of a pattern. Lower ids win ties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct PatternId(pub u32);

impl PatternId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of one repetition; keys the per-branch iteration counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoopId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Match,
    Control,
    Transition,
    Character,
}

/// Ordered outgoing link list.
///
/// `owns_head` is set when the first element is a character map created by a
/// merge into this very list and not referenced from anywhere else, which is
/// the only case where later merges may update that map in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Links {
    ids: Vec<NodeId>,
    owns_head: bool,
}

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links taken verbatim, without character-map merging.
    pub fn raw(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            owns_head: false,
        }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, NodeId>> {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.ids.first().copied()
    }

    /// Copy of the list that may be stored elsewhere.
    ///
    /// Once shared, neither copy owns its head any more.
    pub fn share(&mut self) -> Links {
        self.owns_head = false;
        self.clone()
    }

    /// Concatenates `other` without merging.
    pub fn append(&mut self, other: &Links) {
        self.ids.extend_from_slice(&other.ids);
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.ids.push(id);
    }

    pub(crate) fn insert_front(&mut self, id: NodeId) {
        self.ids.insert(0, id);
        self.owns_head = false;
    }

    /// Inserts at `index`. Past the head, ownership of the head is unchanged.
    pub(crate) fn insert(&mut self, index: usize, id: NodeId) {
        if index == 0 {
            self.insert_front(id);
        } else {
            self.ids.insert(index, id);
        }
    }

    pub(crate) fn replace_head(&mut self, id: NodeId) {
        self.ids[0] = id;
        self.owns_head = true;
    }

    pub(crate) fn owns_head(&self) -> bool {
        self.owns_head
    }
}

impl<'a> IntoIterator for &'a Links {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Character-consuming node: a table from characters to continuations, with
/// a default for characters missing from the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharMap {
    pub(crate) entries: IndexMap<char, Links>,
    pub(crate) default: Links,
}

impl CharMap {
    /// Accepts exactly `chars`, each continuing with `links`.
    pub fn matching(chars: impl IntoIterator<Item = char>, links: &Links) -> Self {
        let entries = chars.into_iter().map(|ch| (ch, links.clone())).collect();
        Self {
            entries,
            default: Links::new(),
        }
    }

    /// Accepts anything but `chars`.
    pub fn excluding(chars: impl IntoIterator<Item = char>, links: &Links) -> Self {
        let entries = chars.into_iter().map(|ch| (ch, Links::new())).collect();
        Self {
            entries,
            default: links.clone(),
        }
    }

    pub fn lookup(&self, ch: char) -> &Links {
        self.entries.get(&ch).unwrap_or(&self.default)
    }

    pub fn entries(&self) -> impl Iterator<Item = (char, &Links)> {
        self.entries.iter().map(|(&ch, links)| (ch, links))
    }

    pub fn default_links(&self) -> &Links {
        &self.default
    }
}

/// Negated bracket expression that mixes characters and named classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Complement {
    pub chars: IndexSet<char>,
    pub classes: Vec<CharClass>,
    pub links: Links,
}

impl Complement {
    pub fn accepts(&self, ch: char) -> bool {
        !self.chars.contains(&ch) && !self.classes.iter().any(|class| class.matches(ch))
    }
}

/// `x?` and its reluctant form `x??`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optional {
    pub greedy: bool,
    pub take: Links,
    pub skip: Links,
}

impl Optional {
    /// Successors in preference order.
    pub fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        let (first, second) = if self.greedy {
            (&self.take, &self.skip)
        } else {
            (&self.skip, &self.take)
        };
        first.iter().chain(second.iter())
    }
}

/// What to do on entering a loop node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopStep {
    /// Minimum not reached yet.
    Body,
    /// Maximum reached, or the minimum was just reached without consuming input.
    Exit,
    /// Both are allowed; order depends on greediness.
    Both,
    /// An extra iteration consumed nothing. The branch dies.
    Halt,
}

/// Bounded or unbounded repetition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loop {
    pub id: LoopId,
    pub lower: u32,
    pub upper: Option<u32>,
    pub greedy: bool,
    pub body: Links,
    pub exit: NodeId,
}

impl Loop {
    /// `count` is the number of completed iterations; `stalled` tells whether
    /// the input position equals the one seen on the previous entry.
    pub fn step(&self, count: u32, stalled: bool) -> LoopStep {
        if self.upper.is_some_and(|upper| count >= upper) {
            return LoopStep::Exit;
        }
        if count < self.lower {
            return LoopStep::Body;
        }
        if !stalled {
            return LoopStep::Both;
        }
        if count == self.lower {
            LoopStep::Exit
        } else {
            LoopStep::Halt
        }
    }

    /// Appends the successors for `step` in preference order.
    pub fn successors(&self, step: LoopStep, out: &mut Vec<NodeId>) {
        match step {
            LoopStep::Body => out.extend(self.body.iter()),
            LoopStep::Exit => out.push(self.exit),
            LoopStep::Both if self.greedy => {
                out.extend(self.body.iter());
                out.push(self.exit);
            }
            LoopStep::Both => {
                out.push(self.exit);
                out.extend(self.body.iter());
            }
            LoopStep::Halt => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Accepting node of one pattern.
    Match(PatternId),
    /// Entry point; the matcher starts every partial match here.
    Gate(Links),
    /// `^`: passes only at input position 0.
    StartAnchor(Links),
    /// `#`: records the current position.
    Tag(Links),
    Optional(Optional),
    Loop(Loop),
    /// Leaves a loop, dropping its iteration counter.
    LoopExit { id: LoopId, links: Links },
    /// `$`: passes only at end of input.
    EndAnchor(Links),
    CharMap(CharMap),
    /// `.` or a named class inside brackets.
    Class { class: CharClass, links: Links },
    Complement(Complement),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Match(_) => NodeKind::Match,
            Node::Gate(_)
            | Node::StartAnchor(_)
            | Node::Tag(_)
            | Node::Optional(_)
            | Node::Loop(_)
            | Node::LoopExit { .. } => NodeKind::Control,
            Node::EndAnchor(_) => NodeKind::Transition,
            Node::CharMap(_) | Node::Class { .. } | Node::Complement(_) => NodeKind::Character,
        }
    }

    pub fn is_char_map(&self) -> bool {
        matches!(self, Node::CharMap(_))
    }

    /// The outgoing list of nodes that have exactly one.
    pub fn links(&self) -> Option<&Links> {
        match self {
            Node::Gate(links)
            | Node::StartAnchor(links)
            | Node::Tag(links)
            | Node::LoopExit { links, .. }
            | Node::EndAnchor(links)
            | Node::Class { links, .. }
            | Node::Complement(Complement { links, .. }) => Some(links),
            Node::Loop(lp) => Some(&lp.body),
            Node::Match(_) | Node::Optional(_) | Node::CharMap(_) => None,
        }
    }

    pub(crate) fn links_mut(&mut self) -> Option<&mut Links> {
        match self {
            Node::Gate(links)
            | Node::StartAnchor(links)
            | Node::Tag(links)
            | Node::LoopExit { links, .. }
            | Node::EndAnchor(links)
            | Node::Class { links, .. }
            | Node::Complement(Complement { links, .. }) => Some(links),
            Node::Loop(lp) => Some(&mut lp.body),
            Node::Match(_) | Node::Optional(_) | Node::CharMap(_) => None,
        }
    }

    /// Every node this one can reach in one step, in no particular order.
    pub fn targets(&self) -> Vec<NodeId> {
        match self {
            Node::Match(_) => Vec::new(),
            Node::Optional(opt) => opt.take.iter().chain(opt.skip.iter()).collect(),
            Node::Loop(lp) => lp.body.iter().chain([lp.exit]).collect(),
            Node::CharMap(map) => map
                .entries
                .values()
                .flat_map(|links| links.iter())
                .chain(map.default.iter())
                .collect(),
            node => node.links().map(|links| links.iter().collect()).unwrap_or_default(),
        }
    }
}
