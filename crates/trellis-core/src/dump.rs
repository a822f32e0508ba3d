//! Textual listing of a compiled graph.
//!
//! Only nodes reachable from the gates are listed, in allocation order, one
//! per line. Character maps list their table on indented lines below.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::automaton::Automaton;
use crate::colors::Colors;
use crate::node::{Links, Node, NodeId};

impl Automaton {
    pub fn dump(&self) -> String {
        self.dump_with(Colors::OFF)
    }

    pub fn dump_with(&self, colors: Colors) -> String {
        let mut out = String::new();
        for id in self.reachable() {
            write_node(&mut out, self, id, colors);
        }
        out
    }

    fn reachable(&self) -> BTreeSet<NodeId> {
        let mut seen = BTreeSet::new();
        let mut stack = vec![self.anchored_gate(), self.floating_gate()];
        while let Some(id) = stack.pop() {
            if seen.insert(id) {
                stack.extend(self.graph().node(id).targets());
            }
        }
        seen
    }
}

fn write_node(out: &mut String, automaton: &Automaton, id: NodeId, c: Colors) {
    let head = c.node(id);
    let line = match automaton.graph().node(id) {
        Node::Match(pattern) => format!("Match {}#{}{}", c.blue, pattern.0, c.reset),
        Node::Gate(links) => {
            let name = if id == automaton.anchored_gate() {
                "Gate ^"
            } else {
                "Gate"
            };
            format!("{name}{}", arrow(links, c))
        }
        Node::StartAnchor(links) => format!("^{}", arrow(links, c)),
        Node::Tag(links) => format!("#{}", arrow(links, c)),
        Node::EndAnchor(links) => format!("${}", arrow(links, c)),
        Node::Optional(opt) => format!(
            "{} take{} {}|{} skip{}",
            if opt.greedy { "?" } else { "??" },
            arrow(&opt.take, c),
            c.dim,
            c.reset,
            arrow(&opt.skip, c),
        ),
        Node::Loop(lp) => {
            let upper = lp.upper.map(|n| n.to_string()).unwrap_or_default();
            let bound = if lp.upper == Some(lp.lower) {
                format!("{{{}}}", lp.lower)
            } else {
                format!("{{{},{upper}}}", lp.lower)
            };
            format!(
                "Loop L{} {bound}{}{} {}|{} exit → {}",
                lp.id.0,
                if lp.greedy { "" } else { "?" },
                arrow(&lp.body, c),
                c.dim,
                c.reset,
                c.node(lp.exit),
            )
        }
        Node::LoopExit { id: loop_id, links } => format!("Exit L{}{}", loop_id.0, arrow(links, c)),
        Node::Class { class, links } => format!("{class}{}", arrow(links, c)),
        Node::Complement(complement) => {
            let mut items: Vec<String> = complement.chars.iter().map(|&ch| c.char(ch)).collect();
            items.extend(complement.classes.iter().map(|class| class.to_string()));
            format!("[^{}]{}", items.join(" "), arrow(&complement.links, c))
        }
        Node::CharMap(map) => {
            writeln!(out, "{head}: Map").expect("String write never fails");
            for (ch, links) in map.entries() {
                writeln!(out, "    {}{}", c.char(ch), arrow(links, c))
                    .expect("String write never fails");
            }
            writeln!(out, "    *{}", arrow(map.default_links(), c))
                .expect("String write never fails");
            return;
        }
    };
    writeln!(out, "{head}: {line}").expect("String write never fails");
}

fn arrow(links: &Links, c: Colors) -> String {
    if links.is_empty() {
        return format!(" {}→ ∅{}", c.dim, c.reset);
    }
    let targets: Vec<String> = links.iter().map(|id| c.node(id)).collect();
    format!(" {}→{} {}", c.dim, c.reset, targets.join(", "))
}
