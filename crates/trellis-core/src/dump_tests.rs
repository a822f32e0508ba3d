use indexmap::IndexSet;

use crate::{
    Automaton, CharClass, CharMap, Complement, Links, Loop, LoopId, Node, Optional,
};

#[test]
fn single_literal_pattern() {
    let mut auto = Automaton::default();
    let pattern = auto.next_pattern();
    let g = auto.graph_mut();
    let m = g.add_node(Node::Match(pattern));
    let b = g.add_node(Node::CharMap(CharMap::matching(['b'], &Links::raw([m]))));
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([b]))));
    auto.splice(&[a]);

    insta::assert_snapshot!(auto.dump(), @r"
    N0: Gate ^ → N4
    N1: Gate → N4
    N2: Match #0
    N3: Map
        'b' → N2
        * → ∅
    N4: Map
        'a' → N3
        * → ∅
    ");
}

#[test]
fn start_anchor_only_reaches_anchored_gate() {
    let mut auto = Automaton::default();
    let first = auto.next_pattern();
    let g = auto.graph_mut();
    let m = g.add_node(Node::Match(first));
    let b = g.add_node(Node::CharMap(CharMap::matching(['b'], &Links::raw([m]))));
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([b]))));
    auto.splice(&[a]);

    let second = auto.next_pattern();
    let g = auto.graph_mut();
    let m = g.add_node(Node::Match(second));
    let c = g.add_node(Node::CharMap(CharMap::matching(['c'], &Links::raw([m]))));
    let anchor = g.add_node(Node::StartAnchor(Links::raw([c])));
    auto.splice(&[anchor]);

    insta::assert_snapshot!(auto.dump(), @r"
    N0: Gate ^ → N8
    N1: Gate → N4
    N2: Match #0
    N3: Map
        'b' → N2
        * → ∅
    N4: Map
        'a' → N3
        * → ∅
    N5: Match #1
    N8: Map
        'a' → N3
        'c' → N5
        * → ∅
    ");
}

#[test]
fn control_nodes() {
    let mut auto = Automaton::default();
    let pattern = auto.next_pattern();
    let g = auto.graph_mut();
    let m = g.add_node(Node::Match(pattern));
    let end = g.add_node(Node::EndAnchor(Links::raw([m])));
    let exit = g.add_node(Node::LoopExit {
        id: LoopId(0),
        links: Links::raw([end]),
    });
    let lp = g.add_node(Node::Loop(Loop {
        id: LoopId(0),
        lower: 1,
        upper: None,
        greedy: false,
        body: Links::new(),
        exit,
    }));
    let alpha = g.add_node(Node::Class {
        class: CharClass::Alpha,
        links: Links::raw([lp]),
    });
    g.link_from(lp, &[alpha]);
    let tag = g.add_node(Node::Tag(Links::raw([lp])));
    let not_digit = g.add_node(Node::Complement(Complement {
        chars: IndexSet::from(['x']),
        classes: vec![CharClass::Digit],
        links: Links::raw([tag]),
    }));
    let opt = g.add_node(Node::Optional(Optional {
        greedy: true,
        take: Links::raw([not_digit]),
        skip: Links::raw([tag]),
    }));
    auto.splice(&[opt]);

    insta::assert_snapshot!(auto.dump(), @r"
    N0: Gate ^ → N9
    N1: Gate → N9
    N2: Match #0
    N3: $ → N2
    N4: Exit L0 → N3
    N5: Loop L0 {1,}? → N6 | exit → N4
    N6: [:alpha:] → N5
    N7: # → N5
    N8: [^'x' [:digit:]] → N7
    N9: ? take → N8 | skip → N7
    ");
}
