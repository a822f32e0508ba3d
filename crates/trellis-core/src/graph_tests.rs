use crate::{CharMap, Graph, Links, Node, NodeId, PatternId};

fn matches(g: &mut Graph, n: u32) -> NodeId {
    g.add_node(Node::Match(PatternId(n)))
}

fn map_of(g: &Graph, id: NodeId) -> &CharMap {
    match g.node(id) {
        Node::CharMap(map) => map,
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn second_map_is_merged_into_a_private_copy() {
    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let m1 = matches(&mut g, 1);
    let ab = g.add_node(Node::CharMap(CharMap::matching(['a', 'b'], &Links::raw([m0]))));
    let bc = g.add_node(Node::CharMap(CharMap::matching(['b', 'c'], &Links::raw([m1]))));

    let mut links = Links::new();
    g.add_link(&mut links, ab);
    assert_eq!(links.as_slice(), &[ab]);
    g.add_link(&mut links, bc);

    let merged = links.first().unwrap();
    assert_eq!(links.len(), 1);
    assert_ne!(merged, ab);

    let map = map_of(&g, merged);
    assert_eq!(map.lookup('a').as_slice(), &[m0]);
    assert_eq!(map.lookup('b').as_slice(), &[m0, m1]);
    assert_eq!(map.lookup('c').as_slice(), &[m1]);
    assert!(map.lookup('z').is_empty());

    // the source maps are untouched
    assert_eq!(map_of(&g, ab).lookup('b').as_slice(), &[m0]);
    assert!(map_of(&g, ab).lookup('c').is_empty());
}

#[test]
fn owned_map_is_updated_in_place() {
    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([m0]))));
    let b = g.add_node(Node::CharMap(CharMap::matching(['b'], &Links::raw([m0]))));
    let c = g.add_node(Node::CharMap(CharMap::matching(['c'], &Links::raw([m0]))));

    let mut links = Links::new();
    g.add_links(&mut links, &[a, b]);
    let nodes = g.len();
    g.add_link(&mut links, c);

    assert_eq!(g.len(), nodes);
    let keys: String = map_of(&g, links.first().unwrap())
        .entries()
        .map(|(ch, _)| ch)
        .collect();
    assert_eq!(keys, "abc");
}

#[test]
fn shared_list_stops_owning_its_map() {
    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([m0]))));
    let b = g.add_node(Node::CharMap(CharMap::matching(['b'], &Links::raw([m0]))));
    let c = g.add_node(Node::CharMap(CharMap::matching(['c'], &Links::raw([m0]))));

    let mut links = Links::new();
    g.add_links(&mut links, &[a, b]);
    let copy = links.share();
    g.add_link(&mut links, c);

    assert_ne!(links.first(), copy.first());
    assert!(map_of(&g, copy.first().unwrap()).lookup('c').is_empty());
    assert_eq!(
        map_of(&g, links.first().unwrap()).lookup('c').as_slice(),
        &[m0]
    );
}

#[test]
fn map_moves_in_front_of_other_links() {
    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let tag = g.add_node(Node::Tag(Links::raw([m0])));
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([m0]))));

    let mut links = Links::new();
    g.add_links(&mut links, &[m0, tag, a]);
    assert_eq!(links.as_slice(), &[a, m0, tag]);
}

#[test]
fn defaults_fill_missing_keys() {
    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let m1 = matches(&mut g, 1);
    let not_x = g.add_node(Node::CharMap(CharMap::excluding(['x'], &Links::raw([m0]))));
    let xy = g.add_node(Node::CharMap(CharMap::matching(['x', 'y'], &Links::raw([m1]))));

    let mut links = Links::new();
    g.add_links(&mut links, &[not_x, xy]);

    let map = map_of(&g, links.first().unwrap());
    assert_eq!(map.lookup('x').as_slice(), &[m1]);
    assert_eq!(map.lookup('y').as_slice(), &[m0, m1]);
    assert_eq!(map.lookup('z').as_slice(), &[m0]);
}

#[test]
fn nested_maps_merge_recursively() {
    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let m1 = matches(&mut g, 1);
    let b = g.add_node(Node::CharMap(CharMap::matching(['b'], &Links::raw([m0]))));
    let c = g.add_node(Node::CharMap(CharMap::matching(['c'], &Links::raw([m1]))));
    let ab = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([b]))));
    let ac = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([c]))));

    let mut links = Links::new();
    g.add_links(&mut links, &[ab, ac]);

    let after_a = map_of(&g, links.first().unwrap()).lookup('a').clone();
    assert_eq!(after_a.len(), 1);
    let inner = map_of(&g, after_a.first().unwrap());
    assert_eq!(inner.lookup('b').as_slice(), &[m0]);
    assert_eq!(inner.lookup('c').as_slice(), &[m1]);
}

#[test]
fn merging_disabled_keeps_maps_in_front() {
    let mut g = Graph::new(false);
    let m0 = matches(&mut g, 0);
    let tag = g.add_node(Node::Tag(Links::raw([m0])));
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([m0]))));
    let b = g.add_node(Node::CharMap(CharMap::matching(['b'], &Links::raw([m0]))));

    let mut links = Links::new();
    g.add_links(&mut links, &[tag, a, b]);
    assert_eq!(links.as_slice(), &[a, b, tag]);
    assert_eq!(g.len(), 4);
}

#[test]
fn link_from_extends_loop_body() {
    use crate::{Loop, LoopId};

    let mut g = Graph::default();
    let m0 = matches(&mut g, 0);
    let lp = g.add_node(Node::Loop(Loop {
        id: LoopId(0),
        lower: 0,
        upper: None,
        greedy: true,
        body: Links::new(),
        exit: m0,
    }));
    let a = g.add_node(Node::CharMap(CharMap::matching(['a'], &Links::raw([lp]))));
    g.link_from(lp, &[a]);

    assert_eq!(g.node(lp).links().unwrap().as_slice(), &[a]);
    assert_eq!(g.node(lp).targets(), vec![a, m0]);
}

#[test]
fn truncate_forgets_new_nodes() {
    let mut g = Graph::default();
    matches(&mut g, 0);
    let mark = g.len();
    matches(&mut g, 1);
    matches(&mut g, 2);
    g.truncate(mark);
    assert_eq!(g.len(), 1);
}
