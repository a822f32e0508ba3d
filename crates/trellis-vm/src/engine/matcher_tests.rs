use indoc::indoc;
use trellis_compiler::{CompileOptions, compile};
use trellis_core::{Automaton, MatchRecord, NoopTracer, PrintTracer, Verbosity};

use super::Matcher;

fn automaton(patterns: &[&str]) -> Automaton {
    let mut automaton = Automaton::default();
    for pattern in patterns {
        compile(&mut automaton, pattern, &CompileOptions::default(), &mut NoopTracer).unwrap();
    }
    automaton
}

fn show(record: Option<MatchRecord>) -> String {
    match record {
        Some(r) => format!("#{} {}..{} {:?}", r.pattern.0, r.start, r.end, r.tags),
        None => "none".to_string(),
    }
}

fn find(patterns: &[&str], text: &str) -> String {
    show(Matcher::new(&automaton(patterns)).add_final(text))
}

#[test]
fn leftmost_then_longest() {
    assert_eq!(find(&["a", "ab", "abc"], "xabcd"), "#2 1..4 []");
    assert_eq!(find(&["bcd", "ab"], "abcd"), "#1 0..2 []");
}

#[test]
fn earliest_pattern_breaks_ties() {
    assert_eq!(find(&["a.", "ab"], "ab"), "#0 0..2 []");
    assert_eq!(find(&["ab", "a."], "ab"), "#0 0..2 []");
}

#[test]
fn no_match() {
    assert_eq!(find(&["abc"], "abd"), "none");
    assert_eq!(find(&["a"], ""), "none");
}

#[test]
fn empty_pattern_matches_at_start() {
    assert_eq!(find(&[""], "xyz"), "#0 0..0 []");
    assert_eq!(find(&[""], ""), "#0 0..0 []");
    assert_eq!(find(&["", "y"], "xyz"), "#0 0..0 []");
}

#[test]
fn zero_width_loop_terminates() {
    assert_eq!(find(&["(a?)*"], "bbb"), "#0 0..0 []");
    assert_eq!(find(&["(a?)*"], "aab"), "#0 0..2 []");
    assert_eq!(find(&["(a*)*b"], "aab"), "#0 0..3 []");
    assert_eq!(find(&["()+x"], "x"), "#0 0..1 []");
}

#[test]
fn greediness_decides_tags() {
    assert_eq!(find(&["a{2,4}#a*"], "aaaaaa"), "#0 0..6 [4]");
    assert_eq!(find(&["a{2,4}?#a*"], "aaaaaa"), "#0 0..6 [2]");
}

#[test]
fn anchors() {
    assert_eq!(find(&["^b"], "ab"), "none");
    assert_eq!(find(&["^a|b"], "cb"), "#0 1..2 []");
    assert_eq!(find(&["a$"], "aa"), "#0 1..2 []");
    assert_eq!(find(&["a^b"], "ab"), "none");
}

#[test]
fn classes_and_complements() {
    assert_eq!(find(&["[^[:digit:]x]+"], "12ab3"), "#0 2..4 []");
    assert_eq!(find(&["[[:upper:]][[:lower:]]*"], "hi There"), "#0 3..8 []");
    assert_eq!(find(&["[^abc]"], "abcd"), "#0 3..4 []");
}

#[test]
fn end_anchor_defers_chunk_resolution() {
    let automaton = automaton(&["hello$", "hello"]);
    let mut matcher = Matcher::new(&automaton);
    assert_eq!(matcher.add_chunk("hello"), None);
    assert_eq!(show(matcher.add_chunk(", world")), "#1 0..5 []");
    assert!(matcher.is_resolved());

    let matcher = Matcher::new(&automaton);
    assert_eq!(show(matcher.add_final("hello")), "#0 0..5 []");
}

#[test]
fn chunk_resolves_once_nothing_can_improve() {
    let automaton = automaton(&["ab"]);
    let mut matcher = Matcher::new(&automaton);
    assert_eq!(show(matcher.add_chunk("xab")), "#0 1..3 []");
    assert!(matcher.is_resolved());
    assert_eq!(matcher.add_chunk("ab"), None);
    assert_eq!(matcher.add_final("ab"), None);
}

#[test]
fn chunk_waits_for_longer_match() {
    let automaton = automaton(&["ab*"]);
    let mut matcher = Matcher::new(&automaton);
    assert_eq!(matcher.add_chunk("abb"), None);
    assert_eq!(matcher.best().map(|r| r.range()), Some(0..3));
    assert_eq!(matcher.position(), 3);
    assert_eq!(show(matcher.add_final("bc")), "#0 0..4 []");
}

#[test]
fn chunks_agree_with_whole_input() {
    let patterns = ["(ab+c*)", "bf(ab+)*", "^(a(bc)?)*$", "01x?(ab+)*2", "x#y?#$"];
    let automaton = automaton(&patterns);
    for text in ["abbbabf", "ddg01abb2s", "abcabc", "zzxy", "zzx", ""] {
        let whole = show(Matcher::new(&automaton).add_final(text));
        for split in 0..=text.len() {
            let (head, tail) = text.split_at(split);
            let mut matcher = Matcher::new(&automaton);
            if matcher.add_chunk(head).is_some() {
                continue;
            }
            assert_eq!(
                show(matcher.add_final(tail)),
                whole,
                "{head:?} + {tail:?}"
            );
        }
    }
}

#[test]
fn trace_default() {
    let automaton = automaton(&["ab"]);
    let mut tracer = PrintTracer::new(Verbosity::Default, Default::default());
    Matcher::with_tracer(&automaton, &mut tracer).add_final("ab");
    insta::assert_snapshot!(tracer.output(), @r"
    end of input @2
      match #0 [0, 2) tags () best
    resolved #0 [0, 2) tags ()
    ");
}

#[test]
fn trace_verbose() {
    let automaton = automaton(&["ab"]);
    let mut tracer = PrintTracer::new(Verbosity::Verbose, Default::default());
    Matcher::with_tracer(&automaton, &mut tracer).add_final("ab");
    assert_eq!(
        tracer.output(),
        indoc! {"
              + partial @0
            @0 'a'
              + partial @1
            @1 'b'
              - exhausted @1
              + partial @2
            end of input @2
              match #0 [0, 2) tags () best
              - exhausted @0
              pruned from @2
            resolved #0 [0, 2) tags ()
        "}
    );
}
