use crate::{Matcher, Pattern, PatternId, PrintTracer, Verbosity};

fn greeting() -> Pattern<&'static str> {
    let mut pattern = Pattern::new();
    pattern.add_pattern("hello$", "anchored").unwrap();
    pattern.add_pattern("hel#lo", "plain").unwrap();
    pattern
}

#[test]
fn match_accessors() {
    let pattern = greeting();
    let mut matcher = pattern.matcher();
    assert!(matcher.add_chunk("say hello").is_none());
    let found = matcher.add_chunk("!").unwrap();

    assert_eq!(found.start(), 4);
    assert_eq!(found.end(), 9);
    assert_eq!(found.range(), 4..9);
    assert_eq!(found.tags(), &[7]);
    assert_eq!(*found.value(), "plain");
    assert_eq!(found.pattern(), PatternId(1));
    assert_eq!(found.clone().into_record(), *found.record());
}

#[test]
fn matcher_built_from_pattern() {
    let pattern = greeting();
    let mut matcher = Matcher::new(&pattern);
    assert!(matcher.add_chunk("hel").is_none());
    let found = matcher.add_final("lo").unwrap();
    assert_eq!(found.range(), 0..5);
    assert_eq!(*found.value(), "anchored");
}

#[test]
fn resolved_matcher_ignores_input() {
    let pattern = greeting();
    let mut matcher = pattern.matcher();
    assert!(!matcher.is_resolved());
    assert!(matcher.add_chunk("hello.").is_some());
    assert!(matcher.is_resolved());
    assert_eq!(matcher.position(), 6);
    assert!(matcher.add_chunk("hello").is_none());
    assert!(matcher.add_final("hello").is_none());
}

#[test]
fn positions_count_characters() {
    let pattern = Pattern::from_pattern("b+", ()).unwrap();
    let found = pattern.find("ééabbb").unwrap();
    assert_eq!(found.range(), 3..6);
}

#[test]
fn serializes_with_value() {
    let pattern = greeting();
    let found = pattern.find("hello").unwrap();
    insta::assert_snapshot!(
        serde_json::to_string(&found).unwrap(),
        @r#"{"start":0,"end":5,"pattern":0,"tags":[],"value":"anchored"}"#
    );
}

#[test]
fn traced_matching() {
    let pattern = greeting();
    let mut tracer = PrintTracer::new(Verbosity::Default, Default::default());
    let mut matcher = pattern.matcher_with(&mut tracer);
    assert!(matcher.add_chunk("hello").is_none());
    assert!(matcher.add_final("").is_some());
    insta::assert_snapshot!(tracer.output(), @r"
    end of chunk @5
    end of input @5
      match #0 [0, 5) tags () best
      match #1 [0, 5) tags (3) rejected
    resolved #0 [0, 5) tags ()
    ");
}
