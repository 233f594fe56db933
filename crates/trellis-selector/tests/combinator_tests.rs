//! Integration tests for joining selectors with combinators.

use trellis_selector::{
    Combinator, ComponentKind, Fragment, Selector, SelectorError, class, combine, combine_token,
    element, id,
};

#[test]
fn test_subsequent_sibling() {
    let table = element("table").unwrap().id("data").unwrap();
    let row = element("tr")
        .unwrap()
        .pseudo_class("nth-of-type(even)")
        .unwrap();
    let selector = combine(&table, Combinator::SubsequentSibling, &row);
    assert_eq!(selector.stringify(), "table#data ~ tr:nth-of-type(even)");
}

#[test]
fn test_child_and_next_sibling() {
    let ul = element("ul").unwrap();
    let li = element("li").unwrap();
    assert_eq!(combine(&ul, Combinator::Child, &li).stringify(), "ul > li");

    let h1 = element("h1").unwrap();
    let p = element("p").unwrap();
    assert_eq!(combine(&h1, Combinator::NextSibling, &p).stringify(), "h1 + p");
}

#[test]
fn test_descendant_keeps_surrounding_spaces() {
    // The token itself is a space, so it sits between two separator spaces.
    let selector = combine(
        &element("div").unwrap(),
        Combinator::Descendant,
        &element("p").unwrap(),
    );
    assert_eq!(selector.stringify(), "div   p");
}

#[test]
fn test_combined_fragment_has_no_kinds() {
    let selector = combine(
        &element("a").unwrap(),
        Combinator::Child,
        &class("b").unwrap(),
    );
    assert!(selector.used_kinds().is_empty());
    assert!(selector.is_combined());
}

#[test]
fn test_inputs_unchanged_by_combine() {
    let left = element("main").unwrap();
    let right = class("card").unwrap();
    let _combined = combine(&left, Combinator::Child, &right);
    assert_eq!(left.stringify(), "main");
    assert_eq!(right.stringify(), ".card");
    assert!(!left.is_combined());
}

#[test]
fn test_append_after_combine_is_unsupported() {
    let selector = combine(
        &element("ul").unwrap(),
        Combinator::Child,
        &element("li").unwrap(),
    );
    assert_eq!(
        selector.class("active"),
        Err(SelectorError::UnsupportedOperation {
            kind: ComponentKind::Class
        })
    );
    assert_eq!(selector.stringify(), "ul > li");
}

#[test]
fn test_combined_fragments_combine_again() {
    let nav_list = combine(
        &element("nav").unwrap(),
        Combinator::Child,
        &element("ul").unwrap(),
    );
    let selector = combine(&nav_list, Combinator::Child, &id("home").unwrap());
    assert_eq!(selector.stringify(), "nav > ul > #home");
}

#[test]
fn test_combine_with_empty_side() {
    let selector = combine(&Fragment::new(), Combinator::Child, &element("p").unwrap());
    assert_eq!(selector.stringify(), " > p");
}

#[test]
fn test_combine_token_matches_typed_combine() {
    let left = element("h2").unwrap();
    let right = element("p").unwrap();
    for combinator in [
        Combinator::Descendant,
        Combinator::Child,
        Combinator::NextSibling,
        Combinator::SubsequentSibling,
    ] {
        assert_eq!(
            combine_token(&left, combinator.token(), &right),
            combine(&left, combinator, &right)
        );
    }
}

#[test]
fn test_combine_token_passes_unknown_through() {
    let selector = combine_token(&element("a").unwrap(), "||", &element("b").unwrap());
    assert_eq!(selector.stringify(), "a || b");
    assert!(trellis_common::warning::has_warned(
        "combinator",
        "non-standard combinator token '||' passed through unchanged"
    ));
}

#[test]
fn test_selector_facade_combine() {
    let selector = Selector::combine(
        &element("label").unwrap(),
        Combinator::NextSibling,
        &element("input").unwrap(),
    );
    assert_eq!(Selector::stringify(&selector), "label + input");
}

#[test]
fn test_combinator_parse() {
    assert_eq!("~".parse(), Ok(Combinator::SubsequentSibling));
    assert_eq!("child".parse(), Ok(Combinator::Child));
    assert!("|".parse::<Combinator>().is_err());
}
