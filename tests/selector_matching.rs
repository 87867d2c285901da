use pkgsel_core::selection::{match_selector, parse_selectors, Selector};
use pkgsel_core::types::RecordId;
use pkgsel_core::version::parse_name;
use pkgsel_core::{NixVersioning, PackageRecord};

fn make_record(name: &str) -> PackageRecord {
    PackageRecord::new(name, "x86_64-linux")
}

fn selector(raw: &str) -> Selector {
    Selector::parse(raw, &NixVersioning)
}

#[test]
fn empty_arguments_yield_single_wildcard() {
    let selectors = parse_selectors::<&str, _>(&[], &NixVersioning);
    assert_eq!(selectors, vec![Selector::wildcard()]);
    assert!(selectors[0].is_wildcard());
}

#[test]
fn one_selector_per_argument_in_order() {
    let selectors = parse_selectors(&["hello", "world-1.0"], &NixVersioning);
    let raw: Vec<&str> = selectors.iter().map(|s| s.as_str()).collect();
    assert_eq!(raw, vec!["hello", "world-1.0"]);
    assert_eq!(selectors[1].pattern().base, "world");
    assert_eq!(selectors[1].pattern().version, "1.0");
}

#[test]
fn base_name_matches_any_version() {
    let s = selector("hello");
    assert!(s.matches(&parse_name("hello-2.10")));
    assert!(s.matches(&parse_name("hello-2.9")));
    assert!(s.matches(&parse_name("hello")));
    assert!(!s.matches(&parse_name("hell-2.10")));
    assert!(!s.matches(&parse_name("hello-world-1.0")));
}

#[test]
fn versioned_selector_requires_exact_version() {
    let s = selector("hello-2.10");
    assert!(s.matches(&parse_name("hello-2.10")));
    assert!(!s.matches(&parse_name("hello-2.9")));
    assert!(!s.matches(&parse_name("hello-2.10.1")));
}

#[test]
fn wildcard_matches_everything() {
    let s = selector("*");
    assert!(s.is_wildcard());
    assert!(s.matches(&parse_name("hello-2.10")));
    assert!(s.matches(&parse_name("anything")));
}

#[test]
fn wildcard_name_with_version_is_not_a_wildcard_selector() {
    let s = selector("*-2.10");
    assert!(!s.is_wildcard());
    assert!(s.matches(&parse_name("hello-2.10")));
    assert!(!s.matches(&parse_name("hello-2.9")));
}

#[test]
fn hits_count_each_matching_candidate() {
    let candidates = vec![
        make_record("hello-1.0"),
        make_record("world-1.0"),
        make_record("hello-2.0"),
    ];

    let matched = match_selector(&selector("hello"), &candidates, &NixVersioning);
    assert_eq!(matched.hits(), 2);

    let ids: Vec<RecordId> = matched.matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![RecordId::new(0), RecordId::new(2)]);
    assert_eq!(matched.matches[1].name.version, "2.0");

    let none = match_selector(&selector("missing"), &candidates, &NixVersioning);
    assert_eq!(none.hits(), 0);
}
