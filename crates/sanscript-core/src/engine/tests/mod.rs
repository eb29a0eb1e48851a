
use super::testutil::{devanagari, hk, iast};
use super::Engine;
use crate::options::Options;
use crate::scheme::Scheme;
use crate::scheme_map::SchemeMap;

fn run(from: &Scheme, to: &Scheme, input: &str) -> String {
    run_with(from, to, input, &Options::default())
}

fn run_with(from: &Scheme, to: &Scheme, input: &str, options: &Options) -> String {
    let map = SchemeMap::new(from, to);
    Engine::new(&map, options).run(input)
}

#[test]
fn engine_follows_source_kind() {
    let options = Options::default();
    let roman = SchemeMap::new(&hk(), &devanagari());
    let brahmic = SchemeMap::new(&devanagari(), &hk());
    assert!(matches!(Engine::new(&roman, &options), Engine::Roman(_)));
    assert!(matches!(Engine::new(&brahmic, &options), Engine::Brahmic(_)));
}

#[test]
fn identity_on_own_graphemes() {
    for text in ["namaste", "kSetra", "saMskRta", "rAmaH |"] {
        assert_eq!(run(&hk(), &hk(), text), text);
    }
    for text in ["नमस्ते", "क्षेत्र", "राम।"] {
        assert_eq!(run(&devanagari(), &devanagari(), text), text);
    }
}

#[test]
fn round_trip_through_brahmic() {
    for text in ["namaste", "kSetram", "hitam", "ai"] {
        let deva = run(&hk(), &devanagari(), text);
        assert_eq!(run(&devanagari(), &hk(), &deva), text, "via {deva}");
    }
}

#[test]
fn roman_to_roman() {
    assert_eq!(run(&hk(), &iast(), "kSetram"), "kṣetram");
    assert_eq!(run(&iast(), &hk(), "rāmaḥ"), "rAmaH");
}

#[test]
fn empty_input() {
    assert_eq!(run(&hk(), &devanagari(), ""), "");
    assert_eq!(run(&devanagari(), &hk(), ""), "");
}
