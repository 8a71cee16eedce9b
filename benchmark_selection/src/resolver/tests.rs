//!
//! The selection resolver tests.
//!

use std::collections::BTreeMap;

use crate::error::Error;
use crate::legacy_guard::LegacyGuard;
use crate::manifest::benchmark::Benchmark;
use crate::manifest::Manifest;
use crate::selection::Selection;

use super::resolve;
use super::Resolver;

fn manifest() -> Manifest {
    Manifest::new(
        vec![
            Benchmark::new("a", &[]),
            Benchmark::new("b", &[]),
            Benchmark::new("c", &[]),
        ],
        BTreeMap::from([("g".to_owned(), vec!["a".to_owned(), "b".to_owned()])]),
    )
    .expect("Always valid")
}

fn benchmarks(raw: &str) -> Vec<String> {
    resolve(raw, &manifest())
        .expect("Always valid")
        .benchmarks
}

#[test]
fn empty_expression_selects_everything() {
    assert_eq!(benchmarks(""), vec!["a", "b", "c"]);
    assert_eq!(benchmarks(" , ,"), vec!["a", "b", "c"]);
}

#[test]
fn inclusions_are_an_allow_list() {
    assert_eq!(benchmarks("a,b"), vec!["a", "b"]);
}

#[test]
fn exclusions_only_subtract_from_everything() {
    assert_eq!(benchmarks("-c"), vec!["a", "b"]);
}

#[test]
fn exclusion_wins_over_inclusion() {
    assert_eq!(benchmarks("a,b,-b"), vec!["a"]);
    assert_eq!(benchmarks("-b,a,b"), vec!["a"]);
}

#[test]
fn tag_expansion() {
    assert_eq!(benchmarks("<g>"), vec!["a", "b"]);
    assert_eq!(benchmarks("<g>,-a"), vec!["b"]);
    assert_eq!(benchmarks("-<g>"), vec!["c"]);
    assert_eq!(benchmarks("<all>"), vec!["a", "b", "c"]);
}

#[test]
fn order_follows_the_manifest() {
    assert_eq!(benchmarks("b,a"), benchmarks("a,b"));
    assert_eq!(benchmarks("c,<g>"), vec!["a", "b", "c"]);
}

#[test]
fn overlapping_patterns_are_deduplicated() {
    assert_eq!(benchmarks("a,<g>,a,<all>"), vec!["a", "b", "c"]);
}

#[test]
fn unmatched_selections_are_warnings() {
    let resolved = resolve("zzz", &manifest()).expect("Always valid");
    assert!(resolved.is_empty());
    assert_eq!(resolved.len(), 0);
    assert_eq!(
        resolved.unmatched,
        Selection::parse_all("zzz").expect("Always valid")
    );

    let resolved = resolve("-<nope>,a,-zzz", &manifest()).expect("Always valid");
    assert_eq!(resolved.benchmarks, vec!["a"]);
    let unmatched: Vec<String> = resolved.unmatched.iter().map(ToString::to_string).collect();
    assert_eq!(unmatched, vec!["-<nope>", "-zzz"]);
}

#[test]
fn tag_reference_to_a_benchmark_is_unmatched() {
    let resolved = resolve("<a>", &manifest()).expect("Always valid");
    assert!(resolved.is_empty());
    assert_eq!(resolved.unmatched.len(), 1);
}

#[test]
fn bare_group_name_selects_the_group() {
    assert_eq!(benchmarks("g"), vec!["a", "b"]);
}

#[test]
fn bare_dash_is_invalid() {
    assert!(matches!(
        resolve("-", &manifest()),
        Err(Error::InvalidIdentifier { .. })
    ));
}

#[test]
fn malformed_tag_is_invalid() {
    assert!(matches!(
        resolve("<bad tag>", &manifest()),
        Err(Error::InvalidIdentifier { .. })
    ));
}

#[test]
fn resolution_is_idempotent() {
    let manifest = manifest();
    let resolver = Resolver::new(&manifest);
    assert_eq!(
        resolver.resolve("<g>,-a,zzz").expect("Always valid"),
        resolver.resolve("<g>,-a,zzz").expect("Always valid"),
    );
}

#[test]
fn legacy_guard_runs_before_resolution() {
    let manifest = manifest();
    let resolver = Resolver::new(&manifest).with_legacy_guard(LegacyGuard::default());
    assert!(matches!(
        resolver.resolve("-g"),
        Err(Error::UnsupportedSelection { .. })
    ));
    assert_eq!(
        resolver.resolve("-<g>").expect("Always valid").benchmarks,
        vec!["c"]
    );
    assert_eq!(
        Resolver::new(&manifest)
            .resolve("-g")
            .expect("Always valid")
            .benchmarks,
        vec!["c"]
    );
}
