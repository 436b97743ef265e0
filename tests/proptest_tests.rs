// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the resolution laws against arbitrary nested mappings
//! and paths.

use optchain::domain::ResolutionResult::{Absent, Present};
use optchain::prelude::*;
use proptest::prelude::*;

/// Arbitrary mappings up to three levels deep over a small key alphabet, so
/// generated paths hit existing keys often.
fn arb_mapping() -> impl Strategy<Value = Mapping> {
    let leaf = "[a-z0-9]{0,6}".prop_map(Node::from);
    let node = leaf.prop_recursive(3, 32, 4, |inner| {
        prop::collection::hash_map("[a-d]", inner, 0..4)
            .prop_map(|entries| Node::Nested(entries.into_iter().collect()))
    });
    prop::collection::hash_map("[a-d]", node, 0..4).prop_map(|entries| entries.into_iter().collect())
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]", 1..5)
}

/// Walks the mapping by hand, the way the resolution laws describe it.
fn expected<'m>(mapping: &'m Mapping, path: &[String]) -> Option<&'m ScalarValue> {
    let (last, parents) = path.split_last()?;
    let mut level = mapping;
    for segment in parents {
        level = level.get(segment)?.as_mapping()?;
    }
    level.get(last)?.as_scalar()
}

proptest! {
    #[test]
    fn test_resolve_matches_manual_walk(mapping in arb_mapping(), path in arb_path()) {
        let result = resolve(&mapping, &path).unwrap();
        prop_assert_eq!(result.present(), expected(&mapping, &path));
    }
}

proptest! {
    #[test]
    fn test_resolve_with_default_coalesces(
        mapping in arb_mapping(),
        path in arb_path(),
        default in "[A-Z]{1,4}"
    ) {
        let value = resolve_with_default(&mapping, &path, default.as_str());
        match resolve(&mapping, &path).unwrap() {
            Present(found) => prop_assert_eq!(&value, found),
            Absent => prop_assert_eq!(value.as_str(), default.as_str()),
        }
    }
}

proptest! {
    #[test]
    fn test_empty_path_always_fails(mapping in arb_mapping()) {
        let result = resolve(&mapping, Vec::<String>::new());
        prop_assert!(result.is_err_and(|e| e.is_invalid_path()));
    }
}

proptest! {
    #[test]
    fn test_resolve_all_matches_individual_calls(
        mapping in arb_mapping(),
        paths in prop::collection::vec(arb_path(), 0..6),
        drop_index in any::<prop::sample::Index>()
    ) {
        let results = resolve_all(&mapping, &paths);
        prop_assert_eq!(results.len(), paths.len());
        for (path, result) in paths.iter().zip(&results) {
            prop_assert_eq!(*result.as_ref().unwrap(), resolve(&mapping, path).unwrap());
        }

        // Removing one request leaves every other result unchanged.
        if !paths.is_empty() {
            let removed = drop_index.index(paths.len());
            let mut fewer = paths.clone();
            fewer.remove(removed);
            let kept: Vec<_> = results
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != removed)
                .map(|(_, r)| *r.as_ref().unwrap())
                .collect();
            let again: Vec<_> = resolve_all(&mapping, &fewer)
                .into_iter()
                .map(|r| r.unwrap())
                .collect();
            prop_assert_eq!(kept, again);
        }
    }
}

proptest! {
    #[test]
    fn test_decode_enum_round_trip(
        raws in prop::collection::hash_set(-1000i64..1000, 1..8),
        probe in -2000i64..2000
    ) {
        let entries: Vec<(i64, String)> = raws
            .iter()
            .map(|raw| (*raw, format!("V{}", raw)))
            .collect();
        let table = VariantTable::new(entries.clone()).unwrap();

        for (raw, name) in &entries {
            prop_assert_eq!(decode_enum(*raw, &table), Present(name.as_str()));
        }
        if !raws.contains(&probe) {
            prop_assert_eq!(decode_enum(probe, &table), Absent);
        }
    }
}

proptest! {
    #[test]
    fn test_dotted_and_segment_paths_agree(mapping in arb_mapping(), path in arb_path()) {
        let dotted = path.join(".");
        prop_assert_eq!(
            resolve(&mapping, dotted.as_str()).unwrap(),
            resolve(&mapping, &path).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn test_scalar_value_round_trips_text(s in "\\PC*") {
        let value = ScalarValue::from(s.clone());
        prop_assert_eq!(value.as_str(), s.as_str());
    }
}

proptest! {
    #[test]
    fn test_i64_coercion(n in any::<i64>()) {
        let value = ScalarValue::from(n.to_string());
        prop_assert_eq!(value.as_i64("n").unwrap(), n);
    }
}
