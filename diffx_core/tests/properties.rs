//! Property tests for the quantified invariants in spec §8 that hold over
//! arbitrary inputs (reflexivity, swap duality, epsilon monotonicity,
//! determinism). The remaining invariants depend on specific option
//! combinations and are covered by targeted unit tests instead
//! (SPEC_FULL.md §8).

use diffx_core::{diff, DiffOptions, Difference, Value};
use indexmap::IndexMap;
use proptest::prelude::*;

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|i| Value::Integer(i as i64)),
        (-1000.0f64..1000.0).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|pairs| {
                let mut mapping = IndexMap::new();
                for (key, value) in pairs {
                    mapping.insert(key, value);
                }
                Value::Mapping(mapping)
            }),
        ]
    })
}

fn swap_kind(difference: &Difference) -> Difference {
    match difference {
        Difference::Added {
            path,
            value,
            value_type,
        } => Difference::Removed {
            path: path.clone(),
            value: value.clone(),
            value_type: *value_type,
        },
        Difference::Removed {
            path,
            value,
            value_type,
        } => Difference::Added {
            path: path.clone(),
            value: value.clone(),
            value_type: *value_type,
        },
        Difference::Modified {
            path,
            old_value,
            new_value,
            old_type,
            new_type,
        } => Difference::Modified {
            path: path.clone(),
            old_value: new_value.clone(),
            new_value: old_value.clone(),
            old_type: *new_type,
            new_type: *old_type,
        },
        Difference::TypeChanged {
            path,
            old_value,
            new_value,
            old_type,
            new_type,
        } => Difference::TypeChanged {
            path: path.clone(),
            old_value: new_value.clone(),
            new_value: old_value.clone(),
            old_type: *new_type,
            new_type: *old_type,
        },
        Difference::Unchanged { .. } => difference.clone(),
    }
}

proptest! {
    #[test]
    fn reflexivity(v in value_strategy()) {
        let results = diff(&v, &v, &DiffOptions::default()).unwrap();
        prop_assert!(results.is_empty());
    }

    #[test]
    fn determinism(a in value_strategy(), b in value_strategy()) {
        let options = DiffOptions::default();
        let one = diff(&a, &b, &options).unwrap();
        let two = diff(&a, &b, &options).unwrap();
        prop_assert_eq!(one, two);
    }

    #[test]
    fn swap_duality_by_multiset_of_swapped_records(a in value_strategy(), b in value_strategy()) {
        let forward = diff(&a, &b, &DiffOptions::default()).unwrap();
        let backward = diff(&b, &a, &DiffOptions::default()).unwrap();

        let mut swapped_forward: Vec<_> = forward.iter().map(swap_kind).collect();
        let mut backward_sorted = backward.clone();
        swapped_forward.sort_by_key(|d| d.path().render());
        backward_sorted.sort_by_key(|d| d.path().render());

        prop_assert_eq!(swapped_forward, backward_sorted);
    }

    #[test]
    fn epsilon_monotonicity(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0, e in 0.0f64..50.0, growth in 0.0f64..50.0) {
        let mut old = IndexMap::new();
        old.insert("v".to_string(), Value::Float(a));
        let mut new = IndexMap::new();
        new.insert("v".to_string(), Value::Float(b));

        let old = Value::Mapping(old);
        let new = Value::Mapping(new);

        let tighter = diff(&old, &new, &DiffOptions::default().with_epsilon(e)).unwrap();
        let looser = diff(&old, &new, &DiffOptions::default().with_epsilon(e + growth)).unwrap();

        if tighter.iter().all(|d| !matches!(d, Difference::Modified { .. })) {
            prop_assert!(looser.iter().all(|d| !matches!(d, Difference::Modified { .. })));
        }
    }
}
