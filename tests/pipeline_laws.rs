#![cfg(feature = "ops")]
//! Property-based tests for pipeline evaluation.
//!
//! This module verifies that fused pipelines satisfy:
//!
//! - **Fusion transparency**: a fused run equals staged standalone runs
//! - **Model equivalence**: operations match their `std` iterator models
//! - **Minimality**: stage functions run no more often than demand requires
//! - **Repeatability**: rebuilding a pipeline gives the same answer

use pipars::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Fusion transparency
// =============================================================================

proptest! {
    /// A fused filter-map-take equals the same stages applied one at a time
    #[test]
    fn prop_fused_equals_staged(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        count in 0usize..8,
    ) {
        let fused = pipe!(
            values.clone(),
            filter(|value: &i32| value % 2 == 0),
            map(|value: i32| value.wrapping_mul(3)),
            take(count),
        );

        let filtered = filter(|value: &i32| value % 2 == 0).transform(values);
        let mapped = map(|value: i32| value.wrapping_mul(3)).transform(filtered);
        let staged = take(count).transform(mapped);

        prop_assert_eq!(fused, staged);
    }
}

proptest! {
    /// flat_map equals map followed by flatten
    #[test]
    fn prop_flat_map_equals_map_then_flatten(
        values in proptest::collection::vec(any::<i8>(), 0..32),
    ) {
        let fused = pipe!(values.clone(), flat_map(|value: i8| vec![value, value]));
        let staged = pipe!(values, map(|value: i8| vec![value, value]), flatten());

        prop_assert_eq!(fused, staged);
    }
}

// =============================================================================
// Model equivalence
// =============================================================================

proptest! {
    /// filter keeps exactly what the std iterator filter keeps, in order
    #[test]
    fn prop_filter_matches_iterator_model(
        values in proptest::collection::vec(any::<i8>(), 0..64),
    ) {
        let result = pipe!(values.clone(), filter(|value: &i8| *value >= 0));
        let model: Vec<i8> = values.into_iter().filter(|value| *value >= 0).collect();

        prop_assert_eq!(result, model);
    }
}

proptest! {
    /// unique keeps exactly the first occurrence of each value
    #[test]
    fn prop_unique_matches_first_occurrence_model(
        values in proptest::collection::vec(0i32..16, 0..64),
    ) {
        let result = pipe!(values.clone(), unique());

        let mut seen = std::collections::HashSet::new();
        let model: Vec<i32> = values
            .into_iter()
            .filter(|value| seen.insert(*value))
            .collect();

        prop_assert_eq!(result, model);
    }
}

proptest! {
    /// zip matches the std iterator zip
    #[test]
    fn prop_zip_matches_std(
        left in proptest::collection::vec(any::<i32>(), 0..32),
        right in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let result = pipe!(left.clone(), zip(right.clone()));
        let model: Vec<(i32, i32)> = left.into_iter().zip(right).collect();

        prop_assert_eq!(result, model);
    }
}

proptest! {
    /// sort_by on plain values matches the std sort
    #[test]
    fn prop_sort_by_matches_std(
        values in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let result = pipe!(values.clone(), sort_by(|value: &i32| *value));

        let mut model = values;
        model.sort_unstable();

        prop_assert_eq!(result, model);
    }
}

proptest! {
    /// folding push rebuilds the input in order
    #[test]
    fn prop_fold_preserves_order(
        values in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let result = pipe!(
            values.clone(),
            fold(Vec::new(), |mut accumulator: Vec<i32>, value| {
                accumulator.push(value);
                accumulator
            }),
        );

        prop_assert_eq!(result, values);
    }
}

// =============================================================================
// Minimality
// =============================================================================

proptest! {
    /// map before take runs exactly as often as demand requires
    #[test]
    fn prop_map_take_calls_are_minimal(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        count in 0usize..80,
    ) {
        use std::cell::Cell;

        let calls = Cell::new(0usize);
        let result = pipe!(
            values.clone(),
            map(|value: i32| {
                calls.set(calls.get() + 1);
                value
            }),
            take(count),
        );

        // take(0) still receives the first item before it can stop the run.
        let expected_calls = if count == 0 {
            usize::from(!values.is_empty())
        } else {
            count.min(values.len())
        };
        prop_assert_eq!(calls.get(), expected_calls);

        let model: Vec<i32> = values.into_iter().take(count).collect();
        prop_assert_eq!(result, model);
    }
}

// =============================================================================
// Structural laws
// =============================================================================

proptest! {
    /// take(n) plus drop_first(n) partitions the input
    #[test]
    fn prop_take_and_drop_partition(
        values in proptest::collection::vec(any::<i32>(), 0..64),
        count in 0usize..80,
    ) {
        let mut front = pipe!(values.clone(), take(count));
        let back = pipe!(values.clone(), drop_first(count));
        front.extend(back);

        prop_assert_eq!(front, values);
    }
}

proptest! {
    /// Deduplicating an already deduplicated stream changes nothing
    #[test]
    fn prop_unique_by_is_idempotent(
        values in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let once = pipe!(values.clone(), unique_by(|value: &i32| value % 7));
        let twice = pipe!(
            values,
            unique_by(|value: &i32| value % 7),
            unique_by(|value: &i32| value % 7),
        );

        prop_assert_eq!(once, twice);
    }
}

proptest! {
    /// Rebuilding a pipeline gives the same answer every time
    #[test]
    fn prop_pipelines_are_repeatable(
        values in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let run = |data: Vec<i32>| pipe!(data, unique(), take(3));

        prop_assert_eq!(run(values.clone()), run(values));
    }
}
