//! Property-based tests for the distribution contract
//!
//! These pin the invariants that must hold for every valid range, score
//! batch, and bin count: count conservation, exact coverage, and rejection
//! of incompatible bin counts.

use proptest::prelude::*;
use score_distribution::{Error, ScoreAccumulator};

/// Strategy producing a valid range plus a compatible bin count:
/// `max - min` is `bins * width` by construction.
fn range_and_bins() -> impl Strategy<Value = (i64, i64, usize)> {
    (-1_000i64..1_000, 1i64..=50, 1usize..=20)
        .prop_map(|(min, width, bins)| (min, min + width * bins as i64, bins))
}

proptest! {
    // Property: counts always sum to the number of ingested scores
    #[test]
    fn prop_count_conservation(
        (min, max, bins) in range_and_bins(),
        seed in proptest::collection::vec(0.0f64..=1.0, 0..200)
    ) {
        let scores: Vec<i64> = seed
            .iter()
            .map(|t| min + ((max - min) as f64 * t).round() as i64)
            .map(|s| s.clamp(min, max))
            .collect();

        let mut acc = ScoreAccumulator::new(max, min).unwrap();
        acc.add_all(&scores).unwrap();

        let dist = acc.distribution(bins).unwrap();
        prop_assert_eq!(dist.len(), bins);
        prop_assert_eq!(dist.total_count(), scores.len());
    }

    // Property: bins cover [min, max] contiguously with no gaps or overlaps
    #[test]
    fn prop_exact_coverage((min, max, bins) in range_and_bins()) {
        let acc = ScoreAccumulator::new(max, min).unwrap();
        let dist = acc.distribution(bins).unwrap();

        prop_assert_eq!(dist.bins()[0].lo, min);
        prop_assert_eq!(dist.bins().last().unwrap().hi, max);
        for pair in dist.bins().windows(2) {
            prop_assert_eq!(
                pair[1].lo,
                pair[0].hi + 1,
                "gap or overlap between [{}, {}] and [{}, {}]",
                pair[0].lo, pair[0].hi, pair[1].lo, pair[1].hi
            );
        }
    }

    // Property: min lands in the first bin, max in the last
    #[test]
    fn prop_boundary_membership((min, max, bins) in range_and_bins()) {
        let mut acc = ScoreAccumulator::new(max, min).unwrap();
        acc.add_all(&[min, max]).unwrap();

        let dist = acc.distribution(bins).unwrap();
        prop_assert_eq!(dist.find_bin(min), Some(0));
        prop_assert_eq!(dist.find_bin(max), Some(bins - 1));
        prop_assert!(dist.bins()[0].count >= 1);
        prop_assert!(dist.bins()[bins - 1].count >= 1);
    }

    // Property: construction succeeds exactly when max > min
    #[test]
    fn prop_construction_validity(min in -10_000i64..10_000, max in -10_000i64..10_000) {
        let result = ScoreAccumulator::new(max, min);
        if max > min {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), Error::InvalidRange { min, max });
        }
    }

    // Property: a bin count that does not divide the span is always rejected
    #[test]
    fn prop_non_divisible_rejected(
        (min, max, _) in range_and_bins(),
        bins in 1usize..=97
    ) {
        let acc = ScoreAccumulator::new(max, min).unwrap();
        let span = max - min;
        let result = acc.distribution(bins);
        if span % bins as i64 == 0 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), Error::NonDivisibleBins { span, bins });
        }
    }

    // Property: querying is read-only and repeatable
    #[test]
    fn prop_query_idempotence(
        (min, max, bins) in range_and_bins(),
        seed in proptest::collection::vec(0.0f64..=1.0, 0..50)
    ) {
        let scores: Vec<i64> = seed
            .iter()
            .map(|t| min + ((max - min) as f64 * t).round() as i64)
            .map(|s| s.clamp(min, max))
            .collect();

        let mut acc = ScoreAccumulator::new(max, min).unwrap();
        acc.add_all(&scores).unwrap();

        let before = acc.scores().to_vec();
        let first = acc.distribution(bins).unwrap();
        let second = acc.distribution(bins).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(acc.scores(), &before[..]);
    }
}
