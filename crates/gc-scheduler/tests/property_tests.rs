//! Property tests for the growth model invariants.

use gc_scheduler::GrowthModel;
use proptest::prelude::*;

const CLAMP: u64 = 200_000;

proptest! {
    /// The first sample only seeds the baseline, whatever its magnitude.
    #[test]
    fn first_sample_never_estimates(initial in 1u64..=u64::MAX / 2) {
        let mut model = GrowthModel::new(CLAMP);
        model.record_allocated(initial);
        prop_assert_eq!(model.mean(), 0);
        prop_assert_eq!(model.max(), 0);
    }

    /// The clamped maximum never exceeds its ceiling, and the mean never
    /// exceeds the largest delta actually observed.
    #[test]
    fn estimates_stay_bounded(
        base in 1u64..=u64::from(u32::MAX),
        deltas in proptest::collection::vec(0u64..1_000_000, 1..64),
    ) {
        let mut model = GrowthModel::new(CLAMP);
        let mut counter = base;
        model.record_allocated(counter);

        let mut largest = 0u64;
        for &delta in &deltas {
            counter += delta;
            largest = largest.max(delta);
            model.record_allocated(counter);

            prop_assert!(model.max() <= CLAMP);
            prop_assert!(model.max() <= largest);
            prop_assert!(model.mean() <= largest);
        }
    }

    /// A regressing counter is absorbed as zero growth; the estimates
    /// never move upwards because of it.
    #[test]
    fn regression_never_raises_estimates(
        base in 1_000u64..=u64::from(u32::MAX),
        delta in 1u64..100_000,
        drop in 1u64..1_000,
    ) {
        let mut model = GrowthModel::new(CLAMP);
        model.record_allocated(base);
        model.record_allocated(base + delta);

        let mean_before = model.mean();
        let max_before = model.max();
        model.record_allocated(base + delta - drop.min(delta));

        prop_assert!(model.mean() <= mean_before);
        prop_assert_eq!(model.max(), max_before);
    }

    /// Feeding the same constant delta keeps the converged mean fixed.
    #[test]
    fn constant_delta_is_a_fixed_point(delta in 4u64..50_000) {
        let mut model = GrowthModel::new(CLAMP);
        let mut counter = 1_000u64;
        model.record_allocated(counter);

        for _ in 0..64 {
            counter += delta;
            model.record_allocated(counter);
        }
        let settled = model.mean();
        counter += delta;
        model.record_allocated(counter);
        prop_assert_eq!(model.mean(), settled);
    }
}
