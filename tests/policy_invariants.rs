// ==============================================
// CROSS-MODULE INVARIANT TESTS (integration)
// ==============================================
//
// Tests that verify library-wide behavioral consistency: configuration
// validation, the capacity bound, candidate-set membership, and counter
// saturation. These span the policy facade and the ds layer and belong here
// rather than in any single source file.

use lrukit::builder::CacheBuilder;
use lrukit::policy::lru_k::LrukCache;
use lrukit::traits::{CoreCache, LrukCacheTrait, MutableCache, PutOutcome};

// ==============================================
// Configuration Validation
// ==============================================
//
// Zero bounds are rejected at construction instead of being silently
// coerced; there is no capacity-0 cache and no K-0 history.

mod config_validation {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected_everywhere() {
        assert!(LrukCache::<u64, u64>::new(0, 2).is_err());
        assert!(CacheBuilder::new(0).try_build::<u64, u64>().is_err());
    }

    #[test]
    fn zero_k_is_rejected_everywhere() {
        assert!(LrukCache::<u64, u64>::new(10, 0).is_err());
        assert!(CacheBuilder::new(10).k(0).try_build::<u64, u64>().is_err());
    }

    #[test]
    fn config_error_names_the_offending_parameter() {
        let capacity_err = LrukCache::<u64, u64>::new(0, 2).unwrap_err();
        assert!(capacity_err.to_string().contains("capacity"));

        let k_err = LrukCache::<u64, u64>::new(10, 0).unwrap_err();
        assert!(k_err.to_string().contains("k"));
    }
}

// ==============================================
// Capacity Bound
// ==============================================

mod capacity_bound {
    use super::*;

    #[test]
    fn matured_workload_never_exceeds_capacity() {
        let mut cache = LrukCache::new(8, 2).unwrap();
        for i in 0..200u64 {
            cache.put(i, i).unwrap();
            cache.get(&i).unwrap(); // second access: entry matures
            assert!(cache.len() <= cache.capacity());
        }
    }

    #[test]
    fn cold_start_window_is_reported_not_silent() {
        let mut cache = LrukCache::new(2, 3).unwrap();
        cache.put(1, "a").unwrap();
        cache.put(2, "b").unwrap();

        // K=3 and single accesses: nothing can be evicted yet.
        assert_eq!(cache.put(3, "c").unwrap(), PutOutcome::EvictionUnavailable);
        assert_eq!(cache.put(4, "d").unwrap(), PutOutcome::EvictionUnavailable);
        assert_eq!(cache.len(), 4);

        // Maturing one entry ends the window for subsequent admissions.
        cache.get(&1).unwrap();
        cache.get(&1).unwrap();
        let outcome = cache.put(5, "e").unwrap();
        assert_eq!(
            outcome,
            PutOutcome::Evicted {
                key: 1,
                value: "a"
            }
        );
    }
}

// ==============================================
// Candidate Membership
// ==============================================
//
// An entry is in the candidate set at any instant iff its history holds
// exactly K timestamps. The policy validator asserts exactly that plus the
// rank consistency of every member.

mod candidate_membership {
    use super::*;

    #[test]
    fn membership_tracks_history_fullness_through_a_long_run() {
        let mut cache = LrukCache::new(16, 3).unwrap();
        for round in 0..50u64 {
            let key = round % 24;
            match round % 5 {
                0 | 1 => {
                    cache.put(key, round).unwrap();
                },
                2 => {
                    cache.get(&key).unwrap();
                },
                3 => {
                    cache.touch(&key).unwrap();
                },
                4 => {
                    cache.remove(&key);
                },
                _ => unreachable!(),
            }
            cache.debug_validate_invariants();
        }
    }

    #[test]
    fn victim_queries_agree_with_membership() {
        let mut cache = LrukCache::new(8, 2).unwrap();

        // No mature entries: no victim.
        cache.put(1, 10).unwrap();
        cache.put(2, 20).unwrap();
        assert_eq!(cache.peek_victim(), None);

        // First maturity: victim appears.
        cache.get(&1).unwrap();
        assert_eq!(cache.peek_victim(), Some((&1, &10)));

        // Removal empties the candidate set again.
        cache.remove(&1);
        assert_eq!(cache.peek_victim(), None);
        cache.debug_validate_invariants();
    }

    #[test]
    fn pop_victim_sequence_is_ordered_by_k_distance() {
        let mut cache = LrukCache::new(8, 2).unwrap();
        for key in 0..4u64 {
            cache.put(key, key).unwrap(); // t1..t4
        }
        for key in (0..4u64).rev() {
            cache.get(&key).unwrap(); // t5..t8: key 3 matures first
        }

        // k-distances equal first-access times: 0 < 1 < 2 < 3.
        let mut victims = Vec::new();
        while let Some((key, _)) = cache.pop_victim() {
            victims.push(key);
            cache.debug_validate_invariants();
        }
        assert_eq!(victims, vec![0, 1, 2, 3]);
        assert!(cache.is_empty());
    }
}

// ==============================================
// Counter Saturation
// ==============================================

mod counter_saturation {
    use super::*;
    use lrukit::ds::LogicalClock;

    #[test]
    fn clock_reports_overflow_at_the_end_of_its_range() {
        let mut clock = LogicalClock::starting_at(u64::MAX - 1);
        assert!(clock.next().is_ok());
        assert!(clock.next().is_err());
    }

    #[test]
    fn fresh_cache_is_unaffected_by_an_exhausted_sibling() {
        // The clock is per-instance state: one saturated cache says nothing
        // about another.
        let exhausted = LogicalClock::starting_at(u64::MAX);
        let mut sibling: LrukCache<u64, u64> = LrukCache::new(4, 2).unwrap();
        drop(exhausted);

        sibling.put(1, 1).unwrap();
        assert_eq!(sibling.get(&1).unwrap(), Some(&1));
    }
}
