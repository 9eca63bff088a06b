#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::{CandidateSet, VictimRank};

// Fuzz arbitrary operation sequences on CandidateSet
//
// Drives random insert/remove/weakest/pop_weakest sequences over a small key
// universe and checks the ordering invariants after each step.
fuzz_target!(|data: &[u8]| {
    let mut candidates: CandidateSet<u8> = CandidateSet::new();

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 5;
        let key = data[idx + 1] % 16;
        let rank = match data[idx + 2] % 4 {
            3 => VictimRank::Cold,
            _ => VictimRank::Distance(u64::from(data[idx + 2])),
        };

        match op {
            0 => {
                let len_before = candidates.len();
                let inserted = candidates.insert(rank, key);
                if inserted {
                    assert_eq!(candidates.len(), len_before + 1);
                    assert!(candidates.contains(rank, &key));
                } else {
                    assert_eq!(candidates.len(), len_before);
                }
            }
            1 => {
                let was_member = candidates.contains(rank, &key);
                assert_eq!(candidates.remove(rank, &key), was_member);
                assert!(!candidates.contains(rank, &key));
            }
            2 => {
                // weakest never mutates
                let len_before = candidates.len();
                let _ = candidates.weakest();
                assert_eq!(candidates.len(), len_before);
            }
            3 => {
                let weakest = candidates.weakest().copied();
                let popped = candidates.pop_weakest();
                assert_eq!(weakest, popped);
            }
            4 => {
                // Iteration runs weakest-first.
                let ranks: Vec<VictimRank> =
                    candidates.iter().map(|(rank, _)| *rank).collect();
                assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
            }
            _ => unreachable!(),
        }

        candidates.debug_validate_invariants();
        idx += 3;
    }
});
