#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::AccessHistory;

// Fuzz arbitrary operation sequences on AccessHistory
//
// Tests random sequences of record, kth_most_recent, most_recent, k_distance,
// clear, and to_vec_mru operations to find edge cases and invariant
// violations.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Use first byte to determine capacity (1-32)
    let k = ((data[0] % 32) as usize).max(1);
    let mut history = AccessHistory::new(k);

    let mut idx = 1;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let timestamp = u64::from(data[idx + 1]);

        match op {
            0 => {
                history.record(timestamp);
            }
            1 => {
                let result = history.most_recent();
                if !history.is_empty() {
                    assert!(result.is_some());
                }
            }
            2 => {
                let n = ((data[idx + 1] as usize) % k).max(1);
                let result = history.kth_most_recent(n);
                if n > history.len() {
                    assert!(result.is_none());
                }
            }
            3 => {
                let vec = history.to_vec_mru();
                assert_eq!(vec.len(), history.len());
                for (i, &ts) in vec.iter().enumerate() {
                    assert_eq!(history.kth_most_recent(i + 1), Some(ts));
                }
            }
            4 => {
                // k_distance only reported at a full history, and it must
                // equal the least recent retained timestamp.
                match history.k_distance() {
                    Some(marker) => {
                        assert!(history.is_full());
                        assert_eq!(history.kth_most_recent(history.len()), Some(marker));
                    }
                    None => assert!(!history.is_full()),
                }
            }
            5 => {
                history.clear();
                assert!(history.is_empty());
                assert_eq!(history.most_recent(), None);
            }
            _ => unreachable!(),
        }

        // Validate invariants after each operation
        history.debug_validate_invariants();
        assert!(history.len() <= k);
        assert_eq!(history.capacity(), k);

        idx += 2;
    }
});
