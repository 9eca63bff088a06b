#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru_k::LrukCache;
use lrukit::traits::{CoreCache, LrukCacheTrait, MutableCache, PutOutcome};

// Fuzz arbitrary operation sequences on the LRU-K cache facade
//
// Exercises put/get/touch/remove/pop_victim over a small key universe and
// validates the cross-structure invariants after every operation.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = ((data[0] % 8) as usize).max(1);
    let k = ((data[1] % 4) as usize).max(1);
    let mut cache: LrukCache<u8, u8> = match LrukCache::new(capacity, k) {
        Ok(cache) => cache,
        Err(_) => return,
    };

    let mut idx = 2;
    while idx + 1 < data.len() {
        let op = data[idx] % 6;
        let key = data[idx + 1] % 16;

        match op {
            0 => {
                let outcome = cache.put(key, data[idx + 1]).unwrap();
                assert!(cache.contains(&key));
                if let PutOutcome::Evicted { key: victim, .. } = outcome {
                    assert!(!cache.contains(&victim));
                }
            }
            1 => {
                let hit = cache.get(&key).unwrap().is_some();
                assert_eq!(hit, cache.contains(&key));
            }
            2 => {
                let touched = cache.touch(&key).unwrap();
                assert_eq!(touched, cache.contains(&key));
            }
            3 => {
                cache.remove(&key);
                assert!(!cache.contains(&key));
            }
            4 => {
                if let Some((victim, _)) = cache.pop_victim() {
                    assert!(!cache.contains(&victim));
                }
            }
            5 => {
                assert_eq!(cache.access_count(&key).is_some(), cache.contains(&key));
                if let Some(history) = cache.access_history(&key) {
                    assert!(history.len() <= k);
                    assert!(history.windows(2).all(|pair| pair[0] > pair[1]));
                }
            }
            _ => unreachable!(),
        }

        cache.debug_validate_invariants();
        idx += 2;
    }
});
