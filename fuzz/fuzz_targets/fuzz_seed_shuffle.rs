//! Fuzz target: seeded shuffle.
//!
//! Any seed must shuffle the default pool into a permutation of itself,
//! and do so identically twice.
#![no_main]

use hello_keith_core::{NamePool, Seed, ShuffledOrder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let seed = Seed::new(String::from_utf8_lossy(data));
    let pool = NamePool::default();

    let order = ShuffledOrder::from_seed(&seed, &pool);
    assert_eq!(order, ShuffledOrder::from_seed(&seed, &pool), "shuffle must be deterministic");

    let mut got: Vec<&str> = order.iter().collect();
    let mut want: Vec<&str> = pool.names().iter().map(String::as_str).collect();
    got.sort_unstable();
    want.sort_unstable();
    assert_eq!(got, want, "shuffle must be a permutation");
});
