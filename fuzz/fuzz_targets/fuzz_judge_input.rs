//! Fuzz target: judge mode over arbitrary candidate output.
//!
//! The judge must never panic, and must accept an input only when its
//! non-blank lines are exactly the greeted solution.
#![no_main]

use hello_keith::judge::judge;
use hello_keith_core::{Greeting, NamePool, Seed, ShuffledOrder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First byte picks the seed so different orders get exercised.
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };
    let order = ShuffledOrder::from_seed(&Seed::new(seed.to_string()), &NamePool::default());
    let greeting = Greeting::default();
    let input = String::from_utf8_lossy(rest);

    if judge(&order, &greeting, &input).is_ok() {
        let accepted: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
        let solution = greeting.solution(&order);
        let expected: Vec<&str> = solution.lines().collect();
        assert_eq!(accepted, expected, "judge accepted a wrong answer");
    }
});
