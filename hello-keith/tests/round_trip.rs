//! Integration test: generator output greeted and fed back to the judge.

use hello_keith::{run, CheckError, CheckerConfig, Invocation, Mode};
use hello_keith_core::Seed;

fn generate(config: &CheckerConfig, seed: &str) -> Vec<String> {
    let mut out = Vec::new();
    run(&Invocation::new(Mode::Fuzz, Seed::new(seed)), config, std::io::empty(), &mut out)
        .unwrap_or_else(|e| panic!("fuzz failed for {seed:?}: {e}"));
    String::from_utf8_lossy(&out).lines().map(str::to_owned).collect()
}

fn judge(config: &CheckerConfig, seed: &str, input: &str) -> Result<(), CheckError> {
    run(&Invocation::new(Mode::Judge, Seed::new(seed)), config, input.as_bytes(), std::io::sink())
}

#[test]
fn every_seed_round_trips_through_judge() {
    let config = CheckerConfig::default();
    for i in 0..200 {
        let seed = format!("round-trip-{i}");
        let answer: String =
            generate(&config, &seed).iter().map(|n| format!("Hello, {n}!\n")).collect();
        if let Err(e) = judge(&config, &seed, &answer) {
            panic!("seed {seed:?} rejected its own solution: {e}");
        }
    }
}

#[test]
fn reversed_answer_is_rejected() {
    let config = CheckerConfig::default();
    let names = generate(&config, "alpha");
    let answer: String = names.iter().rev().map(|n| format!("Hello, {n}!\n")).collect();
    match judge(&config, "alpha", &answer) {
        Err(CheckError::Mismatch { case, .. }) => assert!(case <= 5),
        other => panic!("expected Mismatch, got {other:?}"),
    }
}

#[test]
fn too_few_counts_accepted_lines() {
    let config = CheckerConfig::default();
    let names = generate(&config, "gamma");
    let answer: String = names[..3].iter().map(|n| format!("Hello, {n}!\n")).collect();
    match judge(&config, "gamma", &answer) {
        Err(CheckError::TooFewLines { expected, got }) => assert_eq!((expected, got), (5, 3)),
        other => panic!("expected TooFewLines, got {other:?}"),
    }
}

proptest::proptest! {
    #[test]
    fn proptest_generator_output_is_stable(seed in ".*") {
        let config = CheckerConfig::default();
        proptest::prop_assert_eq!(generate(&config, &seed), generate(&config, &seed));
    }

    #[test]
    fn proptest_greeted_output_passes_judge(seed in ".*") {
        let config = CheckerConfig::default();
        let answer: String =
            generate(&config, &seed).iter().map(|n| format!("Hello, {n}!\n")).collect();
        proptest::prop_assert!(judge(&config, &seed, &answer).is_ok());
    }
}
