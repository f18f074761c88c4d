//! Fuzz target: argument resolution.
//!
//! Splits the input on NUL into an argument vector; resolution must never
//! panic and must reject every count other than three.
#![no_main]

use hello_keith::{CheckError, Invocation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let args: Vec<String> = data
        .split(|&b| b == 0)
        .map(|part| String::from_utf8_lossy(part).into_owned())
        .collect();
    let count = args.len();

    match Invocation::from_args(args) {
        Ok(_) => assert_eq!(count, 3),
        Err(CheckError::Usage { .. }) => assert_ne!(count, 3),
        Err(CheckError::UnknownMode(_)) => assert_eq!(count, 3),
        Err(e) => panic!("unexpected error from argument resolution: {e}"),
    }
});
