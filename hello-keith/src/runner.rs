//! Single-invocation driver shared by the binary and the tests.

use std::io::{Read, Write};

use hello_keith_core::ShuffledOrder;
use tracing::{debug, info};

use crate::cli::{Invocation, Mode};
use crate::config::CheckerConfig;
use crate::error::CheckError;
use crate::generate::write_order;
use crate::judge::judge;

/// Run one invocation to completion.
///
/// Generator mode writes the shuffled order to `output`. Judge mode reads
/// all of `input` before comparing it and writes nothing on success.
///
/// # Errors
/// Returns the judge verdict on failure, or [`CheckError::Io`] if
/// `input` or `output` fails.
pub fn run<R, W>(
    invocation: &Invocation,
    config: &CheckerConfig,
    mut input: R,
    mut output: W,
) -> Result<(), CheckError>
where
    R: Read,
    W: Write,
{
    let seed_hash = invocation.seed.hash();
    let order = ShuffledOrder::from_seed(&invocation.seed, &config.pool);

    debug!(
        mode = %invocation.mode,
        seed_hash = %seed_hash,
        seed_u64 = seed_hash.as_u64(),
        names = order.len(),
        "resolved invocation"
    );

    match invocation.mode {
        Mode::Fuzz => {
            write_order(&order, &mut output)?;
            info!(names = order.len(), "wrote fuzz input");
            Ok(())
        }
        Mode::Judge => {
            let mut raw = Vec::new();
            input.read_to_end(&mut raw)?;
            let text = String::from_utf8_lossy(&raw);
            debug!(bytes = raw.len(), "read candidate output");

            let verdict = judge(&order, &config.greeting, &text);
            match &verdict {
                Ok(()) => info!("candidate output accepted"),
                Err(e) => info!(error = %e, "candidate output rejected"),
            }
            verdict
        }
    }
}
