//! Generator mode: print the shuffled order as fuzz input.

use std::io::{self, Write};

use hello_keith_core::ShuffledOrder;

/// Write each name of `order` on its own line and flush.
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_order<W: Write>(order: &ShuffledOrder, out: &mut W) -> io::Result<()> {
    for name in order.iter() {
        writeln!(out, "{name}")?;
    }
    out.flush()
}
