//! Placeholder rebinding.
//!
//! Statements are assembled with generic `?` markers. [`rebind`] renumbers
//! them into `$1, $2, ...` in a single left-to-right pass. It must run once,
//! on the outermost statement, after every group and subquery has been
//! spliced in; rebinding a fragment and then splicing it would restart the
//! numbering.

use std::fmt::Write;

/// Replace the Nth `?` in `sql` with `$N`.
///
/// Numbering follows textual order only. Every `?` is treated as a
/// placeholder, including ones inside string literals.
pub fn rebind(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + sql.len() / 8);
    let mut idx: usize = 0;

    for (i, part) in sql.split('?').enumerate() {
        if i > 0 {
            idx += 1;
            let _ = write!(&mut out, "${}", idx);
        }
        out.push_str(part);
    }
    out
}

/// Number of `?` markers in `sql`.
pub fn count_placeholders(sql: &str) -> usize {
    sql.bytes().filter(|b| *b == b'?').count()
}
