//! `tracing` events emitted by the builders.
//!
//! Enable via the crate feature `tracing` (on by default). With the feature
//! off every function here is a no-op.

use crate::builder::StatementKind;

/// Cut `sql` to at most `max_bytes`, respecting char boundaries.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
fn truncate_sql(sql: &str, max_len: Option<usize>) -> String {
    match max_len {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

/// A statement was rendered by `query()`.
pub(crate) fn sql_built(kind: StatementKind, sql: &str, placeholders: usize, max_len: Option<usize>) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "sqlchain.sql",
        statement = kind.as_str(),
        placeholders,
        sql = %truncate_sql(sql, max_len),
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, sql, placeholders, max_len);
}

/// An operator token was not on the allow-list and resolved to `=`.
pub(crate) fn operator_fallback(column: &str, token: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        target: "sqlchain.operator",
        column,
        operator = token,
        "unknown operator, falling back to '='"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (column, token);
}
