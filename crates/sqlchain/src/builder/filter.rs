//! Condition API shared by every statement that carries a WHERE clause.
//!
//! Each builder owns one [`WhereBuilder`] and exposes it through
//! [`Filterable::where_builder_mut`]; all condition methods are provided on
//! top of that accessor and return the concrete builder type, so chains keep
//! their type:
//!
//! ```ignore
//! use sqlchain::prelude::*;
//!
//! let sql = update("users")
//!     .set(["status"])
//!     .and_where(("status", "!="))
//!     .or_where_null("deleted_at")
//!     .query()?;
//! ```

use super::group::WhereGroup;
use super::select::Select;
use super::traits::Statement;
use super::where_builder::WhereBuilder;
use crate::condition::{ColumnArgs, Condition, Connector};
use crate::error::BuildError;

/// Builders that accumulate WHERE conditions.
pub trait Filterable: Sized {
    /// The builder's own condition sequence.
    fn where_builder_mut(&mut self) -> &mut WhereBuilder;

    // ==================== Comparisons ====================

    /// Add `column <op> ?` attached with AND.
    ///
    /// `args` is the column, optionally followed by an operator from
    /// [`ALLOWED_OPERATORS`](crate::condition::ALLOWED_OPERATORS). Unknown
    /// operators resolve to `=`.
    fn and_where(mut self, args: impl ColumnArgs) -> Self {
        self.where_builder_mut()
            .push_compare(Connector::And, args.into_column_args(), "and_where");
        self
    }

    /// Add `column <op> ?` attached with OR.
    fn or_where(mut self, args: impl ColumnArgs) -> Self {
        self.where_builder_mut()
            .push_compare(Connector::Or, args.into_column_args(), "or_where");
        self
    }

    /// Add `column LIKE ?` attached with AND.
    fn and_where_like(self, column: &str) -> Self {
        column_condition(self, Connector::And, column, "and_where_like", Condition::like)
    }

    /// Add `column LIKE ?` attached with OR.
    fn or_where_like(self, column: &str) -> Self {
        column_condition(self, Connector::Or, column, "or_where_like", Condition::like)
    }

    // ==================== NULL checks ====================

    /// Add `column IS NULL` attached with AND.
    fn and_where_null(self, column: &str) -> Self {
        column_condition(self, Connector::And, column, "and_where_null", Condition::is_null)
    }

    /// Add `column IS NULL` attached with OR.
    fn or_where_null(self, column: &str) -> Self {
        column_condition(self, Connector::Or, column, "or_where_null", Condition::is_null)
    }

    /// Add `column IS NOT NULL` attached with AND.
    fn and_where_not_null(self, column: &str) -> Self {
        column_condition(
            self,
            Connector::And,
            column,
            "and_where_not_null",
            Condition::is_not_null,
        )
    }

    /// Add `column IS NOT NULL` attached with OR.
    fn or_where_not_null(self, column: &str) -> Self {
        column_condition(
            self,
            Connector::Or,
            column,
            "or_where_not_null",
            Condition::is_not_null,
        )
    }

    // ==================== Text search ====================

    /// Add `(STRPOS(column, ?) > 0 OR ? = '')` attached with AND.
    ///
    /// Bind the search term twice; an empty term matches every row.
    fn and_strpos(self, column: &str) -> Self {
        column_condition(self, Connector::And, column, "and_strpos", Condition::strpos)
    }

    /// Add `(STRPOS(column, ?) > 0 OR ? = '')` attached with OR.
    fn or_strpos(self, column: &str) -> Self {
        column_condition(self, Connector::Or, column, "or_strpos", Condition::strpos)
    }

    // ==================== Raw fragments ====================

    /// Add a raw fragment attached with AND.
    ///
    /// The fragment is inserted verbatim and may contain its own `?` markers.
    /// The caller must ensure it is valid and safe SQL.
    fn and_raw(mut self, fragment: &str) -> Self {
        self.where_builder_mut().push_raw(Connector::And, fragment);
        self
    }

    /// Add a raw fragment attached with OR.
    fn or_raw(mut self, fragment: &str) -> Self {
        self.where_builder_mut().push_raw(Connector::Or, fragment);
        self
    }

    // ==================== Groups & subqueries ====================

    /// Add a parenthesized group, always attached with AND.
    ///
    /// `f` receives a fresh group; the connectors inside it are up to `f`.
    /// An empty group adds nothing.
    fn where_group<F>(mut self, f: F) -> Self
    where
        F: FnOnce(WhereGroup) -> WhereGroup,
    {
        let wb = self.where_builder_mut();
        let group = f(WhereGroup::with_config(*wb.config()));
        if let Some(err) = group.build_error() {
            wb.record_error(err.clone());
        }
        if !group.is_empty() {
            wb.push_raw(Connector::And, group.build_raw());
        }
        self
    }

    /// Add `column IN (<subquery>)` attached with AND.
    ///
    /// `f` receives a fresh [`Select`] without a table; set one with
    /// [`Select::table`]. The subquery's `?` markers are left unresolved and
    /// numbered together with the outer statement.
    fn and_where_in_subquery<F>(self, column: &str, f: F) -> Self
    where
        F: FnOnce(Select) -> Select,
    {
        in_subquery(self, Connector::And, column, "and_where_in_subquery", f)
    }

    /// Add `column IN (<subquery>)` attached with OR.
    fn or_where_in_subquery<F>(self, column: &str, f: F) -> Self
    where
        F: FnOnce(Select) -> Select,
    {
        in_subquery(self, Connector::Or, column, "or_where_in_subquery", f)
    }
}

fn column_condition<B: Filterable>(
    mut builder: B,
    connector: Connector,
    column: &str,
    call: &'static str,
    make: impl FnOnce(&str) -> Condition,
) -> B {
    let wb = builder.where_builder_mut();
    if column.is_empty() {
        wb.record_error(BuildError::missing_column(call));
    } else {
        wb.push(make(column).with_connector(connector));
    }
    builder
}

fn in_subquery<B, F>(
    mut builder: B,
    connector: Connector,
    column: &str,
    call: &'static str,
    f: F,
) -> B
where
    B: Filterable,
    F: FnOnce(Select) -> Select,
{
    let wb = builder.where_builder_mut();
    if column.is_empty() {
        wb.record_error(BuildError::missing_column(call));
        return builder;
    }

    let inner = f(Select::new("").with_config(*wb.config()));
    if let Err(err) = inner.validate() {
        wb.record_error(err);
    }
    wb.push_raw(connector, format!("{column} IN ({})", inner.build_raw()));
    builder
}
