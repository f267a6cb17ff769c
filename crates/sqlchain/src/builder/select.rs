//! SELECT statement builder.

use super::filter::Filterable;
use super::join::{Join, JoinKind, build_joins};
use super::traits::{Statement, StatementKind};
use super::where_builder::WhereBuilder;
use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};
use std::fmt;
use std::str::FromStr;

/// Sort direction of the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = BuildError;

    /// Case-insensitive `asc` / `desc`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Order::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Order::Desc)
        } else {
            Err(BuildError::InvalidDirection(s.to_string()))
        }
    }
}

/// SELECT statement builder.
///
/// ```ignore
/// let sql = select("users")
///     .columns(["id", "name"])
///     .with(["role"])
///     .and_where("status")
///     .order_by("created_at", Order::Desc)
///     .limit()
///     .offset()
///     .query()?;
/// // SELECT id, name FROM users LEFT JOIN roles ON roles.id = users.role_id
/// //   WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3
/// ```
#[derive(Debug, Clone, Default)]
pub struct Select {
    /// Table name
    table: String,
    /// Selected columns; empty means `*`
    columns: Vec<String>,
    /// JOIN clauses in declaration order
    joins: Vec<Join>,
    /// WHERE conditions
    where_builder: WhereBuilder,
    /// Single ORDER BY pair
    order_by: Option<(String, Order)>,
    /// Reserve a `LIMIT ?` placeholder
    has_limit: bool,
    /// Reserve an `OFFSET ?` placeholder
    has_offset: bool,
}

impl Select {
    /// Create a new SELECT builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    /// Replace the configuration. Call before adding conditions.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.where_builder.set_config(config);
        self
    }

    /// Re-target the statement at another table.
    ///
    /// Conditions, joins and columns already added stay with this builder;
    /// use `clone()` first to keep the original.
    pub fn table(mut self, table: &str) -> Self {
        self.table = table.to_string();
        self
    }

    /// Set the selected columns (replaces any previous list).
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    // ==================== JOIN ====================

    /// Add `INNER JOIN table ON constraint`.
    pub fn join(mut self, table: &str, constraint: &str) -> Self {
        self.joins.push(Join::new(JoinKind::Inner, table, constraint));
        self
    }

    /// Add `LEFT JOIN table ON constraint`.
    pub fn left_join(mut self, table: &str, constraint: &str) -> Self {
        self.joins.push(Join::new(JoinKind::Left, table, constraint));
        self
    }

    /// Add `RIGHT JOIN table ON constraint`.
    pub fn right_join(mut self, table: &str, constraint: &str) -> Self {
        self.joins.push(Join::new(JoinKind::Right, table, constraint));
        self
    }

    /// Load one-to-many relations without spelling out the join.
    ///
    /// Each entity `e` adds `LEFT JOIN <es> ON <es>.id = <table>.e_id`; see
    /// [`relation_table`](super::join::relation_table) for the naming rule.
    /// The constraint uses the table name current at the time of the call.
    pub fn with<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entity in entities {
            let entity = entity.as_ref();
            if entity.is_empty() {
                self.where_builder.record_error(BuildError::EmptyRelation);
                continue;
            }
            self.joins.push(Join::relation(&self.table, entity));
        }
        self
    }

    // ==================== ORDER / LIMIT / OFFSET ====================

    /// Set `ORDER BY column ASC|DESC`. Only one pair is kept; the last call wins.
    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.order_by = Some((column.to_string(), order));
        self
    }

    /// Reserve a `LIMIT ?` placeholder; the value is bound at execution.
    pub fn limit(mut self) -> Self {
        self.has_limit = true;
        self
    }

    /// Reserve an `OFFSET ?` placeholder; the value is bound at execution.
    pub fn offset(mut self) -> Self {
        self.has_offset = true;
        self
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }
}

impl Filterable for Select {
    fn where_builder_mut(&mut self) -> &mut WhereBuilder {
        &mut self.where_builder
    }
}

impl Statement for Select {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn config(&self) -> &BuilderConfig {
        self.where_builder.config()
    }

    fn build_raw(&self) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        let mut sql = format!("SELECT {} FROM {}", columns, self.table);

        if !self.joins.is_empty() {
            sql.push(' ');
            sql.push_str(&build_joins(&self.joins));
        }

        if !self.where_builder.is_empty() {
            sql.push(' ');
            sql.push_str(&self.where_builder.build_clause());
        }

        if let Some((column, order)) = &self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(column);
            sql.push(' ');
            sql.push_str(order.as_str());
        }

        if self.has_limit {
            sql.push_str(" LIMIT ?");
        }

        if self.has_offset {
            sql.push_str(" OFFSET ?");
        }

        sql
    }

    fn validate(&self) -> BuildResult<()> {
        if let Some(err) = self.where_builder.build_error() {
            return Err(err.clone());
        }
        if self.table.is_empty() {
            return Err(BuildError::MissingTable {
                statement: StatementKind::Select.as_str(),
            });
        }
        Ok(())
    }
}
