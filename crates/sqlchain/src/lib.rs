//! # sqlchain
//!
//! A chainable builder for parameterized PostgreSQL statement text.
//!
//! ## Features
//!
//! - **Text only**: builders produce SQL with `$1, $2, ...` placeholders; binding
//!   values and executing is left to the driver
//! - **Composable conditions**: AND/OR chains, parenthesized groups and `IN`
//!   subqueries, all numbered in one pass after the whole statement is assembled
//! - **Owned builders**: each statement owns its conditions; `clone()` forks
//! - **Safe defaults**: DELETE requires WHERE, UPDATE requires SET
//!
//! ## Usage
//!
//! ```ignore
//! use sqlchain::prelude::*;
//!
//! // SELECT
//! let sql = select("users")
//!     .and_where("email")
//!     .or_where(("id", ">="))
//!     .order_by("created_at", Order::Desc)
//!     .limit()
//!     .query()?;
//! // SELECT * FROM users WHERE email = $1 OR id >= $2 ORDER BY created_at DESC LIMIT $3
//!
//! // Subquery
//! let sql = select("users")
//!     .and_where_in_subquery("users.id", |q| {
//!         q.table("orders").columns(["user_id"]).order_by("total_price", Order::Desc).limit()
//!     })
//!     .and_where("id")
//!     .query()?;
//! // SELECT * FROM users WHERE users.id IN
//! //   (SELECT user_id FROM orders ORDER BY total_price DESC LIMIT $1) AND id = $2
//!
//! // INSERT / UPDATE / DELETE / EXISTS
//! insert("users").into(["name", "email"]).returning(["id"]).query()?;
//! update("users").set(["status"]).and_where("id").query()?;
//! delete("users").and_where("id").query()?;
//! exists("users").and_where("email").query()?;
//! ```

pub mod builder;
pub mod condition;
pub mod config;
pub mod error;
pub mod prelude;
pub mod rebind;

mod log;

pub use builder::{
    Delete, Exists, Filterable, Insert, Join, JoinKind, Order, Select, Statement, StatementKind,
    Update, WhereBuilder, WhereGroup,
};
pub use condition::{ALLOWED_OPERATORS, ColumnArgs, Condition, Connector, Operator, Predicate};
pub use config::{BuilderConfig, OperatorHook, UnknownOperator};
pub use error::{BuildError, BuildResult};
pub use rebind::{count_placeholders, rebind};

/// Create a SELECT builder for the given table.
pub fn select(table: &str) -> Select {
    Select::new(table)
}

/// Create an INSERT builder for the given table.
pub fn insert(table: &str) -> Insert {
    Insert::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> Update {
    Update::new(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: &str) -> Delete {
    Delete::new(table)
}

/// Create an EXISTS builder for the given table.
pub fn exists(table: &str) -> Exists {
    Exists::new(table)
}

/// Window expression counting all rows of the result, for paginated lists:
/// `select("users").columns(["id", count_over()])`.
pub fn count_over() -> &'static str {
    "COUNT(*) OVER()"
}
