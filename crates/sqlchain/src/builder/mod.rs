//! Statement builders.
//!
//! Every builder assembles its statement with generic `?` markers and leaves
//! numbering to a single [`rebind`](crate::rebind::rebind) pass when the
//! outermost statement is rendered.
//!
//! ## Design
//!
//! - Builders own their condition sequence; chained calls consume and
//!   return the builder, and `clone()` forks a deep copy.
//! - The condition API lives on [`Filterable`], implemented by SELECT,
//!   UPDATE, DELETE, EXISTS and [`WhereGroup`].
//! - Misuse is recorded at the offending call and reported by
//!   [`Statement::validate`] / [`Statement::query`].

pub mod delete;
pub mod exists;
pub mod filter;
pub mod group;
pub mod insert;
pub mod join;
pub mod select;
pub mod traits;
pub mod update;
pub mod where_builder;

pub use delete::Delete;
pub use exists::Exists;
pub use filter::Filterable;
pub use group::WhereGroup;
pub use insert::Insert;
pub use join::{Join, JoinKind, relation_table};
pub use select::{Order, Select};
pub use traits::{Statement, StatementKind};
pub use update::Update;
pub use where_builder::WhereBuilder;
