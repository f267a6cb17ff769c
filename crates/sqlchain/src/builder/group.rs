//! Parenthesized condition groups.

use super::filter::Filterable;
use super::where_builder::WhereBuilder;
use crate::config::BuilderConfig;
use crate::error::BuildError;

/// An independent condition sequence folded into its parent as a single
/// parenthesized, AND-attached condition.
///
/// Connectors inside the group are kept as declared, so
/// `g.and_where("email").and_where("role_id").or_where("type")` renders
/// `(email = ? AND role_id = ? OR type = ?)`. Groups nest.
///
/// # Example
/// ```ignore
/// let sql = select("users")
///     .and_where("status")
///     .where_group(|g| g.and_where("role_id").or_where("is_admin"))
///     .to_sql();
/// assert_eq!(sql, "SELECT * FROM users WHERE status = $1 AND (role_id = $2 OR is_admin = $3)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhereGroup {
    where_builder: WhereBuilder,
}

impl WhereGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group sharing its parent's configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            where_builder: WhereBuilder::with_config(config),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.where_builder.is_empty()
    }

    pub fn build_error(&self) -> Option<&BuildError> {
        self.where_builder.build_error()
    }

    /// Render `(<conditions>)` with `?` markers unresolved.
    ///
    /// An empty group renders as an empty string.
    pub fn build_raw(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("({})", self.where_builder.build_conditions())
    }
}

impl Filterable for WhereGroup {
    fn where_builder_mut(&mut self) -> &mut WhereBuilder {
        &mut self.where_builder
    }
}
