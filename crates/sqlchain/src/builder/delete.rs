use super::filter::Filterable;
use super::traits::{Statement, StatementKind};
use super::where_builder::WhereBuilder;
use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};

/// DELETE statement builder.
///
/// A DELETE without conditions still renders (`DELETE FROM users`), but
/// [`Statement::query`] refuses it unless [`Delete::allow_delete_all`] was set.
#[derive(Debug, Clone, Default)]
pub struct Delete {
    /// Table name
    table: String,
    /// WHERE conditions
    where_builder: WhereBuilder,
    /// Whether to allow DELETE without WHERE
    allow_delete_all: bool,
}

impl Delete {
    /// Create a new DELETE builder.
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

    /// Allow DELETE without WHERE conditions.
    pub fn allow_delete_all(mut self, allow: bool) -> Self {
        self.allow_delete_all = allow;
        self
    }
}

impl Filterable for Delete {
    fn where_builder_mut(&mut self) -> &mut WhereBuilder {
        &mut self.where_builder
    }
}

impl Statement for Delete {
    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }

    fn config(&self) -> &BuilderConfig {
        self.where_builder.config()
    }

    fn build_raw(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.table);

        if !self.where_builder.is_empty() {
            sql.push(' ');
            sql.push_str(&self.where_builder.build_clause());
        }

        sql
    }

    fn validate(&self) -> BuildResult<()> {
        if let Some(err) = self.where_builder.build_error() {
            return Err(err.clone());
        }
        if self.table.is_empty() {
            return Err(BuildError::MissingTable {
                statement: StatementKind::Delete.as_str(),
            });
        }
        if self.where_builder.is_empty() && !self.allow_delete_all {
            return Err(BuildError::UnguardedDelete);
        }
        Ok(())
    }
}
