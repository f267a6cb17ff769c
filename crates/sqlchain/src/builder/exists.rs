use super::filter::Filterable;
use super::traits::{Statement, StatementKind};
use super::where_builder::WhereBuilder;
use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};

/// `SELECT EXISTS(SELECT true FROM <table> WHERE ...)` builder.
#[derive(Debug, Clone, Default)]
pub struct Exists {
    /// Table name
    table: String,
    /// WHERE conditions
    where_builder: WhereBuilder,
}

impl Exists {
    /// Create a new EXISTS builder.
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
}

impl Filterable for Exists {
    fn where_builder_mut(&mut self) -> &mut WhereBuilder {
        &mut self.where_builder
    }
}

impl Statement for Exists {
    fn kind(&self) -> StatementKind {
        StatementKind::Exists
    }

    fn config(&self) -> &BuilderConfig {
        self.where_builder.config()
    }

    fn build_raw(&self) -> String {
        let mut sql = format!("SELECT EXISTS(SELECT true FROM {}", self.table);

        if !self.where_builder.is_empty() {
            sql.push(' ');
            sql.push_str(&self.where_builder.build_clause());
        }

        sql.push(')');
        sql
    }

    fn validate(&self) -> BuildResult<()> {
        if let Some(err) = self.where_builder.build_error() {
            return Err(err.clone());
        }
        if self.table.is_empty() {
            return Err(BuildError::MissingTable {
                statement: StatementKind::Exists.as_str(),
            });
        }
        Ok(())
    }
}
