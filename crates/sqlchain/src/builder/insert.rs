use super::traits::{Statement, StatementKind};
use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};

/// INSERT statement builder.
///
/// Renders one `?` per column: `INSERT INTO users (name, email) VALUES (?, ?)`.
#[derive(Debug, Clone, Default)]
pub struct Insert {
    /// Table name
    table: String,
    /// Inserted columns
    columns: Vec<String>,
    /// RETURNING columns
    returning_cols: Vec<String>,
    config: BuilderConfig,
}

impl Insert {
    /// Create a new INSERT builder.
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the inserted columns (replaces any previous list).
    #[allow(clippy::should_implement_trait, clippy::wrong_self_convention)]
    pub fn into<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set `RETURNING (...)` columns (replaces any previous list).
    pub fn returning<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.returning_cols = columns.into_iter().map(Into::into).collect();
        self
    }
}

impl Statement for Insert {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn build_raw(&self) -> String {
        let placeholders = vec!["?"; self.columns.len()].join(", ");
        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders
        );

        if !self.returning_cols.is_empty() {
            sql.push_str(" RETURNING (");
            sql.push_str(&self.returning_cols.join(", "));
            sql.push(')');
        }

        sql
    }

    fn validate(&self) -> BuildResult<()> {
        if self.table.is_empty() {
            return Err(BuildError::MissingTable {
                statement: StatementKind::Insert.as_str(),
            });
        }
        if self.columns.is_empty() {
            return Err(BuildError::MissingColumns {
                statement: StatementKind::Insert.as_str(),
            });
        }
        Ok(())
    }
}
