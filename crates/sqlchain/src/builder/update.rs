use super::filter::Filterable;
use super::traits::{Statement, StatementKind};
use super::where_builder::WhereBuilder;
use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};

/// UPDATE statement builder.
///
/// SET placeholders precede WHERE placeholders in the rendered text, so they
/// are numbered first regardless of call order:
///
/// ```ignore
/// let sql = update("users")
///     .and_where("id")
///     .set(["first_name", "last_name"])
///     .to_sql();
/// assert_eq!(sql, "UPDATE users SET first_name = $1, last_name = $2 WHERE id = $3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Update {
    /// Table name
    table: String,
    /// SET columns in declaration order
    set_columns: Vec<String>,
    /// WHERE conditions
    where_builder: WhereBuilder,
}

impl Update {
    /// Create a new UPDATE builder.
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

    /// Append SET columns, one `column = ?` each.
    pub fn set<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_columns
            .extend(columns.into_iter().map(Into::into));
        self
    }
}

impl Filterable for Update {
    fn where_builder_mut(&mut self) -> &mut WhereBuilder {
        &mut self.where_builder
    }
}

impl Statement for Update {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn config(&self) -> &BuilderConfig {
        self.where_builder.config()
    }

    fn build_raw(&self) -> String {
        let set = self
            .set_columns
            .iter()
            .map(|c| format!("{c} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("UPDATE {} SET {}", self.table, set);

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
                statement: StatementKind::Update.as_str(),
            });
        }
        if self.set_columns.is_empty() {
            return Err(BuildError::MissingColumns {
                statement: StatementKind::Update.as_str(),
            });
        }
        Ok(())
    }
}
