use crate::config::BuilderConfig;
use crate::error::BuildResult;
use crate::log;
use crate::rebind::{count_placeholders, rebind};

/// The kind of statement a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    Exists,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
            StatementKind::Exists => "EXISTS",
        }
    }
}

/// Base trait for statement builders.
pub trait Statement {
    /// Which statement this builder produces.
    fn kind(&self) -> StatementKind;

    /// Configuration the statement was built with.
    fn config(&self) -> &BuilderConfig;

    /// Assemble the statement with its `?` markers unresolved.
    ///
    /// This is the text spliced into an outer statement by the subquery
    /// helpers; it is never rebound on its own.
    fn build_raw(&self) -> String;

    /// Validate builder state.
    fn validate(&self) -> BuildResult<()> {
        Ok(())
    }

    /// Debug helper: assemble and rebind without validating.
    fn to_sql(&self) -> String {
        rebind(&self.build_raw())
    }

    /// Number of values the execution layer has to bind.
    fn placeholder_count(&self) -> usize {
        count_placeholders(&self.build_raw())
    }

    /// Validate, assemble, and rebind the statement into `$1, $2, ...` form.
    ///
    /// Calling this repeatedly yields identical text.
    fn query(&self) -> BuildResult<String> {
        self.validate()?;
        let raw = self.build_raw();
        let placeholders = count_placeholders(&raw);
        let sql = rebind(&raw);
        log::sql_built(
            self.kind(),
            &sql,
            placeholders,
            self.config().max_logged_sql_length,
        );
        Ok(sql)
    }
}
