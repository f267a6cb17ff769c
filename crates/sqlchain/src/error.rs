//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for statement building
pub type BuildResult<T> = Result<T, BuildError>;

/// Misuse detected while building a statement.
///
/// Errors are recorded at the call that caused them and surfaced by
/// [`Statement::validate`](crate::Statement::validate) /
/// [`Statement::query`](crate::Statement::query).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A condition call was given no column argument
    #[error("{call}: missing column argument")]
    MissingColumn { call: &'static str },

    /// Operator token outside the allow-list (strict mode only)
    #[error("Unknown operator '{operator}' for column '{column}'")]
    UnknownOperator { column: String, operator: String },

    /// Statement has no target table
    #[error("{statement} statement has no table")]
    MissingTable { statement: &'static str },

    /// INSERT without columns or UPDATE without SET
    #[error("{statement} statement has no columns")]
    MissingColumns { statement: &'static str },

    /// DELETE without WHERE that was not explicitly allowed
    #[error("DELETE without WHERE; call allow_delete_all(true) to permit it")]
    UnguardedDelete,

    /// `with("")`
    #[error("Relation name cannot be empty")]
    EmptyRelation,

    /// Sort direction that is neither ASC nor DESC
    #[error("Invalid sort direction: {0}")]
    InvalidDirection(String),
}

impl BuildError {
    /// Create a missing column error for the given call
    pub fn missing_column(call: &'static str) -> Self {
        Self::MissingColumn { call }
    }

    /// Create an unknown operator error
    pub fn unknown_operator(column: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::UnknownOperator {
            column: column.into(),
            operator: operator.into(),
        }
    }

    /// Check if this is an unknown operator error
    pub fn is_unknown_operator(&self) -> bool {
        matches!(self, Self::UnknownOperator { .. })
    }
}
