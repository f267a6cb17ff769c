//! Builder configuration.

/// Callback invoked as `(column, operator_token)` when an operator token is
/// not on the allow-list and falls back to `=`.
pub type OperatorHook = fn(&str, &str);

/// What to do with an operator token outside the allow-list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownOperator {
    /// Resolve to `=` (default).
    #[default]
    Fallback,
    /// Record [`BuildError::UnknownOperator`](crate::BuildError::UnknownOperator).
    Reject,
}

/// Configuration shared by a statement and everything composed inside it
/// (groups and subqueries inherit their parent's configuration).
///
/// By default unknown operators fall back to `=` with no hook installed.
#[derive(Debug, Clone, Copy)]
pub struct BuilderConfig {
    /// Handling of operator tokens outside the allow-list.
    pub unknown_operator: UnknownOperator,
    /// Called whenever an operator token falls back to `=`.
    pub operator_hook: Option<OperatorHook>,
    /// Truncate SQL in log events (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            unknown_operator: UnknownOperator::Fallback,
            operator_hook: None,
            max_logged_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a build error instead of falling back to `=`.
    pub fn reject_unknown_operators(mut self) -> Self {
        self.unknown_operator = UnknownOperator::Reject;
        self
    }

    /// Install a hook observing operator fallbacks.
    pub fn with_operator_hook(mut self, hook: OperatorHook) -> Self {
        self.operator_hook = Some(hook);
        self
    }

    /// Set maximum SQL length in log events.
    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}
