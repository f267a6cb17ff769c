//! Condition primitives for WHERE clauses.
//!
//! A [`Condition`] is either a structured `column <op> ?` comparison, which
//! always consumes exactly one placeholder, or a raw SQL fragment which
//! consumes as many placeholders as it contains `?` markers.
//!
//! Operator tokens are validated against a fixed allow-list; see
//! [`resolve_operator`].

use std::fmt;

/// Operator tokens accepted from callers, in allow-list order.
pub const ALLOWED_OPERATORS: [&str; 7] = ["=", "!=", ">", "<", ">=", "<=", "NOT"];

/// Comparison operator of a structured condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// `=`
    #[default]
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `NOT`
    Not,
    /// `LIKE`, only produced by the `*_like` helpers
    Like,
}

impl Operator {
    /// SQL text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Not => "NOT",
            Operator::Like => "LIKE",
        }
    }

    /// Map a caller-supplied token onto the allow-list.
    ///
    /// Matching is exact: `"not"` is not `"NOT"`. `LIKE` is not on the list.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            "<" => Some(Operator::Lt),
            ">=" => Some(Operator::Gte),
            "<=" => Some(Operator::Lte),
            "NOT" => Some(Operator::Not),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the operator of a `[column, operator?]` argument list.
///
/// Returns `Err(token)` when a token is present but not on the allow-list.
pub fn try_resolve_operator<S: AsRef<str>>(args: &[S]) -> Result<Operator, &str> {
    match args.get(1) {
        None => Ok(Operator::Eq),
        Some(token) => {
            let token = token.as_ref();
            Operator::from_token(token).ok_or(token)
        }
    }
}

/// Resolve the operator of a `[column, operator?]` argument list, silently
/// falling back to `=` when the token is absent or unknown.
pub fn resolve_operator<S: AsRef<str>>(args: &[S]) -> Operator {
    try_resolve_operator(args).unwrap_or(Operator::Eq)
}

/// Boolean connector joining a condition to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    pub fn as_str(self) -> &'static str {
        match self {
            Connector::And => "AND",
            Connector::Or => "OR",
        }
    }
}

/// The predicate carried by a [`Condition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `column <operator> ?`
    Compare { column: String, operator: Operator },
    /// Verbatim SQL; may embed its own `?` markers.
    Raw(String),
}

/// One predicate of a condition sequence together with its connector.
///
/// The connector is ignored when the condition is first in its sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    connector: Connector,
    predicate: Predicate,
}

impl Condition {
    /// `column <operator> ?`, AND-attached.
    pub fn compare(column: impl Into<String>, operator: Operator) -> Self {
        Self {
            connector: Connector::And,
            predicate: Predicate::Compare {
                column: column.into(),
                operator,
            },
        }
    }

    /// Raw fragment, AND-attached.
    pub fn raw(fragment: impl Into<String>) -> Self {
        Self {
            connector: Connector::And,
            predicate: Predicate::Raw(fragment.into()),
        }
    }

    /// `column IS NULL`
    pub fn is_null(column: &str) -> Self {
        Self::raw(format!("{column} IS NULL"))
    }

    /// `column IS NOT NULL`
    pub fn is_not_null(column: &str) -> Self {
        Self::raw(format!("{column} IS NOT NULL"))
    }

    /// `(STRPOS(column, ?) > 0 OR ? = '')`
    ///
    /// Both placeholders take the same search term; an empty term matches every row.
    pub fn strpos(column: &str) -> Self {
        Self::raw(format!("(STRPOS({column}, ?) > 0 OR ? = '')"))
    }

    /// `column LIKE ?`
    pub fn like(column: &str) -> Self {
        Self::compare(column, Operator::Like)
    }

    /// Replace the connector.
    pub fn with_connector(mut self, connector: Connector) -> Self {
        self.connector = connector;
        self
    }

    /// Attach with OR instead of AND.
    pub fn or(self) -> Self {
        self.with_connector(Connector::Or)
    }

    pub fn connector(&self) -> Connector {
        self.connector
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn is_raw(&self) -> bool {
        matches!(self.predicate, Predicate::Raw(_))
    }

    /// Number of `?` markers this condition contributes.
    pub fn placeholder_count(&self) -> usize {
        match &self.predicate {
            Predicate::Compare { .. } => 1,
            Predicate::Raw(sql) => crate::rebind::count_placeholders(sql),
        }
    }

    /// Append the predicate text (without connector).
    pub fn append_to(&self, out: &mut String) {
        match &self.predicate {
            Predicate::Compare { column, operator } => {
                out.push_str(column);
                out.push(' ');
                out.push_str(operator.as_str());
                out.push_str(" ?");
            }
            Predicate::Raw(sql) => out.push_str(sql),
        }
    }
}

/// Column argument list of a structured condition: the column name, then an
/// optional operator token.
///
/// ```ignore
/// select("users").and_where("id");
/// select("users").and_where(("status", "!="));
/// select("users").and_where(["age", ">="]);
/// ```
pub trait ColumnArgs {
    fn into_column_args(self) -> Vec<String>;
}

impl ColumnArgs for &str {
    fn into_column_args(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl ColumnArgs for String {
    fn into_column_args(self) -> Vec<String> {
        vec![self]
    }
}

impl ColumnArgs for (&str, &str) {
    fn into_column_args(self) -> Vec<String> {
        vec![self.0.to_string(), self.1.to_string()]
    }
}

impl<const N: usize> ColumnArgs for [&str; N] {
    fn into_column_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl ColumnArgs for &[&str] {
    fn into_column_args(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl ColumnArgs for Vec<String> {
    fn into_column_args(self) -> Vec<String> {
        self
    }
}

impl ColumnArgs for Vec<&str> {
    fn into_column_args(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}
