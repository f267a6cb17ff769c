//! Shared WHERE clause builder for SELECT, UPDATE, DELETE, EXISTS and groups.

use crate::condition::{Condition, Connector, Operator, try_resolve_operator};
use crate::config::{BuilderConfig, UnknownOperator};
use crate::error::BuildError;
use crate::log;

/// Ordered condition sequence.
///
/// Conditions render in insertion order; every condition after the first is
/// prefixed with its own connector. Placeholders stay as `?` until the owning
/// statement is rebound.
#[derive(Debug, Clone, Default)]
pub struct WhereBuilder {
    /// Conditions in render order
    conditions: Vec<Condition>,
    /// Operator handling and logging settings
    config: BuilderConfig,
    /// First misuse recorded, surfaced at validation
    build_error: Option<BuildError>,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Only affects conditions added afterwards.
    pub fn set_config(&mut self, config: BuilderConfig) {
        self.config = config;
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn build_error(&self) -> Option<&BuildError> {
        self.build_error.as_ref()
    }

    /// Record a misuse. The first error wins.
    pub fn record_error(&mut self, err: BuildError) {
        if self.build_error.is_none() {
            self.build_error = Some(err);
        }
    }

    /// Append a prepared condition.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Append `column <op> ?` from a `[column, operator?]` argument list.
    pub fn push_compare(&mut self, connector: Connector, args: Vec<String>, call: &'static str) {
        let Some(column) = args.first().filter(|c| !c.is_empty()) else {
            self.record_error(BuildError::missing_column(call));
            return;
        };

        let operator = match try_resolve_operator(&args) {
            Ok(op) => op,
            Err(token) => match self.config.unknown_operator {
                UnknownOperator::Reject => {
                    let err = BuildError::unknown_operator(column.as_str(), token);
                    self.record_error(err);
                    return;
                }
                UnknownOperator::Fallback => {
                    log::operator_fallback(column, token);
                    if let Some(hook) = self.config.operator_hook {
                        hook(column.as_str(), token);
                    }
                    Operator::Eq
                }
            },
        };

        let condition = Condition::compare(column.as_str(), operator).with_connector(connector);
        self.conditions.push(condition);
    }

    /// Append a raw fragment verbatim.
    pub fn push_raw(&mut self, connector: Connector, fragment: impl Into<String>) {
        self.conditions
            .push(Condition::raw(fragment).with_connector(connector));
    }

    /// Render the conditions without the `WHERE` keyword.
    pub fn build_conditions(&self) -> String {
        let mut out = String::new();
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(condition.connector().as_str());
                out.push(' ');
            }
            condition.append_to(&mut out);
        }
        out
    }

    /// Render `WHERE ...`, or an empty string when there are no conditions.
    pub fn build_clause(&self) -> String {
        if self.conditions.is_empty() {
            return String::new();
        }
        format!("WHERE {}", self.build_conditions())
    }

    /// Number of `?` markers the conditions contribute.
    pub fn placeholder_count(&self) -> usize {
        self.conditions.iter().map(Condition::placeholder_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_renders_nothing() {
        let wb = WhereBuilder::new();
        assert!(wb.is_empty());
        assert_eq!(wb.build_clause(), "");
        assert_eq!(wb.build_conditions(), "");
    }

    #[test]
    fn test_first_connector_is_not_emitted() {
        let mut wb = WhereBuilder::new();
        wb.push_compare(Connector::Or, args(&["email"]), "or_where");
        wb.push_compare(Connector::And, args(&["role_id"]), "and_where");
        wb.push_compare(Connector::Or, args(&["type"]), "or_where");
        assert_eq!(
            wb.build_clause(),
            "WHERE email = ? AND role_id = ? OR type = ?"
        );
        assert_eq!(wb.placeholder_count(), 3);
    }

    #[test]
    fn test_missing_column_is_recorded() {
        let mut wb = WhereBuilder::new();
        wb.push_compare(Connector::And, Vec::new(), "and_where");
        wb.push_compare(Connector::And, args(&["", "="]), "or_where");
        assert!(wb.is_empty());
        assert_eq!(
            wb.build_error(),
            Some(&BuildError::MissingColumn { call: "and_where" })
        );
    }

    #[test]
    fn test_unknown_operator_falls_back() {
        let mut wb = WhereBuilder::new();
        wb.push_compare(Connector::And, args(&["status", "=="]), "and_where");
        assert_eq!(wb.build_clause(), "WHERE status = ?");
        assert!(wb.build_error().is_none());
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let mut wb = WhereBuilder::with_config(BuilderConfig::new().reject_unknown_operators());
        wb.push_compare(Connector::And, args(&["status", "LIKE"]), "and_where");
        assert!(wb.is_empty());
        assert!(wb.build_error().is_some_and(BuildError::is_unknown_operator));
    }

    #[test]
    fn test_raw_conditions_keep_markers() {
        let mut wb = WhereBuilder::new();
        wb.push(Condition::compare("age", Operator::Gte));
        wb.push_raw(Connector::Or, "(a = ? OR b = ?)");
        assert_eq!(wb.build_conditions(), "age >= ? OR (a = ? OR b = ?)");
        assert_eq!(wb.placeholder_count(), 3);
    }
}
