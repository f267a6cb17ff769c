//! JOIN clauses and relation sugar.

use std::fmt;

/// Kind of JOIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<KIND> JOIN <table> ON <constraint>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: String,
    pub constraint: String,
    pub kind: JoinKind,
}

impl Join {
    pub fn new(kind: JoinKind, table: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            constraint: constraint.into(),
            kind,
        }
    }

    /// LEFT JOIN inferred from an entity name: `<table>.id = <parent>.<entity>_id`.
    pub fn relation(parent_table: &str, entity: &str) -> Self {
        let table = relation_table(entity);
        let constraint = format!("{table}.id = {parent_table}.{entity}_id");
        Self::new(JoinKind::Left, table, constraint)
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} JOIN {} ON {}", self.kind, self.table, self.constraint)
    }
}

/// Table name for an entity: a trailing `y` becomes `ies`, anything else
/// gets an `s`.
///
/// This is a naive heuristic, not an English pluralizer: `person` becomes
/// `persons` and `key` becomes `keies`.
pub fn relation_table(entity: &str) -> String {
    match entity.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{entity}s"),
    }
}

/// Render joins in order, space separated.
pub fn build_joins(joins: &[Join]) -> String {
    joins
        .iter()
        .map(Join::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_table() {
        assert_eq!(relation_table("role"), "roles");
        assert_eq!(relation_table("city"), "cities");
        assert_eq!(relation_table("key"), "keies");
        assert_eq!(relation_table("person"), "persons");
    }

    #[test]
    fn test_relation_join() {
        let join = Join::relation("users", "city");
        assert_eq!(
            join.to_string(),
            "LEFT JOIN cities ON cities.id = users.city_id"
        );
    }

    #[test]
    fn test_build_joins_in_order() {
        let joins = vec![
            Join::new(JoinKind::Inner, "wallets", "wallets.user_id = users.id"),
            Join::new(JoinKind::Right, "posts", "posts.user_id = users.id"),
        ];
        assert_eq!(
            build_joins(&joins),
            "INNER JOIN wallets ON wallets.user_id = users.id RIGHT JOIN posts ON posts.user_id = users.id"
        );
        assert_eq!(build_joins(&[]), "");
    }
}
