//! Condition composition and placeholder numbering across whole statements.
//!
//! These tests exercise the public API only: groups, subqueries and forks
//! must all end up numbered once, left to right, on the outermost statement.

use sqlchain::prelude::*;
use sqlchain::{BuildError, Select, rebind};
use std::sync::atomic::{AtomicUsize, Ordering};

// ── Numbering ───────────────────────────────────────────────────────────────

#[test]
fn structured_conditions_number_in_declaration_order() {
    let columns = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"];
    let mut q = select("t");
    for col in columns {
        q = q.and_where(col);
    }

    let raw = q.build_raw();
    assert_eq!(raw.matches('?').count(), columns.len());

    let sql = q.to_sql();
    let expected = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(" AND ");
    assert_eq!(sql, format!("SELECT * FROM t WHERE {expected}"));
}

#[test]
fn connectors_mirror_declarations() {
    let sql = select("t")
        .or_where("a")
        .and_where("b")
        .or_where("c")
        .or_where("d")
        .and_where("e")
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM t WHERE a = $1 AND b = $2 OR c = $3 OR d = $4 AND e = $5"
    );
}

#[test]
fn query_is_idempotent() {
    let q = select("users")
        .and_where("status")
        .where_group(|g| g.and_where("a").or_where("b"))
        .and_where_in_subquery("id", |s| s.table("orders").columns(["user_id"]).limit())
        .limit()
        .offset();

    let first = q.query().unwrap();
    let second = q.query().unwrap();
    assert_eq!(first, second);
    assert_eq!(q.to_sql(), first);
    assert_eq!(q.placeholder_count(), 6);
}

// ── Subqueries ──────────────────────────────────────────────────────────────

#[test]
fn subquery_placeholders_number_globally() {
    let sql = select("users")
        .and_where_in_subquery("users.id", |q| {
            q.table("orders")
                .columns(["user_id"])
                .order_by("total_price", Order::Desc)
                .limit()
        })
        .and_where("id")
        .query()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE users.id IN (SELECT user_id FROM orders ORDER BY total_price DESC LIMIT $1) AND id = $2"
    );
}

#[test]
fn or_subquery_after_condition() {
    let sql = select("users")
        .and_where("role_id")
        .or_where_in_subquery("users.id", |q| {
            q.table("orders")
                .columns(["user_id"])
                .order_by("orders.id", "asc".parse().unwrap())
        })
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE role_id = $1 OR users.id IN (SELECT user_id FROM orders ORDER BY orders.id ASC)"
    );
}

#[test]
fn subquery_between_outer_conditions() {
    let sql = select("users")
        .and_where("status")
        .and_where_in_subquery("users.id", |q| {
            q.table("orders")
                .columns(["user_id"])
                .and_where(("total", ">"))
                .limit()
        })
        .and_where("role")
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE status = $1 AND users.id IN (SELECT user_id FROM orders WHERE total > $2 LIMIT $3) AND role = $4"
    );
}

#[test]
fn nested_subqueries_are_rebound_once() {
    let sql = select("users")
        .and_where_in_subquery("id", |q| {
            q.table("orders")
                .columns(["user_id"])
                .and_where_in_subquery("product_id", |p| {
                    p.table("products").columns(["id"]).and_where("sku")
                })
                .and_where("status")
        })
        .and_where("active")
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE id IN (SELECT user_id FROM orders WHERE product_id IN (SELECT id FROM products WHERE sku = $1) AND status = $2) AND active = $3"
    );
    assert!(!sql.contains('?'));
}

#[test]
fn subquery_text_is_not_rebound_before_splicing() {
    let inner = Select::new("orders").columns(["user_id"]).and_where("total");
    assert_eq!(inner.build_raw(), "SELECT user_id FROM orders WHERE total = ?");

    let sql = select("users")
        .and_where("a")
        .and_where_in_subquery("id", |_| inner.clone())
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE a = $1 AND id IN (SELECT user_id FROM orders WHERE total = $2)"
    );
    assert_eq!(sql, rebind(&select("users").and_where("a").and_where_in_subquery("id", |_| inner).build_raw()));
}

#[test]
fn subquery_without_table_fails() {
    let q = select("users").and_where_in_subquery("id", |q| q.columns(["user_id"]));
    assert_eq!(
        q.query(),
        Err(BuildError::MissingTable { statement: "SELECT" })
    );
}

#[test]
fn subquery_inherits_strict_operators() {
    let q = delete("users")
        .with_config(BuilderConfig::new().reject_unknown_operators())
        .and_where_in_subquery("id", |q| q.table("bans").columns(["user_id"]).and_where(("until", "~")));
    let err = q.query().unwrap_err();
    assert!(err.is_unknown_operator());
}

// ── Groups ──────────────────────────────────────────────────────────────────

#[test]
fn nested_groups() {
    let sql = select("users")
        .and_where("a")
        .where_group(|g| {
            g.and_where("b")
                .where_group(|g| g.and_where("c").or_where("d"))
        })
        .or_where("e")
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE a = $1 AND (b = $2 AND (c = $3 OR d = $4)) OR e = $5"
    );
}

#[test]
fn subquery_inside_group() {
    let sql = select("users")
        .where_group(|g| {
            g.and_where("a").or_where_in_subquery("id", |q| {
                q.table("admins").columns(["user_id"]).and_where("active")
            })
        })
        .limit()
        .to_sql();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE (a = $1 OR id IN (SELECT user_id FROM admins WHERE active = $2)) LIMIT $3"
    );
}

#[test]
fn group_errors_propagate() {
    let q = exists("users").where_group(|g| g.and_where(""));
    assert_eq!(
        q.query(),
        Err(BuildError::MissingColumn { call: "and_where" })
    );
}

// ── Ownership ───────────────────────────────────────────────────────────────

#[test]
fn forked_builders_do_not_share_conditions() {
    let base = select("users").and_where("status");

    let by_id = base.clone().and_where("id");
    let orders = base.clone().table("orders").or_where("total");

    assert_eq!(base.to_sql(), "SELECT * FROM users WHERE status = $1");
    assert_eq!(by_id.to_sql(), "SELECT * FROM users WHERE status = $1 AND id = $2");
    assert_eq!(orders.to_sql(), "SELECT * FROM orders WHERE status = $1 OR total = $2");
}

// ── Operator fallback hook ──────────────────────────────────────────────────

static FALLBACKS: AtomicUsize = AtomicUsize::new(0);

fn count_fallback(column: &str, operator: &str) {
    assert_eq!(column, "name");
    assert_eq!(operator, "LIKE");
    FALLBACKS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn operator_hook_observes_fallbacks() {
    let sql = select("users")
        .with_config(BuilderConfig::new().with_operator_hook(count_fallback))
        .and_where(("id", ">"))
        .and_where(("name", "LIKE"))
        .where_group(|g| g.or_where(("name", "LIKE")))
        .query()
        .unwrap();

    assert_eq!(sql, "SELECT * FROM users WHERE id > $1 AND name = $2 AND (name = $3)");
    assert_eq!(FALLBACKS.load(Ordering::SeqCst), 2);
}
