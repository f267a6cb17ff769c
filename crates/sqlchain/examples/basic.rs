//! Basic usage example for sqlchain
//!
//! Run with: cargo run --example basic -p sqlchain

use sqlchain::BuildError;
use sqlchain::prelude::*;

fn main() -> Result<(), BuildError> {
    // Simple SELECT with relation sugar and pagination placeholders
    let list = select("users")
        .columns(["users.id", "users.name", "roles.name", count_over()])
        .with(["role"])
        .and_where_null("users.deleted_at")
        .and_strpos("users.name")
        .order_by("users.created_at", Order::Desc)
        .limit()
        .offset();
    println!("{}", list.query()?);
    println!("  -> bind {} values", list.placeholder_count());

    // Grouped conditions and a subquery, numbered in one pass
    let buyers = select("users")
        .and_where("status")
        .where_group(|g| g.and_where(("age", ">=")).or_where("is_admin"))
        .and_where_in_subquery("users.id", |q| {
            q.table("orders")
                .columns(["user_id"])
                .and_where(("total_price", ">"))
                .order_by("total_price", Order::Desc)
                .limit()
        });
    println!("{}", buyers.query()?);

    println!("{}", insert("users").into(["name", "email"]).returning(["id"]).query()?);
    println!("{}", update("users").set(["name"]).and_where("id").query()?);
    println!("{}", delete("users").and_where("email").or_where("id").query()?);
    println!("{}", exists("users").and_where("email").query()?);

    // Misuse is reported, not rendered
    match delete("users").query() {
        Ok(sql) => println!("unexpected: {sql}"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
