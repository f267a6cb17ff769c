//! Convenient imports for typical `sqlchain` usage.
//!
//! The condition methods live on the [`Filterable`] trait, so it has to be in
//! scope for chains like `select("users").and_where("id")`:
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! ```

pub use crate::{
    BuildError, BuildResult, BuilderConfig, Filterable, Order, Statement, count_over, delete,
    exists, insert, select, update,
};
