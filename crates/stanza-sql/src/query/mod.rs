//! The query builder.
//!
//! Start with [`crate::table`] or [`QueryBuilder::new`] and chain methods to
//! construct a statement, then render it with
//! [`QueryBuilder::to_sql`].
//!
//! # Overview
//!
//! Each chained call appends one clause value object to the builder's state;
//! nothing is stringified until the terminal render. The compiler walks the
//! accumulated containers in a fixed section order (Select, From, Join,
//! Where, GroupBy, Having, OrderBy, Limit, Offset, Union) regardless of the
//! order the caller made its calls in.
//!
//! # Submodules
//!
//! - [`builder`] — the fluent [`QueryBuilder`].
//! - [`join`] — the [`JoinBuilder`] handed to join configurator closures.
//! - [`ops`] — operator vocabularies ([`ops::Cmp`], [`ops::Sort`], ...).
//! - `clause` — internal clause value objects.
//! - `compiler` — internal rendering of state into SQL text.

pub mod builder;
pub mod join;
pub mod ops;

pub(crate) mod clause;
pub(crate) mod compiler;
pub(crate) mod raw;
pub(crate) mod state;

pub use builder::QueryBuilder;
pub use join::JoinBuilder;
pub use state::QueryType;
