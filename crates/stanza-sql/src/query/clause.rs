//! Clause value objects.
//!
//! Each variant captures one fragment of intent exactly as the caller gave
//! it, with identifiers trimmed on construction. The compiler matches on
//! these closed sets exhaustively; nothing here knows how to render itself.

use crate::query::builder::QueryBuilder;
use crate::query::join::JoinBuilder;
use crate::query::ops::{Aggregate, Cmp, Logical, Sort};
use crate::query::raw::RawSql;
use crate::value::Value;

/// One entry in the SELECT list.
#[derive(Debug)]
pub(crate) enum SelectItem {
    Column {
        column: String,
        alias: Option<String>,
    },
    Raw(RawSql),
    /// A parenthesized sub-select rendered as `(subquery) AS alias`.
    SubQuery {
        alias: String,
        query: Box<QueryBuilder>,
    },
}

impl SelectItem {
    pub fn column(column: &str, alias: Option<&str>) -> Self {
        SelectItem::Column {
            column: column.trim().to_string(),
            alias: alias.map(|a| a.trim().to_string()),
        }
    }
}

/// One entry in the FROM list.
#[derive(Debug)]
pub(crate) enum TableItem {
    Table {
        name: String,
        alias: Option<String>,
    },
    Raw(RawSql),
}

impl TableItem {
    pub fn table(name: &str, alias: Option<&str>) -> Self {
        TableItem::Table {
            name: name.trim().to_string(),
            alias: alias.map(|a| a.trim().to_string()),
        }
    }
}

/// A single WHERE predicate, dispatched by operator family at render time.
#[derive(Debug)]
pub(crate) enum Predicate {
    Compare {
        column: String,
        cmp: Cmp,
        value: Value,
    },
    Like {
        column: String,
        pattern: String,
        negated: bool,
    },
    Between {
        column: String,
        low: Value,
        high: Value,
        negated: bool,
    },
    In {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },
    InQuery {
        column: String,
        query: Box<QueryBuilder>,
        negated: bool,
    },
    Null {
        column: String,
        negated: bool,
    },
    SubQuery {
        column: String,
        cmp: Cmp,
        query: Box<QueryBuilder>,
    },
    /// A nested predicate group rendered as `(...)` without the WHERE keyword.
    Group(Box<QueryBuilder>),
}

/// One entry in the WHERE list.
///
/// `logical` is fixed at insertion: `None` when the list was empty at that
/// moment, so the first predicate never renders a leading connective.
#[derive(Debug)]
pub(crate) enum WhereItem {
    Cond {
        logical: Option<Logical>,
        predicate: Predicate,
    },
    Raw(RawSql),
}

/// One entry in the HAVING list.
#[derive(Debug)]
pub(crate) enum HavingItem {
    Cond {
        logical: Option<Logical>,
        aggregate: Option<Aggregate>,
        column: String,
        cmp: Cmp,
        value: Value,
    },
    Raw(RawSql),
}

/// One entry in the JOIN list.
#[derive(Debug)]
pub(crate) enum JoinItem {
    Builder(JoinBuilder),
    Raw(RawSql),
}

/// Column/value data feeding INSERT and UPDATE rendering.
#[derive(Debug)]
pub(crate) enum DataItem {
    Row(Vec<(String, Value)>),
    Raw(RawSql),
}

/// One `column direction` pair in the ORDER BY list.
#[derive(Debug)]
pub(crate) struct OrderByClause {
    pub column: String,
    pub direction: Sort,
}

impl OrderByClause {
    pub fn new(column: &str, direction: Sort) -> Self {
        Self {
            column: column.trim().to_string(),
            direction,
        }
    }
}

/// A unioned sub-query, compiled when the outer query renders.
#[derive(Debug)]
pub(crate) struct UnionClause {
    pub query: Box<QueryBuilder>,
    pub all: bool,
}
