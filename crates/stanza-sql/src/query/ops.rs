//! Operator vocabularies shared by the builder and the compiler.
//!
//! Each enum renders to its SQL keyword through [`std::fmt::Display`], so the
//! compiler can interpolate operators directly into clause fragments.

use std::fmt;

/// Comparison operators usable in predicates and join conditions.
///
/// Both SQL spellings of inequality are kept: [`Cmp::Ne`] renders `<>` and
/// [`Cmp::NotEq`] renders `!=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Eq,
    Ne,
    NotEq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl fmt::Display for Cmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Cmp::Eq => "=",
            Cmp::Ne => "<>",
            Cmp::NotEq => "!=",
            Cmp::Gt => ">",
            Cmp::Lt => "<",
            Cmp::Gte => ">=",
            Cmp::Lte => "<=",
        };
        write!(f, "{op}")
    }
}

/// Connective placed before every predicate except the first one in a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logical {
    And,
    Or,
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Logical::And => "AND",
            Logical::Or => "OR",
        };
        write!(f, "{op}")
    }
}

/// Sort direction for `ORDER BY` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Asc,
    Desc,
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self {
            Sort::Asc => "ASC",
            Sort::Desc => "DESC",
        };
        write!(f, "{dir}")
    }
}

/// Aggregate functions that can wrap a `HAVING` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Count,
    Min,
    Max,
    Avg,
    Sum,
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let func = match self {
            Aggregate::Count => "COUNT",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
            Aggregate::Avg => "AVG",
            Aggregate::Sum => "SUM",
        };
        write!(f, "{func}")
    }
}

/// Join flavor for a join declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Left,
    Right,
    Inner,
    Cross,
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Inner => "INNER",
            JoinKind::Cross => "CROSS",
        };
        write!(f, "{kind}")
    }
}

/// Keyword introducing a join condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOp {
    On,
    And,
    Or,
}

impl fmt::Display for JoinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            JoinOp::On => "ON",
            JoinOp::And => "AND",
            JoinOp::Or => "OR",
        };
        write!(f, "{op}")
    }
}
