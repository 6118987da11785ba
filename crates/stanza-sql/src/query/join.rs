//! The join sub-builder.
//!
//! A [`JoinBuilder`] is handed to the configurator closure passed to
//! [`QueryBuilder::join`](crate::query::builder::QueryBuilder::join). It
//! records join declarations and ON/AND/OR conditions in call order; the
//! compiler later distinguishes the two by variant, not position.

use crate::query::ops::{Cmp, JoinKind, JoinOp};
use crate::query::raw::RawSql;
use crate::value::Value;

/// One entry in a join sub-builder's list.
#[derive(Debug)]
pub(crate) enum JoinEntry {
    Join {
        kind: JoinKind,
        table: String,
        alias: Option<String>,
    },
    Condition {
        op: JoinOp,
        left: String,
        right: Value,
        cmp: Cmp,
        quote: bool,
    },
    Raw(RawSql),
}

/// Accumulates join declarations and conditions for one `join()` call.
///
/// The right-hand side of a condition is escaped only when its quote flag
/// is set. [`on`](JoinBuilder::on) defaults to unquoted (it compares two
/// column references) while [`and`](JoinBuilder::and) and
/// [`or`](JoinBuilder::or) default to quoted (they compare against a
/// literal). [`condition`](JoinBuilder::condition) overrides either default.
#[derive(Debug, Default)]
pub struct JoinBuilder {
    entries: Vec<JoinEntry>,
}

impl JoinBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The general form behind `on`/`and`/`or`, with the quote flag exposed.
    pub fn condition(
        mut self,
        op: JoinOp,
        left: &str,
        right: impl Into<Value>,
        cmp: Cmp,
        quote: bool,
    ) -> Self {
        self.entries.push(JoinEntry::Condition {
            op,
            left: left.trim().to_string(),
            right: right.into(),
            cmp,
            quote,
        });
        self
    }

    /// Adds `ON left = right`; the right side is a bare column reference.
    pub fn on(self, left: &str, right: &str) -> Self {
        self.condition(JoinOp::On, left, right, Cmp::Eq, false)
    }

    /// [`on`](JoinBuilder::on) with an explicit comparison operator.
    pub fn on_cmp(self, left: &str, right: &str, cmp: Cmp) -> Self {
        self.condition(JoinOp::On, left, right, cmp, false)
    }

    /// Adds `AND left = value`; the right side is an escaped literal.
    pub fn and(self, left: &str, value: impl Into<Value>) -> Self {
        self.condition(JoinOp::And, left, value, Cmp::Eq, true)
    }

    /// [`and`](JoinBuilder::and) with an explicit comparison operator.
    pub fn and_cmp(self, left: &str, value: impl Into<Value>, cmp: Cmp) -> Self {
        self.condition(JoinOp::And, left, value, cmp, true)
    }

    /// Adds `OR left = value`; the right side is an escaped literal.
    pub fn or(self, left: &str, value: impl Into<Value>) -> Self {
        self.condition(JoinOp::Or, left, value, Cmp::Eq, true)
    }

    /// [`or`](JoinBuilder::or) with an explicit comparison operator.
    pub fn or_cmp(self, left: &str, value: impl Into<Value>, cmp: Cmp) -> Self {
        self.condition(JoinOp::Or, left, value, cmp, true)
    }

    pub fn left_join(self, table: &str) -> Self {
        self.declare(JoinKind::Left, table, None)
    }

    pub fn left_join_as(self, table: &str, alias: &str) -> Self {
        self.declare(JoinKind::Left, table, Some(alias))
    }

    pub fn right_join(self, table: &str) -> Self {
        self.declare(JoinKind::Right, table, None)
    }

    pub fn right_join_as(self, table: &str, alias: &str) -> Self {
        self.declare(JoinKind::Right, table, Some(alias))
    }

    pub fn inner_join(self, table: &str) -> Self {
        self.declare(JoinKind::Inner, table, None)
    }

    pub fn inner_join_as(self, table: &str, alias: &str) -> Self {
        self.declare(JoinKind::Inner, table, Some(alias))
    }

    pub fn cross_join(self, table: &str) -> Self {
        self.declare(JoinKind::Cross, table, None)
    }

    pub fn cross_join_as(self, table: &str, alias: &str) -> Self {
        self.declare(JoinKind::Cross, table, Some(alias))
    }

    /// Appends a raw join fragment, inserted verbatim.
    pub fn join_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let args = args.into_iter().map(Into::into).collect();
        self.entries.push(JoinEntry::Raw(RawSql::new(sql, args)));
        self
    }

    pub(crate) fn declare(mut self, kind: JoinKind, table: &str, alias: Option<&str>) -> Self {
        self.entries.push(JoinEntry::Join {
            kind,
            table: table.trim().to_string(),
            alias: alias.map(|a| a.trim().to_string()),
        });
        self
    }

    pub(crate) fn entries(&self) -> &[JoinEntry] {
        &self.entries
    }
}
