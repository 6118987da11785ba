//! The main query builder implementation.

use tracing::debug;

use crate::error::{QueryError, Result};
use crate::query::clause::{
    DataItem, HavingItem, JoinItem, OrderByClause, Predicate, SelectItem, TableItem, UnionClause,
    WhereItem,
};
use crate::query::compiler::Compiler;
use crate::query::join::JoinBuilder;
use crate::query::ops::{Aggregate, Cmp, JoinKind, Logical, Sort};
use crate::query::raw::RawSql;
use crate::query::state::{QueryState, QueryType};
use crate::value::Value;

/// A fluent SQL statement builder.
///
/// Every call appends to one of the ordered clause containers and hands the
/// builder back, so statements read top to bottom the way they render.
/// Rendering happens once [`to_sql`](QueryBuilder::to_sql) is called; until
/// then nothing is stringified, and child builders created for nested
/// groups, sub-selects, joins, and unions are owned by their parent's
/// clause lists.
///
/// # Example
///
/// ```rust
/// use stanza_sql::table;
///
/// let sql = table("posts")
///     .select(["id", "title"])
///     .filter("status", "published")
///     .order_by("id", stanza_sql::Sort::Desc)
///     .limit(10)
///     .to_sql()
///     .unwrap();
///
/// assert_eq!(
///     sql,
///     "SELECT id, title FROM posts WHERE status = 'published' ORDER BY id DESC LIMIT 10"
/// );
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pub(crate) state: QueryState,
    error: Option<QueryError>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- tables ----

    /// Appends a table to the FROM list; multiple calls accumulate.
    pub fn from(mut self, table: &str) -> Self {
        self.state.tables.push(TableItem::table(table, None));
        self
    }

    /// Appends an aliased table to the FROM list.
    pub fn from_as(mut self, table: &str, alias: &str) -> Self {
        self.state.tables.push(TableItem::table(table, Some(alias)));
        self
    }

    /// Appends a raw FROM fragment, inserted verbatim.
    pub fn from_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.state.tables.push(TableItem::Raw(raw_sql(sql, args)));
        self
    }

    /// Names the target table of a write statement.
    pub fn into(self, table: &str) -> Self {
        self.from(table)
    }

    // ---- select ----

    /// Appends plain columns to the SELECT list.
    ///
    /// With no selection at all the statement renders `SELECT *`.
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_query_type(QueryType::Select);
        for column in columns {
            self.state
                .selects
                .push(SelectItem::column(column.as_ref(), None));
        }
        self
    }

    /// Appends `column AS alias` to the SELECT list.
    pub fn select_as(mut self, column: &str, alias: &str) -> Self {
        self.set_query_type(QueryType::Select);
        self.state
            .selects
            .push(SelectItem::column(column, Some(alias)));
        self
    }

    /// Appends a sub-select rendered as `(subquery) AS alias`.
    pub fn select_sub(mut self, alias: &str, configure: impl FnOnce(Self) -> Self) -> Self {
        self.set_query_type(QueryType::Select);
        self.state.selects.push(SelectItem::SubQuery {
            alias: alias.trim().to_string(),
            query: Box::new(configure(QueryBuilder::new())),
        });
        self
    }

    /// Appends a raw SELECT fragment.
    ///
    /// When the raw fragment is the first entry in the list it is assumed to
    /// carry its own `SELECT` keyword.
    pub fn select_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_query_type(QueryType::Select);
        self.state.selects.push(SelectItem::Raw(raw_sql(sql, args)));
        self
    }

    /// Marks the selection `DISTINCT`.
    pub fn distinct(mut self) -> Self {
        self.state.distinct = true;
        self
    }

    // ---- where ----

    /// Appends `column = value`, AND-chained.
    pub fn filter(self, column: &str, value: impl Into<Value>) -> Self {
        self.filter_cmp(column, Cmp::Eq, value)
    }

    /// Appends `column OP value`, AND-chained.
    pub fn filter_cmp(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_where(
            Logical::And,
            Predicate::Compare {
                column: column.trim().to_string(),
                cmp,
                value: value.into(),
            },
        )
    }

    /// Appends `column = value`, OR-chained.
    pub fn or_filter(self, column: &str, value: impl Into<Value>) -> Self {
        self.or_filter_cmp(column, Cmp::Eq, value)
    }

    /// Appends `column OP value`, OR-chained.
    pub fn or_filter_cmp(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_where(
            Logical::Or,
            Predicate::Compare {
                column: column.trim().to_string(),
                cmp,
                value: value.into(),
            },
        )
    }

    /// Appends a parenthesized predicate group, AND-chained.
    ///
    /// The closure receives a fresh builder; only its WHERE list is used.
    /// An empty group is a no-op.
    pub fn filter_group(self, configure: impl FnOnce(Self) -> Self) -> Self {
        self.push_group(Logical::And, configure)
    }

    /// Appends a parenthesized predicate group, OR-chained.
    pub fn or_filter_group(self, configure: impl FnOnce(Self) -> Self) -> Self {
        self.push_group(Logical::Or, configure)
    }

    /// Appends `column OP (subquery)`, AND-chained.
    pub fn filter_sub(self, column: &str, cmp: Cmp, configure: impl FnOnce(Self) -> Self) -> Self {
        self.push_where(
            Logical::And,
            Predicate::SubQuery {
                column: column.trim().to_string(),
                cmp,
                query: Box::new(configure(QueryBuilder::new())),
            },
        )
    }

    /// Appends `column OP (subquery)`, OR-chained.
    pub fn or_filter_sub(
        self,
        column: &str,
        cmp: Cmp,
        configure: impl FnOnce(Self) -> Self,
    ) -> Self {
        self.push_where(
            Logical::Or,
            Predicate::SubQuery {
                column: column.trim().to_string(),
                cmp,
                query: Box::new(configure(QueryBuilder::new())),
            },
        )
    }

    /// Appends `column LIKE pattern`, AND-chained.
    ///
    /// A pattern without `%` is wrapped as `%pattern%` at render time; a
    /// pattern that already contains a wildcard passes through unchanged.
    pub fn filter_like(self, column: &str, pattern: &str) -> Self {
        self.push_like(Logical::And, column, pattern, false)
    }

    /// Appends `column LIKE pattern`, OR-chained.
    pub fn or_filter_like(self, column: &str, pattern: &str) -> Self {
        self.push_like(Logical::Or, column, pattern, false)
    }

    /// Appends `column NOT LIKE pattern`, AND-chained.
    pub fn filter_not_like(self, column: &str, pattern: &str) -> Self {
        self.push_like(Logical::And, column, pattern, true)
    }

    /// Appends `column NOT LIKE pattern`, OR-chained.
    pub fn or_filter_not_like(self, column: &str, pattern: &str) -> Self {
        self.push_like(Logical::Or, column, pattern, true)
    }

    /// Appends `column BETWEEN low AND high`, AND-chained.
    pub fn filter_between(
        self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.push_between(Logical::And, column, low, high, false)
    }

    /// Appends `column BETWEEN low AND high`, OR-chained.
    pub fn or_filter_between(
        self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.push_between(Logical::Or, column, low, high, false)
    }

    /// Appends `column NOT BETWEEN low AND high`, AND-chained.
    pub fn filter_not_between(
        self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.push_between(Logical::And, column, low, high, true)
    }

    /// Appends `column NOT BETWEEN low AND high`, OR-chained.
    pub fn or_filter_not_between(
        self,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        self.push_between(Logical::Or, column, low, high, true)
    }

    /// Appends `column IN (v0,v1,...)`, AND-chained.
    pub fn filter_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_in(Logical::And, column, values, false)
    }

    /// Appends `column IN (v0,v1,...)`, OR-chained.
    pub fn or_filter_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_in(Logical::Or, column, values, false)
    }

    /// Appends `column NOT IN (v0,v1,...)`, AND-chained.
    pub fn filter_not_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_in(Logical::And, column, values, true)
    }

    /// Appends `column NOT IN (v0,v1,...)`, OR-chained.
    pub fn or_filter_not_in<I, V>(self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_in(Logical::Or, column, values, true)
    }

    /// Appends `column IN (subquery)`, AND-chained.
    pub fn filter_in_query(self, column: &str, configure: impl FnOnce(Self) -> Self) -> Self {
        self.push_in_query(Logical::And, column, configure, false)
    }

    /// Appends `column IN (subquery)`, OR-chained.
    pub fn or_filter_in_query(self, column: &str, configure: impl FnOnce(Self) -> Self) -> Self {
        self.push_in_query(Logical::Or, column, configure, false)
    }

    /// Appends `column NOT IN (subquery)`, AND-chained.
    pub fn filter_not_in_query(self, column: &str, configure: impl FnOnce(Self) -> Self) -> Self {
        self.push_in_query(Logical::And, column, configure, true)
    }

    /// Appends `column NOT IN (subquery)`, OR-chained.
    pub fn or_filter_not_in_query(
        self,
        column: &str,
        configure: impl FnOnce(Self) -> Self,
    ) -> Self {
        self.push_in_query(Logical::Or, column, configure, true)
    }

    /// Appends `column IS NULL`, AND-chained.
    pub fn filter_is_null(self, column: &str) -> Self {
        self.push_null(Logical::And, column, false)
    }

    /// Appends `column IS NULL`, OR-chained.
    pub fn or_filter_is_null(self, column: &str) -> Self {
        self.push_null(Logical::Or, column, false)
    }

    /// Appends `column IS NOT NULL`, AND-chained.
    pub fn filter_is_not_null(self, column: &str) -> Self {
        self.push_null(Logical::And, column, true)
    }

    /// Appends `column IS NOT NULL`, OR-chained.
    pub fn or_filter_is_not_null(self, column: &str) -> Self {
        self.push_null(Logical::Or, column, true)
    }

    /// Appends a raw WHERE fragment.
    ///
    /// When the raw fragment is the first entry it is assumed to carry its
    /// own `WHERE` keyword, which suppresses the generated one for the whole
    /// section.
    pub fn filter_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.state.wheres.push(WhereItem::Raw(raw_sql(sql, args)));
        self
    }

    // ---- joins ----

    /// Appends a join configured through a [`JoinBuilder`].
    ///
    /// ```rust
    /// use stanza_sql::table;
    ///
    /// let sql = table("posts")
    ///     .join(|j| j.left_join("authors").on("author_id", "authors.id"))
    ///     .to_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(sql, "SELECT * FROM posts LEFT JOIN authors ON author_id = authors.id");
    /// ```
    pub fn join(mut self, configure: impl FnOnce(JoinBuilder) -> JoinBuilder) -> Self {
        self.state
            .joins
            .push(JoinItem::Builder(configure(JoinBuilder::new())));
        self
    }

    /// Appends `LEFT JOIN table ON left = right`.
    pub fn left_join(self, table: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Left, table, None, left, right)
    }

    /// Appends `LEFT JOIN table alias ON left = right`.
    pub fn left_join_as(self, table: &str, alias: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Left, table, Some(alias), left, right)
    }

    /// Appends `RIGHT JOIN table ON left = right`.
    pub fn right_join(self, table: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Right, table, None, left, right)
    }

    /// Appends `RIGHT JOIN table alias ON left = right`.
    pub fn right_join_as(self, table: &str, alias: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Right, table, Some(alias), left, right)
    }

    /// Appends `INNER JOIN table ON left = right`.
    pub fn inner_join(self, table: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Inner, table, None, left, right)
    }

    /// Appends `INNER JOIN table alias ON left = right`.
    pub fn inner_join_as(self, table: &str, alias: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Inner, table, Some(alias), left, right)
    }

    /// Appends `CROSS JOIN table ON left = right`.
    pub fn cross_join(self, table: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Cross, table, None, left, right)
    }

    /// Appends `CROSS JOIN table alias ON left = right`.
    pub fn cross_join_as(self, table: &str, alias: &str, left: &str, right: &str) -> Self {
        self.join_sugar(JoinKind::Cross, table, Some(alias), left, right)
    }

    /// Appends a raw join fragment, inserted verbatim.
    pub fn join_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.state.joins.push(JoinItem::Raw(raw_sql(sql, args)));
        self
    }

    // ---- having ----

    /// Appends `column OP value` to the HAVING list, AND-chained.
    pub fn having(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::And, None, column, cmp, value)
    }

    /// Appends `column OP value` to the HAVING list, OR-chained.
    pub fn or_having(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::Or, None, column, cmp, value)
    }

    /// Appends `COUNT(column) OP value`, AND-chained.
    pub fn having_count(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::And, Some(Aggregate::Count), column, cmp, value)
    }

    /// Appends `COUNT(column) OP value`, OR-chained.
    pub fn or_having_count(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::Or, Some(Aggregate::Count), column, cmp, value)
    }

    /// Appends `MIN(column) OP value`, AND-chained.
    pub fn having_min(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::And, Some(Aggregate::Min), column, cmp, value)
    }

    /// Appends `MIN(column) OP value`, OR-chained.
    pub fn or_having_min(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::Or, Some(Aggregate::Min), column, cmp, value)
    }

    /// Appends `MAX(column) OP value`, AND-chained.
    pub fn having_max(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::And, Some(Aggregate::Max), column, cmp, value)
    }

    /// Appends `MAX(column) OP value`, OR-chained.
    pub fn or_having_max(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::Or, Some(Aggregate::Max), column, cmp, value)
    }

    /// Appends `AVG(column) OP value`, AND-chained.
    pub fn having_avg(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::And, Some(Aggregate::Avg), column, cmp, value)
    }

    /// Appends `AVG(column) OP value`, OR-chained.
    pub fn or_having_avg(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::Or, Some(Aggregate::Avg), column, cmp, value)
    }

    /// Appends `SUM(column) OP value`, AND-chained.
    pub fn having_sum(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::And, Some(Aggregate::Sum), column, cmp, value)
    }

    /// Appends `SUM(column) OP value`, OR-chained.
    pub fn or_having_sum(self, column: &str, cmp: Cmp, value: impl Into<Value>) -> Self {
        self.push_having(Logical::Or, Some(Aggregate::Sum), column, cmp, value)
    }

    /// Appends a raw HAVING fragment.
    pub fn having_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.state.havings.push(HavingItem::Raw(raw_sql(sql, args)));
        self
    }

    // ---- grouping, ordering, paging ----

    /// Appends a GROUP BY column; duplicate names are dropped.
    pub fn group_by(mut self, column: &str) -> Self {
        let column = column.trim().to_string();
        if !self.state.group_by.contains(&column) {
            self.state.group_by.push(column);
        }
        self
    }

    /// Appends `column direction` to the ORDER BY list.
    pub fn order_by(mut self, column: &str, direction: Sort) -> Self {
        self.state.order_by.push(OrderByClause::new(column, direction));
        self
    }

    /// Caps the number of rows.
    pub fn limit(mut self, limit: u32) -> Self {
        self.state.limit = Some(limit);
        self
    }

    /// Skips rows before the first returned one.
    ///
    /// Ignored unless a [`limit`](QueryBuilder::limit) is also set.
    pub fn offset(mut self, offset: u32) -> Self {
        self.state.offset = Some(offset);
        self
    }

    // ---- unions ----

    /// Appends `UNION <query>`.
    pub fn union(mut self, query: QueryBuilder) -> Self {
        self.state.unions.push(UnionClause {
            query: Box::new(query),
            all: false,
        });
        self
    }

    /// Appends `UNION ALL <query>`.
    pub fn union_all(mut self, query: QueryBuilder) -> Self {
        self.state.unions.push(UnionClause {
            query: Box::new(query),
            all: true,
        });
        self
    }

    // ---- write statements ----

    /// Declares an INSERT with one row of column/value pairs.
    pub fn insert<I, S, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        self.set_query_type(QueryType::Insert);
        let row = collect_row(data);
        if !row.is_empty() {
            self.state.data.push(DataItem::Row(row));
        }
        self
    }

    /// Declares an INSERT with one `VALUES` tuple per row.
    ///
    /// The column list comes from the first row; all rows are expected to
    /// share its shape.
    pub fn insert_many<R, I, S, V>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        self.set_query_type(QueryType::Insert);
        for row in rows {
            let row = collect_row(row);
            if !row.is_empty() {
                self.state.data.push(DataItem::Row(row));
            }
        }
        self
    }

    /// Declares an INSERT whose data fragment is raw SQL.
    pub fn insert_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_query_type(QueryType::Insert);
        self.state.data.push(DataItem::Raw(raw_sql(sql, args)));
        self
    }

    /// Declares an UPDATE with `SET` column/value pairs.
    pub fn update<I, S, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        self.set_query_type(QueryType::Update);
        let row = collect_row(data);
        if !row.is_empty() {
            self.state.data.push(DataItem::Row(row));
        }
        self
    }

    /// Declares an UPDATE whose data fragment is raw SQL.
    pub fn update_raw<I, V>(mut self, sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.set_query_type(QueryType::Update);
        self.state.data.push(DataItem::Raw(raw_sql(sql, args)));
        self
    }

    /// Declares a DELETE.
    pub fn delete(mut self) -> Self {
        self.set_query_type(QueryType::Delete);
        self
    }

    // ---- rendering ----

    /// Renders the accumulated state into a single SQL string.
    ///
    /// Rendering never mutates the builder, so repeated calls yield
    /// byte-identical output. Errors only arise from a query-type conflict
    /// recorded earlier or from ill-formed write-statement state (missing
    /// target table, empty data).
    pub fn to_sql(&self) -> Result<String> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let sql = Compiler::new(&self.state).compile()?;
        debug!("compiled {} statement: {}", self.query_type(), sql);
        Ok(sql)
    }

    /// The statement family this builder compiles as.
    pub fn query_type(&self) -> QueryType {
        self.state.query_type.unwrap_or(QueryType::Select)
    }

    /// Renders only the WHERE list, without the keyword, for embedding as a
    /// parenthesized group in a parent query.
    pub(crate) fn nested_where_sql(&self) -> Result<String> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        let compiled = Compiler::new(&self.state).wheres(true)?;
        Ok(compiled.unwrap_or_default())
    }

    pub(crate) fn has_wheres(&self) -> bool {
        !self.state.wheres.is_empty()
    }

    // ---- internals ----

    fn set_query_type(&mut self, requested: QueryType) {
        match self.state.query_type {
            None => self.state.query_type = Some(requested),
            Some(current) if current == requested => {}
            Some(current) => {
                if self.error.is_none() {
                    self.error = Some(QueryError::TypeConflict { current, requested });
                }
            }
        }
    }

    fn push_where(mut self, logical: Logical, predicate: Predicate) -> Self {
        let logical = if self.state.wheres.is_empty() {
            None
        } else {
            Some(logical)
        };
        self.state.wheres.push(WhereItem::Cond { logical, predicate });
        self
    }

    fn push_group(self, logical: Logical, configure: impl FnOnce(Self) -> Self) -> Self {
        let child = configure(QueryBuilder::new());
        if !child.has_wheres() && child.error.is_none() {
            return self;
        }
        self.push_where(logical, Predicate::Group(Box::new(child)))
    }

    fn push_like(self, logical: Logical, column: &str, pattern: &str, negated: bool) -> Self {
        self.push_where(
            logical,
            Predicate::Like {
                column: column.trim().to_string(),
                pattern: pattern.to_string(),
                negated,
            },
        )
    }

    fn push_between(
        self,
        logical: Logical,
        column: &str,
        low: impl Into<Value>,
        high: impl Into<Value>,
        negated: bool,
    ) -> Self {
        self.push_where(
            logical,
            Predicate::Between {
                column: column.trim().to_string(),
                low: low.into(),
                high: high.into(),
                negated,
            },
        )
    }

    fn push_in<I, V>(self, logical: Logical, column: &str, values: I, negated: bool) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where(
            logical,
            Predicate::In {
                column: column.trim().to_string(),
                values: values.into_iter().map(Into::into).collect(),
                negated,
            },
        )
    }

    fn push_in_query(
        self,
        logical: Logical,
        column: &str,
        configure: impl FnOnce(Self) -> Self,
        negated: bool,
    ) -> Self {
        self.push_where(
            logical,
            Predicate::InQuery {
                column: column.trim().to_string(),
                query: Box::new(configure(QueryBuilder::new())),
                negated,
            },
        )
    }

    fn push_null(self, logical: Logical, column: &str, negated: bool) -> Self {
        self.push_where(
            logical,
            Predicate::Null {
                column: column.trim().to_string(),
                negated,
            },
        )
    }

    fn push_having(
        mut self,
        logical: Logical,
        aggregate: Option<Aggregate>,
        column: &str,
        cmp: Cmp,
        value: impl Into<Value>,
    ) -> Self {
        let logical = if self.state.havings.is_empty() {
            None
        } else {
            Some(logical)
        };
        self.state.havings.push(HavingItem::Cond {
            logical,
            aggregate,
            column: column.trim().to_string(),
            cmp,
            value: value.into(),
        });
        self
    }

    fn join_sugar(
        self,
        kind: JoinKind,
        table: &str,
        alias: Option<&str>,
        left: &str,
        right: &str,
    ) -> Self {
        self.join(|j| j.declare(kind, table, alias).on(left, right))
    }
}

fn raw_sql<I, V>(sql: &str, args: I) -> RawSql
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    RawSql::new(sql, args.into_iter().map(Into::into).collect())
}

fn collect_row<I, S, V>(data: I) -> Vec<(String, Value)>
where
    I: IntoIterator<Item = (S, V)>,
    S: AsRef<str>,
    V: Into<Value>,
{
    data.into_iter()
        .map(|(column, value)| (column.as_ref().trim().to_string(), value.into()))
        .collect()
}
