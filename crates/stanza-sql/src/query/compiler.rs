//! Stateless rendering of accumulated query state into SQL text.
//!
//! One method per clause category, each returning `None` when its source
//! list is empty so the final assembly can filter the fragments and join
//! them with single spaces. Compilation is a single pass over bounded
//! lists; nothing here mutates the state it borrows.

use tracing::trace;

use crate::error::{QueryError, Result};
use crate::query::clause::{
    DataItem, HavingItem, JoinItem, Predicate, SelectItem, TableItem, WhereItem,
};
use crate::query::join::JoinEntry;
use crate::query::ops::Logical;
use crate::query::state::{QueryState, QueryType};
use crate::value::Value;

pub(crate) struct Compiler<'a> {
    query: &'a QueryState,
}

impl<'a> Compiler<'a> {
    pub fn new(query: &'a QueryState) -> Self {
        Self { query }
    }

    /// Assembles the statement for the builder's query type, dropping empty
    /// sections and joining the rest with single spaces.
    pub fn compile(&self) -> Result<String> {
        let sections = match self.query.query_type.unwrap_or(QueryType::Select) {
            QueryType::Select => vec![
                Some(self.select()?),
                self.from(),
                self.joins(),
                self.wheres(false)?,
                self.group_by(),
                self.having(),
                self.order_by(),
                self.limit(),
                self.offset(),
                self.unions()?,
            ],
            QueryType::Insert => vec![
                Some(self.insert_into()?),
                Some(self.insert_data()?),
            ],
            QueryType::Update => vec![
                Some(self.update_set()?),
                self.wheres(false)?,
            ],
            QueryType::Delete => vec![
                Some(self.delete_from()?),
                self.wheres(false)?,
            ],
        };

        let sql = sections
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        Ok(sql.trim().to_string())
    }

    fn select(&self) -> Result<String> {
        let mut statements = Vec::with_capacity(self.query.selects.len());
        let mut keyword = true;

        for (i, item) in self.query.selects.iter().enumerate() {
            match item {
                SelectItem::Raw(raw) => {
                    if i == 0 {
                        keyword = false;
                    }
                    statements.push(raw.sql.clone());
                }
                SelectItem::Column { column, alias } => statements.push(match alias {
                    Some(alias) => format!("{column} AS {alias}"),
                    None => column.clone(),
                }),
                SelectItem::SubQuery { alias, query } => {
                    statements.push(format!("({}) AS {alias}", query.to_sql()?));
                }
            }
        }

        let columns = if statements.is_empty() {
            "*".to_string()
        } else {
            statements.join(", ")
        };

        if keyword {
            let distinct = if self.query.distinct { "DISTINCT " } else { "" };
            Ok(format!("SELECT {distinct}{columns}"))
        } else {
            Ok(columns)
        }
    }

    fn from(&self) -> Option<String> {
        if self.query.tables.is_empty() {
            return None;
        }

        let tables = self
            .query
            .tables
            .iter()
            .map(|item| match item {
                TableItem::Raw(raw) => raw.sql.clone(),
                TableItem::Table { name, alias } => match alias {
                    Some(alias) => format!("{name} AS {alias}"),
                    None => name.clone(),
                },
            })
            .collect::<Vec<_>>();

        Some(format!("FROM {}", tables.join(", ")))
    }

    /// Renders the WHERE list. `nested` drops the keyword for embedding the
    /// result as a parenthesized group inside a parent query.
    pub fn wheres(&self, nested: bool) -> Result<Option<String>> {
        if self.query.wheres.is_empty() {
            return Ok(None);
        }

        let mut clauses = Vec::with_capacity(self.query.wheres.len());
        let mut keyword = true;

        for (i, item) in self.query.wheres.iter().enumerate() {
            match item {
                WhereItem::Raw(raw) => {
                    if i == 0 {
                        keyword = false;
                    }
                    clauses.push(raw.sql.clone());
                }
                WhereItem::Cond { logical, predicate } => {
                    clauses.push(format!(
                        "{}{}",
                        logical_prefix(logical),
                        self.predicate(predicate)?
                    ));
                }
            }
        }

        let compiled = clauses.join(" ");
        if keyword && !nested {
            Ok(Some(format!("WHERE {compiled}")))
        } else {
            Ok(Some(compiled))
        }
    }

    fn predicate(&self, predicate: &Predicate) -> Result<String> {
        let sql = match predicate {
            Predicate::Compare { column, cmp, value } => {
                format!("{column} {cmp} {}", value.to_sql())
            }
            Predicate::Like {
                column,
                pattern,
                negated,
            } => {
                let op = if *negated { "NOT LIKE" } else { "LIKE" };
                let pattern = if pattern.contains('%') {
                    pattern.clone()
                } else {
                    format!("%{pattern}%")
                };
                format!("{column} {op} {}", Value::Text(pattern).to_sql())
            }
            Predicate::Between {
                column,
                low,
                high,
                negated,
            } => {
                let op = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                format!("{column} {op} {} AND {}", low.to_sql(), high.to_sql())
            }
            Predicate::In {
                column,
                values,
                negated,
            } => {
                let op = if *negated { "NOT IN" } else { "IN" };
                let values = values
                    .iter()
                    .map(Value::to_sql)
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{column} {op} ({values})")
            }
            Predicate::InQuery {
                column,
                query,
                negated,
            } => {
                let op = if *negated { "NOT IN" } else { "IN" };
                format!("{column} {op} ({})", query.to_sql()?)
            }
            Predicate::Null { column, negated } => {
                let op = if *negated { "IS NOT NULL" } else { "IS NULL" };
                format!("{column} {op}")
            }
            Predicate::SubQuery { column, cmp, query } => {
                format!("{column} {cmp} ({})", query.to_sql()?)
            }
            Predicate::Group(query) => format!("({})", query.nested_where_sql()?),
        };
        Ok(sql)
    }

    fn joins(&self) -> Option<String> {
        if self.query.joins.is_empty() {
            return None;
        }

        let mut clauses = Vec::new();
        for item in &self.query.joins {
            match item {
                JoinItem::Raw(raw) => clauses.push(raw.sql.clone()),
                JoinItem::Builder(join) => {
                    for entry in join.entries() {
                        match entry {
                            JoinEntry::Raw(raw) => clauses.push(raw.sql.clone()),
                            JoinEntry::Join { kind, table, alias } => clauses.push(match alias {
                                Some(alias) => format!("{kind} JOIN {table} {alias}"),
                                None => format!("{kind} JOIN {table}"),
                            }),
                            JoinEntry::Condition {
                                op,
                                left,
                                right,
                                cmp,
                                quote,
                            } => {
                                let right = if *quote {
                                    right.to_sql()
                                } else {
                                    right.raw_text()
                                };
                                clauses.push(format!("{op} {left} {cmp} {right}"));
                            }
                        }
                    }
                }
            }
        }

        Some(clauses.join(" "))
    }

    fn group_by(&self) -> Option<String> {
        if self.query.group_by.is_empty() {
            return None;
        }
        Some(format!("GROUP BY {}", self.query.group_by.join(", ")))
    }

    fn having(&self) -> Option<String> {
        if self.query.havings.is_empty() {
            return None;
        }

        let mut clauses = Vec::with_capacity(self.query.havings.len());
        let mut keyword = true;

        for (i, item) in self.query.havings.iter().enumerate() {
            match item {
                HavingItem::Raw(raw) => {
                    if i == 0 {
                        keyword = false;
                    }
                    clauses.push(raw.sql.clone());
                }
                HavingItem::Cond {
                    logical,
                    aggregate,
                    column,
                    cmp,
                    value,
                } => {
                    let column = match aggregate {
                        Some(func) => format!("{func}({column})"),
                        None => column.clone(),
                    };
                    clauses.push(format!(
                        "{}{column} {cmp} {}",
                        logical_prefix(logical),
                        value.to_sql()
                    ));
                }
            }
        }

        let compiled = clauses.join(" ");
        if keyword {
            Some(format!("HAVING {compiled}"))
        } else {
            Some(compiled)
        }
    }

    fn order_by(&self) -> Option<String> {
        if self.query.order_by.is_empty() {
            return None;
        }

        let statements = self
            .query
            .order_by
            .iter()
            .map(|order| format!("{} {}", order.column, order.direction))
            .collect::<Vec<_>>();

        Some(format!("ORDER BY {}", statements.join(", ")))
    }

    fn limit(&self) -> Option<String> {
        self.query.limit.map(|limit| format!("LIMIT {limit}"))
    }

    fn offset(&self) -> Option<String> {
        // Emitted only alongside a limit; a lone offset stays silent.
        self.query.limit.and(self.query.offset).map(|offset| format!("OFFSET {offset}"))
    }

    fn unions(&self) -> Result<Option<String>> {
        if self.query.unions.is_empty() {
            return Ok(None);
        }

        let mut unions = Vec::with_capacity(self.query.unions.len());
        for union in &self.query.unions {
            let sql = union.query.to_sql()?;
            trace!("rendered union member: {}", sql);
            let all = if union.all { "ALL " } else { "" };
            unions.push(format!("UNION {all}{sql}"));
        }

        Ok(Some(unions.join(" ")))
    }

    fn insert_into(&self) -> Result<String> {
        let table = self.target_table(QueryType::Insert)?;
        Ok(format!("INSERT INTO {table}"))
    }

    fn insert_data(&self) -> Result<String> {
        let mut parts = Vec::new();

        let rows = self
            .query
            .data
            .iter()
            .filter_map(|item| match item {
                DataItem::Row(row) => Some(row),
                DataItem::Raw(_) => None,
            })
            .collect::<Vec<_>>();

        if let Some(first) = rows.first() {
            let columns = first
                .iter()
                .map(|(column, _)| column.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let tuples = rows
                .iter()
                .map(|row| {
                    let values = row
                        .iter()
                        .map(|(_, value)| value.to_sql())
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("({values})")
                })
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("({columns}) VALUES {tuples}"));
        }

        for item in &self.query.data {
            if let DataItem::Raw(raw) = item {
                parts.push(raw.sql.clone());
            }
        }

        if parts.is_empty() {
            return Err(QueryError::EmptyValues {
                query_type: QueryType::Insert,
            });
        }
        Ok(parts.join(" "))
    }

    fn update_set(&self) -> Result<String> {
        let table = self.target_table(QueryType::Update)?;
        let mut parts = vec![format!("UPDATE {table}")];

        let assignments = self
            .query
            .data
            .iter()
            .filter_map(|item| match item {
                DataItem::Row(row) => Some(row.iter()),
                DataItem::Raw(_) => None,
            })
            .flatten()
            .map(|(column, value)| format!("{column} = {}", value.to_sql()))
            .collect::<Vec<_>>();

        let mut has_data = false;
        if !assignments.is_empty() {
            parts.push(format!("SET {}", assignments.join(", ")));
            has_data = true;
        }

        for item in &self.query.data {
            if let DataItem::Raw(raw) = item {
                parts.push(raw.sql.clone());
                has_data = true;
            }
        }

        if !has_data {
            return Err(QueryError::EmptyValues {
                query_type: QueryType::Update,
            });
        }
        Ok(parts.join(" "))
    }

    fn delete_from(&self) -> Result<String> {
        let table = self.target_table(QueryType::Delete)?;
        Ok(format!("DELETE FROM {table}"))
    }

    fn target_table(&self, query_type: QueryType) -> Result<String> {
        match self.query.tables.first() {
            Some(TableItem::Table { name, .. }) => Ok(name.clone()),
            Some(TableItem::Raw(raw)) => Ok(raw.sql.clone()),
            None => Err(QueryError::MissingTable { query_type }),
        }
    }
}

fn logical_prefix(logical: &Option<Logical>) -> String {
    match logical {
        Some(op) => format!("{op} "),
        None => String::new(),
    }
}
