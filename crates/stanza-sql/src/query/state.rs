//! Accumulated query state.
//!
//! One [`QueryState`] record backs each builder: an ordered container per
//! clause category, mutated only through the builder's own methods and read
//! by the compiler at render time.

use std::fmt;

use crate::query::clause::{
    DataItem, HavingItem, JoinItem, OrderByClause, SelectItem, TableItem, UnionClause, WhereItem,
};

/// The statement family a builder produces.
///
/// Unset state compiles as SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryType::Select => "SELECT",
            QueryType::Insert => "INSERT",
            QueryType::Update => "UPDATE",
            QueryType::Delete => "DELETE",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Default)]
pub(crate) struct QueryState {
    pub query_type: Option<QueryType>,
    pub selects: Vec<SelectItem>,
    pub tables: Vec<TableItem>,
    pub wheres: Vec<WhereItem>,
    pub joins: Vec<JoinItem>,
    pub data: Vec<DataItem>,
    pub havings: Vec<HavingItem>,
    pub group_by: Vec<String>,
    pub order_by: Vec<OrderByClause>,
    pub unions: Vec<UnionClause>,
    pub distinct: bool,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
