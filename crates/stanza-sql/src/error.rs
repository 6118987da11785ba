//! Error types for stanza-sql.

use miette::Diagnostic;
use thiserror::Error;

use crate::query::QueryType;

/// Errors surfaced while assembling or rendering a query.
///
/// Construction-time misuse (changing the statement family mid-build) is
/// recorded at the offending call and reported by the terminal render;
/// render-time variants only arise for ill-formed accumulated state.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("query type already set to {current}, refusing to change it to {requested}")]
    #[diagnostic(
        code(stanza_sql::type_conflict),
        help("Build the {requested} statement on a fresh builder")
    )]
    TypeConflict {
        current: QueryType,
        requested: QueryType,
    },

    #[error("{query_type} statement has no target table")]
    #[diagnostic(
        code(stanza_sql::missing_table),
        help("Call `.into()` or `.from()` before rendering")
    )]
    MissingTable { query_type: QueryType },

    #[error("{query_type} statement has no column/value pairs")]
    #[diagnostic(
        code(stanza_sql::empty_values),
        help("Provide at least one column/value pair before rendering")
    )]
    EmptyValues { query_type: QueryType },
}

/// Result type alias for stanza-sql operations.
pub type Result<T> = std::result::Result<T, QueryError>;
