//! An ergonomic SQL statement builder.
//!
//! Queries are assembled by chaining methods on a [`QueryBuilder`] and
//! rendered into a single SQL string by [`QueryBuilder::to_sql`]. Literal
//! values are escaped inline (single-quoted text, bare `NULL`, unquoted
//! numbers); executing the string against a driver is out of scope for this
//! crate.
//!
//! # Example
//!
//! ```rust
//! use stanza_sql::{table, Cmp};
//!
//! let sql = table("posts")
//!     .select(["id", "title"])
//!     .filter("status", "published")
//!     .or_filter_group(|q| q.filter("status", "draft").filter("locked", 1))
//!     .group_by("id")
//!     .having_count("id", Cmp::Gt, 1)
//!     .limit(20)
//!     .to_sql()
//!     .unwrap();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, title FROM posts \
//!      WHERE status = 'published' OR (status = 'draft' AND locked = 1) \
//!      GROUP BY id HAVING COUNT(id) > 1 LIMIT 20"
//! );
//! ```

pub mod error;
pub mod macros;
pub mod query;
pub mod value;

pub use error::{QueryError, Result};
pub use query::ops::{Aggregate, Cmp, JoinKind, JoinOp, Logical, Sort};
pub use query::{JoinBuilder, QueryBuilder, QueryType};
pub use value::Value;

/// Starts a fresh builder pre-seeded with a FROM entry for `name`.
pub fn table(name: &str) -> QueryBuilder {
    QueryBuilder::new().from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- select ----

    #[test]
    fn select_all_columns() {
        let sql = table("table").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table");
    }

    #[test]
    fn select_specific_columns() {
        let sql = table("table").select(["id", "name", "age"]).to_sql().unwrap();
        assert_eq!(sql, "SELECT id, name, age FROM table");
    }

    #[test]
    fn select_raw_statement() {
        let sql = table("table")
            .select_raw("SELECT column_one, column_two", values![])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT column_one, column_two FROM table");
    }

    #[test]
    fn select_raw_after_columns_keeps_keyword() {
        let sql = table("table")
            .select(["id"])
            .select_raw("COUNT(*) AS total", values![])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT id, COUNT(*) AS total FROM table");
    }

    #[test]
    fn select_column_alias() {
        let sql = table("table").select_as("id", "product_id").to_sql().unwrap();
        assert_eq!(sql, "SELECT id AS product_id FROM table");
    }

    #[test]
    fn select_distinct() {
        let sql = table("table").distinct().select(["id"]).to_sql().unwrap();
        assert_eq!(sql, "SELECT DISTINCT id FROM table");
    }

    #[test]
    fn select_distinct_without_columns() {
        let sql = table("table").distinct().to_sql().unwrap();
        assert_eq!(sql, "SELECT DISTINCT * FROM table");
    }

    #[test]
    fn select_subquery() {
        let sql = table("table")
            .select(["id"])
            .select_sub("something", |q| {
                q.from("table_two").select(["name"]).filter("id", 10)
            })
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id, (SELECT name FROM table_two WHERE id = 10) AS something FROM table"
        );
    }

    // ---- from ----

    #[test]
    fn from_with_alias() {
        let sql = table("table").select(["id"]).to_sql().unwrap();
        assert_eq!(sql, "SELECT id FROM table");

        let sql = QueryBuilder::new()
            .from_as("products", "p")
            .select(["p.id"])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT p.id FROM products AS p");
    }

    #[test]
    fn from_accumulates() {
        let sql = table("one").from("two").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM one, two");
    }

    #[test]
    fn from_trims_identifiers() {
        let sql = table("  table  ").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table");
    }

    // ---- where ----

    #[test]
    fn filter_defaults_to_equality() {
        let sql = table("table").filter("id", 10).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id = 10");
    }

    #[test]
    fn filters_chain_with_and() {
        let sql = table("table")
            .filter("id", 10)
            .filter("status", "published")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE id = 10 AND status = 'published'"
        );
    }

    #[test]
    fn or_filter_chains_with_or() {
        let sql = table("table")
            .filter("status", "published")
            .or_filter("status", "completed")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE status = 'published' OR status = 'completed'"
        );
    }

    #[test]
    fn filter_with_explicit_operator() {
        let sql = table("table").filter_cmp("age", Cmp::Gte, 18).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE age >= 18");
    }

    #[test]
    fn filter_like_wraps_pattern() {
        let sql = table("table").filter_like("status", "something").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE status LIKE '%something%'");
    }

    #[test]
    fn filter_like_keeps_existing_wildcards() {
        let sql = table("table").filter_like("status", "%something").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE status LIKE '%something'");

        let sql = table("table").filter_like("status", "something%").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE status LIKE 'something%'");
    }

    #[test]
    fn filter_not_like_chains() {
        let sql = table("table")
            .filter_not_like("status", "something")
            .or_filter_not_like("status", "some other thing")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE status NOT LIKE '%something%' OR status NOT LIKE '%some other thing%'"
        );
    }

    #[test]
    fn filter_between() {
        let sql = table("table").filter_between("id", 10, 100).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id BETWEEN 10 AND 100");
    }

    #[test]
    fn filter_between_chains() {
        let sql = table("table")
            .filter_between("id", 10, 100)
            .or_filter_between("id", 200, 300)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE id BETWEEN 10 AND 100 OR id BETWEEN 200 AND 300"
        );
    }

    #[test]
    fn filter_not_between() {
        let sql = table("table").filter_not_between("id", 10, 100).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id NOT BETWEEN 10 AND 100");
    }

    #[test]
    fn filter_in_integers() {
        let sql = table("table").filter_in("id", [10, 100]).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id IN (10,100)");
    }

    #[test]
    fn filter_in_strings() {
        let sql = table("table")
            .filter_in("status", ["open", "closed"])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE status IN ('open','closed')");
    }

    #[test]
    fn filter_not_in() {
        let sql = table("table").filter_not_in("id", [1, 2]).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id NOT IN (1,2)");
    }

    #[test]
    fn filter_is_null() {
        let sql = table("table").filter_is_null("id").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id IS NULL");
    }

    #[test]
    fn filter_is_not_null() {
        let sql = table("table").filter_is_not_null("id").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id IS NOT NULL");
    }

    #[test]
    fn filter_raw_substitutes_and_suppresses_keyword() {
        let sql = table("table")
            .filter_raw(
                "WHERE something = %d and something_else = %s",
                values![10, "something"],
            )
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE something = 10 and something_else = 'something'"
        );
    }

    #[test]
    fn filter_raw_after_condition_keeps_keyword() {
        let sql = table("table")
            .filter("id", 10)
            .filter_raw("AND lower(status) = %s", values!["open"])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE id = 10 AND lower(status) = 'open'"
        );
    }

    #[test]
    fn filter_nested_group() {
        let sql = table("table")
            .filter("status", "published")
            .or_filter_group(|q| q.filter("status", "draft").filter("writing", "locked"))
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE status = 'published' OR (status = 'draft' AND writing = 'locked')"
        );
    }

    #[test]
    fn empty_filter_group_is_dropped() {
        let sql = table("table")
            .filter("id", 1)
            .filter_group(|q| q)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE id = 1");
    }

    #[test]
    fn filter_in_subquery() {
        let sql = table("table")
            .filter_in_query("id", |q| {
                q.from("another_table")
                    .select(["another_id"])
                    .filter("category", "something")
            })
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table WHERE id IN (SELECT another_id FROM another_table WHERE category = 'something')"
        );
    }

    #[test]
    fn filter_subquery_comparison() {
        let sql = table("orders")
            .filter_sub("total", Cmp::Gt, |q| {
                q.from("orders").select_raw("SELECT AVG(total)", values![])
            })
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM orders WHERE total > (SELECT AVG(total) FROM orders)"
        );
    }

    #[test]
    fn string_values_are_escaped() {
        let sql = table("table").filter("name", "it's").to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table WHERE name = 'it\\'s'");
    }

    // ---- joins ----

    #[test]
    fn advanced_join_keeps_quoting_asymmetry() {
        let sql = table("table")
            .join(|j| {
                j.left_join("another_table")
                    .on("id", "another_id")
                    .and("other_column", "something")
                    .or("other_column", "other_thing")
            })
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table LEFT JOIN another_table ON id = another_id AND other_column = 'something' OR other_column = 'other_thing'"
        );
    }

    #[test]
    fn join_condition_quote_override() {
        let sql = table("table")
            .join(|j| {
                j.inner_join("t2")
                    .condition(JoinOp::On, "t2.kind", "fixed", Cmp::Eq, true)
                    .condition(JoinOp::And, "t2.parent_id", "table.id", Cmp::Eq, false)
            })
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table INNER JOIN t2 ON t2.kind = 'fixed' AND t2.parent_id = table.id"
        );
    }

    #[test]
    fn left_join_sugar() {
        let sql = table("table")
            .left_join("another_table", "id", "another_id")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table LEFT JOIN another_table ON id = another_id"
        );
    }

    #[test]
    fn left_join_sugar_with_alias() {
        let sql = table("table")
            .left_join_as("another_table", "at", "id", "another_id")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table LEFT JOIN another_table at ON id = another_id"
        );
    }

    #[test]
    fn right_and_inner_join_sugar() {
        let sql = table("table")
            .right_join("another_table", "id", "another_id")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table RIGHT JOIN another_table ON id = another_id"
        );

        let sql = table("table")
            .inner_join("another_table", "id", "another_id")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table INNER JOIN another_table ON id = another_id"
        );
    }

    #[test]
    fn cross_join_sugar() {
        let sql = table("table")
            .cross_join("another_table", "id", "another_id")
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table CROSS JOIN another_table ON id = another_id"
        );
    }

    #[test]
    fn join_raw_passes_through() {
        let sql = table("table")
            .join_raw("LEFT JOIN another_table ON a = b", values![])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table LEFT JOIN another_table ON a = b");
    }

    // ---- having ----

    #[test]
    fn having_plain() {
        let sql = table("table")
            .group_by("id")
            .having("id", Cmp::Gt, 10)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table GROUP BY id HAVING id > 10");
    }

    #[test]
    fn having_count() {
        let sql = table("table")
            .group_by("id")
            .having_count("id", Cmp::Gt, 10)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table GROUP BY id HAVING COUNT(id) > 10");
    }

    #[test]
    fn having_chains_with_and() {
        let sql = table("table")
            .group_by("id")
            .having_count("id", Cmp::Gt, 10)
            .having_count("id", Cmp::Lt, 100)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table GROUP BY id HAVING COUNT(id) > 10 AND COUNT(id) < 100"
        );
    }

    #[test]
    fn having_chains_with_or() {
        let sql = table("table")
            .group_by("id")
            .having_count("id", Cmp::Gt, 10)
            .or_having_count("id", Cmp::Lt, 100)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table GROUP BY id HAVING COUNT(id) > 10 OR COUNT(id) < 100"
        );
    }

    #[test]
    fn having_aggregates() {
        let sql = table("table")
            .group_by("id")
            .having_min("id", Cmp::Gt, 10)
            .having_max("id", Cmp::Lt, 100)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table GROUP BY id HAVING MIN(id) > 10 AND MAX(id) < 100"
        );

        let sql = table("table")
            .group_by("id")
            .having_sum("id", Cmp::Gt, 10)
            .or_having_avg("id", Cmp::Lt, 100)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM table GROUP BY id HAVING SUM(id) > 10 OR AVG(id) < 100"
        );
    }

    #[test]
    fn having_raw_suppresses_keyword_when_first() {
        let sql = table("table")
            .group_by("id")
            .having_raw("HAVING COUNT(id) > %d", values![10])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table GROUP BY id HAVING COUNT(id) > 10");
    }

    // ---- group by / order by ----

    #[test]
    fn group_by_deduplicates() {
        let sql = table("table")
            .group_by("id")
            .group_by(" id ")
            .group_by("name")
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table GROUP BY id, name");
    }

    #[test]
    fn order_by_renders_direction() {
        let sql = table("table").order_by("id", Sort::Asc).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table ORDER BY id ASC");

        let sql = table("table")
            .order_by("id", Sort::Desc)
            .order_by("name", Sort::Asc)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT * FROM table ORDER BY id DESC, name ASC");
    }

    // ---- limit / offset ----

    #[test]
    fn limit_renders() {
        let sql = table("table").limit(10).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table LIMIT 10");
    }

    #[test]
    fn offset_requires_limit() {
        let sql = table("table").offset(20).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table");

        let sql = table("table").limit(10).offset(20).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table LIMIT 10 OFFSET 20");
    }

    // ---- unions ----

    #[test]
    fn union_compiles_member() {
        let first = table("table").select(["something"]);
        let sql = table("another_table")
            .select(["something_else"])
            .union(first)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT something_else FROM another_table UNION SELECT something FROM table"
        );
    }

    #[test]
    fn union_all_chains_members() {
        let first = table("table").select(["something"]);
        let second = table("another_table").select(["another_thing"]);
        let sql = table("some_table")
            .select(["something_else"])
            .union_all(first)
            .union_all(second)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT something_else FROM some_table UNION ALL SELECT something FROM table UNION ALL SELECT another_thing FROM another_table"
        );
    }

    // ---- write statements ----

    #[test]
    fn insert_renders_columns_and_values() {
        let sql = QueryBuilder::new()
            .into("packages")
            .insert([
                ("name", Value::from("soar")),
                ("downloads", Value::from(100_000)),
            ])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO packages (name, downloads) VALUES ('soar', 100000)"
        );
    }

    #[test]
    fn insert_many_renders_one_tuple_per_row() {
        let sql = QueryBuilder::new()
            .into("tags")
            .insert_many([
                [("name", Value::from("cli"))],
                [("name", Value::from("sql"))],
            ])
            .to_sql()
            .unwrap();
        assert_eq!(sql, "INSERT INTO tags (name) VALUES ('cli'), ('sql')");
    }

    #[test]
    fn insert_raw_appends_fragment() {
        let sql = QueryBuilder::new()
            .into("tags")
            .insert([("name", Value::from("cli"))])
            .insert_raw("ON CONFLICT DO NOTHING", values![])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "INSERT INTO tags (name) VALUES ('cli') ON CONFLICT DO NOTHING"
        );
    }

    #[test]
    fn update_renders_set_and_where() {
        let sql = QueryBuilder::new()
            .into("packages")
            .update([("downloads", Value::from(5)), ("pinned", Value::from(true))])
            .filter("id", 2)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE packages SET downloads = 5, pinned = 1 WHERE id = 2"
        );
    }

    #[test]
    fn update_raw_fragment() {
        let sql = QueryBuilder::new()
            .into("packages")
            .update_raw("SET downloads = downloads + %d", values![1])
            .filter("id", 2)
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE packages SET downloads = downloads + 1 WHERE id = 2"
        );
    }

    #[test]
    fn delete_renders_where() {
        let sql = table("packages").delete().filter("id", 2).to_sql().unwrap();
        assert_eq!(sql, "DELETE FROM packages WHERE id = 2");
    }

    // ---- errors ----

    #[test]
    fn conflicting_query_types_error() {
        let err = table("t").select(["x"]).delete().to_sql().unwrap_err();
        assert_eq!(
            err,
            QueryError::TypeConflict {
                current: QueryType::Select,
                requested: QueryType::Delete,
            }
        );
    }

    #[test]
    fn repeated_select_accumulates() {
        let sql = table("t").select(["a"]).select(["b"]).to_sql().unwrap();
        assert_eq!(sql, "SELECT a, b FROM t");
    }

    #[test]
    fn write_statement_without_table_errors() {
        let err = QueryBuilder::new().delete().to_sql().unwrap_err();
        assert_eq!(
            err,
            QueryError::MissingTable {
                query_type: QueryType::Delete,
            }
        );
    }

    #[test]
    fn insert_without_data_errors() {
        let err = QueryBuilder::new()
            .into("t")
            .insert(Vec::<(&str, Value)>::new())
            .to_sql()
            .unwrap_err();
        assert_eq!(
            err,
            QueryError::EmptyValues {
                query_type: QueryType::Insert,
            }
        );
    }

    #[test]
    fn conflict_inside_union_member_surfaces_at_render() {
        let poisoned = table("t").select(["x"]).delete();
        let err = table("u").union(poisoned).to_sql().unwrap_err();
        assert!(matches!(err, QueryError::TypeConflict { .. }));
    }

    // ---- properties ----

    #[test]
    fn rendering_is_idempotent() {
        let query = table("table")
            .select(["id"])
            .filter("status", "published")
            .order_by("id", Sort::Desc)
            .limit(5);
        let first = query.to_sql().unwrap();
        let second = query.to_sql().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sections_render_in_fixed_order() {
        // Calls arrive in scrambled order; sections must not.
        let sql = table("table")
            .limit(5)
            .order_by("id", Sort::Asc)
            .having_count("id", Cmp::Gt, 1)
            .group_by("id")
            .filter("status", "published")
            .left_join("other", "id", "other_id")
            .select(["id"])
            .to_sql()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id FROM table LEFT JOIN other ON id = other_id WHERE status = 'published' GROUP BY id HAVING COUNT(id) > 1 ORDER BY id ASC LIMIT 5"
        );
    }
}
