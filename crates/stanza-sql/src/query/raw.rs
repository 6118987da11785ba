//! Raw SQL fragments with positional argument substitution.

use crate::value::Value;

/// A caller-supplied SQL fragment, inserted verbatim into its clause list.
///
/// `%s` and `%d` placeholders are substituted left to right with the escaped
/// form of each argument when the fragment is constructed; `%%` renders a
/// literal percent sign. Surplus arguments are ignored and surplus
/// placeholders pass through untouched.
#[derive(Debug, Clone)]
pub(crate) struct RawSql {
    pub sql: String,
}

impl RawSql {
    pub fn new(sql: &str, args: Vec<Value>) -> Self {
        if args.is_empty() {
            return Self {
                sql: sql.to_string(),
            };
        }

        let mut out = String::with_capacity(sql.len());
        let mut args = args.into_iter();
        let mut chars = sql.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('%') => {
                    chars.next();
                    out.push('%');
                }
                Some('s') | Some('d') => match args.next() {
                    Some(value) => {
                        chars.next();
                        out.push_str(&value.to_sql());
                    }
                    None => out.push('%'),
                },
                _ => out.push('%'),
            }
        }

        Self { sql: out }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholders_in_order() {
        let raw = RawSql::new(
            "WHERE a = %d AND b = %s",
            vec![Value::from(10), Value::from("x")],
        );
        assert_eq!(raw.sql, "WHERE a = 10 AND b = 'x'");
    }

    #[test]
    fn no_args_leaves_fragment_untouched() {
        let raw = RawSql::new("SELECT a, b", vec![]);
        assert_eq!(raw.sql, "SELECT a, b");
    }

    #[test]
    fn double_percent_is_a_literal() {
        let raw = RawSql::new("LIKE '%%foo%%' AND x = %d", vec![Value::from(1)]);
        assert_eq!(raw.sql, "LIKE '%foo%' AND x = 1");
    }

    #[test]
    fn surplus_placeholders_pass_through() {
        let raw = RawSql::new("a = %d AND b = %s", vec![Value::from(1)]);
        assert_eq!(raw.sql, "a = 1 AND b = %s");
    }

    #[test]
    fn surplus_arguments_are_ignored() {
        let raw = RawSql::new("a = %d", vec![Value::from(1), Value::from(2)]);
        assert_eq!(raw.sql, "a = 1");
    }
}
