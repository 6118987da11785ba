//! Literal values and the inline escaping routine.
//!
//! [`Value`] is the closed set of literal types a query can carry. Anything
//! not representable here cannot reach the escaper, so there is no runtime
//! "unsupported type" failure mode.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Characters that must be escaped inside a single-quoted SQL string.
static ESCAPE_RE: OnceLock<Regex> = OnceLock::new();

/// A literal value destined for a SQL statement.
///
/// Conversions exist for the common primitives; `bool` maps to `1`/`0`
/// (SQLite affinity) and `Option<T>` maps `None` to [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Renders this value as safely quoted SQL text.
    ///
    /// `NULL` is the bare keyword, numbers are unquoted, and text is wrapped
    /// in single quotes with control characters, quotes, and backslashes
    /// escaped.
    pub fn to_sql(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Real(n) => n.to_string(),
            Value::Text(s) => quote_str(s),
        }
    }

    /// The unquoted textual form, used where the value names a column
    /// rather than a literal (join conditions with quoting disabled).
    pub(crate) fn raw_text(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            other => other.to_sql(),
        }
    }
}

fn quote_str(s: &str) -> String {
    let re = ESCAPE_RE
        .get_or_init(|| Regex::new(r#"[\x00\x08\t\n\r\x1A"'\\]"#).unwrap());

    let escaped = re.replace_all(s, |caps: &Captures<'_>| {
        let escape = match &caps[0] {
            "\0" => "\\0",
            "\x08" => "\\b",
            "\t" => "\\t",
            "\n" => "\\n",
            "\r" => "\\r",
            "\x1a" => "\\Z",
            "\"" => "\\\"",
            "'" => "\\'",
            "\\" => "\\\\",
            other => other,
        };
        escape.to_string()
    });

    format!("'{escaped}'")
}

macro_rules! value_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Integer(i64::from(n))
                }
            }
        )+
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Real(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Real(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Integer(i64::from(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_renders_bare_keyword() {
        assert_eq!(Value::Null.to_sql(), "NULL");
        assert_eq!(Value::from(None::<i32>).to_sql(), "NULL");
    }

    #[test]
    fn integers_render_unquoted() {
        assert_eq!(Value::from(10).to_sql(), "10");
        assert_eq!(Value::from(-3i64).to_sql(), "-3");
    }

    #[test]
    fn reals_render_unquoted() {
        assert_eq!(Value::from(2.5).to_sql(), "2.5");
    }

    #[test]
    fn bools_render_as_integers() {
        assert_eq!(Value::from(true).to_sql(), "1");
        assert_eq!(Value::from(false).to_sql(), "0");
    }

    #[test]
    fn plain_text_is_single_quoted() {
        assert_eq!(Value::from("published").to_sql(), "'published'");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(Value::from("it's").to_sql(), "'it\\'s'");
        assert_eq!(Value::from(r"a\b").to_sql(), "'a\\\\b'");
        assert_eq!(Value::from("say \"hi\"").to_sql(), "'say \\\"hi\\\"'");
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(Value::from("a\nb\tc").to_sql(), "'a\\nb\\tc'");
        assert_eq!(Value::from("x\0y").to_sql(), "'x\\0y'");
        assert_eq!(Value::from("z\x1a").to_sql(), "'z\\Z'");
        assert_eq!(Value::from("cr\r").to_sql(), "'cr\\r'");
        assert_eq!(Value::from("bs\x08").to_sql(), "'bs\\b'");
    }

    #[test]
    fn raw_text_skips_quoting_for_text_only() {
        assert_eq!(Value::from("other_id").raw_text(), "other_id");
        assert_eq!(Value::from(7).raw_text(), "7");
        assert_eq!(Value::Null.raw_text(), "NULL");
    }
}
