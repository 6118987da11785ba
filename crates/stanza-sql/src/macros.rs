//! Macros for building value lists.

/// Builds a `Vec<`[`Value`](crate::Value)`>` from a comma-separated list of
/// literals, converting each through `Value::from`.
///
/// Raw-fragment methods take any iterator of values; this macro covers the
/// empty and mixed-type cases that plain arrays cannot express.
///
/// ```rust
/// use stanza_sql::{values, Value};
///
/// let args = values![10, "open"];
/// assert_eq!(args, vec![Value::Integer(10), Value::Text("open".into())]);
/// assert!(values![].is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}
