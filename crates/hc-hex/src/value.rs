// SPDX-License-Identifier: MIT
//
// Dynamic argument values.
//
// The formatter accepts loosely shaped input: bare numbers, numeric or
// percent text, ordered lists, and labeled records. `Value` holds any of
// them so the arity-polymorphic entry point can take `&[Value]` and pick
// the shape at runtime. It deserializes straight from JSON, which is how
// the command-line tool feeds records and lists in.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// A loosely typed formatter argument.
///
/// `Null` stands for an absent channel. Everything else is either a
/// channel candidate (`Bool`, `Number`, `Text`) or a container shape
/// (`List`, `Record`) accepted only as the sole argument of a call.
///
/// # Examples
///
/// ```
/// use hc_hex::Value;
///
/// let v: Value = serde_json::from_str(r#"{"r": 0, "g": 128, "b": 255}"#).unwrap();
/// assert!(matches!(v, Value::Record(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Build a record from `(key, value)` pairs.
    ///
    /// Later pairs overwrite earlier ones with the same key.
    #[must_use]
    pub fn record<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether this value means "not supplied".
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value's shape, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Record(_) => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Number(f64::from(n))
                }
            }
        )*
    };
}

from_number!(u8, u16, u32, i8, i16, i32, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_null_is_null() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn json_integers_become_numbers() {
        let v: Value = serde_json::from_str("128").unwrap();
        assert_eq!(v, Value::Number(128.0));
    }

    #[test]
    fn json_array_of_mixed_values() {
        let v: Value = serde_json::from_str(r#"[0, "50%", null, true]"#).unwrap();
        assert_eq!(
            v,
            Value::List(vec![
                Value::Number(0.0),
                Value::Text("50%".into()),
                Value::Null,
                Value::Bool(true),
            ])
        );
    }

    #[test]
    fn json_object_becomes_record() {
        let v: Value = serde_json::from_str(r#"{"r": 1, "alpha": "10%"}"#).unwrap();
        assert_eq!(v, Value::record([("r", Value::from(1)), ("alpha", "10%".into())]));
    }

    #[test]
    fn record_later_keys_win() {
        let v = Value::record([("a", 1), ("a", 2)]);
        assert_eq!(v, Value::record([("a", 2)]));
    }

    #[test]
    fn option_none_is_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }

    #[test]
    fn display_is_readable() {
        let v = Value::from(vec![Value::from(1), "x".into(), Value::Null]);
        assert_eq!(v.to_string(), r#"[1, "x", null]"#);
        assert_eq!(Value::record([("r", 0.5)]).to_string(), "{r: 0.5}");
    }

    #[test]
    fn kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from("x").kind(), "text");
        assert_eq!(Value::List(vec![]).kind(), "list");
    }
}
