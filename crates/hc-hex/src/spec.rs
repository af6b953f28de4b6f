// SPDX-License-Identifier: MIT
//
// Color specifications and argument-shape resolution.
//
// A call can arrive in four shapes, all resolved into one `ColorSpec`:
//
//   (r, g, b)          three positional values
//   (r, g, b, a)       four positional values
//   ([r, g, b, a?])    one ordered list
//   ({r, g, b, a?})    one labeled record, alpha under `alpha` or `a`
//
// Positional values past the fourth are ignored, as are list elements
// past the fourth. Any other single argument is rejected.

use std::collections::BTreeMap;

use crate::error::FormatError;
use crate::value::Value;

/// Raw, unnormalized channel values for one color.
///
/// [`Value::Null`] marks a channel that was not supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSpec {
    pub red: Value,
    pub green: Value,
    pub blue: Value,
    pub alpha: Value,
}

impl ColorSpec {
    /// A specification without alpha.
    #[must_use]
    pub fn rgb(red: impl Into<Value>, green: impl Into<Value>, blue: impl Into<Value>) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
            alpha: Value::Null,
        }
    }

    /// A specification with alpha.
    #[must_use]
    pub fn rgba(
        red: impl Into<Value>,
        green: impl Into<Value>,
        blue: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Self {
            alpha: alpha.into(),
            ..Self::rgb(red, green, blue)
        }
    }

    /// Resolve a call's argument list.
    ///
    /// One argument goes through [`from_value`](Self::from_value); any other
    /// count is read positionally.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnsupportedShape`] for a single argument that is
    /// neither a list nor a record.
    pub fn from_args(args: &[Value]) -> Result<Self, FormatError> {
        match args {
            [single] => Self::from_value(single),
            _ => Ok(Self::positional(args)),
        }
    }

    /// Resolve the single-argument shorthand: a list or a record.
    ///
    /// # Errors
    ///
    /// [`FormatError::UnsupportedShape`] for any other value.
    pub fn from_value(value: &Value) -> Result<Self, FormatError> {
        match value {
            Value::List(items) => Ok(Self::positional(items)),
            Value::Record(fields) => Ok(Self::from_record(fields)),
            other => Err(FormatError::UnsupportedShape(format!("{} {other}", other.kind()))),
        }
    }

    /// Whether an alpha value was supplied.
    #[inline]
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        !self.alpha.is_null()
    }

    fn positional(values: &[Value]) -> Self {
        let at = |i: usize| values.get(i).cloned().unwrap_or_default();
        Self {
            red: at(0),
            green: at(1),
            blue: at(2),
            alpha: at(3),
        }
    }

    /// Read `r`, `g`, `b`, and alpha from a record.
    ///
    /// A non-null `alpha` field wins over `a`; `a` is used only when
    /// `alpha` is absent or null.
    fn from_record(fields: &BTreeMap<String, Value>) -> Self {
        let field = |key: &str| fields.get(key).filter(|v| !v.is_null()).cloned();
        Self {
            red: field("r").unwrap_or_default(),
            green: field("g").unwrap_or_default(),
            blue: field("b").unwrap_or_default(),
            alpha: field("alpha").or_else(|| field("a")).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_positional() {
        let spec = ColorSpec::from_args(&[1.into(), 2.into(), 3.into()]).unwrap();
        assert_eq!(spec, ColorSpec::rgb(1, 2, 3));
        assert!(!spec.has_alpha());
    }

    #[test]
    fn four_positional() {
        let spec = ColorSpec::from_args(&[1.into(), 2.into(), 3.into(), "50%".into()]).unwrap();
        assert_eq!(spec, ColorSpec::rgba(1, 2, 3, "50%"));
        assert!(spec.has_alpha());
    }

    #[test]
    fn extra_positional_values_ignored() {
        let args: Vec<Value> = (1..=6).map(Value::from).collect();
        assert_eq!(ColorSpec::from_args(&args).unwrap(), ColorSpec::rgba(1, 2, 3, 4));
    }

    #[test]
    fn two_positional_leaves_blue_missing() {
        let spec = ColorSpec::from_args(&[10.into(), 20.into()]).unwrap();
        assert_eq!(spec.blue, Value::Null);
    }

    #[test]
    fn no_arguments_is_all_missing() {
        assert_eq!(ColorSpec::from_args(&[]).unwrap(), ColorSpec::default());
    }

    #[test]
    fn single_list() {
        let list = Value::from(vec![0, 128, 255]);
        assert_eq!(ColorSpec::from_args(&[list]).unwrap(), ColorSpec::rgb(0, 128, 255));
    }

    #[test]
    fn single_list_with_alpha() {
        let list = Value::from(vec![Value::from(0), 0.into(), 0.into(), 0.5.into()]);
        assert_eq!(ColorSpec::from_value(&list).unwrap(), ColorSpec::rgba(0, 0, 0, 0.5));
    }

    #[test]
    fn single_record() {
        let rec = Value::record([("r", 0), ("g", 128), ("b", 255)]);
        assert_eq!(ColorSpec::from_value(&rec).unwrap(), ColorSpec::rgb(0, 128, 255));
    }

    #[test]
    fn record_short_alpha_key() {
        let rec = Value::record([("r", 1), ("g", 2), ("b", 3), ("a", 4)]);
        assert_eq!(ColorSpec::from_value(&rec).unwrap().alpha, Value::from(4));
    }

    #[test]
    fn record_alpha_wins_over_a() {
        let rec = Value::record([
            ("r", Value::from(1)),
            ("g", 2.into()),
            ("b", 3.into()),
            ("a", 0.25.into()),
            ("alpha", "50%".into()),
        ]);
        assert_eq!(ColorSpec::from_value(&rec).unwrap().alpha, Value::from("50%"));
    }

    #[test]
    fn record_null_alpha_falls_back_to_a() {
        let rec = Value::record([("a", Value::from(0.25)), ("alpha", Value::Null)]);
        assert_eq!(ColorSpec::from_value(&rec).unwrap().alpha, Value::from(0.25));
    }

    #[test]
    fn record_ignores_unknown_keys() {
        let rec = Value::record([("red", 255), ("g", 0), ("b", 0)]);
        let spec = ColorSpec::from_value(&rec).unwrap();
        assert_eq!(spec.red, Value::Null);
    }

    #[test]
    fn single_scalar_is_unsupported() {
        for v in [Value::from(5), Value::from("abc"), Value::Null, Value::from(true)] {
            assert!(matches!(
                ColorSpec::from_args(&[v]),
                Err(FormatError::UnsupportedShape(_))
            ));
        }
    }

    #[test]
    fn unsupported_shape_message_names_kind() {
        let err = ColorSpec::from_value(&Value::from(5)).unwrap_err();
        assert_eq!(err.to_string(), "single argument must be a list or a record, got number 5");
    }
}
