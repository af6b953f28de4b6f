// SPDX-License-Identifier: MIT
//
// Channel normalization.
//
// Every accepted channel collapses to a byte in [0, 255]:
//
//   "NN%"      → leading number, clamped to [0, 100], scaled by 255/100
//   [0, 1]     → fraction of 255 (alpha always, color channels on request)
//   otherwise  → clamped to [0, 255]
//
// Rounding is to nearest with ties away from zero. All values are
// clamped non-negative before rounding, so this is the same as rounding
// half up.

use std::fmt;

use crate::error::FormatError;
use crate::options::FractionMode;
use crate::value::Value;

/// One of the four color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Lowercase channel name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
        }
    }

    /// Whether values in `[0, 1]` read as fractions under `mode`.
    #[inline]
    #[must_use]
    pub const fn reads_fractions(self, mode: FractionMode) -> bool {
        matches!(self, Self::Alpha) || matches!(mode, FractionMode::AllChannels)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize one channel value to a byte.
///
/// Returns `Ok(None)` for [`Value::Null`] (channel not supplied).
///
/// # Errors
///
/// [`FormatError::InvalidChannel`] if the value is present but is not a
/// finite number, numeric text, or percent text.
pub fn normalize(value: &Value, channel: Channel, mode: FractionMode) -> Result<Option<u8>, FormatError> {
    if value.is_null() {
        return Ok(None);
    }

    if let Value::Text(text) = value {
        let text = text.trim();
        if text.ends_with('%') {
            let percent = leading_number(text)
                .filter(|p| p.is_finite())
                .ok_or_else(|| invalid(channel, value))?;
            return Ok(Some(to_byte(percent.clamp(0.0, 100.0) / 100.0 * 255.0)));
        }
    }

    let n = coerce(value).ok_or_else(|| invalid(channel, value))?;
    let scaled = if channel.reads_fractions(mode) && (0.0..=1.0).contains(&n) {
        n * 255.0
    } else {
        n.clamp(0.0, 255.0)
    };
    Ok(Some(to_byte(scaled)))
}

/// Coerce a non-percent value to a finite number.
fn coerce(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => *n,
        Value::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse().ok()?
        }
        Value::Null | Value::List(_) | Value::Record(_) => return None,
    };
    n.is_finite().then_some(n)
}

/// Parse the longest decimal number at the start of `text`.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Trailing characters (the `%`, stray text) are
/// ignored. Returns `None` if no digits lead the text.
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    text[..end].parse().ok()
}

/// Round a value already within `[0, 255]` to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

fn invalid(channel: Channel, value: &Value) -> FormatError {
    FormatError::InvalidChannel {
        channel,
        value: value.to_string(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(value: impl Into<Value>, channel: Channel) -> Result<Option<u8>, FormatError> {
        normalize(&value.into(), channel, FractionMode::AlphaOnly)
    }

    fn byte(value: impl Into<Value>, channel: Channel) -> u8 {
        norm(value, channel).unwrap().unwrap()
    }

    // ── Numbers ─────────────────────────────────────────────────────────

    #[test]
    fn integers_pass_through() {
        for n in [0u8, 1, 17, 128, 254, 255] {
            assert_eq!(byte(n, Channel::Red), n);
        }
    }

    #[test]
    fn fractional_values_round_to_nearest() {
        assert_eq!(byte(127.4, Channel::Green), 127);
        assert_eq!(byte(127.5, Channel::Green), 128);
        assert_eq!(byte(0.5 + 1.0, Channel::Green), 2);
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(byte(-10, Channel::Red), 0);
        assert_eq!(byte(999, Channel::Red), 255);
        assert_eq!(byte(255.6, Channel::Red), 255);
    }

    #[test]
    fn booleans_coerce_to_one_and_zero() {
        assert_eq!(byte(true, Channel::Red), 1);
        assert_eq!(byte(false, Channel::Red), 0);
        assert_eq!(byte(true, Channel::Alpha), 255);
    }

    #[test]
    fn numeric_text_coerces() {
        assert_eq!(byte(" 128 ", Channel::Blue), 128);
        assert_eq!(byte("1e2", Channel::Blue), 100);
    }

    // ── Fractions ───────────────────────────────────────────────────────

    #[test]
    fn alpha_reads_unit_interval_as_fraction() {
        assert_eq!(byte(1, Channel::Alpha), 255);
        assert_eq!(byte(0.5, Channel::Alpha), 128);
        assert_eq!(byte(0, Channel::Alpha), 0);
    }

    #[test]
    fn alpha_above_one_is_a_byte() {
        assert_eq!(byte(1.5, Channel::Alpha), 2);
        assert_eq!(byte(200, Channel::Alpha), 200);
    }

    #[test]
    fn color_channels_keep_small_integers_by_default() {
        assert_eq!(byte(1, Channel::Red), 1);
        assert_eq!(byte(0.5, Channel::Red), 1);
    }

    #[test]
    fn all_channels_mode_scales_color_fractions() {
        let v = Value::from(1);
        assert_eq!(normalize(&v, Channel::Red, FractionMode::AllChannels), Ok(Some(255)));
        let v = Value::from(0.2);
        assert_eq!(normalize(&v, Channel::Green, FractionMode::AllChannels), Ok(Some(51)));
        let v = Value::from(2);
        assert_eq!(normalize(&v, Channel::Blue, FractionMode::AllChannels), Ok(Some(2)));
    }

    // ── Percent ─────────────────────────────────────────────────────────

    #[test]
    fn percent_scales_to_byte() {
        assert_eq!(byte("0%", Channel::Red), 0);
        assert_eq!(byte("50%", Channel::Red), 128);
        assert_eq!(byte("100%", Channel::Red), 255);
        assert_eq!(byte("  25% ", Channel::Alpha), 64);
    }

    #[test]
    fn percent_clamps() {
        assert_eq!(byte("150%", Channel::Alpha), 255);
        assert_eq!(byte("-20%", Channel::Alpha), 0);
    }

    #[test]
    fn percent_ignores_trailing_junk_after_number() {
        assert_eq!(byte("12.5abc%", Channel::Red), 32);
    }

    #[test]
    fn percent_without_number_is_invalid() {
        assert!(matches!(
            norm("abc%", Channel::Alpha),
            Err(FormatError::InvalidChannel { channel: Channel::Alpha, .. })
        ));
        assert!(norm("%", Channel::Red).is_err());
        assert!(norm("1e999%", Channel::Red).is_err());
    }

    // ── Missing / invalid ───────────────────────────────────────────────

    #[test]
    fn null_is_missing() {
        assert_eq!(norm(Value::Null, Channel::Red), Ok(None));
        assert_eq!(norm(Value::Null, Channel::Alpha), Ok(None));
    }

    #[test]
    fn invalid_values() {
        for v in [
            Value::from("abc"),
            Value::from(""),
            Value::from("   "),
            Value::from("NaN"),
            Value::from("inf"),
            Value::Number(f64::INFINITY),
            Value::Number(f64::NAN),
            Value::List(vec![]),
            Value::record([("r", 1)]),
        ] {
            assert!(
                matches!(norm(v.clone(), Channel::Green), Err(FormatError::InvalidChannel { .. })),
                "{v} should be invalid"
            );
        }
    }

    #[test]
    fn radix_prefixed_text_is_invalid() {
        for text in ["0x10", "0b1", "0o7"] {
            assert!(
                matches!(norm(text, Channel::Red), Err(FormatError::InvalidChannel { .. })),
                "{text} should be invalid"
            );
        }
    }

    #[test]
    fn invalid_error_names_channel_and_value() {
        let err = norm("abc", Channel::Red).unwrap_err();
        assert_eq!(err.to_string(), "invalid red channel: \"abc\"");
    }

    // ── Leading number ──────────────────────────────────────────────────

    #[test]
    fn leading_number_forms() {
        assert_eq!(leading_number("50%"), Some(50.0));
        assert_eq!(leading_number("+7.25%"), Some(7.25));
        assert_eq!(leading_number("-3"), Some(-3.0));
        assert_eq!(leading_number(".5%"), Some(0.5));
        assert_eq!(leading_number("5.%"), Some(5.0));
        assert_eq!(leading_number("1e2%"), Some(100.0));
        assert_eq!(leading_number("2e%"), Some(2.0));
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-%"), None);
        assert_eq!(leading_number("x1"), None);
    }

    #[test]
    fn channel_names() {
        assert_eq!(Channel::Red.to_string(), "red");
        assert_eq!(Channel::Alpha.name(), "alpha");
    }
}
