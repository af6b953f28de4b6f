// SPDX-License-Identifier: MIT
//
// Normalized output color and its hex encoding.
//
// Output is always uppercase, zero-padded, with a leading `#`:
// `#RRGGBB` (7 chars) or `#RRGGBBAA` (9 chars). Decoding is more
// lenient: shorthand digits, either case, optional `#`.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;
use crate::spec::ColorSpec;
use crate::value::Value;

/// A fully normalized color: three bytes plus an optional alpha byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// `None` means the output carries no alpha byte.
    pub alpha: Option<u8>,
}

impl HexColor {
    #[inline]
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    /// Decode `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (`#` optional).
    ///
    /// # Errors
    ///
    /// [`FormatError::InvalidHex`] for any other length or a non-hex digit.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        parse_hex(s.trim()).ok_or_else(|| FormatError::InvalidHex(s.to_owned()))
    }

    /// A specification that formats back to this exact color.
    ///
    /// Color bytes are passed as plain numbers and alpha as a fraction of
    /// 255, so the round trip is exact under the default fraction mode.
    #[must_use]
    pub fn to_spec(self) -> ColorSpec {
        ColorSpec {
            red: self.red.into(),
            green: self.green.into(),
            blue: self.blue.into(),
            alpha: self
                .alpha
                .map_or(Value::Null, |a| Value::Number(f64::from(a) / 255.0)),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)?;
        if let Some(a) = self.alpha {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for HexColor {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<HexColor> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let b = s.as_bytes();

    match b.len() {
        // #RGB
        3 => Some(HexColor::rgb(
            parse_hex_short(b[0])?,
            parse_hex_short(b[1])?,
            parse_hex_short(b[2])?,
        )),
        // #RGBA
        4 => Some(HexColor::rgba(
            parse_hex_short(b[0])?,
            parse_hex_short(b[1])?,
            parse_hex_short(b[2])?,
            parse_hex_short(b[3])?,
        )),
        // #RRGGBB
        6 => Some(HexColor::rgb(
            parse_hex_byte(&b[0..2])?,
            parse_hex_byte(&b[2..4])?,
            parse_hex_byte(&b[4..6])?,
        )),
        // #RRGGBBAA
        8 => Some(HexColor::rgba(
            parse_hex_byte(&b[0..2])?,
            parse_hex_byte(&b[2..4])?,
            parse_hex_byte(&b[4..6])?,
            parse_hex_byte(&b[6..8])?,
        )),
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// One shorthand digit doubled into a byte (`F` → `FF`).
#[inline]
fn parse_hex_short(c: u8) -> Option<u8> {
    let d = parse_hex_digit(c)?;
    Some(d << 4 | d)
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
