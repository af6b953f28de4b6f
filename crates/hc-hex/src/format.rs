// SPDX-License-Identifier: MIT
//
// The formatter entry points.
//
// Red, green and blue are normalized in order before any missing-channel
// check, so an invalid value anywhere in the color is reported even when
// a later channel is also absent. Alpha is normalized last.

use crate::channel::{self, Channel};
use crate::error::FormatError;
use crate::hex::HexColor;
use crate::options::FormatOptions;
use crate::spec::ColorSpec;
use crate::value::Value;

/// Format a specification with default options.
///
/// # Errors
///
/// [`FormatError::MissingChannel`] if red, green or blue is absent;
/// [`FormatError::InvalidChannel`] if any channel cannot be read.
pub fn format(spec: &ColorSpec) -> Result<HexColor, FormatError> {
    format_with(spec, &FormatOptions::default())
}

/// Format a specification.
///
/// # Errors
///
/// See [`format`].
pub fn format_with(spec: &ColorSpec, options: &FormatOptions) -> Result<HexColor, FormatError> {
    normalize_spec(spec, options).inspect_err(|e| {
        tracing::debug!(error = %e, "rejected color specification");
    })
}

fn normalize_spec(spec: &ColorSpec, options: &FormatOptions) -> Result<HexColor, FormatError> {
    let mode = options.fractions;
    let red = channel::normalize(&spec.red, Channel::Red, mode)?;
    let green = channel::normalize(&spec.green, Channel::Green, mode)?;
    let blue = channel::normalize(&spec.blue, Channel::Blue, mode)?;

    let color = HexColor {
        red: red.ok_or(FormatError::MissingChannel(Channel::Red))?,
        green: green.ok_or(FormatError::MissingChannel(Channel::Green))?,
        blue: blue.ok_or(FormatError::MissingChannel(Channel::Blue))?,
        alpha: channel::normalize(&spec.alpha, Channel::Alpha, mode)?,
    };
    tracing::trace!(%color, "formatted");
    Ok(color)
}

/// Format an arity-polymorphic argument list with default options.
///
/// Accepts `(r, g, b)`, `(r, g, b, a)`, a single list, or a single record.
///
/// # Errors
///
/// See [`format`]; additionally [`FormatError::UnsupportedShape`] for a
/// single argument that is neither list nor record.
pub fn format_args(args: &[Value]) -> Result<HexColor, FormatError> {
    format_args_with(args, &FormatOptions::default())
}

/// Format an argument list.
///
/// # Errors
///
/// See [`format_args`].
pub fn format_args_with(args: &[Value], options: &FormatOptions) -> Result<HexColor, FormatError> {
    format_with(&ColorSpec::from_args(args)?, options)
}

/// Format three channels.
///
/// # Errors
///
/// See [`format`].
pub fn format_rgb(
    red: impl Into<Value>,
    green: impl Into<Value>,
    blue: impl Into<Value>,
) -> Result<HexColor, FormatError> {
    format(&ColorSpec::rgb(red, green, blue))
}

/// Format three channels plus alpha.
///
/// # Errors
///
/// See [`format`].
pub fn format_rgba(
    red: impl Into<Value>,
    green: impl Into<Value>,
    blue: impl Into<Value>,
    alpha: impl Into<Value>,
) -> Result<HexColor, FormatError> {
    format(&ColorSpec::rgba(red, green, blue, alpha))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
