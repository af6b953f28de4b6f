// SPDX-License-Identifier: MIT
//
// Formatter options.
//
// A number in [0, 1] is ambiguous on a color channel: it may be an 8-bit
// intensity (`1` out of 255) or a normalized fraction (`1.0` meaning full
// intensity). Alpha always reads it as a fraction. Whether red, green and
// blue do too is a caller decision, made here instead of guessed.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which channels read values in `[0, 1]` as fractions of 255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FractionMode {
    /// Only alpha scales `[0, 1]`; `1` on red means intensity 1 (`01`).
    #[default]
    AlphaOnly,
    /// Every channel scales `[0, 1]`; `1` on red means 255 (`FF`).
    AllChannels,
}

impl FractionMode {
    /// The kebab-case spelling used in JSON and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlphaOnly => "alpha-only",
            Self::AllChannels => "all-channels",
        }
    }
}

impl fmt::Display for FractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "alpha-only" => Ok(Self::AlphaOnly),
            "all-channels" => Ok(Self::AllChannels),
            other => Err(format!(
                "unknown fraction mode {other:?} (expected \"alpha-only\" or \"all-channels\")"
            )),
        }
    }
}

/// Options for [`format_with`](crate::format_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// How `[0, 1]` values on color channels are read.
    #[serde(rename = "normalizedFraction")]
    pub fractions: FractionMode,
}

impl FormatOptions {
    /// Return a copy with the given fraction mode.
    #[inline]
    #[must_use]
    pub const fn with_fractions(self, fractions: FractionMode) -> Self {
        Self { fractions }
    }
}
