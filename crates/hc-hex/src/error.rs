// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::channel::Channel;

/// Errors raised while normalizing a color specification.
///
/// There is no partial result: the caller fixes the input and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Red, green or blue was not supplied.
    #[error("{0} channel is required")]
    MissingChannel(Channel),

    /// A channel was supplied but is neither a finite number nor a percent.
    #[error("invalid {channel} channel: {value}")]
    InvalidChannel { channel: Channel, value: String },

    /// A single-argument call whose argument is not a list or record.
    #[error("single argument must be a list or a record, got {0}")]
    UnsupportedShape(String),

    /// Text that is not a `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// The two failure families callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingChannel,
    InvalidChannel,
}

impl FormatError {
    /// Collapse the error into its family.
    ///
    /// Unsupported shapes and bad hex text count as invalid channels.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingChannel(_) => ErrorKind::MissingChannel,
            Self::InvalidChannel { .. } | Self::UnsupportedShape(_) | Self::InvalidHex(_) => {
                ErrorKind::InvalidChannel
            }
        }
    }
}
