// SPDX-License-Identifier: MIT
//
// hc-hex: RGB(A) channel normalization and hex formatting.

//! # hc-hex
//!
//! Turns a loosely specified color into a normalized uppercase hex string.
//!
//! ```text
//! &[Value] / ColorSpec
//!     │
//!     ▼
//! spec.rs:    resolve argument shape (positional, list, record)
//!     │
//!     ▼
//! channel.rs: normalize each channel to a byte (number, fraction, percent)
//!     │
//!     ▼
//! hex.rs:     HexColor → "#RRGGBB" / "#RRGGBBAA"
//! ```
//!
//! # Examples
//!
//! ```
//! use hc_hex::{format_args, format_rgb, format_rgba, Value};
//!
//! assert_eq!(format_rgb(255, 0, 0)?.to_string(), "#FF0000");
//! assert_eq!(format_rgba(0, 0, 0, "150%")?.to_string(), "#000000FF");
//!
//! let record = Value::record([("r", 0), ("g", 128), ("b", 255)]);
//! assert_eq!(format_args(&[record])?.to_string(), "#0080FF");
//! # Ok::<(), hc_hex::FormatError>(())
//! ```

pub mod channel;
pub mod error;
pub mod format;
pub mod hex;
pub mod options;
pub mod spec;
pub mod value;

pub use channel::Channel;
pub use error::{ErrorKind, FormatError};
pub use format::{format, format_args, format_args_with, format_rgb, format_rgba, format_with};
pub use hex::HexColor;
pub use options::{FormatOptions, FractionMode};
pub use spec::ColorSpec;
pub use value::Value;
