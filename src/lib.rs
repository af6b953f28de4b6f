// SPDX-License-Identifier: MIT
//
// hexclock: shared pieces of the `clock` and `rgb-to-hex` binaries.
//
//   hc-term → line renderer and tick loop the clock runs on
//   hc-hex  → channel formatter behind rgb-to-hex
//
// The clock face lives here so both the binary and its tests can reach
// it; logging setup is shared by both binaries.

pub mod clock;
pub mod logging;
