// SPDX-License-Identifier: MIT
//
// hc-term: terminal plumbing for hexclock.
//
// Just enough terminal control for a program that repaints one line in
// place: ANSI sequences written to any `impl Write`, a frame buffer that
// leaves in a single write, a renderer that owns the output stream, and a
// deadline-scheduled tick loop that stops cleanly on SIGINT/SIGTERM.
//
// No TUI framework (ratatui, crossterm). The renderer is generic over its
// stream, so everything above the process boundary is testable against a
// `Vec<u8>`.

pub mod ansi;
pub mod output;
pub mod renderer;
pub mod terminal;
pub mod ticker;
