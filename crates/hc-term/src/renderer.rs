// SPDX-License-Identifier: MIT
//
// Single-line renderer.
//
// `LineRenderer` owns the output stream and is the only thing that moves
// the cursor or clears the screen. Every frame is one line painted at the
// top-left corner:
//
//   begin   →  CUP(0,0) + ED 0 [+ hide cursor]
//   paint   →  CUP(0,0) + text [+ padding] + "\n"     (one write per frame)
//   finish  →  [show cursor]
//
// Padding covers the tail of a previous, wider frame. Widths are display
// cells, not bytes, so emoji and CJK text pad correctly.
//
// The stream is generic: the clock hands it stdout, tests hand it a Vec.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::ansi;
use crate::output::OutputBuffer;

/// Repaints one line of text at the top of a terminal stream.
pub struct LineRenderer<W: Write> {
    out: W,
    buf: OutputBuffer,
    /// Display width of the last painted line.
    last_width: usize,
    hide_cursor: bool,
    started: bool,
    cursor_hidden: bool,
}

impl LineRenderer<io::Stdout> {
    /// A renderer writing to the process's stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineRenderer<W> {
    /// A renderer writing to `out`. The cursor stays visible by default.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: OutputBuffer::new(),
            last_width: 0,
            hide_cursor: false,
            started: false,
            cursor_hidden: false,
        }
    }

    /// Hide the cursor between [`begin`](Self::begin) and
    /// [`finish`](Self::finish).
    #[must_use]
    pub fn hide_cursor(mut self, hide: bool) -> Self {
        self.hide_cursor = hide;
        self
    }

    /// The underlying stream.
    #[inline]
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Whether [`begin`](Self::begin) has run.
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) const fn is_started(&self) -> bool {
        self.started
    }

    /// Move to the top-left corner and clear everything below it.
    ///
    /// Idempotent: only the first call touches the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the stream fails.
    pub fn begin(&mut self) -> io::Result<()> {
        if self.started {
            return Ok(());
        }
        ansi::cursor_to(&mut self.buf, 0, 0)?;
        ansi::clear_below(&mut self.buf)?;
        if self.hide_cursor {
            ansi::cursor_hide(&mut self.buf)?;
            self.cursor_hidden = true;
        }
        self.buf.flush_to(&mut self.out)?;
        self.started = true;
        self.last_width = 0;
        tracing::debug!(hide_cursor = self.hide_cursor, "renderer started");
        Ok(())
    }

    /// Paint `line` at the top-left corner, replacing the previous frame.
    ///
    /// Calls [`begin`](Self::begin) first if it has not run yet.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the stream fails.
    pub fn paint(&mut self, line: &str) -> io::Result<()> {
        self.begin()?;

        let width = line.width();
        ansi::cursor_to(&mut self.buf, 0, 0)?;
        self.buf.push_str(line);
        self.buf.push_spaces(self.last_width.saturating_sub(width));
        self.buf.push_str("\n");
        self.buf.flush_to(&mut self.out)?;

        self.last_width = width;
        tracing::trace!(width, "frame painted");
        Ok(())
    }

    /// Restore the cursor if [`begin`](Self::begin) hid it.
    ///
    /// Idempotent. Also runs on drop, ignoring errors.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the stream fails.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            ansi::cursor_show(&mut self.buf)?;
            self.buf.flush_to(&mut self.out)?;
            self.cursor_hidden = false;
            tracing::debug!("renderer finished");
        }
        Ok(())
    }
}

impl<W: Write> Drop for LineRenderer<W> {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
