// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// `OutputBuffer` accumulates a whole frame (cursor moves, text, clears) in
// memory so it reaches the terminal in a single `write()`. A repaint that
// goes out in pieces can be observed half-drawn; one write cannot.

use std::io::{self, Write};

/// A byte buffer that accumulates ANSI output for a single `write()` call.
///
/// Default capacity: 256 bytes, enough for a one-line frame without
/// reallocation.
pub struct OutputBuffer {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 256;

impl OutputBuffer {
    /// Create an empty buffer with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes.
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append text verbatim.
    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Append `n` spaces.
    pub fn push_spaces(&mut self, n: usize) {
        self.buf.resize(self.buf.len() + n, b' ');
    }

    /// Clear the buffer for reuse (keeps allocated capacity).
    #[cfg(test)]
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write accumulated output to `w`, flush it, and clear the buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            w.flush()?;
            self.buf.clear();
        }
        Ok(())
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Intentionally a no-op. Real flushing via flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_buffer_is_empty() {
        let out = OutputBuffer::new();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn push_str_and_spaces() {
        let mut out = OutputBuffer::new();
        out.push_str("ab");
        out.push_spaces(3);
        assert_eq!(out.as_bytes(), b"ab   ");
    }

    #[test]
    fn ansi_writes_into_buffer() {
        let mut out = OutputBuffer::new();
        ansi::cursor_to(&mut out, 0, 0).unwrap();
        out.push_str("x");
        assert_eq!(out.as_bytes(), b"\x1b[1;1Hx");
    }

    #[test]
    fn flush_to_moves_bytes_and_clears() {
        let mut out = OutputBuffer::new();
        out.push_str("frame");
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"frame");
        assert!(out.is_empty());
    }

    #[test]
    fn flush_empty_writes_nothing() {
        let mut out = OutputBuffer::new();
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut out = OutputBuffer::new();
        out.push_str("some bytes");
        let cap = out.buf.capacity();
        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.buf.capacity(), cap);
    }
}
