// SPDX-License-Identifier: MIT
//
// Tick loop: repaint a single line on a fixed interval.
//
// The loop asks a `Face` for the current line, hands it to the
// `LineRenderer`, then sleeps until the next deadline. Deadlines advance
// by exactly one interval per frame, so the schedule does not drift with
// render time. If the process falls behind (suspended, slow terminal),
// missed frames are skipped rather than replayed in a burst.
//
// Sleeping happens in short slices so an interrupt (SIGINT/SIGTERM, or a
// `StopHandle`) is noticed within `POLL_SLICE`, and the renderer gets to
// restore the cursor before the loop returns.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::renderer::LineRenderer;
use crate::terminal;

/// Longest single sleep between interrupt checks.
const POLL_SLICE: Duration = Duration::from_millis(50);

// ─── Face ────────────────────────────────────────────────────────────────────

/// Producer of the line shown on each tick.
pub trait Face {
    /// The text to paint for this tick.
    fn line(&mut self) -> String;
}

impl<F: FnMut() -> String> Face for F {
    fn line(&mut self) -> String {
        self()
    }
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// Timing configuration for the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConfig {
    /// Time between repaints. Default: one second.
    pub interval: Duration,
    /// Stop after this many frames. `None` runs until interrupted.
    pub max_ticks: Option<u64>,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_ticks: None,
        }
    }
}

/// Why the loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// An interrupt signal or [`StopHandle::stop`] ended the loop.
    Interrupted,
    /// [`TickConfig::max_ticks`] frames were painted.
    Finished,
}

/// Requests a running [`Ticker`] to stop from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Ask the loop to stop before its next frame.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop was requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ─── Ticker ──────────────────────────────────────────────────────────────────

/// Drives a [`Face`] through a [`LineRenderer`] once per interval.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use hc_term::renderer::LineRenderer;
/// use hc_term::ticker::{Stop, TickConfig, Ticker};
///
/// let config = TickConfig { interval: Duration::ZERO, max_ticks: Some(2) };
/// let mut ticker = Ticker::new(LineRenderer::new(Vec::new()), config);
/// let mut n = 0;
/// let stop = ticker.run(&mut || { n += 1; format!("frame {n}") })?;
/// assert_eq!(stop, Stop::Finished);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Ticker<W: Write> {
    renderer: LineRenderer<W>,
    config: TickConfig,
    stop: StopHandle,
}

impl<W: Write> Ticker<W> {
    #[must_use]
    pub fn new(renderer: LineRenderer<W>, config: TickConfig) -> Self {
        Self {
            renderer,
            config,
            stop: StopHandle::default(),
        }
    }

    /// A handle that stops this ticker when triggered.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// The renderer (and through it, the output stream).
    #[inline]
    #[must_use]
    pub const fn renderer(&self) -> &LineRenderer<W> {
        &self.renderer
    }

    /// Clear the screen, then paint `face` every interval until stopped.
    ///
    /// The first frame is painted immediately. The renderer is finished
    /// (cursor restored) on every exit path, including errors.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output stream fails.
    pub fn run(&mut self, face: &mut impl Face) -> io::Result<Stop> {
        self.renderer.begin()?;
        tracing::debug!(interval = ?self.config.interval, max_ticks = ?self.config.max_ticks, "tick loop started");

        let result = self.run_inner(face);
        let finished = self.renderer.finish();
        tracing::debug!(?result, "tick loop ended");

        // A failed frame outranks a failed restore.
        let stop = result?;
        finished?;
        Ok(stop)
    }

    fn run_inner(&mut self, face: &mut impl Face) -> io::Result<Stop> {
        let mut painted: u64 = 0;
        let mut next = Instant::now();

        loop {
            if self.should_stop() {
                return Ok(Stop::Interrupted);
            }

            self.renderer.paint(&face.line())?;
            painted += 1;

            if self.config.max_ticks.is_some_and(|max| painted >= max) {
                return Ok(Stop::Finished);
            }

            next += self.config.interval;
            let now = Instant::now();
            if next < now {
                tracing::trace!(behind = ?(now - next), "skipping missed frames");
                next = now;
            }

            if !self.sleep_until(next) {
                return Ok(Stop::Interrupted);
            }
        }
    }

    fn should_stop(&self) -> bool {
        terminal::interrupted() || self.stop.is_stopped()
    }

    /// Sleep until `deadline`. Returns `false` if interrupted first.
    fn sleep_until(&self, deadline: Instant) -> bool {
        loop {
            if self.should_stop() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep((deadline - now).min(POLL_SLICE));
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
