// SPDX-License-Identifier: MIT
//
// Clock face: what the clock shows on each tick.
//
//   24h:  🕒  13:05:09
//   12h:  🕒  01:05:09 PM
//
// Hours, minutes and seconds are always two digits. In 12-hour mode
// hour 0 reads as 12 AM and hour 12 as 12 PM.

use chrono::{Local, NaiveTime, Timelike};
use hc_term::ticker::Face;

/// Glyph painted before the time.
pub const CLOCK_GLYPH: char = '\u{1F552}';

/// 24-hour or 12-hour display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HourCycle {
    #[default]
    H24,
    H12,
}

impl HourCycle {
    /// `H12` when the `--12h` flag is set, otherwise `H24`.
    #[must_use]
    pub const fn from_flag(twelve_hour: bool) -> Self {
        if twelve_hour { Self::H12 } else { Self::H24 }
    }
}

/// Format `t` as `HH:MM:SS`, or `HH:MM:SS AM|PM` for [`HourCycle::H12`].
#[must_use]
pub fn format_time(t: &impl Timelike, cycle: HourCycle) -> String {
    let (h, m, s) = (t.hour(), t.minute(), t.second());
    match cycle {
        HourCycle::H24 => format!("{h:02}:{m:02}:{s:02}"),
        HourCycle::H12 => {
            let suffix = if h >= 12 { "PM" } else { "AM" };
            let h = match h % 12 {
                0 => 12,
                h => h,
            };
            format!("{h:02}:{m:02}:{s:02} {suffix}")
        }
    }
}

/// The full line: glyph, two spaces, time.
#[must_use]
pub fn clock_line(t: &impl Timelike, cycle: HourCycle) -> String {
    format!("{CLOCK_GLYPH}  {}", format_time(t, cycle))
}

/// A [`Face`] that reads the time from `now` on every tick.
pub struct ClockFace<F> {
    now: F,
    cycle: HourCycle,
}

impl<F: FnMut() -> NaiveTime> ClockFace<F> {
    #[must_use]
    pub const fn new(now: F, cycle: HourCycle) -> Self {
        Self { now, cycle }
    }
}

impl ClockFace<fn() -> NaiveTime> {
    /// A face showing the local wall-clock time.
    #[must_use]
    pub fn local(cycle: HourCycle) -> Self {
        Self::new(local_now, cycle)
    }
}

fn local_now() -> NaiveTime {
    Local::now().time()
}

impl<F: FnMut() -> NaiveTime> Face for ClockFace<F> {
    fn line(&mut self) -> String {
        clock_line(&(self.now)(), self.cycle)
    }
}
