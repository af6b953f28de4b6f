// SPDX-License-Identifier: MIT
//
// clock: the local time, repainted in place once per second.
//
//   clock          24-hour display   🕒  13:05:09
//   clock --12h    12-hour display   🕒  01:05:09 PM
//
// The screen below the top-left corner is cleared once at start. Each
// tick repaints the first line. The program runs until SIGINT/SIGTERM,
// restores the cursor, and exits with status 130.
//
// Arguments other than `--12h` and `-v` are accepted and ignored, help and
// version flags included. `--12h` is honored wherever it appears.

use std::ffi::OsString;
use std::process;

use clap::{ArgAction, Parser};

use hc_term::renderer::LineRenderer;
use hc_term::terminal;
use hc_term::ticker::{Stop, TickConfig, Ticker};
use hexclock::clock::{ClockFace, HourCycle};
use hexclock::logging;

const TWELVE_HOUR_FLAG: &str = "--12h";

/// Exit status for a run ended by an interrupt signal (128 + SIGINT).
const EXIT_INTERRUPTED: i32 = 130;

/// Show the local time, repainted once per second.
#[derive(Parser, Debug)]
#[command(name = "clock", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Use a 12-hour clock with AM/PM.
    #[arg(long = "12h")]
    twelve_hour: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Anything else is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

impl Args {
    /// Fallback when clap rejects the command line: honor `--12h` only.
    fn lenient(argv: &[OsString]) -> Self {
        Self {
            twelve_hour: argv.iter().skip(1).any(|a| a == TWELVE_HOUR_FLAG),
            verbose: 0,
            ignored: Vec::new(),
        }
    }

    fn hour_cycle(&self) -> HourCycle {
        HourCycle::from_flag(
            self.twelve_hour || self.ignored.iter().any(|a| a == TWELVE_HOUR_FLAG),
        )
    }
}

fn parse_args(argv: &[OsString]) -> Args {
    Args::try_parse_from(argv).unwrap_or_else(|_| Args::lenient(argv))
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();
    let args = parse_args(&argv);
    logging::init(args.verbose);

    let cycle = args.hour_cycle();
    tracing::info!(?cycle, "starting clock");

    terminal::install_interrupt_handler();
    terminal::install_panic_hook();

    let renderer = LineRenderer::stdout().hide_cursor(terminal::is_tty());
    let mut ticker = Ticker::new(renderer, TickConfig::default());

    match ticker.run(&mut ClockFace::local(cycle)) {
        Ok(Stop::Interrupted) => process::exit(EXIT_INTERRUPTED),
        Ok(Stop::Finished) => {}
        Err(e) => {
            eprintln!("clock: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
