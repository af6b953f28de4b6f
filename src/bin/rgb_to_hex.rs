// SPDX-License-Identifier: MIT
//
// rgb-to-hex: format RGB(A) channels as an uppercase hex color.
//
//   rgb-to-hex 255 0 0                                   #FF0000
//   rgb-to-hex 0 128 255 50%                             #0080FF80
//   rgb-to-hex --json '[0, 128, 255]'                    #0080FF
//   rgb-to-hex --json '{"r":0,"g":128,"b":255,"a":1}'    #0080FFFF
//   rgb-to-hex --hex f80                                 #FF8800
//
// Positional channels go through the positional shape; `--json` goes
// through the single-argument list/record shape. `--hex` rewrites an
// existing hex color in canonical form (shorthand expanded, uppercase).

use std::error::Error;
use std::process;

use clap::{ArgAction, Parser};

use hc_hex::{FormatOptions, FractionMode, HexColor, Value, format_args_with};
use hexclock::logging;

/// Format RGB(A) channels as an uppercase hex color.
#[derive(Parser, Debug)]
#[command(name = "rgb-to-hex", version)]
struct Args {
    /// Channels R G B [A]: numbers, numeric text, or percentages like 50%.
    #[arg(allow_hyphen_values = true, conflicts_with_all = ["json", "hex"])]
    channels: Vec<String>,

    /// A JSON list or record, e.g. '{"r":0,"g":128,"b":255,"alpha":"50%"}'.
    #[arg(long, value_name = "JSON")]
    json: Option<String>,

    /// An existing hex color (#RGB, #RGBA, #RRGGBB or #RRGGBBAA) to
    /// rewrite in canonical form.
    #[arg(long, value_name = "HEX", conflicts_with = "json")]
    hex: Option<String>,

    /// How values in [0, 1] are read on red, green and blue
    /// (alpha-only or all-channels).
    #[arg(long, value_name = "MODE", default_value_t = FractionMode::AlphaOnly)]
    fractions: FractionMode,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<HexColor, Box<dyn Error>> {
    if let Some(hex) = &args.hex {
        tracing::debug!(%hex, "canonicalizing");
        return Ok(HexColor::parse(hex)?);
    }

    let options = FormatOptions::default().with_fractions(args.fractions);
    let values: Vec<Value> = match &args.json {
        Some(json) => vec![serde_json::from_str(json)?],
        None => args.channels.iter().map(|c| Value::from(c.as_str())).collect(),
    };
    tracing::debug!(?values, fractions = %args.fractions, "formatting");
    Ok(format_args_with(&values, &options)?)
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(color) => println!("{color}"),
        Err(e) => {
            eprintln!("rgb-to-hex: {e}");
            process::exit(1);
        }
    }
}
