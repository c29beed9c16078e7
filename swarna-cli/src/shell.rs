//! Line-oriented dashboard session over stdin.
//!
//! Every command reuses the session's cached series; `reload` is the only
//! way to pick up a changed file. Bad input is reported and the loop goes
//! on. A load failure ends the shell.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::commands::{parse_date, run, Action};
use swarna_dashboard::Session;

const HELP: &str = "\
commands:
  overview                  headline price, change, tip and statistics
  stats                     average, highest and lowest forecast
  lookup <date>             predicted price for one date
  trend <date>              trend from a date to the end of the forecast
  range <start> <end>       rows between two dates, inclusive
  table [n]                 last n rows (default from config)
  history [n]               observed India and LBMA prices, last n rows
  reload                    drop the cached series and read the file again
  help                      this text
  quit                      leave the shell
dates: DD-MM-YYYY or YYYY-MM-DD";

enum Parsed {
    Run(Action),
    Help,
    Quit,
}

fn parse_line(line: &str) -> Result<Option<Parsed>> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let parsed = match (cmd.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("overview", []) => Parsed::Run(Action::Overview),
        ("stats", []) => Parsed::Run(Action::Stats),
        ("lookup", [date]) => Parsed::Run(Action::Lookup(parse_date(date)?)),
        ("trend", [date]) => Parsed::Run(Action::Trend(parse_date(date)?)),
        ("range", [start, end]) => {
            Parsed::Run(Action::Range(parse_date(start)?, parse_date(end)?))
        }
        ("table", []) => Parsed::Run(Action::Table(None)),
        ("table", [n]) => Parsed::Run(Action::Table(Some(
            n.parse().with_context(|| format!("invalid row count '{n}'"))?,
        ))),
        ("history", []) => Parsed::Run(Action::History(None)),
        ("history", [n]) => Parsed::Run(Action::History(Some(
            n.parse().with_context(|| format!("invalid row count '{n}'"))?,
        ))),
        ("reload", []) => Parsed::Run(Action::Reload),
        ("help" | "?", _) => Parsed::Help,
        ("quit" | "exit", _) => Parsed::Quit,
        _ => anyhow::bail!("unrecognized command '{}'; type `help`", line.trim()),
    };
    Ok(Some(parsed))
}

pub fn run_shell<R: BufRead>(
    session: &mut Session,
    input: R,
    out: &mut dyn Write,
    json: bool,
) -> Result<()> {
    let report = session.load().context("loading forecast series")?;
    writeln!(
        out,
        "Loaded {} forecast days from {}. Type `help` for commands.",
        report.series.len(),
        report.source
    )?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Parsed::Quit)) => break,
            Ok(Some(Parsed::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Parsed::Run(action))) => {
                // Range validation is a user error; anything else is fatal.
                if let Action::Range(start, end) = action {
                    if start > end {
                        writeln!(out, "start date {start} is after end date {end}")?;
                        continue;
                    }
                }
                run(session, action, out, json)?;
            }
            Err(e) => writeln!(out, "{e:#}")?,
        }
    }
    Ok(())
}
