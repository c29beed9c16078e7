//! Dashboard actions shared by one-shot subcommands and the shell.

use std::io::Write;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use swarna_core::analysis::statistics;
use swarna_dashboard::Session;

use crate::render;

/// One dashboard request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Overview,
    Stats,
    Lookup(NaiveDate),
    Trend(NaiveDate),
    Range(NaiveDate, NaiveDate),
    Table(Option<usize>),
    History(Option<usize>),
    Reload,
}

/// Accepts the export's day-month-year form and ISO dates.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .with_context(|| format!("invalid date '{s}' (expected DD-MM-YYYY or YYYY-MM-DD)"))
}

pub fn run(session: &mut Session, action: Action, out: &mut dyn Write, json: bool) -> Result<()> {
    match action {
        Action::Overview => {
            let view = session.overview()?;
            if json {
                render::json(out, &view)?;
            } else {
                render::overview(out, &view)?;
            }
        }
        Action::Stats => {
            let report = session.load()?;
            let stats = statistics(&report.series)?;
            if json {
                render::json(out, &stats)?;
            } else {
                render::statistics(out, &stats)?;
            }
        }
        Action::Lookup(date) => {
            let report = session.date_report(date)?;
            if json {
                render::json(out, &report)?;
            } else {
                render::date_report(out, &report)?;
            }
        }
        Action::Trend(from) => {
            let view = session.trend_from(from)?;
            if json {
                render::json(out, &view)?;
            } else {
                render::trend_view(out, &view)?;
            }
        }
        Action::Range(start, end) => {
            if start > end {
                bail!("start date {start} is after end date {end}");
            }
            let view = session.range(start, end)?;
            if json {
                render::json(out, &view)?;
            } else {
                render::rows(out, &view)?;
            }
        }
        Action::Table(rows) => {
            let view = session.table(rows)?;
            if json {
                render::json(out, &view)?;
            } else {
                render::rows(out, &view)?;
            }
        }
        Action::History(rows) => {
            let view = session.history(rows);
            if json {
                render::json(out, &view)?;
            } else {
                render::history(out, &view)?;
            }
        }
        Action::Reload => {
            let report = session.reload()?;
            if json {
                render::json(out, &report)?;
            } else {
                writeln!(
                    out,
                    "Reloaded {} forecast days from {}",
                    report.series.len(),
                    report.source
                )?;
            }
        }
    }
    Ok(())
}
