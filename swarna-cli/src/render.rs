//! Plain-text and JSON rendering of dashboard views.

use std::io::{self, Write};

use serde::Serialize;
use swarna_core::analysis::{SeriesStatistics, StepDelta, TrendOutcome};
use swarna_dashboard::{
    DateReport, HistoryState, HistoryView, Market, Overview, RowsView, TrendView,
};

/// Rupee amount with thousands separators and two decimals: `₹1,234,567.89`.
pub fn inr(amount: f64) -> String {
    grouped(amount, "₹")
}

pub fn usd(amount: f64) -> String {
    grouped(amount, "$")
}

fn grouped(amount: f64, symbol: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{symbol}{grouped}.{frac}")
}

/// Signed percent with two decimals, or `n/a` when undefined.
pub fn percent(delta: &StepDelta) -> String {
    match delta.percent_checked() {
        Some(p) => format!("{p:+.2}%"),
        None => "n/a".to_string(),
    }
}

pub fn json<T: Serialize>(out: &mut dyn Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

fn trend_line(out: &mut dyn Write, label: &str, outcome: &TrendOutcome) -> io::Result<()> {
    match outcome {
        TrendOutcome::Trend(t) => {
            let pct = if t.division_undefined {
                "n/a".to_string()
            } else {
                format!("{:+.2}%", t.percent_delta)
            };
            writeln!(
                out,
                "{label}: {} ({pct}) {} → {}  [{}]",
                inr(t.absolute_delta),
                t.window_start.date,
                t.window_end.date,
                t.signal
            )
        }
        TrendOutcome::Insufficient { records } => {
            writeln!(out, "{label}: insufficient data ({records} record(s))")
        }
    }
}

fn statistics_block(out: &mut dyn Write, stats: &SeriesStatistics) -> io::Result<()> {
    writeln!(out, "Average price: {}", inr(stats.average))?;
    writeln!(out, "Highest: {} on {}", inr(stats.max.price), stats.max.date)?;
    writeln!(out, "Lowest:  {} on {}", inr(stats.min.price), stats.min.date)
}

pub fn overview(out: &mut dyn Write, view: &Overview) -> io::Result<()> {
    writeln!(out, "Swarna Drishti: AI-powered gold price oracle")?;
    writeln!(out)?;
    writeln!(
        out,
        "Latest gold price: {} ({})",
        inr(view.latest.predicted_price),
        view.latest.date
    )?;
    trend_line(
        out,
        &format!("Change over last {} rows", view.lookback_rows),
        &view.lookback,
    )?;
    match view.tip {
        Some(tip) => writeln!(out, "Investment tip: {}", tip.label())?,
        None => writeln!(out, "Investment tip: insufficient data")?,
    }
    trend_line(out, "Week over week", &view.week_over_week)?;
    trend_line(out, "Whole forecast", &view.full_trend)?;
    if let Some(trend) = view.full_trend.trend() {
        writeln!(out, "Signal: {}", trend.signal.advice())?;
    }
    writeln!(out)?;
    statistics_block(out, &view.statistics)?;
    writeln!(out)?;

    let d = &view.diagnostics;
    writeln!(out, "Source: {}", d.source)?;
    writeln!(
        out,
        "Forecast days: {} ({} → {})",
        d.records, d.first_date, d.last_date
    )?;
    if d.discarded_dates + d.discarded_prices + d.duplicate_dates > 0 {
        writeln!(
            out,
            "Discarded rows: {} bad date, {} bad price, {} duplicate",
            d.discarded_dates, d.discarded_prices, d.duplicate_dates
        )?;
    }
    writeln!(out, "Dataset hash: {}", d.dataset_hash)
}

pub fn statistics(out: &mut dyn Write, stats: &SeriesStatistics) -> io::Result<()> {
    writeln!(out, "Forecast days: {}", stats.count)?;
    statistics_block(out, stats)
}

pub fn date_report(out: &mut dyn Write, report: &DateReport) -> io::Result<()> {
    match report {
        DateReport::Found {
            record,
            confidence,
            outlook,
            day_over_day,
            ..
        } => {
            writeln!(
                out,
                "Predicted price on {}: {}",
                record.date,
                inr(record.predicted_price)
            )?;
            if let Some((lo, hi)) = confidence {
                writeln!(out, "Confidence range: {} – {}", inr(*lo), inr(*hi))?;
            }
            if let Some(delta) = day_over_day {
                writeln!(
                    out,
                    "Day over day: {} ({})",
                    inr(delta.absolute),
                    percent(delta)
                )?;
            }
            writeln!(out, "{}", outlook.message())
        }
        DateReport::NotAvailable {
            date,
            first_date,
            last_date,
        } => writeln!(
            out,
            "Prediction not available for {date}. Try a date between {first_date} and {last_date}."
        ),
    }
}

pub fn trend_view(out: &mut dyn Write, view: &TrendView) -> io::Result<()> {
    match view {
        TrendView::Window {
            from,
            records,
            outcome,
        } => {
            writeln!(out, "Forecast from {from}: {records} record(s)")?;
            trend_line(out, "Trend", outcome)?;
            if let Some(t) = outcome.trend() {
                writeln!(out, "{}", t.signal.advice())?;
            }
            Ok(())
        }
        TrendView::NoData {
            from,
            first_date,
            last_date,
        } => writeln!(
            out,
            "No forecast on or after {from}. Data covers {first_date} to {last_date}."
        ),
    }
}

pub fn rows(out: &mut dyn Write, view: &RowsView) -> io::Result<()> {
    if view.is_empty() {
        return writeln!(out, "No forecast rows in the selected range.");
    }
    writeln!(
        out,
        "{:<12} {:>14} {:>14} {:>14} {:>9}",
        "Date", "Predicted", "Lower", "Upper", "DoD"
    )?;
    for row in &view.rows {
        let rec = &row.record;
        let bound = |b: Option<f64>| b.map(inr).unwrap_or_else(|| "-".into());
        writeln!(
            out,
            "{:<12} {:>14} {:>14} {:>14} {:>9}",
            rec.date.to_string(),
            inr(rec.predicted_price),
            bound(rec.lower_bound),
            bound(rec.upper_bound),
            row.day_over_day
                .as_ref()
                .map(percent)
                .unwrap_or_else(|| "-".into())
        )?;
    }
    trend_line(out, "Trend", &view.trend)
}

fn history_state(out: &mut dyn Write, state: &HistoryState) -> io::Result<()> {
    writeln!(out, "{}", state.market().title())?;
    let panel = match state {
        HistoryState::Loaded(panel) => panel,
        HistoryState::Unavailable { reason, .. } => {
            return writeln!(out, "Unable to load historical gold price data: {reason}");
        }
    };
    let money = match panel.market {
        Market::India => inr,
        Market::Global => usd,
    };

    writeln!(
        out,
        "{} observations, {} → {}",
        panel.statistics.count, panel.first_date, panel.last_date
    )?;
    writeln!(out, "Average price: {}", money(panel.statistics.average))?;
    writeln!(
        out,
        "Highest: {} on {}",
        money(panel.statistics.max.price),
        panel.statistics.max.date
    )?;
    writeln!(
        out,
        "Lowest:  {} on {}",
        money(panel.statistics.min.price),
        panel.statistics.min.date
    )?;
    if let Some(t) = panel.trend.trend() {
        writeln!(out, "Change over the period: {:+.2}% [{}]", t.percent_delta, t.signal)?;
    }
    for point in &panel.recent {
        writeln!(out, "{:<12} {:>14}", point.date.to_string(), money(point.price))?;
    }
    Ok(())
}

pub fn history(out: &mut dyn Write, view: &HistoryView) -> io::Result<()> {
    history_state(out, &view.india)?;
    writeln!(out)?;
    history_state(out, &view.global)
}
