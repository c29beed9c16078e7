//! Session integration tests: config file → cached CSV → panel views.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use swarna_core::{SchemaConfig, Signal};
use swarna_dashboard::{
    DashboardConfig, DateReport, HistoryState, InvestmentTip, Market, Outlook, Session,
    SessionError, TrendView,
};
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
}

/// Ten rows from 18-05-2025, +1% per day from 1000.
fn rising_csv() -> String {
    let mut csv = String::from("Date,Predicted_Price,yhat_lower,yhat_upper\n");
    for k in 0..10 {
        let price = 1000.0 * 1.01_f64.powi(k);
        let date = day(18) + chrono::Duration::days(k as i64);
        csv.push_str(&format!(
            "{},{price},{},{}\n",
            date.format("%d-%m-%Y"),
            price - 20.0,
            price + 20.0
        ));
    }
    csv
}

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn session_for(path: &Path) -> Session {
    let mut config = DashboardConfig::default();
    config.source.path = path.to_path_buf();
    Session::with_csv(config)
}

#[test]
fn overview_over_rising_series() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forecast.csv", &rising_csv());
    let mut session = session_for(&path);

    let view = session.overview().unwrap();
    assert_eq!(view.diagnostics.records, 10);
    assert_eq!(view.diagnostics.last_date, day(27));
    // Nine compounded 1% steps ≈ 9.37% over the (clamped) lookback.
    let lookback = view.lookback.trend().unwrap();
    assert!((lookback.percent_delta - 9.3685).abs() < 0.01);
    assert_eq!(lookback.signal, Signal::StrongBullish);
    assert_eq!(view.tip, Some(InvestmentTip::ConsiderInvesting));
    // Only nine predecessors exist; a week back is available.
    assert!(!view.week_over_week.is_insufficient());
    assert_eq!(view.statistics.max.date, day(27));
    assert_eq!(view.statistics.min.date, day(18));
}

#[test]
fn panels_share_one_read_of_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forecast.csv", &rising_csv());
    let mut session = session_for(&path);

    session.overview().unwrap();
    // Replace the file underneath the session.
    write(&dir, "forecast.csv", "Date,Predicted_Price\n18-05-2025,5\n");

    let report = session.date_report(day(20)).unwrap();
    assert!(matches!(report, DateReport::Found { .. }), "served from cache");
    assert_eq!(session.cache().len(), 1);

    let reloaded = session.reload().unwrap();
    assert_eq!(reloaded.series.len(), 1);
    assert!(matches!(
        session.date_report(day(20)).unwrap(),
        DateReport::NotAvailable { .. }
    ));
}

#[test]
fn date_report_against_latest() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forecast.csv", &rising_csv());
    let mut session = session_for(&path);

    match session.date_report(day(20)).unwrap() {
        DateReport::Found {
            outlook,
            confidence,
            record,
            ..
        } => {
            assert_eq!(outlook, Outlook::Dip);
            let (lo, hi) = confidence.unwrap();
            assert!((hi - lo - 40.0).abs() < 1e-9);
            assert_eq!(record.date, day(20));
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[test]
fn trend_from_the_twentieth() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forecast.csv", &rising_csv());
    let mut session = session_for(&path);

    match session.trend_from(day(20)).unwrap() {
        TrendView::Window {
            records, outcome, ..
        } => {
            assert_eq!(records, 8);
            let trend = outcome.trend().unwrap();
            assert!((trend.percent_delta - 7.21).abs() < 0.01);
            assert_eq!(trend.signal, Signal::StrongBullish);
        }
        other => panic!("expected Window, got {other:?}"),
    }
}

#[test]
fn range_and_table_views() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "forecast.csv", &rising_csv());
    let mut session = session_for(&path);

    let range = session.range(day(19), day(21)).unwrap();
    assert_eq!(range.rows.len(), 3);
    assert!(range.rows.iter().all(|r| r.day_over_day.is_some()));

    let table = session.table(Some(4)).unwrap();
    assert_eq!(table.rows.len(), 4);
    assert_eq!(table.rows[3].record.date, day(27));

    // Default tail is 60 rows, clamped to the ten available.
    assert_eq!(session.table(None).unwrap().rows.len(), 10);
}

#[test]
fn missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let mut session = session_for(&dir.path().join("absent.csv"));
    assert!(matches!(session.overview(), Err(SessionError::Load(_))));
    assert!(session.cache().is_empty());
}

#[test]
fn config_file_drives_schema_and_thresholds() {
    let dir = TempDir::new().unwrap();
    let csv = write(
        &dir,
        "prophet.csv",
        "ds,yhat,yhat_lower,yhat_upper\n2025-05-18,1000,990,1010\n2025-05-19,1015,1005,1025\n",
    );
    let config_path = write(
        &dir,
        "swarna.toml",
        &format!(
            "[source]\npath = {:?}\n\n[schema]\ndate_column = \"ds\"\nprice_column = \"yhat\"\ndate_format = \"%Y-%m-%d\"\n\n[signal]\nstrong_pct = 1.0\nmild_pct = 0.5\n",
            csv.display().to_string()
        ),
    );

    let config = DashboardConfig::from_file(&config_path).unwrap();
    assert_eq!(config.schema, SchemaConfig::prophet());

    let mut session = Session::with_csv(config);
    let view = session.overview().unwrap();
    assert_eq!(view.full_trend.trend().unwrap().signal, Signal::StrongBullish);
}

const HISTORY: &str = "Date,Price 10g (in INR),GGP (LBMA)\n\
                       01-01-2024,63000,2060\n\
                       02-01-2024,63500,2050\n\
                       03-01-2024,64000,2070\n";

fn session_with_history(dir: &TempDir, history: &str) -> Session {
    let forecast = write(dir, "forecast.csv", &rising_csv());
    let history = write(dir, "history.csv", history);
    let mut config = DashboardConfig::default();
    config.source.path = forecast;
    config.history.path = history;
    Session::with_csv(config)
}

#[test]
fn history_loads_both_markets_from_one_file() {
    let dir = TempDir::new().unwrap();
    let mut session = session_with_history(&dir, HISTORY);

    let view = session.history(Some(2));
    let india = view.india.panel().expect("india loaded");
    let global = view.global.panel().expect("global loaded");
    assert_eq!(india.market, Market::India);
    assert_eq!(india.statistics.max.price, 64000.0);
    assert_eq!(india.recent.len(), 2);
    assert_eq!(global.statistics.max.price, 2070.0);
    assert_eq!(global.statistics.min.price, 2050.0);

    // One cache entry per market column.
    assert_eq!(session.cache().len(), 2);
}

#[test]
fn missing_history_file_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let forecast = write(&dir, "forecast.csv", &rising_csv());
    let mut config = DashboardConfig::default();
    config.source.path = forecast;
    config.history.path = dir.path().join("absent.csv");
    let mut session = Session::with_csv(config);

    let view = session.history(None);
    assert!(matches!(
        view.india,
        HistoryState::Unavailable {
            market: Market::India,
            ..
        }
    ));
    assert!(view.global.panel().is_none());
    assert!(session.overview().is_ok());
}

#[test]
fn history_missing_one_column_keeps_the_other_market() {
    let dir = TempDir::new().unwrap();
    let mut session = session_with_history(
        &dir,
        "Date,Price 10g (in INR)\n01-01-2024,63000\n02-01-2024,63500\n",
    );

    let view = session.history(None);
    assert!(view.india.panel().is_some());
    match &view.global {
        HistoryState::Unavailable { reason, .. } => assert!(reason.contains("GGP (LBMA)")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn reload_refreshes_history_too() {
    let dir = TempDir::new().unwrap();
    let mut session = session_with_history(&dir, HISTORY);
    session.overview().unwrap();
    session.history(None);
    assert_eq!(session.cache().len(), 3);

    write(
        &dir,
        "history.csv",
        "Date,Price 10g (in INR),GGP (LBMA)\n01-01-2024,70000,2100\n",
    );
    session.reload().unwrap();
    assert_eq!(session.cache().len(), 1);

    let view = session.history(None);
    assert_eq!(view.india.panel().unwrap().statistics.count, 1);
    assert_eq!(view.global.panel().unwrap().statistics.max.price, 2100.0);
}
