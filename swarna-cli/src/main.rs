//! Swarna Drishti CLI: gold-price forecast dashboard in the terminal.
//!
//! Commands:
//! - `overview`: headline price, lookback change, tip, statistics
//! - `lookup`: predicted price and confidence range for one date
//! - `trend`: trend from a date to the end of the forecast
//! - `range`: forecast rows between two dates
//! - `table`: the last N forecast rows
//! - `history`: observed India and LBMA prices
//! - `shell`: interactive session sharing one cached series
//! - `config`: print the effective configuration as TOML

mod commands;
mod render;
mod shell;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use swarna_core::SeriesCache;
use swarna_dashboard::{DashboardConfig, Session};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{parse_date, Action};

#[derive(Parser)]
#[command(
    name = "swarna",
    about = "Swarna Drishti: gold price forecast dashboard",
    version
)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Forecast CSV; overrides `source.path` from the config.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline price, recent change, investment tip and statistics.
    Overview,
    /// Average, highest and lowest forecast price.
    Stats,
    /// Predicted price for one date (DD-MM-YYYY or YYYY-MM-DD).
    Lookup {
        #[arg(long)]
        date: String,
    },
    /// Trend from a date to the end of the forecast.
    Trend {
        #[arg(long)]
        from: String,
    },
    /// Forecast rows between two dates, inclusive.
    Range {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    /// The last N forecast rows.
    Table {
        /// Rows to show. Defaults to `overview.tail_rows`.
        #[arg(long)]
        tail: Option<usize>,
    },
    /// Observed India and LBMA gold prices.
    History {
        /// Recent rows per market. Defaults to `history.rows`.
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Interactive shell over one cached series.
    Shell,
    /// Print the effective configuration as TOML.
    Config,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(file) = &cli.file {
        config.source.path = file.clone();
    }
    config.validate()?;
    debug!(source = %config.source.path.display(), "effective configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = Session::new(config, SeriesCache::csv());

    let action = match &cli.command {
        Commands::Overview => Action::Overview,
        Commands::Stats => Action::Stats,
        Commands::Lookup { date } => Action::Lookup(parse_date(date)?),
        Commands::Trend { from } => Action::Trend(parse_date(from)?),
        Commands::Range { start, end } => Action::Range(parse_date(start)?, parse_date(end)?),
        Commands::Table { tail } => Action::Table(*tail),
        Commands::History { rows } => Action::History(*rows),
        Commands::Shell => {
            return shell::run_shell(&mut session, io::stdin().lock(), &mut out, cli.json);
        }
        Commands::Config => {
            write!(out, "{}", session.config().to_toml()?)?;
            return Ok(());
        }
    };

    commands::run(&mut session, action, &mut out, cli.json)
}
