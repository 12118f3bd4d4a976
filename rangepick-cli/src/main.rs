mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rangepick_core::config::RangePickConfig;
use rangepick_core::selection::parse_date;
use rangepick_core::{Clock, FixedClock, Selection, SystemClock};
use tracing_subscriber::EnvFilter;

/// Environment variable read for log filtering, e.g. `RANGEPICK_LOG=debug`.
const LOG_ENV: &str = "RANGEPICK_LOG";

#[derive(Parser)]
#[command(name = "rangepick")]
#[command(about = "Pick date ranges from quick-select presets or a calendar grid")]
struct Cli {
    /// Log selector activity to stderr (repeat for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every preset with the range it selects
    Presets {
        /// Compute relative to this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the range for one preset
    Range {
        /// Preset label or key, e.g. "Last 7 Days" or last-7-days
        preset: String,

        /// Compute relative to this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Select a whole month, as the month/year dropdowns do
    Month {
        /// Month number (1-12)
        month: u32,

        year: i32,

        #[arg(long)]
        json: bool,
    },
    /// Render the selector panel for a range without interacting
    Show {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Range end (YYYY-MM-DD), defaults to --from
        #[arg(long)]
        to: Option<String>,

        /// Render relative to this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<String>,
    },
    /// Pick a range interactively
    Pick {
        /// Initial range start (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Initial range end (YYYY-MM-DD), defaults to --from
        #[arg(long)]
        to: Option<String>,

        /// Show month/year dropdowns regardless of config
        #[arg(long)]
        dropdowns: bool,

        /// Keep the panel open after choosing a preset
        #[arg(long)]
        keep_open: bool,
    },
    /// Show config path and effective options
    Config {
        /// Overwrite the config file with the default options first
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Presets { today, json } => {
            let config = RangePickConfig::load()?;
            let clock = resolve_clock(today.as_deref())?;
            commands::presets::run(clock.as_ref(), &config, json)
        }
        Commands::Range { preset, today, json } => {
            let config = RangePickConfig::load()?;
            let clock = resolve_clock(today.as_deref())?;
            commands::range::run(&preset, clock.as_ref(), &config, json)
        }
        Commands::Month { month, year, json } => commands::month::run(month, year, json),
        Commands::Show { from, to, today } => {
            let config = RangePickConfig::load()?;
            let initial = resolve_selection(from.as_deref(), to.as_deref())?;
            let today = today.as_deref().map(parse_date).transpose()?;
            commands::show::run(initial, today, &config)
        }
        Commands::Pick {
            from,
            to,
            dropdowns,
            keep_open,
        } => {
            let config = RangePickConfig::load()?;
            let initial = resolve_selection(from.as_deref(), to.as_deref())?;
            let mut options = config.selector_options();
            options.month_year_dropdowns |= dropdowns;
            if keep_open {
                options.close_on_select = false;
            }
            commands::pick::run(initial, options)
        }
        Commands::Config { reset } => commands::config::run(reset),
    }
}

/// Logs go to stderr so piped `--json` output stays clean.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_clock(today: Option<&str>) -> Result<Box<dyn Clock>> {
    match today {
        Some(s) => Ok(Box::new(FixedClock(parse_date(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}

fn resolve_selection(from: Option<&str>, to: Option<&str>) -> Result<Option<Selection>> {
    match (from, to) {
        (Some(from), to) => Ok(Some(Selection::from_args(from, to)?)),
        (None, Some(_)) => anyhow::bail!("--to requires --from"),
        (None, None) => Ok(None),
    }
}

/// Today from the local clock, or the override if given.
fn today_or(override_today: Option<NaiveDate>) -> NaiveDate {
    override_today.unwrap_or_else(|| SystemClock.today())
}
