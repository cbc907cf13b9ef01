use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use calc_cli::repl::{self, ReplOptions};
use calc_cli::{Session, Settings, logging, render, render_plain};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desk calculator with immediate (left-to-right) evaluation.
///
/// Type digits, operators (+ - * /), '.' and '=' as you would on a pocket
/// calculator. 's' toggles the sign, 'c' resets, <bs> clears the entry.
#[derive(Debug, Parser)]
#[command(name = "calc", version, about)]
struct Cli {
    /// Key sequence to run once, e.g. "3+4+5=". Without it, keys are read
    /// line by line from stdin.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the displays after every key instead of once per line.
    #[arg(long, default_value_t = false)]
    trace_keys: bool,

    /// Settings file (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum digits in the display.
    #[arg(long)]
    max_digits: Option<usize>,

    /// Decimal places results are rounded to.
    #[arg(long)]
    decimals: Option<u32>,

    /// Log filter, e.g. `debug` or `calc_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref())?;
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(cli.max_digits, cli.decimals);
    debug!(?settings, "settings resolved");

    let mut session = Session::new(settings.build_calculator()?);
    let width = settings.display.width;

    if cli.trace_keys {
        session.subscribe(move |key, snapshot| {
            println!("[{key}]\n{}", render(snapshot, width));
        });
    }

    match cli.keys {
        Some(keys) => {
            let snapshot = session
                .feed(&keys)
                .with_context(|| format!("invalid key sequence '{keys}'"))?;
            println!("{}", render_plain(&snapshot));
        }
        None => {
            let options = ReplOptions {
                width,
                print_frames: !cli.trace_keys,
            };
            repl::run(&mut session, io::stdin().lock(), &mut io::stdout(), options)?;
        }
    }

    Ok(())
}
