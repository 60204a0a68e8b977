//! Greets the world, then fails on purpose.
//!
//! The binary exists to check that error traces point back at real source
//! files and line numbers. It always runs the same sequence:
//!
//! 1. greet `"World"` and print the greeting to stdout
//! 2. greet a missing name and let the error escape `main`
//!
//! The second step exits with status 1 and a `color-eyre` report on stderr.
//! Set `RUST_BACKTRACE=1` (or `RUST_LIB_BACKTRACE=1`) to include a backtrace.
//!
//! ## Usage
//!
//! ```bash
//! greeter
//! greeter -vv                       # debug logging to stderr
//! RUST_BACKTRACE=1 greeter          # full backtrace in the report
//! ```

use clap::{ArgAction, Parser};
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use greeter_lib::greet;

/// Print a localized greeting, then fail with a traceable error
#[derive(Parser, Debug)]
#[command(name = "greeter", version, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Initialize tracing based on verbosity.
///
/// `RUST_LOG` takes precedence over the verbosity level when set.
///
/// - 0: off unless `RUST_LOG` is set
/// - 1 (-v): INFO
/// - 2+ (-vv): DEBUG, which includes the library's template selection
fn init_tracing(verbose: u8) {
    let directive = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) if verbose == 0 => return,
        Err(_) if verbose == 1 => "info".to_string(),
        Err(_) => "info,greeter_lib=debug".to_string(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("{}", greet(Some("World"))?);

    eprintln!("NB check that the error report below points at the source.");
    eprintln!("NB every location line must have a file name and line number.");

    info!("greeting a missing name");
    println!("{}", greet(None)?);

    Ok(())
}
