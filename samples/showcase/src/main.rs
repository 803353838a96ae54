//! Showcase entry point.
//!
//! Runs one lazyseq demonstration per subcommand:
//!
//! ```text
//! showcase fizz-buzz --count 30
//! showcase sorted 1 2 4 3
//! showcase pascal < numbers.txt
//! showcase numbered Cargo.toml
//! ```

mod demos;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Walk through lazyseq sources and combinators")]
struct Cli {
    /// Log filter, overriding `RUST_LOG` (e.g. `debug`, `lazyseq=trace`)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print FizzBuzz taken from an unbounded range
    FizzBuzz {
        #[arg(long, default_value_t = 100)]
        count: usize,
    },
    /// Print a bounded integer range
    CountTo {
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        start: i64,
        #[arg(default_value_t = 10, allow_negative_numbers = true)]
        end: i64,
    },
    /// Echo standard input line by line
    Echo,
    /// Check whether the given integers are in ascending order
    Sorted {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Reduce each line of integers from standard input by pairwise sums
    Pascal,
    /// Print a file with line numbers
    Numbered { path: PathBuf },
}

fn init_tracing(log_level: Option<&str>) {
    let filter = log_level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::FizzBuzz { count } => demos::fizz_buzz(count, &mut out)?,
        Commands::CountTo { start, end } => demos::count_to(start, end, &mut out)?,
        Commands::Echo => demos::echo(io::stdin().lock(), &mut out)?,
        Commands::Sorted { values } => demos::sorted(&values, &mut out)?,
        Commands::Pascal => demos::pascal(io::stdin().lock(), &mut out)?,
        Commands::Numbered { path } => demos::numbered(&path, &mut out)?,
    }

    out.flush()?;
    tracing::debug!("showcase finished");
    Ok(())
}
