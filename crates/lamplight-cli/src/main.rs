//! Lamplight CLI.
//!
//! Provides the `lamplight` binary. The `solve` subcommand reads an edge list
//! of `source source lamps` triples, grows source radii until every link that
//! can be deduced is fueled, and prints the radii, total fuel and any links
//! left unfueled.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lamplight_cli::input::read_records;
use lamplight_cli::output::{render_echo, render_json, render_text, Format};
use lamplight_cli::solve_records;
use lamplight_solve::{SolveError, SolverConfig};

/// Minimum fuel radii for lamp-carrying links.
#[derive(Parser)]
#[command(name = "lamplight", about = "Minimum fuel radii for lamp-carrying links")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Solve an edge list and report radii.
    Solve {
        /// Edge list file, or `-` for standard input.
        input: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Stop with an error after this many passes.
        #[arg(long)]
        max_passes: Option<usize>,

        /// Record and print every forcing move.
        #[arg(long)]
        trace: bool,

        /// Print each record as it is read.
        #[arg(long)]
        echo: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            input,
            format,
            max_passes,
            trace,
            echo,
        } => {
            let config = SolverConfig {
                trace_enabled: trace,
                max_passes,
            };
            let exit_code = run_solve(&input, format, config, echo);
            process::exit(exit_code);
        }
    }
}

/// Execute the solve subcommand.
///
/// Returns exit code: 0 = all lamps fueled, 1 = invalid input or solve
/// error, 2 = stalled with unfueled links, 3 = I/O error.
fn run_solve(input: &Path, format: Format, config: SolverConfig, echo: bool) -> i32 {
    let records = match read_records(input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return if e.is_io() { 3 } else { 1 };
        }
    };

    if echo {
        print!("{}", render_echo(&records));
    }

    let (outcome, report) = match solve_records(&records, config) {
        Ok(result) => result,
        Err(SolveError::PassLimitExceeded { limit }) => {
            eprintln!("Error: no fixed point within {} passes", limit);
            return 1;
        }
        Err(e) => {
            eprintln!("Solve error: {}", e);
            return 1;
        }
    };

    match format {
        Format::Text => {
            if echo {
                println!();
            }
            print!("{}", render_text(&outcome, &report));
        }
        Format::Json => match render_json(&outcome, &report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                return 1;
            }
        },
    }

    if report.is_fully_fueled() {
        0
    } else {
        2
    }
}
