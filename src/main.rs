//! # Main — CLI Entry Point
//!
//! Parses flags, initializes logging and the Rayon pool, and hands the scan
//! off to `cli::run_scan`, which blocks until the background worker stops.
//!
//! ## Options
//!
//! - `--start`: first candidate to test (default 1).
//! - `--accelerated`: test the whole divisor range as one parallel batch
//!   instead of a scalar loop.
//! - `--yield-every`: candidates tested between cooperative yield points.
//! - `--qos`: macOS QoS P-core scheduling via `pthread_set_qos_class_self_np`.
//! - `--threads`: Rayon thread pool size (defaults to all cores).

mod cli;

use anyhow::Result;
use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "primescan",
    about = "Scan consecutive integers for primes by trial division"
)]
struct Cli {
    /// First candidate to test
    #[arg(long, default_value_t = 1, env = "PRIMESCAN_START")]
    start: u64,

    /// Evaluate the divisor range as one data-parallel batch on the Rayon pool
    #[arg(long)]
    accelerated: bool,

    /// Candidates tested between cooperative yield points (must be >= 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    yield_every: u64,

    /// Set macOS QoS class to user-initiated for rayon threads (P-core scheduling on Apple Silicon)
    #[arg(long)]
    qos: bool,

    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize structured logging: LOG_FORMAT=json for K8s, human-readable otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads, cli.qos);
    cli::run_scan(&cli)
}
