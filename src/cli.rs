//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Wires together the
//! scan worker, the stop token, the Ctrl-C listener, the progress reporter,
//! and the rayon pool configuration.

use anyhow::Result;
use primescan::primality::ComputeMode;
use primescan::progress::Progress;
use primescan::scan::{self, ScanConfig};
use primescan::{ConsoleSink, StopToken};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::Cli;

// ── Scan Orchestration ──────────────────────────────────────────

/// Run the unbounded scan. Blocks until the background worker observes a
/// stop request (Ctrl-C) or a test aborts, then prints the final status.
pub fn run_scan(cli: &Cli) -> Result<()> {
    let mode = if cli.accelerated {
        ComputeMode::Vector
    } else {
        ComputeMode::Scalar
    };
    let backend = mode.backend();

    info!(
        start = cli.start,
        backend = backend.name(),
        yield_every = cli.yield_every,
        cores = rayon::current_num_threads(),
        "primescan starting"
    );
    eprintln!("Scanning upward from {}. Press Ctrl-C to stop.", cli.start);

    let progress = Progress::new();
    let reporter_handle = progress.start_reporter();

    let stop = StopToken::new();
    let cfg = ScanConfig {
        start: cli.start,
        yield_every: cli.yield_every,
    };

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(async {
        let listener_stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("stop requested, finishing current candidate");
                listener_stop.request_stop();
            }
        });

        // The single background worker; exactly one candidate in flight.
        let worker = tokio::spawn(scan::run(
            cfg,
            backend,
            Arc::clone(&progress),
            stop.clone(),
            Arc::new(ConsoleSink),
        ));
        worker.await?
    });

    progress.stop();
    let _ = reporter_handle.join();
    progress.print_status();

    match &result {
        Ok(next) => info!(next_candidate = next, "scan stopped"),
        Err(e) => error!(error = %e, "scan aborted"),
    }
    result.map(|_| ())
}

// ── Rayon Configuration ─────────────────────────────────────────

/// Configure the global rayon pool used by the vector backend.
pub fn configure_rayon(threads: Option<usize>, qos: bool) {
    let num_threads = threads.unwrap_or(0);

    #[cfg(target_os = "macos")]
    if qos {
        let result = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .spawn_handler(|thread| {
                std::thread::Builder::new().spawn(move || {
                    // SAFETY: pthread_set_qos_class_self_np is a well-defined macOS API
                    // that sets the QoS class for the current thread. No memory safety concerns.
                    unsafe {
                        libc::pthread_set_qos_class_self_np(
                            libc::qos_class_t::QOS_CLASS_USER_INITIATED,
                            0,
                        );
                    }
                    thread.run();
                })?;
                Ok(())
            })
            .build_global();

        match result {
            Ok(()) => {
                info!("Rayon threads configured with macOS QoS: user-initiated (P-core scheduling)");
            }
            Err(e) => {
                warn!(error = %e, "Could not configure rayon thread pool");
            }
        }
        return;
    }

    #[cfg(not(target_os = "macos"))]
    if qos {
        warn!("--qos flag is only effective on macOS, ignoring");
    }

    if num_threads > 0 {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!(error = %e, "Could not configure rayon thread pool");
        }
    }
}
