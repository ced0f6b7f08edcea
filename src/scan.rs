//! # Scan — Sequential Search Driver
//!
//! Drives the primality backend over consecutive integers starting from a
//! configured offset. The loop is unbounded: it only returns when its
//! [`StopToken`](crate::StopToken) is requested, or when a test fails
//! abnormally (a panicking backend propagates as an error; there is no
//! retry and no fallback to the other backend).
//!
//! One candidate is in flight at a time. Each test runs on the blocking
//! pool so a long divisor loop never stalls the async scheduler, and the
//! driver yields its turn after every `yield_every` candidates.
//!
//! The driver owns the cursor exclusively: it is monotonically increasing,
//! and over any prefix of a run the tested set is exactly the contiguous
//! range from `start` to the returned cursor.

use anyhow::Result;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::primality::PrimalityBackend;
use crate::progress::Progress;
use crate::{PrimeSink, StopToken};

/// Driver configuration, fixed for the lifetime of a scan.
#[derive(Clone, Copy, Debug)]
pub struct ScanConfig {
    /// First candidate to test.
    pub start: u64,
    /// Candidates tested between cooperative yield points. Must be >= 1;
    /// the CLI enforces this at parse time.
    pub yield_every: u64,
}

/// Run the scan loop until `stop` is requested.
///
/// Reports each prime to `sink` in increasing order with no gaps or
/// repeats in the underlying candidate sequence. Returns the cursor at
/// shutdown, i.e. the first candidate that was NOT tested.
pub async fn run(
    cfg: ScanConfig,
    backend: &'static dyn PrimalityBackend,
    progress: Arc<Progress>,
    stop: StopToken,
    sink: Arc<dyn PrimeSink>,
) -> Result<u64> {
    let mut cursor = cfg.start;
    let mut since_yield = 0u64;

    while !stop.is_requested() {
        let n = cursor;
        progress.current.store(n, Ordering::Relaxed);

        let prime = tokio::task::spawn_blocking(move || backend.is_prime(n)).await?;
        progress.tested.fetch_add(1, Ordering::Relaxed);

        if prime {
            progress.found.fetch_add(1, Ordering::Relaxed);
            sink.prime_found(n);
        }

        cursor += 1;
        since_yield += 1;
        if since_yield >= cfg.yield_every {
            tokio::task::yield_now().await;
            since_yield = 0;
        }
    }

    Ok(cursor)
}
