pub mod primality;
pub mod progress;
pub mod scan;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Explicit cancellation handle for the scan loop.
///
/// The driver checks the token at the top of every iteration; whoever holds a
/// clone (the Ctrl-C listener in the binary, a test sink elsewhere) can ask
/// the scan to finish after the in-flight candidate. Requests are sticky and
/// idempotent.
#[derive(Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Where the scan driver reports discovered primes.
///
/// The driver calls this in strictly increasing candidate order, once per
/// prime. The binary installs [`ConsoleSink`]; tests substitute collectors.
pub trait PrimeSink: Send + Sync {
    fn prime_found(&self, n: u64);
}

/// Prints the discovery line to stdout. Everything else (status, logs, the
/// stop hint) goes to stderr, so piped consumers see only prime lines.
pub struct ConsoleSink;

impl PrimeSink for ConsoleSink {
    fn prime_found(&self, n: u64) {
        println!("{} is prime.", n);
    }
}
