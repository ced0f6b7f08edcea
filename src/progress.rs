//! # Progress — Atomic Scan Progress Counters
//!
//! Thread-safe progress tracking shared between the scan driver and the
//! background status reporter. All fields are atomics: the driver updates
//! them once per candidate and the reporter thread reads them on its wake
//! cycle, so there is nothing to lock.
//!
//! ## Background Reporter
//!
//! A dedicated thread logs progress to stderr every 10 seconds: tested
//! count, found count, rate (candidates/sec), current candidate, and
//! elapsed time. It polls the shutdown flag frequently so process exit is
//! never held up by a full report interval.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

const REPORT_INTERVAL: Duration = Duration::from_secs(10);
const SHUTDOWN_POLL: Duration = Duration::from_millis(250);

pub struct Progress {
    pub tested: AtomicU64,
    pub found: AtomicU64,
    /// Candidate most recently handed to the backend.
    pub current: AtomicU64,
    start: Instant,
    shutdown: AtomicBool,
}

impl Progress {
    pub fn new() -> Arc<Self> {
        Arc::new(Progress {
            tested: AtomicU64::new(0),
            found: AtomicU64::new(0),
            current: AtomicU64::new(0),
            start: Instant::now(),
            shutdown: AtomicBool::new(false),
        })
    }

    pub fn start_reporter(self: &Arc<Self>) -> thread::JoinHandle<()> {
        let progress = Arc::clone(self);
        thread::spawn(move || {
            let mut last_report = Instant::now();
            loop {
                thread::sleep(SHUTDOWN_POLL);
                if progress.shutdown.load(Ordering::Relaxed) {
                    break;
                }
                if last_report.elapsed() >= REPORT_INTERVAL {
                    progress.print_status();
                    last_report = Instant::now();
                }
            }
        })
    }

    pub fn print_status(&self) {
        let elapsed = self.start.elapsed();
        let tested = self.tested.load(Ordering::Relaxed);
        let found = self.found.load(Ordering::Relaxed);
        let current = self.current.load(Ordering::Relaxed);
        let rate = if elapsed.as_secs() > 0 {
            tested as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let h = elapsed.as_secs() / 3600;
        let m = (elapsed.as_secs() % 3600) / 60;
        let s = elapsed.as_secs() % 60;
        info!(
            current,
            tested,
            rate = format_args!("{:.2}", rate),
            found,
            elapsed = format_args!("{:02}:{:02}:{:02}", h, m, s),
            "scan progress"
        );
    }

    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
