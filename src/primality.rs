//! # Primality — Trial-Division Backends
//!
//! Decides primality of a `u64` candidate by trial division over the divisor
//! range `[2, isqrt(n)]`. Two execution substrates implement the same
//! algorithm and must agree on every input:
//!
//! 1. **Scalar**: a sequential loop over the divisor range, bailing out at
//!    the first divisor found.
//! 2. **Vector**: the whole divisor range evaluated as one batched
//!    OR-reduction (`any` over `n % d == 0`) on the Rayon pool.
//!
//! The square-root bound is inclusive: the range runs through `isqrt(n)`
//! itself, so perfect squares are classified correctly.
//!
//! Backends are stateless and reentrant; the scan driver holds one as a
//! trait object and never names a concrete implementation.

use rayon::prelude::*;

/// Execution substrate for the trial-division test. Chosen once at startup
/// and fixed for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputeMode {
    /// Sequential divisor loop.
    Scalar,
    /// Data-parallel batch evaluation of the divisor range.
    Vector,
}

impl ComputeMode {
    pub fn backend(self) -> &'static dyn PrimalityBackend {
        match self {
            ComputeMode::Scalar => &ScalarBackend,
            ComputeMode::Vector => &VectorBackend,
        }
    }
}

/// A primality test strategy. Implementations differ only in execution
/// substrate, never in outcome.
pub trait PrimalityBackend: Send + Sync {
    /// True iff `n` is prime. Values `<= 1` are not prime.
    fn is_prime(&self, n: u64) -> bool;

    /// Short name for logs and status lines.
    fn name(&self) -> &'static str;
}

/// Sequential trial division with early exit on the first divisor.
pub struct ScalarBackend;

impl PrimalityBackend for ScalarBackend {
    fn is_prime(&self, n: u64) -> bool {
        if n <= 1 {
            return false;
        }
        for d in 2..=n.isqrt() {
            if n % d == 0 {
                return false;
            }
        }
        true
    }

    fn name(&self) -> &'static str {
        "scalar"
    }
}

/// Batched trial division: builds the full divisor range and reduces
/// "does any divisor divide n" across the Rayon pool in one pass.
pub struct VectorBackend;

impl PrimalityBackend for VectorBackend {
    fn is_prime(&self, n: u64) -> bool {
        if n <= 1 {
            return false;
        }
        // any() short-circuits across workers once a divisor is found
        !(2..=n.isqrt()).into_par_iter().any(|d| n % d == 0)
    }

    fn name(&self) -> &'static str {
        "vector"
    }
}

/// Trial-division primality under the given compute mode.
pub fn is_prime(n: u64, mode: ComputeMode) -> bool {
    mode.backend().is_prime(n)
}
