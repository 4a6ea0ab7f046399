//! Prime enumeration: the trial-division accumulator plus sieves to check it against.

use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Exclusive upper bound scanned by [`compute`].
pub const DEFAULT_LIMIT: u64 = 1_000_000;

/// The accumulator's sequence always starts with this prime.
pub const SEED: u64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Done,
}

enum Verdict {
    Composite,
    Prime,
}

/// Builds the list of primes below `limit` by trial division against the
/// primes it has already found.
///
/// Candidates are scanned in ascending order, so the sequence only ever grows
/// at the end and stays sorted. Division for a candidate stops at the first
/// divisor, or as soon as the square of the test prime exceeds it.
///
/// # Example
///
/// ```
/// use math::prime::{SieveAccumulator, State};
///
/// let mut acc = SieveAccumulator::new(10);
/// acc.run();
/// assert_eq!(acc.state(), State::Done);
/// assert_eq!(acc.primes(), &[2, 3, 5, 7]);
/// ```
#[derive(Clone, Debug)]
pub struct SieveAccumulator {
    primes: Vec<u64>,
    limit: u64,
    state: State,
}

impl SieveAccumulator {
    pub fn new(limit: u64) -> Self {
        SieveAccumulator {
            primes: vec![SEED],
            limit,
            state: State::Running,
        }
    }

    /// Scans every candidate in `[3, limit)`. Does nothing once `Done`.
    pub fn run(&mut self) {
        if self.state == State::Done {
            return;
        }
        for n in 3..self.limit {
            if let Some(Verdict::Prime) = self.test(n) {
                self.primes.push(n);
            }
        }
        self.state = State::Done;
    }

    // None only if the sequence runs out first, which 2 being seeded rules out for n >= 3.
    fn test(&self, n: u64) -> Option<Verdict> {
        self.primes.iter().find_map(|&d| {
            if n % d == 0 {
                Some(Verdict::Composite)
            } else if d * d > n {
                Some(Verdict::Prime)
            } else {
                None
            }
        })
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn count(&self) -> usize {
        self.primes.len()
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_primes(self) -> Vec<u64> {
        self.primes
    }
}

/// Runs an accumulator up to `limit` and returns its primes.
///
/// The seed is always present, so any `limit <= 3` yields `[2]`.
pub fn primes_with_limit(limit: u64) -> Vec<u64> {
    let mut acc = SieveAccumulator::new(limit);
    acc.run();
    acc.into_primes()
}

/// All primes below one million, found by trial division.
///
/// # Example
///
/// ```
/// assert_eq!(math::compute().len(), 78_498);
/// ```
pub fn compute() -> Vec<u64> {
    primes_with_limit(DEFAULT_LIMIT)
}

/// Finds all prime numbers less than a given limit `n`. (Sequential)
pub fn primes_below(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let mut sieve = vec![true; n_usize];
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2;
    while i * i < n_usize {
        if sieve[i] {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    (2..n_usize)
        .filter_map(|i| if sieve[i] { Some(i as u32) } else { None })
        .collect()
}

/// Finds all prime numbers less than `n`, crossing off multiples of each
/// base prime in parallel.
pub fn primes_below_parallel(n: u32) -> Vec<u32> {
    if n < 3 {
        return vec![];
    }
    let n_usize = n as usize;
    let sieve: Vec<AtomicBool> = (0..n_usize).map(|_| AtomicBool::new(true)).collect();
    sieve[0].store(false, Ordering::Relaxed);
    sieve[1].store(false, Ordering::Relaxed);

    let sqrt_n = (n_usize as f64).sqrt() as usize;

    // A composite base may race past its own flag; it only re-marks composites.
    (2..=sqrt_n).into_par_iter().for_each(|i| {
        if sieve[i].load(Ordering::Relaxed) {
            for multiple in (i * i..n_usize).step_by(i) {
                sieve[multiple].store(false, Ordering::Relaxed);
            }
        }
    });

    (2..n_usize)
        .filter_map(|i| {
            if sieve[i].load(Ordering::Relaxed) {
                Some(i as u32)
            } else {
                None
            }
        })
        .collect()
}
