//! Sieve strategies used to double-check the accumulator.

use std::fmt;

use crate::error::{PrimeError, Result};
use crate::prime::{SEED, primes_below, primes_below_parallel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Sequential Sieve of Eratosthenes.
    Sieve,
    /// Sieve of Eratosthenes with the outer loop spread over rayon's pool.
    ParallelSieve,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Sieve, Method::ParallelSieve];

    /// Largest `limit` the sieve accepts.
    pub fn max_limit(self) -> u64 {
        u64::from(u32::MAX)
    }

    /// Fails if the sieve cannot cover `limit`.
    pub fn check_limit(self, limit: u64) -> Result<u32> {
        u32::try_from(limit).map_err(|_| PrimeError::LimitTooLarge {
            method: self,
            limit,
            max: self.max_limit(),
        })
    }

    /// Primes below `limit`, ascending. Empty below 3.
    pub fn primes_below(self, limit: u64) -> Result<Vec<u64>> {
        let n = self.check_limit(limit)?;
        let primes = match self {
            Method::Sieve => primes_below(n),
            Method::ParallelSieve => primes_below_parallel(n),
        };
        Ok(primes.into_iter().map(u64::from).collect())
    }

    /// Checks a trial-division result for `limit` against this sieve.
    ///
    /// The accumulator is seeded with 2, so limits below 3 are sieved as 3.
    pub fn verify(self, primes: &[u64], limit: u64) -> Result<()> {
        let expected = self.primes_below(limit.max(SEED + 1))?;
        if expected.as_slice() == primes {
            Ok(())
        } else {
            Err(PrimeError::Disagreement {
                method: self,
                limit,
                expected: expected.len(),
                found: primes.len(),
            })
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Sieve => "sieve",
            Method::ParallelSieve => "parallel-sieve",
        };
        f.write_str(name)
    }
}
