use thiserror::Error;

use crate::method::Method;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrimeError {
    /// The sieves keep one flag per candidate and are indexed by `u32`.
    #[error("limit {limit} is too large for {method} (max {max})")]
    LimitTooLarge { method: Method, limit: u64, max: u64 },

    #[error(
        "{method} found {expected} primes below {limit} but trial division found {found}"
    )]
    Disagreement {
        method: Method,
        limit: u64,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, PrimeError>;
