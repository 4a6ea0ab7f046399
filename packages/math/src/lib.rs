pub mod error;
pub mod method;
pub mod prime;

pub use error::{PrimeError, Result};
pub use method::Method;
pub use prime::{
    DEFAULT_LIMIT, SieveAccumulator, State, compute, primes_below, primes_below_parallel,
    primes_with_limit,
};
