use clap::{Parser, ValueEnum};
use math::{DEFAULT_LIMIT, Method};

use crate::Config;

#[derive(Parser, Debug)]
#[command(name = "prime-count")]
#[command(about = "Count the primes below a bound by trial division")]
pub struct Cli {
    /// Exclusive upper bound
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u64,

    /// Cross-check the result against a sieve; fails if they disagree
    #[arg(long, value_enum)]
    pub verify: Option<VerifyArg>,

    /// Print every prime before the report
    #[arg(long)]
    pub list: bool,

    /// Log progress at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum VerifyArg {
    Sieve,
    ParallelSieve,
}

impl From<VerifyArg> for Method {
    fn from(arg: VerifyArg) -> Self {
        match arg {
            VerifyArg::Sieve => Method::Sieve,
            VerifyArg::ParallelSieve => Method::ParallelSieve,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            limit: self.limit,
            verify: self.verify.map(Method::from),
            list: self.list,
        }
    }
}
