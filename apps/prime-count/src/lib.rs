use std::fmt;
use std::time::{Duration, Instant};

use math::{DEFAULT_LIMIT, Method, SieveAccumulator};
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

pub mod cli;

/// Settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub limit: u64,
    /// Sieve to cross-check the trial-division result against, if any.
    pub verify: Option<Method>,
    pub list: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            limit: DEFAULT_LIMIT,
            verify: None,
            list: false,
        }
    }
}

/// Outcome of a run. Displays as the single report line.
#[derive(Clone, Debug)]
pub struct Report {
    pub primes: Vec<u64>,
    pub verified_with: Option<Method>,
    pub elapsed: Duration,
}

impl Report {
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    pub fn largest(&self) -> Option<u64> {
        self.primes.last().copied()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Calculated {} primes", self.count())
    }
}

/// Enumerate the primes below `config.limit` by trial division, then
/// optionally check them against a sieve.
pub fn run(config: &Config) -> math::Result<Report> {
    let _span = info_span!("run", limit = config.limit).entered();

    if let Some(method) = config.verify {
        method.check_limit(config.limit)?;
    }

    let start = Instant::now();
    let mut acc = SieveAccumulator::new(config.limit);
    acc.run();
    let elapsed = start.elapsed();
    info!(count = acc.count(), ?elapsed, "trial division finished");

    if let Some(method) = config.verify {
        method.verify(acc.primes(), config.limit)?;
        info!(%method, "cross-check passed");
    }

    let report = Report {
        primes: acc.into_primes(),
        verified_with: config.verify,
        elapsed,
    };
    debug!(largest = ?report.largest());
    Ok(report)
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over the default level.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Already installed when called twice in one process; the first one stays.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
