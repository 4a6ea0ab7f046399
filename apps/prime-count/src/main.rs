use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use prime_count::{cli::Cli, init_tracing, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    let report =
        run(&config).with_context(|| format!("counting primes below {}", config.limit))?;

    let mut out = io::stdout().lock();
    if config.list {
        for p in &report.primes {
            writeln!(out, "{}", p)?;
        }
    }
    writeln!(out, "{}", report)?;
    Ok(())
}
