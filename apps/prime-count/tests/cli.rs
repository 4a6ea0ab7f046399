use std::process::Command;

use clap::Parser;
use math::Method;
use prime_count::{Config, cli::Cli, run};

fn prime_count(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_prime-count"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn prime-count")
}

#[test]
fn binary_prints_one_line_and_succeeds() {
    let out = prime_count(&[]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"Calculated 78498 primes\n");
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn binary_lists_primes_before_report() {
    let out = prime_count(&["--limit", "10", "--list"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "2\n3\n5\n7\nCalculated 4 primes\n"
    );
}

#[test]
fn binary_verify_keeps_stdout_to_report() {
    let out = prime_count(&["--limit", "1000", "--verify", "sieve"]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"Calculated 168 primes\n");
}

#[test]
fn binary_fails_when_sieve_cannot_check_limit() {
    let out = prime_count(&["--limit", "4294967296", "--verify", "sieve"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("too large for sieve"), "stderr: {}", stderr);
}

#[test]
fn no_arguments_gives_default_config() {
    let cli = Cli::try_parse_from(["prime-count"]).unwrap();
    assert!(!cli.verbose);
    assert_eq!(cli.config(), Config::default());
}

#[test]
fn parses_limit_and_verify() {
    let cli = Cli::try_parse_from([
        "prime-count",
        "--limit",
        "10",
        "--verify",
        "parallel-sieve",
        "--list",
        "-v",
    ])
    .unwrap();
    assert!(cli.verbose);
    assert_eq!(
        cli.config(),
        Config {
            limit: 10,
            verify: Some(Method::ParallelSieve),
            list: true,
        }
    );
}

#[test]
fn rejects_unknown_verifier() {
    assert!(Cli::try_parse_from(["prime-count", "--verify", "wheel"]).is_err());
}

#[test]
fn count_is_not_configurable_by_method() {
    assert!(Cli::try_parse_from(["prime-count", "--method", "sieve"]).is_err());
}

#[test]
fn report_is_stable_across_runs() {
    let config = Cli::try_parse_from(["prime-count"]).unwrap().config();
    let first = run(&config).unwrap();
    let second = run(&config).unwrap();
    assert_eq!(first.to_string(), "Calculated 78498 primes");
    assert_eq!(first.primes, second.primes);
}

#[test]
fn every_verifier_accepts_default_run() {
    for method in Method::ALL {
        let config = Config {
            verify: Some(method),
            ..Config::default()
        };
        assert_eq!(
            run(&config).unwrap().to_string(),
            "Calculated 78498 primes",
            "verify={}",
            method
        );
    }
}
