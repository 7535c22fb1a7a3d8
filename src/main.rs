use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sortlab::menu::write_methods;
use sortlab::sequence::{clock_seed, shuffled_sequence, MAX_SIZE};
use sortlab::{compare_all, run_session, SessionOptions};

mod cli;
use cli::display::{error_line, render_comparison};
use cli::{Cli, Commands, RunArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        None => run(RunArgs::default()),
        Some(Commands::Run(args)) => run(args),
        Some(Commands::Compare { size, seed, json }) => compare(size, seed, json),
        Some(Commands::Methods) => write_methods(&mut io::stdout().lock())
            .context("failed to write method list"),
    };

    if let Err(e) = result {
        eprintln!("{}", error_line(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

/// Log filter from `SORTLAB_LOG`, then `RUST_LOG`, else `warn`. Logs go to stderr.
fn init_tracing() {
    let filter = std::env::var("SORTLAB_LOG")
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn check_size(size: Option<usize>) -> anyhow::Result<()> {
    if let Some(size) = size {
        anyhow::ensure!(
            size <= MAX_SIZE,
            "array size {} is larger than the maximum {}",
            size,
            MAX_SIZE
        );
    }
    Ok(())
}

fn run(args: RunArgs) -> anyhow::Result<()> {
    check_size(args.size)?;
    let options = SessionOptions {
        size: args.size,
        method: args.method,
        seed: args.seed,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_session(stdin.lock(), stdout.lock(), &options)?;

    if args.json {
        let json = serde_json::to_string_pretty(&outcome.report)
            .context("failed to serialize sort report")?;
        writeln!(io::stdout(), "{}", json)?;
    }
    Ok(())
}

fn compare(size: usize, seed: Option<u64>, json: bool) -> anyhow::Result<()> {
    check_size(Some(size))?;
    let seed = seed.unwrap_or_else(clock_seed);
    let vals = shuffled_sequence(size, seed);
    let reports = compare_all(&vals);

    let mut out = io::stdout().lock();
    if json {
        let json = serde_json::to_string_pretty(&reports)
            .context("failed to serialize sort reports")?;
        writeln!(out, "{}", json)?;
    } else {
        write!(out, "{}", render_comparison(size, seed, &reports))?;
    }
    Ok(())
}
