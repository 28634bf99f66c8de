//! tree-equiv - concurrent binary tree equivalence
//!
//! Entry point for the CLI application.

use std::io::{self, Write};
use std::process::ExitCode;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tree_equiv::config::{CliArgs, DriverConfig};
use tree_equiv::{generate, same, walk, Tree};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    setup_logging(args.verbose);

    let config = DriverConfig::from_args(args).context("Invalid configuration")?;

    let (left, right) = build_trees(&config).context("Failed to generate trees")?;
    debug!(
        left_height = left.height(),
        right_height = right.height(),
        size = config.size,
        "generated trees"
    );

    if config.show_trees {
        println!("left:  {}", left);
        println!("right: {}", right);
    }

    if config.trace {
        write_trace(&left, io::stdout()).context("Failed to print trace")?;
    }

    let verdict = same(&left, &right);
    let agreed = (1..config.iterations)
        .filter(|_| same(&left, &right) == verdict)
        .count()
        + 1;
    if agreed != config.iterations {
        warn!(agreed, iterations = config.iterations, "comparisons disagreed");
        return Err(anyhow!(
            "only {} of {} comparisons agreed",
            agreed,
            config.iterations
        ));
    }
    if config.iterations > 1 {
        info!(iterations = config.iterations, "all comparisons agreed");
    }

    println!("same: {}", verdict);
    Ok(())
}

/// Generates the left and right trees from one RNG, seeded if requested.
fn build_trees(config: &DriverConfig) -> tree_equiv::Result<(Tree<i64>, Tree<i64>)> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let left = generate::permuted(config.left, config.size, &mut rng)?;
    let right = generate::permuted(config.right, config.size, &mut rng)?;
    Ok((left, right))
}

/// Walks `tree` on one thread and writes its values to `out` from another,
/// joining both before returning.
fn write_trace<W: Write + Send>(tree: &Tree<i64>, mut out: W) -> io::Result<()> {
    let (tx, rx) = walk::stream();

    thread::scope(|s| {
        s.spawn(move || walk::walk(tree, tx));
        let printer = s.spawn(move || -> io::Result<()> {
            write!(out, "trace:")?;
            for (i, value) in rx.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(out, "{}{}", sep, value)?;
            }
            writeln!(out)?;
            out.flush()
        });

        printer
            .join()
            .unwrap_or_else(|e| std::panic::resume_unwind(e))
    })
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tree_equiv=debug,warn")
    } else {
        EnvFilter::new("tree_equiv=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
