//! Configuration for the `tree-equiv` binary.
//!
//! [`CliArgs`] is parsed with clap and validated into a [`DriverConfig`].

use clap::Parser;

use crate::error::ConfigError;
use crate::generate::DEFAULT_SIZE;

/// Largest tree the driver will generate.
pub const MAX_SIZE: usize = 100_000;

/// Compare two randomly shaped binary trees by walking them concurrently
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tree-equiv",
    version,
    about = "Compare two randomly shaped binary trees by walking them concurrently",
    after_help = "EXAMPLES:\n    \
        tree-equiv                    # two trees of 1..=10, prints true\n    \
        tree-equiv -a 1 -b 2          # 1..=10 against 2, 4, ..., 20, prints false\n    \
        tree-equiv -n 1000 -i 200 -v  # repeat a larger comparison with debug logs"
)]
pub struct CliArgs {
    /// Multiplier for the left tree (values k, 2k, ..., n*k)
    #[arg(
        short = 'a',
        long = "left",
        default_value_t = 1,
        value_name = "K",
        allow_negative_numbers = true
    )]
    pub left: i64,

    /// Multiplier for the right tree
    #[arg(
        short = 'b',
        long = "right",
        default_value_t = 1,
        value_name = "K",
        allow_negative_numbers = true
    )]
    pub right: i64,

    /// Number of values in each tree
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE, value_name = "N")]
    pub size: usize,

    /// Seed the shuffles for reproducible tree shapes
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Run the comparison this many times on the same pair of trees
    #[arg(short = 'i', long, default_value_t = 1, value_name = "N")]
    pub iterations: usize,

    /// Don't print the walked values of the left tree
    #[arg(long)]
    pub no_trace: bool,

    /// Print both trees
    #[arg(long)]
    pub show_trees: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Multiplier of the left tree.
    pub left: i64,
    /// Multiplier of the right tree.
    pub right: i64,
    /// Values per tree.
    pub size: usize,
    /// RNG seed, if shapes should be reproducible.
    pub seed: Option<u64>,
    /// How many times to compare.
    pub iterations: usize,
    /// Print the left tree's walked values.
    pub trace: bool,
    /// Print both trees.
    pub show_trees: bool,
    /// Debug logging.
    pub verbose: bool,
}

impl DriverConfig {
    /// Checks `args` and builds the configuration the driver runs with.
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if args.left == 0 || args.right == 0 {
            return Err(ConfigError::ZeroMultiplier);
        }
        if args.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: args.size,
                max: MAX_SIZE,
            });
        }

        Ok(Self {
            left: args.left,
            right: args.right,
            size: args.size,
            seed: args.seed,
            iterations: args.iterations,
            trace: !args.no_trace,
            show_trees: args.show_trees,
            verbose: args.verbose,
        })
    }
}
