use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use u_stackkit::harness::Algorithm;

#[derive(Parser)]
#[command(name = "stackkit", about = "Stack algorithm case tables", version)]
pub struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Print per-case inputs and timings to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run builtin and file suites, printing a pass/fail table.
    Run {
        /// TOML suite file; may be repeated.
        #[arg(long = "suite")]
        suites: Vec<PathBuf>,
        /// Only run cases for this algorithm.
        #[arg(long)]
        only: Option<Algorithm>,
        /// Skip the builtin suites.
        #[arg(long)]
        skip_builtin: bool,
    },
    /// Run one algorithm on values from the command line.
    Check {
        algorithm: Algorithm,
        /// Integers, or the bracket text for `brackets`.
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print a seeded random workload as a TOML case.
    Gen {
        #[arg(long, value_enum)]
        kind: WorkloadKind,
        #[arg(long, default_value_t = 16)]
        len: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Largest height or asteroid magnitude.
        #[arg(long, default_value_t = 10)]
        max: i64,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum WorkloadKind {
    Heights,
    Asteroids,
    Brackets,
    ScrambledBrackets,
}
