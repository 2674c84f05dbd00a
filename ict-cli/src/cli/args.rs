use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Find and run system-test targets by partial or misspelled name
#[derive(Parser, Debug)]
#[command(name = "ict")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Bazel binary to invoke (overrides query.bazel from .ict/config.toml)
    #[arg(long, global = true, env = "ICT_BAZEL", value_name = "PATH")]
    pub bazel: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How a target name is matched when it is not an exact label
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Use approximate (n-gram) matching instead of substring matching
    #[arg(long)]
    pub fuzzy: bool,
}

/// Arguments shared by the commands that run a resolved target
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Target label, or part of one
    pub target: String,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Print the bazel command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments passed through to `bazel test`
    #[arg(last = true, value_name = "BAZEL_ARGS")]
    pub bazel_args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the test targets known to the build graph
    List {
        /// List targets tagged `dynamic_testnet` instead of all tests
        #[arg(long)]
        testnets: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Resolve a partial or misspelled name to a single target label
    Resolve {
        /// Target label, or part of one
        target: String,

        #[command(flatten)]
        matching: MatchArgs,

        /// Resolve among targets tagged `dynamic_testnet`
        #[arg(long)]
        testnets: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Resolve a system test and run it with `bazel test`
    Test(RunArgs),

    /// Resolve a dynamic testnet and bring it up with `bazel test`
    Testnet(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,

        /// Directory the completion file is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
